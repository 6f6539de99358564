//! 組札 (Foundation / endstack) へのカード移動ルールを定義するよ。

use crate::components::card::Card;
use log::trace;

/// `card` を、一番上が `top` の組札に積めるかチェックする。
///
/// 空の組札には A だけ。それ以外は同じスートで、ランクがちょうど1つ大きいカードだけ。
/// 組札にはスートが決まってないから、最初に置いた A のスートがその組札のスートになるよ。
pub fn can_move_to_foundation(card: &Card, top: Option<&Card>) -> bool {
    let result = match top {
        None => card.is_ace(),
        Some(top) => card.suit == top.suit && card.numeric_rank() == top.numeric_rank() + 1,
    };
    trace!("[Foundation Rule] {} onto {:?}: {}", card, top.map(|c| c.to_string()), result);
    result
}
