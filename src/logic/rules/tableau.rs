//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::Card;
use log::trace;

/// `source` のカードを、`target` (場札の一番上) の上に置けるかチェックする。
///
/// - 空の列 (`target` が None) には King だけ置ける
/// - それ以外は「同じスート」で「ランクが1つ小さい」ときだけ OK
///
/// 普通のクロンダイクみたいな赤黒交互じゃなくて、同じスートで下っていくルールだよ！
pub fn can_stack_on_tableau(source: &Card, target: Option<&Card>) -> bool {
    match target {
        Some(target) => {
            let same_suit = source.suit == target.suit;
            let rank_is_one_less = source.numeric_rank() + 1 == target.numeric_rank();
            trace!(
                "[Tableau Rule] {} onto {}: same suit {}, rank one less {}",
                source, target, same_suit, rank_is_one_less
            );
            same_suit && rank_is_one_less
        }
        None => {
            let is_king = source.is_king();
            trace!("[Tableau Rule] {} onto empty column: is king {}", source, is_king);
            is_king
        }
    }
}
