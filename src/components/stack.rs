// src/components/stack.rs

use serde::{Serialize, Deserialize};

use super::card::Card;
use crate::config::{FOUNDATION_COUNT, TABLEAU_COLUMNS};

/// カードの山1つ分。index 0 が一番下 (埋まってる方)、最後が一番上 (見えてる方) だよ。
pub type Column = Vec<Card>;

/// 場札 (Tableau)。7列固定！
pub type Tableau = [Column; TABLEAU_COLUMNS];

/// 組札 (endstack)。4つ固定で、スートは決まってない (最初に置けた所に積んでいく)。
pub type Foundations = [Column; FOUNDATION_COUNT];

/// カードを置く場所の種類を示す Enum だよ。
/// ルール判定で「どこに置こうとしてるか」を区別するのに使う。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札の列 (0-6)。
    Tableau(u8),
    /// 組札のスロット (0-3)。
    Foundation(u8),
}

impl StackType {
    /// 盤面の中に実在する場所かどうか。
    pub fn is_in_bounds(self) -> bool {
        match self {
            StackType::Tableau(i) => (i as usize) < TABLEAU_COLUMNS,
            StackType::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
        }
    }
}

/// 空っぽの場札を作る。
pub fn empty_tableau() -> Tableau {
    std::array::from_fn(|_| Vec::new())
}

/// 空っぽの組札を作る。
pub fn empty_foundations() -> Foundations {
    std::array::from_fn(|_| Vec::new())
}

/// 山の一番上のカード (なければ None)。
pub fn top_card(column: &[Card]) -> Option<&Card> {
    column.last()
}

/// 山の一番上が裏向きなら表にする。めくったら true。
pub fn flip_top_face_up(column: &mut Column) -> bool {
    match column.last_mut() {
        Some(card) if !card.is_face_up => {
            card.is_face_up = true;
            true
        }
        _ => false,
    }
}
