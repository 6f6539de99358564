//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::stack::Foundations;
use crate::config::CARDS_PER_FOUNDATION;

/// ゲームのクリア条件（4つの組札が全部 13 枚ずつ）を判定する。
pub fn check_win_condition(foundations: &Foundations) -> bool {
    foundations.iter().all(|pile| pile.len() == CARDS_PER_FOUNDATION)
}
