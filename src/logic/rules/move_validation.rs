// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//! 移動先の種類 (場札 / 組札) を見て、それぞれのルール関数に振り分けるよ。

use crate::components::card::Card;
use crate::components::stack::{top_card, StackType};
use super::common::MoveRejection;
use super::{foundation, tableau};

/// `card` を `target` (中身は `target_pile`) に置けるか検証する。
/// ダメな時は理由を返すよ。
pub fn validate_move(card: &Card, target: StackType, target_pile: &[Card]) -> Result<(), MoveRejection> {
    let target_top = top_card(target_pile);
    match target {
        StackType::Tableau(index) => {
            if !target.is_in_bounds() {
                return Err(MoveRejection::ColumnOutOfRange(index as usize));
            }
            if tableau::can_stack_on_tableau(card, target_top) {
                Ok(())
            } else {
                Err(MoveRejection::CannotStack { card: card.clone(), target: target_top.cloned() })
            }
        }
        StackType::Foundation(index) => {
            if !target.is_in_bounds() {
                return Err(MoveRejection::FoundationOutOfRange(index as usize));
            }
            if foundation::can_move_to_foundation(card, target_top) {
                Ok(())
            } else {
                Err(MoveRejection::FoundationRejects { card: card.clone(), slot: index as usize })
            }
        }
    }
}

/// `validate_move` の bool 版。
pub fn is_move_valid(card: &Card, target: StackType, target_pile: &[Card]) -> bool {
    validate_move(card, target, target_pile).is_ok()
}
