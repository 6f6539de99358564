// src/logic/auto_move.rs
//! カードの自動移動 (右クリックで組札に送るやつ) の行き先探しだよ！🪄

use crate::components::card::Card;
use crate::components::stack::{top_card, Foundations};
use crate::logic::rules;
use log::debug;

/// `card` を積める組札を 0 → 3 の順に探して、最初に見つかったスロット番号を返す。
/// どこにも積めなければ `None`。
pub fn find_automatic_foundation_move(card: &Card, foundations: &Foundations) -> Option<usize> {
    let found = foundations
        .iter()
        .position(|pile| rules::can_move_to_foundation(card, top_card(pile)));

    match found {
        Some(slot) => debug!("[AutoMove] {} can go to foundation {}", card, slot),
        None => debug!("[AutoMove] no suitable foundation for {}", card),
    }
    found
}
