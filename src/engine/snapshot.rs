// src/engine/snapshot.rs
//! エンジンが外に公開する「盤面のスナップショット」だよ。📸
//!
//! 手が通るたびに新しいスナップショットが作られて、`Rc` で共有される。
//! 一度作られたスナップショットは二度と書き換わらないので、UI は前のと比べて差分を取ってもOK！

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::{Difficulty, GameStatus, RedealAllowance, Selection};
use crate::components::stack::{Column, Foundations, Tableau};
use crate::logic::rules::MoveRejection;
use crate::systems::undo_history::HistoryRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tableau: Tableau,
    pub foundations: Foundations,
    pub redeals_remaining: RedealAllowance,
    pub selection: Option<Selection>,
    pub is_game_won: bool,
    pub has_started: bool,
    pub difficulty: Difficulty,
}

impl GameSnapshot {
    /// 今どの段階にいるか。
    pub fn status(&self) -> GameStatus {
        if self.is_game_won {
            GameStatus::Won
        } else if self.has_started {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// 場札の列を取り出す。範囲外なら却下理由を返すよ。
    pub fn column(&self, index: usize) -> Result<&Column, MoveRejection> {
        self.tableau.get(index).ok_or(MoveRejection::ColumnOutOfRange(index))
    }

    /// 場札のカードを1枚取り出す。
    pub fn card_at(&self, column: usize, index: usize) -> Result<&Card, MoveRejection> {
        self.column(column)?
            .get(index)
            .ok_or(MoveRejection::CardOutOfRange { column, index })
    }

    /// 履歴に積むための盤面コピー。
    pub fn history_record(&self) -> HistoryRecord {
        HistoryRecord {
            tableau: self.tableau.clone(),
            foundations: self.foundations.clone(),
            redeals_remaining: self.redeals_remaining,
        }
    }

    /// 履歴の盤面を書き戻す。選択は外れるよ。
    pub(crate) fn restore(&mut self, record: HistoryRecord) {
        self.tableau = record.tableau;
        self.foundations = record.foundations;
        self.redeals_remaining = record.redeals_remaining;
        self.selection = None;
    }

    /// 盤面に残ってるカードの合計 (場札 + 組札)。
    pub fn card_count(&self) -> usize {
        self.tableau.iter().chain(self.foundations.iter()).map(Vec::len).sum()
    }

    /// ログ用の盤面テキスト。裏向きのカードは `##` で出すよ。
    pub fn board_text(&self) -> String {
        let render = |column: &Column| {
            column
                .iter()
                .map(|card| if card.is_face_up { card.to_string() } else { "##".to_string() })
                .join(" ")
        };
        let foundations = self
            .foundations
            .iter()
            .map(|pile| pile.last().map_or("--".to_string(), |card| card.to_string()))
            .join(" ");
        let tableau = self
            .tableau
            .iter()
            .enumerate()
            .map(|(i, column)| format!("T{}: {}", i, render(column)))
            .join("\n");
        format!("F: {}\n{}", foundations, tableau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::stack::{empty_foundations, empty_tableau};

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            tableau: empty_tableau(),
            foundations: empty_foundations(),
            redeals_remaining: RedealAllowance::Limited(3),
            selection: None,
            is_game_won: false,
            has_started: false,
            difficulty: Difficulty::Normal,
        }
    }

    #[test]
    fn status_follows_flags() {
        let mut s = snapshot();
        assert_eq!(s.status(), GameStatus::NotStarted);
        s.has_started = true;
        assert_eq!(s.status(), GameStatus::InProgress);
        s.is_game_won = true;
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn lookups_report_out_of_range() {
        let mut s = snapshot();
        s.tableau[1].push(Card::face_up(Suit::Club, Rank::Five));
        assert!(s.card_at(1, 0).is_ok());
        assert_eq!(s.card_at(1, 1), Err(MoveRejection::CardOutOfRange { column: 1, index: 1 }));
        assert_eq!(s.column(9).err(), Some(MoveRejection::ColumnOutOfRange(9)));
    }

    #[test]
    fn board_text_hides_face_down_cards() {
        let mut s = snapshot();
        s.tableau[0] = vec![Card::new(Suit::Heart, Rank::Two), Card::face_up(Suit::Spade, Rank::King)];
        s.foundations[1].push(Card::face_up(Suit::Club, Rank::Ace));

        let text = s.board_text();
        assert!(text.starts_with("F: -- A♣ -- --"));
        assert!(text.contains("T0: ## K♠"));
        assert_eq!(s.card_count(), 3);
    }
}
