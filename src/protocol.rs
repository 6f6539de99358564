// src/protocol.rs

// JS 側に渡す盤面データの形 (JSON) を定義するよ！💌
// エンジンの型をそのまま出すんじゃなくて、画面を描くのに便利な形に直してから渡す。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::{Difficulty, GameStatus, RedealAllowance, Selection};
use crate::engine::GameSnapshot;
use crate::systems::stats_system::StatsSnapshot;

/// カード1枚分の表示データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    /// "hearts" / "diamonds" / "clubs" / "spades"
    pub suit: String,
    /// "A", "2", ..., "K"
    pub rank: String,
    /// 1 (A) から 13 (K)
    pub value: u8,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        CardData {
            suit: card.suit.name().to_string(),
            rank: card.rank.label().to_string(),
            value: card.numeric_rank(),
            is_face_up: card.is_face_up,
        }
    }
}

/// 盤面まるごとの表示データ。`getStateJson` で返すのはこれ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    /// 7 列の場札 (下から上の順)
    pub tableau: Vec<Vec<CardData>>,
    /// 4 つの組札 (下から上の順)
    pub foundations: Vec<Vec<CardData>>,
    /// 残りの配り直し回数。数字か "unlimited"。
    pub redeals_remaining: RedealAllowance,
    pub selection: Option<Selection>,
    pub status: GameStatus,
    pub is_game_won: bool,
    pub difficulty: Difficulty,
}

fn pile_data(piles: &[Vec<Card>]) -> Vec<Vec<CardData>> {
    piles.iter().map(|pile| pile.iter().map(CardData::from).collect()).collect()
}

impl From<&GameSnapshot> for GameStateData {
    fn from(snapshot: &GameSnapshot) -> Self {
        GameStateData {
            tableau: pile_data(&snapshot.tableau),
            foundations: pile_data(&snapshot.foundations),
            redeals_remaining: snapshot.redeals_remaining,
            selection: snapshot.selection,
            status: snapshot.status(),
            is_game_won: snapshot.is_game_won,
            difficulty: snapshot.difficulty,
        }
    }
}

/// `onChange` のリスナーに渡すデータ。盤面に加えて、画面のボタンや手数表示に要るものも一緒に送る。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChangeData {
    pub state: GameStateData,
    pub stats: StatsSnapshot,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::engine::GameEngine;

    #[test]
    fn card_data_uses_display_names() {
        let data = CardData::from(&Card::face_up(Suit::Diamond, Rank::Queen));
        assert_eq!(data.suit, "diamonds");
        assert_eq!(data.rank, "Q");
        assert_eq!(data.value, 12);
        assert!(data.is_face_up);
    }

    #[test]
    fn game_state_json_shape() {
        let engine = GameEngine::with_seed(8);
        let data = GameStateData::from(engine.state());
        assert_eq!(data.tableau.len(), 7);
        assert_eq!(data.foundations.len(), 4);

        let json: serde_json::Value = serde_json::to_value(&data).unwrap();
        assert_eq!(json["redeals_remaining"], 3);
        assert_eq!(json["status"], serde_json::to_value(GameStatus::NotStarted).unwrap());
        assert_eq!(json["difficulty"], "normal");
        assert!(json["selection"].is_null());
        println!("盤面 JSON の形チェック、成功！🎉");
    }

    #[test]
    fn change_data_carries_stats_and_history_flags() {
        let engine = GameEngine::with_seed(8);
        let change = ChangeData {
            state: GameStateData::from(engine.state()),
            stats: StatsSnapshot { moves: 4, elapsed_ms: 1_500.0, timer_running: true, timer_enabled: true },
            can_undo: true,
            can_redo: false,
        };

        let json: serde_json::Value = serde_json::to_value(&change).unwrap();
        assert_eq!(json["stats"]["moves"], 4);
        assert_eq!(json["can_undo"], true);
        assert_eq!(json["state"]["tableau"].as_array().map(Vec::len), Some(7));
    }
}
