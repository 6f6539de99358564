// src/components/mod.rs

// 盤面を作るデータ部品たち！
pub mod card;
pub mod stack;
pub mod game_state;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use stack::{Column, Foundations, StackType, Tableau};
pub use game_state::{Difficulty, GameStatus, RedealAllowance, Selection};
