// src/logic/mod.rs

// ゲームのルールや、カードの並べ方などの「ロジック」部分！
pub mod auto_move;
pub mod deck;
pub mod rules;
