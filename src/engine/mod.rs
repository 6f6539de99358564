// src/engine/mod.rs
//! ゲームの状態機械 (GameEngine) と、外に配るスナップショット、購読の仕組み。

pub mod game_engine;
pub mod listeners;
pub mod snapshot;


pub use game_engine::{GameEngine, SelectOutcome};
pub use listeners::ListenerId;
pub use snapshot::GameSnapshot;
