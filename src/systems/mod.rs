// src/systems/mod.rs

// 盤面を動かす側の仕組みたち (配る・履歴・統計)
pub mod deal_system;
pub mod stats_system;
pub mod undo_history;

pub use deal_system::DealSystem;
pub use stats_system::{Clock, NoStats, SessionStats, StatsHooks, StatsSnapshot};
pub use undo_history::{HistoryRecord, UndoHistory};
