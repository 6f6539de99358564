// src/config/rules.rs
//! 盤面とルールに関する定数を定義するよ！

pub const TABLEAU_COLUMNS: usize = 7; // 場札の列の数
pub const FOUNDATION_COUNT: usize = 4; // 組札 (endstack) の数
pub const DECK_SIZE: usize = 52; // デッキの枚数
pub const CARDS_PER_FOUNDATION: usize = 13; // A から K まで

// --- 配り方 ---
pub const DEAL_ROWS: usize = 7; // 7段 × 7列 = 49枚を普通に配る
pub const DEAL_GRID_SIZE: usize = DEAL_ROWS * TABLEAU_COLUMNS;
pub const OVERFLOW_COLUMNS: usize = 3; // 余った3枚は 0,1,2 列目に表向きで

// --- 配り直し ---
pub const DEFAULT_REDEALS: u32 = 3; // Normal の配り直し回数
