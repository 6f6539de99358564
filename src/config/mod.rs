// src/config/mod.rs
//! 盤面の大きさとかルールの数字とか、ゲームの設定をまとめるモジュールだよ！

pub mod rules;
pub mod game_config;

pub use rules::*;
pub use game_config::GameConfig;
