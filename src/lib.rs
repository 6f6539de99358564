// src/lib.rs
//! Endstack ソリティアのゲームエンジン！🃏
//!
//! 7 列の場札と 4 つの組札 (endstack) だけで遊ぶソリティア。
//! 場札には同じスートで1つ小さいカードしか重ねられないし、空いた列には K しか置けないよ。
//! ルールと状態は全部 `engine::GameEngine` が持っていて、
//! ブラウザからは `app::GameApp` 越しに使う。

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod components;
pub mod config;
pub mod logic;
pub mod systems;
pub mod engine;
pub mod protocol;
pub mod logger;
pub mod app;

// よく使う型はここから直接使えるようにしておく
pub use app::GameApp;
pub use components::{Card, Difficulty, GameStatus, RedealAllowance, Rank, Suit};
pub use config::GameConfig;
pub use engine::{GameEngine, GameSnapshot, ListenerId, SelectOutcome};
pub use logic::rules::MoveRejection;
pub use systems::{SessionStats, StatsHooks};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook and logger set!");
}
