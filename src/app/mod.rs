// src/app/mod.rs
//! JS から呼ばれる GameApp と、その内部の小物を置くモジュールだよ！

pub mod game_app;
pub mod state_getter;

pub use game_app::GameApp;
