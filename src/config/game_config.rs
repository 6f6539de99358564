// src/config/game_config.rs
//! JS 側から渡されるゲーム設定だよ。全部のフィールドにデフォルトがあるから、
//! `{}` だけ渡してもちゃんと動く！

use serde::{Serialize, Deserialize};

use super::rules::DEFAULT_REDEALS;
use crate::components::game_state::{Difficulty, RedealAllowance};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 最初のゲームの難易度。
    pub difficulty: Difficulty,
    /// Normal のときの配り直し回数。
    pub limited_redeals: u32,
    /// シャッフル用の乱数シード。None なら毎回ランダム。
    pub seed: Option<u64>,
    /// 経過時間を計るかどうか。
    pub timer_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            limited_redeals: DEFAULT_REDEALS,
            seed: None,
            timer_enabled: true,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込む。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 指定した難易度で始めた時の配り直し回数。
    pub fn redeals_for(&self, difficulty: Difficulty) -> RedealAllowance {
        difficulty.initial_redeals(self.limited_redeals)
    }
}
