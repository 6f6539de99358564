// src/components/game_state.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_REDEALS;

/// ゲーム全体の進み具合を表す列挙型だよ！🏁
///
/// - `NotStarted`: 配っただけで、まだ1手も動かしてない
/// - `InProgress`: 最初の1手が通ったあと (タイマーが動いてる)
/// - `Won`: 組札が全部埋まった！🏆 これ以降は新しいゲームを始めるまで何もできない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
}

/// 難易度。Easy だと配り直しが無制限になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
}

impl Difficulty {
    /// この難易度でゲームを始めた時の配り直し回数。
    pub fn initial_redeals(self, limited_redeals: u32) -> RedealAllowance {
        match self {
            Difficulty::Easy => RedealAllowance::Unlimited,
            Difficulty::Normal => RedealAllowance::Limited(limited_redeals),
        }
    }
}

/// JS から来た文字列 ("easy" / "normal") を読めなかった時のエラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// 残りの配り直し回数。Easy のときは `Unlimited` で、いくら使っても減らないよ。
///
/// JSON では数値か `"unlimited"` という文字列になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RedealRepr", into = "RedealRepr")]
pub enum RedealAllowance {
    Limited(u32),
    Unlimited,
}

impl RedealAllowance {
    /// まだ配り直しできる？
    pub fn is_available(self) -> bool {
        match self {
            RedealAllowance::Limited(n) => n > 0,
            RedealAllowance::Unlimited => true,
        }
    }

    /// 1回分使ったあとの値。使い切ってたら `None`。
    pub fn consume(self) -> Option<Self> {
        match self {
            RedealAllowance::Limited(0) => None,
            RedealAllowance::Limited(n) => Some(RedealAllowance::Limited(n - 1)),
            RedealAllowance::Unlimited => Some(RedealAllowance::Unlimited),
        }
    }
}

impl Default for RedealAllowance {
    fn default() -> Self {
        RedealAllowance::Limited(DEFAULT_REDEALS)
    }
}

// serde 用の中間表現。数値 or 文字列。
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RedealRepr {
    Count(u32),
    Word(String),
}

impl From<RedealAllowance> for RedealRepr {
    fn from(value: RedealAllowance) -> Self {
        match value {
            RedealAllowance::Limited(n) => RedealRepr::Count(n),
            RedealAllowance::Unlimited => RedealRepr::Word("unlimited".to_string()),
        }
    }
}

impl TryFrom<RedealRepr> for RedealAllowance {
    type Error = String;

    fn try_from(value: RedealRepr) -> Result<Self, Self::Error> {
        match value {
            RedealRepr::Count(n) => Ok(RedealAllowance::Limited(n)),
            RedealRepr::Word(w) if w.eq_ignore_ascii_case("unlimited") => Ok(RedealAllowance::Unlimited),
            RedealRepr::Word(w) => Err(format!("invalid redeal allowance: {:?}", w)),
        }
    }
}

/// 選択中のカードの場所。`card_index` は列の下から数えた番号だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub column: usize,
    pub card_index: usize,
}
