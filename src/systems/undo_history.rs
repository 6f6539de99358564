// src/systems/undo_history.rs
//! 元に戻す / やり直す (undo / redo) の履歴を管理するよ！⏪
//!
//! 手が通る直前に、盤面 (場札・組札・配り直し回数) のまるごとコピーを積んでおく。
//! `Vec<Card>` の clone は中身ごとのコピーなので、あとで盤面が変わっても履歴は影響を受けない。

use serde::{Serialize, Deserialize};

use crate::components::game_state::RedealAllowance;
use crate::components::stack::{Foundations, Tableau};

/// 履歴1つ分。手が通る直前の盤面だよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub tableau: Tableau,
    pub foundations: Foundations,
    pub redeals_remaining: RedealAllowance,
}

/// undo 用の `past` と redo 用の `future` の2本のスタック。
#[derive(Debug, Default, Clone)]
pub struct UndoHistory {
    past: Vec<HistoryRecord>,
    future: Vec<HistoryRecord>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 手を適用する直前に呼ぶ。新しい手を打ったら、やり直し (redo) 候補は全部捨てる。
    pub fn record_before_mutation(&mut self, record: HistoryRecord) {
        self.past.push(record);
        self.future.clear();
    }

    /// 一番新しい履歴を取り出す。`current` (置き換えられる今の盤面) は redo 用に取っておく。
    /// 履歴が空なら `None` で、`current` は捨てられる。
    pub fn undo(&mut self, current: HistoryRecord) -> Option<HistoryRecord> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// 最後に undo した盤面を取り出す。`current` は undo 用に積み直す。
    pub fn redo(&mut self, current: HistoryRecord) -> Option<HistoryRecord> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// 両方のスタックを空にする。新しいゲームの時だけ呼ぶよ (配り直しでは消さない)。
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// 戻せる手の数。
    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    /// やり直せる手の数。
    pub fn redo_len(&self) -> usize {
        self.future.len()
    }
}
