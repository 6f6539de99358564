// src/systems/stats_system.rs
//! 手数と経過時間を数えるシステムだよ！⏱️
//!
//! ルールとは関係ないので、エンジンからは `StatsHooks` トレイト越しに呼ばれるだけ。
//! 何を差し込んでもいいし (`NoStats` なら何もしない)、失敗してもゲームは止めない。

use serde::{Serialize, Deserialize};
use log::debug;

/// 現在時刻 (ミリ秒) を返すもの。ブラウザでは `js_sys::Date::now()` を使う。
pub trait Clock {
    fn now_ms(&self) -> f64;
}

// クロージャもそのまま時計として使えるようにしておく (テストで便利！)
impl<F: Fn() -> f64> Clock for F {
    fn now_ms(&self) -> f64 {
        self()
    }
}

/// エンジンが状態遷移のタイミングで呼ぶフック。全部デフォルトは何もしない。
pub trait StatsHooks {
    /// 最初の1手が通った時 (タイマー開始)。
    fn on_game_start(&mut self) {}
    /// 手が1つ通った時。
    fn on_move_made(&mut self) {}
    /// 勝った時 (タイマー停止)。
    fn on_game_won(&mut self) {}
    /// 新しいゲームを始める時。
    fn on_reset(&mut self) {}
}

/// 何も記録しないフック。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStats;

impl StatsHooks for NoStats {}

/// UI に渡す統計のスナップショット。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub moves: u32,
    pub elapsed_ms: f64,
    pub timer_running: bool,
    pub timer_enabled: bool,
}

/// 1ゲーム分の手数と経過時間。
#[derive(Debug)]
pub struct SessionStats<C: Clock> {
    clock: C,
    moves: u32,
    start_time_ms: Option<f64>,
    elapsed_ms: f64,
    timer_running: bool,
    timer_enabled: bool,
}

impl<C: Clock> SessionStats<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            moves: 0,
            start_time_ms: None,
            elapsed_ms: 0.0,
            timer_running: false,
            timer_enabled: true,
        }
    }

    /// タイマーを使うかどうかを決めて作る (設定画面の「タイマー表示」)。
    pub fn with_timer_enabled(mut self, enabled: bool) -> Self {
        self.timer_enabled = enabled;
        self
    }

    pub fn is_timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    /// ゲームの途中でタイマーを切り替える。
    /// 切った時は動いてるタイマーを止める。入れ直しても次のゲームまでは動かないよ。
    pub fn set_timer_enabled(&mut self, enabled: bool) {
        if !enabled && self.timer_running {
            self.stop_timer();
        }
        self.timer_enabled = enabled;
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn increment_moves(&mut self) {
        self.moves += 1;
    }

    /// タイマーを動かす。もう動いてたら何もしない (エラーにはしない)。
    pub fn start_timer(&mut self) {
        if !self.timer_enabled {
            debug!("[Stats] start_timer ignored: timer disabled");
            return;
        }
        if self.timer_running {
            debug!("[Stats] start_timer ignored: already running");
            return;
        }
        self.start_time_ms = Some(self.clock.now_ms());
        self.timer_running = true;
    }

    /// タイマーを止める。止める前に経過時間を最新にしておくよ。
    pub fn stop_timer(&mut self) {
        if !self.timer_running {
            debug!("[Stats] stop_timer ignored: not running");
            return;
        }
        self.tick();
        self.timer_running = false;
    }

    /// 1秒ごとに外 (JS の setInterval) から呼んでもらって、経過時間を更新する。
    pub fn tick(&mut self) {
        if let (true, Some(start)) = (self.timer_running, self.start_time_ms) {
            self.elapsed_ms = (self.clock.now_ms() - start).max(0.0);
        }
    }

    /// 全部ゼロに戻してタイマーも止める。タイマーを使うかどうかの設定はそのまま。
    pub fn reset(&mut self) {
        self.moves = 0;
        self.start_time_ms = None;
        self.elapsed_ms = 0.0;
        self.timer_running = false;
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            moves: self.moves,
            elapsed_ms: self.elapsed_ms,
            timer_running: self.timer_running,
            timer_enabled: self.timer_enabled,
        }
    }
}

impl<C: Clock> StatsHooks for SessionStats<C> {
    fn on_game_start(&mut self) {
        self.start_timer();
    }

    fn on_move_made(&mut self) {
        self.increment_moves();
    }

    fn on_game_won(&mut self) {
        self.stop_timer();
    }

    fn on_reset(&mut self) {
        self.reset();
    }
}
