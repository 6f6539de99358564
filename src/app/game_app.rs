// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use log::{debug, info, warn};

use crate::app::state_getter;
use crate::components::game_state::Difficulty;
use crate::config::GameConfig;
use crate::engine::{GameEngine, GameSnapshot};
use crate::systems::stats_system::SessionStats;

/// ブラウザの時計 (`Date.now()`)。
type BrowserClock = fn() -> f64;

type BrowserEngine = GameEngine<SessionStats<BrowserClock>>;

// --- JS から使うゲーム本体 ---
// ここでは引数の変換と、結果を JS の形にするだけで、ルールは何も知らない！
//
// メソッドは全部 `&self`。エンジンは RefCell の中にいて、借りるのは呼び出しの間だけ。
// JS のリスナーはエンジンを返したあとで呼ぶので、リスナーの中から
// getStatsJson() や moveRun() をもう一回呼んでも大丈夫だよ。
#[wasm_bindgen]
pub struct GameApp {
    engine: Rc<RefCell<BrowserEngine>>,
    // エンジンから届いた、まだ JS に配ってないスナップショット
    pending: Rc<RefCell<VecDeque<Rc<GameSnapshot>>>>,
    js_listeners: RefCell<Vec<(u32, js_sys::Function)>>,
    next_listener_id: Cell<u32>,
}

impl GameApp {
    fn from_config(config: GameConfig) -> Self {
        info!("GameApp: Initializing... ({:?})", config);
        let stats = SessionStats::new(js_sys::Date::now as BrowserClock).with_timer_enabled(config.timer_enabled);
        let mut engine = GameEngine::new(config, stats);

        let pending = Rc::new(RefCell::new(VecDeque::new()));
        {
            let pending = Rc::clone(&pending);
            engine.on_change(move |snapshot| pending.borrow_mut().push_back(Rc::clone(snapshot)));
        }

        GameApp {
            engine: Rc::new(RefCell::new(engine)),
            pending,
            js_listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        }
    }

    /// エンジンを書き換える操作を1つ実行して、そのあと溜まった変更をリスナーに配る。
    /// エンジンがもう借りられてたら (ありえないはずだけど) 何もしないで `None`。
    fn mutate<R>(&self, operation: &str, apply: impl FnOnce(&mut BrowserEngine) -> R) -> Option<R> {
        let result = match self.engine.try_borrow_mut() {
            Ok(mut engine) => Some(apply(&mut engine)),
            Err(_) => {
                warn!("GameApp: {} ignored, engine is busy", operation);
                None
            }
        };
        self.flush_changes();
        result
    }

    fn read<R>(&self, apply: impl FnOnce(&BrowserEngine) -> R) -> R {
        apply(&self.engine.borrow())
    }

    /// 溜まってるスナップショットを1つずつ JS のリスナーに配る。
    /// 呼ぶ時はエンジンも待ち行列も借りてない状態にしておく。
    fn flush_changes(&self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(snapshot) = next else {
                break;
            };
            let listeners: Vec<js_sys::Function> =
                self.js_listeners.borrow().iter().map(|(_, callback)| callback.clone()).collect();
            if listeners.is_empty() {
                continue;
            }

            let json = self.read(|engine| {
                let stats = engine.hooks().snapshot();
                state_getter::change_json(&snapshot, stats, engine.can_undo(), engine.can_redo())
            });
            let Ok(json) = json else {
                continue; // state_getter 側でログ済み
            };

            debug!("GameApp: notifying {} listener(s)", listeners.len());
            let payload = JsValue::from_str(&json);
            for callback in listeners {
                if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                    warn!("GameApp: change listener threw: {:?}", e);
                }
            }
        }
    }
}

fn parse_difficulty(difficulty: &str) -> Result<Difficulty, JsValue> {
    difficulty.parse::<Difficulty>().map_err(|e| {
        warn!("GameApp: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定 (Normal, 配り直し3回, ランダムシャッフル, タイマーあり) で作る。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// JSON の設定から作る。例: `{"difficulty":"easy","seed":42,"timer_enabled":false}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            let error_msg = format!("Invalid game config: {}", e);
            warn!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        Ok(Self::from_config(config))
    }

    // --- ゲームの開始 ---

    /// "easy" か "normal" で新しいゲーム。
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&self, difficulty: &str) -> Result<(), JsValue> {
        let difficulty = parse_difficulty(difficulty)?;
        self.mutate("newGame", |engine| engine.new_game(difficulty));
        Ok(())
    }

    #[wasm_bindgen(js_name = dealInitialCards)]
    pub fn deal_initial_cards(&self) {
        self.mutate("dealInitialCards", |engine| engine.deal_initial_cards());
    }

    // --- 手 (通ったら true) ---

    #[wasm_bindgen(js_name = moveRun)]
    pub fn move_run(&self, from: usize, from_index: usize, to: usize) -> bool {
        self.mutate("moveRun", |engine| engine.move_run(from, from_index, to)).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = canMoveRun)]
    pub fn can_move_run(&self, from: usize, from_index: usize, to: usize) -> bool {
        self.read(|engine| engine.can_move_run(from, from_index, to))
    }

    #[wasm_bindgen(js_name = moveToFoundation)]
    pub fn move_to_foundation(&self, from: usize, card_index: usize, slot: usize) -> bool {
        self.mutate("moveToFoundation", |engine| engine.move_to_foundation(from, card_index, slot))
            .unwrap_or(false)
    }

    /// ダブルクリックで組札へ送る時に使う。
    #[wasm_bindgen(js_name = autoSend)]
    pub fn auto_send(&self, from: usize, start_index: usize) -> bool {
        self.mutate("autoSend", |engine| engine.auto_send_to_foundation(from, start_index))
            .unwrap_or(false)
    }

    /// "ignored" / "selected" / "moved" / "deselected" のどれかを返す。
    #[wasm_bindgen(js_name = selectCard)]
    pub fn select_card(&self, column: usize, card_index: usize) -> String {
        self.mutate("selectCard", |engine| engine.select_card(column, card_index).as_str())
            .unwrap_or("ignored")
            .to_string()
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&self) -> bool {
        self.mutate("clearSelection", |engine| engine.clear_selection()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = collectAndRedeal)]
    pub fn collect_and_redeal(&self) -> bool {
        self.mutate("collectAndRedeal", |engine| engine.collect_and_redeal()).unwrap_or(false)
    }

    pub fn undo(&self) -> bool {
        self.mutate("undo", |engine| engine.undo()).unwrap_or(false)
    }

    pub fn redo(&self) -> bool {
        self.mutate("redo", |engine| engine.redo()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.read(|engine| engine.can_undo())
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.read(|engine| engine.can_redo())
    }

    // --- 時間 ---

    /// JS の setInterval から1秒ごとに呼んでね。経過時間を更新するだけ。
    pub fn tick(&self) {
        self.mutate("tick", |engine| engine.hooks_mut().tick());
    }

    /// 設定画面のタイマー切り替え。
    #[wasm_bindgen(js_name = setTimerEnabled)]
    pub fn set_timer_enabled(&self, enabled: bool) {
        self.mutate("setTimerEnabled", |engine| engine.hooks_mut().set_timer_enabled(enabled));
    }

    // --- 読み取り ---

    #[wasm_bindgen(js_name = getStateJson)]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        self.read(|engine| state_getter::get_game_state_json(engine.state()))
    }

    #[wasm_bindgen(js_name = getStatsJson)]
    pub fn get_stats_json(&self) -> Result<JsValue, JsValue> {
        self.read(|engine| state_getter::get_stats_json(&engine.hooks().snapshot()))
    }

    /// デバッグ用の盤面テキスト。
    #[wasm_bindgen(js_name = boardText)]
    pub fn board_text(&self) -> String {
        self.read(|engine| engine.state().board_text())
    }

    // --- 購読 ---

    /// 手が通るたびに `callback` を呼ぶ。引数は JSON 文字列で、
    /// `{ state, stats, can_undo, can_redo }` の形。
    /// 戻り値の番号を `removeListener` に渡すと外せる。
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) -> u32 {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id.wrapping_add(1));
        self.js_listeners.borrow_mut().push((id, callback));
        id
    }

    #[wasm_bindgen(js_name = removeListener)]
    pub fn remove_listener(&self, id: u32) -> bool {
        let mut listeners = self.js_listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
