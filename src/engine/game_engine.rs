// src/engine/game_engine.rs
//! ゲームの状態を持っている唯一の場所、GameEngine だよ！🎮
//!
//! 流れはどの操作も同じ:
//! 1. ルールで検証する (ダメなら `MoveRejection` をログに出して `false`、盤面はそのまま)
//! 2. 今の盤面を履歴に積む
//! 3. 新しいスナップショットを作って差し替える
//! 4. 統計フックに知らせる
//! 5. リスナーに新しいスナップショットを配る
//!
//! シングルスレッド前提で、ロックは持たない。呼び出し側 (UI のイベントループ) が順番に呼ぶこと。

use std::rc::Rc;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use super::listeners::{ListenerId, Listeners};
use super::snapshot::GameSnapshot;
use crate::components::game_state::{Difficulty, GameStatus, Selection};
use crate::components::stack::{empty_foundations, empty_tableau, flip_top_face_up, Foundations, StackType, Tableau};
use crate::config::{GameConfig, CARDS_PER_FOUNDATION};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::shuffled_deck;
use crate::logic::rules::{self, MoveRejection};
use crate::systems::deal_system::DealSystem;
use crate::systems::stats_system::{NoStats, StatsHooks};
use crate::systems::undo_history::{HistoryRecord, UndoHistory};

/// `select_card` の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectOutcome {
    /// 何も変わらなかった (範囲外の列、裏向きのカード、勝利後など)。
    Ignored,
    /// カードを選んだ。
    Selected,
    /// 選んでいたカードを動かせた。
    Moved,
    /// 動かせなかったので選択だけ外した。
    Deselected,
}

impl SelectOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectOutcome::Ignored => "ignored",
            SelectOutcome::Selected => "selected",
            SelectOutcome::Moved => "moved",
            SelectOutcome::Deselected => "deselected",
        }
    }
}

pub struct GameEngine<H: StatsHooks = NoStats> {
    state: Rc<GameSnapshot>,
    history: UndoHistory,
    hooks: H,
    rng: StdRng,
    config: GameConfig,
    dealer: DealSystem,
    listeners: Listeners,
}

impl GameEngine<NoStats> {
    /// 統計なし、シード固定のエンジン。テストやツール用。
    pub fn with_seed(seed: u64) -> Self {
        let config = GameConfig { seed: Some(seed), ..GameConfig::default() };
        GameEngine::new(config, NoStats)
    }
}

impl<H: StatsHooks> GameEngine<H> {
    /// 設定どおりの難易度で新しいゲームを配った状態のエンジンを作る。
    pub fn new(config: GameConfig, hooks: H) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let difficulty = config.difficulty;
        let placeholder = Self::blank_snapshot(&config, difficulty);
        let mut engine = Self {
            state: Rc::new(placeholder),
            history: UndoHistory::new(),
            hooks,
            rng,
            config,
            dealer: DealSystem,
            listeners: Listeners::new(),
        };
        engine.new_game(difficulty);
        engine
    }

    /// 決まった盤面から始めるエンジンを作る。保存した盤面の復元やテストで使うよ。
    /// 組札が全部埋まっていれば最初から勝利状態になる。
    pub fn from_layout(tableau: Tableau, foundations: Foundations, config: GameConfig, hooks: H) -> Self {
        let mut snapshot = Self::blank_snapshot(&config, config.difficulty);
        snapshot.is_game_won = rules::check_win_condition(&foundations);
        snapshot.tableau = tableau;
        snapshot.foundations = foundations;
        Self::from_snapshot(snapshot, config, hooks)
    }

    /// 保存しておいたスナップショットをそのまま今の状態にする。履歴は空から始まるよ。
    pub fn from_snapshot(snapshot: GameSnapshot, config: GameConfig, hooks: H) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: Rc::new(snapshot),
            history: UndoHistory::new(),
            hooks,
            rng,
            config,
            dealer: DealSystem,
            listeners: Listeners::new(),
        }
    }

    fn blank_snapshot(config: &GameConfig, difficulty: Difficulty) -> GameSnapshot {
        GameSnapshot {
            tableau: empty_tableau(),
            foundations: empty_foundations(),
            redeals_remaining: config.redeals_for(difficulty),
            selection: None,
            is_game_won: false,
            has_started: false,
            difficulty,
        }
    }

    // --- 読み取り ---

    /// 今のスナップショット (共有ポインタ)。
    pub fn snapshot(&self) -> Rc<GameSnapshot> {
        Rc::clone(&self.state)
    }

    pub fn state(&self) -> &GameSnapshot {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 今 `undo` したら通る？ (勝ったあとは false)
    pub fn can_undo(&self) -> bool {
        self.ensure_playable().is_ok() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.ensure_playable().is_ok() && self.history.can_redo()
    }

    // --- 購読 ---

    /// 手が通るたびに呼ばれる関数を登録する。
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Rc<GameSnapshot>) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // --- ゲームの開始 ---

    /// 新しいゲーム！統計をリセットして、シャッフルして、履歴を消して、配る。
    /// 勝ったあとでも呼べる唯一の操作だよ。
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.hooks.on_reset();
        let deck = shuffled_deck(&mut self.rng);
        self.history.clear();

        let mut next = Self::blank_snapshot(&self.config, difficulty);
        next.tableau = self.dealer.deal(deck);
        self.state = Rc::new(next);

        info!("[Engine] new game ({:?}, redeals {:?})", difficulty, self.state.redeals_remaining);
        debug!("[Engine] board:\n{}", self.state.board_text());
        self.publish();
    }

    /// 難易度はそのままで、新しいデッキを配り直す。
    /// 勝ったあとでも呼べるよ。中身は今の難易度での `new_game` と同じで、
    /// 統計・履歴・開始フラグも全部最初に戻る (前のゲームの履歴に undo で戻れたら困るので)。
    pub fn deal_initial_cards(&mut self) {
        let difficulty = self.state.difficulty;
        info!("[Engine] dealing a fresh deck ({:?})", difficulty);
        self.new_game(difficulty);
    }

    // --- 手 ---

    /// `from` 列の `from_index` から上を全部、`to` 列に動かす。
    pub fn move_run(&mut self, from: usize, from_index: usize, to: usize) -> bool {
        let result = self.try_move_run(from, from_index, to);
        Self::report("move_run", result)
    }

    /// `move_run` が通るかどうかだけ調べる (盤面は変えない)。ドラッグ中の表示用。
    pub fn can_move_run(&self, from: usize, from_index: usize, to: usize) -> bool {
        self.ensure_playable().and_then(|_| self.check_run_move(from, from_index, to)).is_ok()
    }

    /// 列の一番上のカードを、指定した組札に送る。
    pub fn move_to_foundation(&mut self, from: usize, card_index: usize, slot: usize) -> bool {
        let result = self.try_move_to_foundation(from, card_index, slot);
        Self::report("move_to_foundation", result)
    }

    /// 列の一番上のカードを、受け取れる最初の組札 (0 → 3) に送る。1回で1枚だけ。
    pub fn auto_send_to_foundation(&mut self, from: usize, start_index: usize) -> bool {
        let result = self.try_auto_send(from, start_index);
        Self::report("auto_send_to_foundation", result)
    }

    /// クリックで「選んで、動かす」。
    ///
    /// 選択がない時は、表向きのカードなら選ぶ。選択がある時は、その列へ `move_run` を試して、
    /// 結果に関係なく選択を外す。存在しない列を指定した時は何もしない。
    pub fn select_card(&mut self, column: usize, card_index: usize) -> SelectOutcome {
        if let Err(rejection) = self.ensure_playable().and_then(|_| self.state.column(column).map(|_| ())) {
            debug!("[Engine] select_card ignored: {}", rejection);
            return SelectOutcome::Ignored;
        }

        let selection = self.state.selection;
        match selection {
            None => {
                let face_up = match self.state.card_at(column, card_index) {
                    Ok(card) => card.is_face_up,
                    Err(rejection) => {
                        debug!("[Engine] select_card ignored: {}", rejection);
                        return SelectOutcome::Ignored;
                    }
                };
                if !face_up {
                    debug!("[Engine] select_card ignored: card {} in column {} is face down", card_index, column);
                    return SelectOutcome::Ignored;
                }
                let mut next = (*self.state).clone();
                next.selection = Some(Selection { column, card_index });
                self.state = Rc::new(next);
                self.publish();
                SelectOutcome::Selected
            }
            Some(selected) => {
                if self.move_run(selected.column, selected.card_index, column) {
                    SelectOutcome::Moved
                } else {
                    self.clear_selection();
                    SelectOutcome::Deselected
                }
            }
        }
    }

    /// 選択を外す。選択がなければ何もしない。
    pub fn clear_selection(&mut self) -> bool {
        if let Err(rejection) = self.ensure_playable() {
            debug!("[Engine] clear_selection rejected: {}", rejection);
            return false;
        }
        if self.state.selection.is_none() {
            return false;
        }
        let mut next = (*self.state).clone();
        next.selection = None;
        self.state = Rc::new(next);
        self.publish();
        true
    }

    /// 場札を全部集めて配り直す。Normal では回数に限りがあるよ。
    /// 履歴には積むので、配り直しも undo できる。
    pub fn collect_and_redeal(&mut self) -> bool {
        let result = self.try_redeal();
        Self::report("collect_and_redeal", result)
    }

    /// 1手戻す。
    pub fn undo(&mut self) -> bool {
        let result = self.try_undo();
        Self::report("undo", result)
    }

    /// 戻した手をやり直す。
    pub fn redo(&mut self) -> bool {
        let result = self.try_redo();
        Self::report("redo", result)
    }

    // --- 中身 ---

    fn try_move_run(&mut self, from: usize, from_index: usize, to: usize) -> Result<(), MoveRejection> {
        self.ensure_playable()?;
        self.check_run_move(from, from_index, to)?;

        let mut next = self.begin_mutation();
        let run = next.tableau[from].split_off(from_index);
        debug!("[Engine] moving {} card(s) from column {} to column {}", run.len(), from, to);
        next.tableau[to].extend(run);
        flip_top_face_up(&mut next.tableau[from]);
        next.selection = None;
        self.commit_card_move(next);
        Ok(())
    }

    fn check_run_move(&self, from: usize, from_index: usize, to: usize) -> Result<(), MoveRejection> {
        if from == to {
            return Err(MoveRejection::SameColumn(from));
        }
        let target = self.state.column(to)?;
        let lead = self.state.card_at(from, from_index)?;
        if !lead.is_face_up {
            return Err(MoveRejection::FaceDownCard { column: from, index: from_index });
        }
        rules::validate_move(lead, StackType::Tableau(to as u8), target)
    }

    fn try_move_to_foundation(&mut self, from: usize, card_index: usize, slot: usize) -> Result<(), MoveRejection> {
        self.ensure_playable()?;
        self.check_single_card(from, card_index)?;
        let pile = self.state.foundations.get(slot).ok_or(MoveRejection::FoundationOutOfRange(slot))?;
        let card = self.state.card_at(from, card_index)?;
        rules::validate_move(card, StackType::Foundation(slot as u8), pile)?;
        self.apply_foundation_move(from, slot);
        Ok(())
    }

    fn try_auto_send(&mut self, from: usize, start_index: usize) -> Result<(), MoveRejection> {
        self.ensure_playable()?;
        self.check_single_card(from, start_index)?;
        let card = self.state.card_at(from, start_index)?;
        let slot = find_automatic_foundation_move(card, &self.state.foundations)
            .ok_or_else(|| MoveRejection::NoFoundationAccepts(card.clone()))?;
        self.apply_foundation_move(from, slot);
        Ok(())
    }

    /// 組札に送れるのは、表向きで、上に何も乗ってないカードだけ。
    fn check_single_card(&self, column: usize, index: usize) -> Result<(), MoveRejection> {
        let card = self.state.card_at(column, index)?;
        if index + 1 != self.state.column(column)?.len() {
            return Err(MoveRejection::NotTopCard { column, index });
        }
        if !card.is_face_up {
            return Err(MoveRejection::FaceDownCard { column, index });
        }
        Ok(())
    }

    fn apply_foundation_move(&mut self, from: usize, slot: usize) {
        let mut next = self.begin_mutation();
        if let Some(card) = next.tableau[from].pop() {
            debug!("[Engine] {} from column {} to foundation {}", card, from, slot);
            next.foundations[slot].push(card);
        }
        debug_assert!(next.foundations[slot].len() <= CARDS_PER_FOUNDATION);
        flip_top_face_up(&mut next.tableau[from]);
        next.selection = None;
        self.commit_card_move(next);
    }

    fn try_redeal(&mut self) -> Result<(), MoveRejection> {
        self.ensure_playable()?;
        let remaining = self.state.redeals_remaining.consume().ok_or(MoveRejection::NoRedealsLeft)?;

        let mut next = self.begin_mutation();
        next.tableau = self.dealer.redeal(&next.tableau);
        next.redeals_remaining = remaining;
        next.selection = None;
        self.state = Rc::new(next);

        info!("[Engine] redealt the tableau, redeals remaining {:?}", remaining);
        self.publish();
        Ok(())
    }

    fn try_undo(&mut self) -> Result<(), MoveRejection> {
        self.ensure_playable()?;
        let previous = self
            .history
            .undo(self.state.history_record())
            .ok_or(MoveRejection::NothingToUndo)?;
        self.replace_board(previous);
        Ok(())
    }

    fn try_redo(&mut self) -> Result<(), MoveRejection> {
        self.ensure_playable()?;
        let next = self
            .history
            .redo(self.state.history_record())
            .ok_or(MoveRejection::NothingToRedo)?;
        self.replace_board(next);
        Ok(())
    }

    fn replace_board(&mut self, record: HistoryRecord) {
        let mut next = (*self.state).clone();
        next.restore(record);
        self.state = Rc::new(next);
        self.publish();
    }

    /// 勝ったあとは新しいゲーム以外お断り。
    fn ensure_playable(&self) -> Result<(), MoveRejection> {
        if self.state.is_game_won {
            Err(MoveRejection::GameAlreadyWon)
        } else {
            Ok(())
        }
    }

    /// 今の盤面を履歴に積んで、書き換え用のコピーを返す。
    fn begin_mutation(&mut self) -> GameSnapshot {
        self.history.record_before_mutation(self.state.history_record());
        (*self.state).clone()
    }

    /// カードが動いた手の仕上げ。開始判定・勝利判定をして、統計とリスナーに知らせる。
    fn commit_card_move(&mut self, mut next: GameSnapshot) {
        let first_move = !next.has_started;
        next.has_started = true;
        let won_now = rules::check_win_condition(&next.foundations);
        next.is_game_won = won_now;
        self.state = Rc::new(next);

        if first_move {
            self.hooks.on_game_start();
        }
        self.hooks.on_move_made();
        if won_now {
            info!("[Engine] 🏆 all foundations complete, game won");
            self.hooks.on_game_won();
        }
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = Rc::clone(&self.state);
        self.listeners.notify(&snapshot);
    }

    fn report(operation: &str, result: Result<(), MoveRejection>) -> bool {
        match result {
            Ok(()) => true,
            Err(rejection) => {
                debug!("[Engine] {} rejected: {}", operation, rejection);
                false
            }
        }
    }
}
