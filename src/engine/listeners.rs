// src/engine/listeners.rs
//! スナップショットの購読 (subscribe) の仕組みだよ。📣
//! 手が通るたびに、登録された関数を登録順に同期で呼び出す。

use std::fmt;
use std::rc::Rc;

use super::snapshot::GameSnapshot;

/// 登録したリスナーを外すための番号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl ListenerId {
    /// JS に渡す番号。
    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn from_raw(raw: u32) -> Self {
        ListenerId(raw)
    }
}

type Listener = Box<dyn FnMut(&Rc<GameSnapshot>)>;

#[derive(Default)]
pub struct Listeners {
    next_id: u32,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, listener));
        id
    }

    /// 外せたら true。
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, snapshot: &Rc<GameSnapshot>) {
        for (_, listener) in self.entries.iter_mut() {
            listener(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("count", &self.entries.len()).finish()
    }
}
