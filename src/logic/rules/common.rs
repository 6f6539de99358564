//! ルール判定で共通して使う型を置くよ。
//!
//! 一番大事なのは `MoveRejection`。手が通らなかった時の「理由」を表す型で、
//! エンジンの中ではこれを `Result` で受け渡して、ログに出したあと
//! 外 (UI) には `false` だけを返す。UI から見たら「何も起きなかった」のと同じだよ。

use std::fmt;

use crate::components::card::Card;

/// 手が却下された理由。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// もう勝ってるので、新しいゲーム以外は受け付けない。
    GameAlreadyWon,
    /// 移動元と移動先が同じ列。
    SameColumn(usize),
    /// そんな列はない。
    ColumnOutOfRange(usize),
    /// そんな組札はない。
    FoundationOutOfRange(usize),
    /// 列の中にその番号のカードがない。
    CardOutOfRange { column: usize, index: usize },
    /// 裏向きのカードは動かせない。
    FaceDownCard { column: usize, index: usize },
    /// 上にカードが乗ってるので、組札には送れない。
    NotTopCard { column: usize, index: usize },
    /// 場札のルール (同スートで1つ下 / 空き列は K) に合わない。
    CannotStack { card: Card, target: Option<Card> },
    /// 指定した組札には積めない。
    FoundationRejects { card: Card, slot: usize },
    /// どの組札にも積めない。
    NoFoundationAccepts(Card),
    /// 配り直しの回数を使い切った。
    NoRedealsLeft,
    /// 戻せる履歴がない。
    NothingToUndo,
    /// やり直せる履歴がない。
    NothingToRedo,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameAlreadyWon => write!(f, "the game is already won"),
            MoveRejection::SameColumn(column) => write!(f, "source and target are both column {}", column),
            MoveRejection::ColumnOutOfRange(column) => write!(f, "column {} does not exist", column),
            MoveRejection::FoundationOutOfRange(slot) => write!(f, "foundation {} does not exist", slot),
            MoveRejection::CardOutOfRange { column, index } => {
                write!(f, "column {} has no card at index {}", column, index)
            }
            MoveRejection::FaceDownCard { column, index } => {
                write!(f, "card {} in column {} is face down", index, column)
            }
            MoveRejection::NotTopCard { column, index } => {
                write!(f, "card {} in column {} has cards on top of it", index, column)
            }
            MoveRejection::CannotStack { card, target: Some(target) } => {
                write!(f, "{} cannot be stacked on {}", card, target)
            }
            MoveRejection::CannotStack { card, target: None } => {
                write!(f, "only a king may move to an empty column, got {}", card)
            }
            MoveRejection::FoundationRejects { card, slot } => {
                write!(f, "foundation {} does not accept {}", slot, card)
            }
            MoveRejection::NoFoundationAccepts(card) => write!(f, "no foundation accepts {}", card),
            MoveRejection::NoRedealsLeft => write!(f, "no redeals remaining"),
            MoveRejection::NothingToUndo => write!(f, "nothing to undo"),
            MoveRejection::NothingToRedo => write!(f, "nothing to redo"),
        }
    }
}

impl std::error::Error for MoveRejection {}
