// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここにあるのは全部「純粋な」判定関数。状態を書き換えたりはしない。

pub mod common;
pub mod foundation;
pub mod tableau;
pub mod win_condition;
pub mod move_validation;

#[cfg(test)]
mod tests;

pub use common::*;
pub use foundation::*;
pub use tableau::*;
pub use win_condition::*;
pub use move_validation::*;
