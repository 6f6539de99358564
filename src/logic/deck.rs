// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::DECK_SIZE;
use rand::seq::SliceRandom;
use rand::Rng;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートごとに A → K の順番 (ハート、ダイヤ、クラブ、スペード)。
/// 生成された時点では、すべてのカードは裏向き！乱数は使わないよ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates を1回まわすだけで一様になるから、何回も混ぜる必要はなし！
/// 乱数生成器は外から渡すので、シード付きの `StdRng` を使えば毎回同じ並びになる (テストで便利)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// 新しいデッキを作ってシャッフルしたものを返す。
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deck
}
