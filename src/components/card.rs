// src/components/card.rs

// serde を使う宣言！スナップショットを JSON にして JS 側に渡す時に使うよ。
use serde::{Serialize, Deserialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順はデッキを作る順番 (ハート → ダイヤ → クラブ → スペード) と同じにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

impl Suit {
    /// JS 側 (UI) で使っている名前。"hearts" みたいな複数形だよ。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Heart => "hearts",
            Suit::Diamond => "diamonds",
            Suit::Club => "clubs",
            Suit::Spade => "spades",
        }
    }

    /// 表示用の記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 判別子がそのまま数値ランク (1..=13) になってるから、`as u8` で比較に使えるよ！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// 数値ランク (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 画面に出す時の文字 ("A", "10", "K" など)。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// デッキを作る時にループする全スート。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// A から K まで、昇順の全ランク。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カード1枚を表す構造体だよ！🃏
///
/// - `suit` と `rank` の組み合わせで 52 枚のどれなのかが決まる (これは変わらない)
/// - `is_face_up` だけが変わる値で、めくるのはエンジンの仕事。UI は触っちゃダメ！🙅‍♀️
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。デッキを作る時はこっち。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る。テストや盤面の復元で便利！
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    /// 数値ランク (1..=13)。
    pub fn numeric_rank(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up, "new() のカードは裏向きのはず");
        assert!(Card::face_up(Suit::Spade, Rank::Ace).is_face_up);

        println!("作成したカード: {:?}", card);
    }

    #[test]
    fn rank_values_and_labels() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::Queen.label(), "Q");

        // ALL_RANKS は 1..=13 の順番で並んでるはず
        for (i, rank) in ALL_RANKS.iter().enumerate() {
            assert_eq!(rank.value() as usize, i + 1);
        }

        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        println!("Rank テスト、成功！🎉");
    }

    #[test]
    fn display_uses_label_and_symbol() {
        assert_eq!(Card::face_up(Suit::Heart, Rank::Ace).to_string(), "A♥");
        assert_eq!(Card::new(Suit::Club, Rank::Ten).to_string(), "10♣");
        assert_eq!(Suit::Diamond.name(), "diamonds");
    }
}
