// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::stack::{empty_foundations, StackType};
use crate::logic::deck::create_standard_deck;

// --- テスト用ヘルパー関数 ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

/// 1つのスートを A から K まで積んだ組札。
fn full_pile(suit: Suit) -> Vec<Card> {
    ALL_RANKS.iter().map(|&rank| up(suit, rank)).collect()
}

// --- 場札ルール ---

#[test]
fn test_only_kings_go_to_empty_columns() {
    for card in create_standard_deck() {
        assert_eq!(
            can_stack_on_tableau(&card, None),
            card.rank == Rank::King,
            "空の列に置けるのは K だけのはず: {}",
            card
        );
    }
}

#[test]
fn test_same_suit_descending_on_tableau() {
    let queen_hearts = up(Suit::Heart, Rank::Queen);

    // 同じスートで1つ下 → OK
    assert!(can_stack_on_tableau(&up(Suit::Heart, Rank::Jack), Some(&queen_hearts)));

    // 赤黒交互のルールじゃないので、黒の J はダメ！
    assert!(!can_stack_on_tableau(&up(Suit::Spade, Rank::Jack), Some(&queen_hearts)));
    // 同じ赤でもスートが違えばダメ
    assert!(!can_stack_on_tableau(&up(Suit::Diamond, Rank::Jack), Some(&queen_hearts)));
    // ランクが違う
    assert!(!can_stack_on_tableau(&up(Suit::Heart, Rank::Ten), Some(&queen_hearts)));
    assert!(!can_stack_on_tableau(&up(Suit::Heart, Rank::King), Some(&queen_hearts)));
    // A の上には何も置けない
    assert!(!can_stack_on_tableau(&up(Suit::Heart, Rank::King), Some(&up(Suit::Heart, Rank::Ace))));

    println!("場札ルールテスト、成功！🎉");
}

// --- 組札ルール ---

#[test]
fn test_only_aces_start_a_foundation() {
    for card in create_standard_deck() {
        assert_eq!(can_move_to_foundation(&card, None), card.rank == Rank::Ace, "{}", card);
    }
}

#[test]
fn test_foundation_builds_up_in_suit() {
    let ace_hearts = up(Suit::Heart, Rank::Ace);

    assert!(can_move_to_foundation(&up(Suit::Heart, Rank::Two), Some(&ace_hearts)));
    assert!(!can_move_to_foundation(&up(Suit::Diamond, Rank::Two), Some(&ace_hearts)), "スート違い");
    assert!(!can_move_to_foundation(&up(Suit::Heart, Rank::Three), Some(&ace_hearts)), "ランク飛ばし");
    assert!(!can_move_to_foundation(&up(Suit::Heart, Rank::Ace), Some(&ace_hearts)), "同じランク");
    assert!(!can_move_to_foundation(&up(Suit::Club, Rank::Ace), Some(&up(Suit::Club, Rank::King))));
}

// --- 勝利判定 ---

#[test]
fn test_win_condition() {
    let mut foundations = empty_foundations();
    assert!(!check_win_condition(&foundations), "空っぽはクリアじゃない！🙅");

    for (pile, &suit) in foundations.iter_mut().zip(ALL_SUITS.iter()) {
        *pile = full_pile(suit);
    }
    assert!(check_win_condition(&foundations), "4つとも13枚ならクリアなはず！🏆");

    foundations[2].pop();
    assert!(!check_win_condition(&foundations), "1枚でも足りなければクリアじゃない！🙅");
    println!("ゲームクリア判定テスト、成功！🎉");
}

// --- 振り分け ---

#[test]
fn test_validate_move_dispatches_by_target() {
    let king = up(Suit::Spade, Rank::King);
    let ace = up(Suit::Spade, Rank::Ace);

    assert_eq!(validate_move(&king, StackType::Tableau(0), &[]), Ok(()));
    assert_eq!(validate_move(&ace, StackType::Foundation(3), &[]), Ok(()));
    assert_eq!(
        validate_move(&ace, StackType::Tableau(1), &[]),
        Err(MoveRejection::CannotStack { card: ace.clone(), target: None })
    );
    assert_eq!(
        validate_move(&king, StackType::Foundation(0), &[]),
        Err(MoveRejection::FoundationRejects { card: king.clone(), slot: 0 })
    );
    assert_eq!(validate_move(&king, StackType::Tableau(7), &[]), Err(MoveRejection::ColumnOutOfRange(7)));
    assert_eq!(validate_move(&ace, StackType::Foundation(4), &[]), Err(MoveRejection::FoundationOutOfRange(4)));

    let pile = vec![up(Suit::Spade, Rank::Ace)];
    assert!(is_move_valid(&up(Suit::Spade, Rank::Two), StackType::Foundation(1), &pile));
}

#[test]
fn test_rejection_messages_are_readable() {
    let msg = MoveRejection::CannotStack {
        card: up(Suit::Heart, Rank::Two),
        target: Some(up(Suit::Club, Rank::Three)),
    }
    .to_string();
    assert_eq!(msg, "2♥ cannot be stacked on 3♣");
    assert_eq!(MoveRejection::NoRedealsLeft.to_string(), "no redeals remaining");
}
