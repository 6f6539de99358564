// src/systems/deal_system.rs

use crate::components::card::Card;
use crate::components::stack::{empty_tableau, flip_top_face_up, Tableau};
use crate::config::{DEAL_GRID_SIZE, DEAL_ROWS, OVERFLOW_COLUMNS, TABLEAU_COLUMNS};
use log::debug;

// === カード配りシステム！ ===
// 最初の配りと、配り直し (redeal) で集めたカードをもう一度並べる役割を担うよ。
// 状態は持たないので、`DealSystem::default()` で作ってそのまま使えばOK！
#[derive(Debug, Default, Clone, Copy)]
pub struct DealSystem;

impl DealSystem {
    /// カードを 7 列の場札に配る関数だよ！🎉
    ///
    /// # 配り方
    /// 1. 1段ずつ、左の列から右の列へ配っていく (7段 × 7列 = 49枚)。
    ///    r 段目で c 列目に置くカードは `c <= r` のときだけ表向き。
    ///    だから 0 列目は全部表、6 列目は一番上の1枚だけ表になる。
    /// 2. 49 枚より多ければ、残り (52枚なら3枚) を 0,1,2 列目に順番に表向きで置く。
    /// 3. 最後に、表向きのカードが1枚もない列があれば一番上をめくる。
    ///    (上の配り方なら起きないはずだけど、配り直しで枚数が減った時も含めて必ず守る)
    ///
    /// 渡されたカードの向きは全部上書きされるよ。
    pub fn deal(&self, cards: Vec<Card>) -> Tableau {
        let total = cards.len();
        let mut tableau = empty_tableau();
        let mut card_iterator = cards.into_iter();

        // --- 1. 7段 × 7列 ---
        'rows: for row in 0..DEAL_ROWS {
            for col in 0..TABLEAU_COLUMNS {
                let Some(mut card) = card_iterator.next() else {
                    break 'rows;
                };
                card.is_face_up = col <= row;
                tableau[col].push(card);
            }
        }

        // --- 2. あまりのカード ---
        for (offset, mut card) in card_iterator.enumerate() {
            card.is_face_up = true;
            tableau[offset % OVERFLOW_COLUMNS].push(card);
        }

        // --- 3. 表向きが1枚もない列を直す ---
        for column in tableau.iter_mut() {
            if !column.is_empty() && !column.iter().any(|card| card.is_face_up) {
                flip_top_face_up(column);
            }
        }

        debug!(
            "🃏 {} 枚を配りました (グリッド {} 枚 + あまり {} 枚)",
            total,
            total.min(DEAL_GRID_SIZE),
            total.saturating_sub(DEAL_GRID_SIZE)
        );
        tableau
    }

    /// 配り直しのために場札のカードを全部集める。
    ///
    /// 右の列 (6) から左の列 (0) へ。各列では一番上から下に向かって、
    /// まず表向きのカードを、そのあと裏向きのカードを拾っていく。
    /// 最後に全体を逆順にしたものが、次に `deal` に渡す並びだよ。
    /// (この順番でリプレイ結果が決まるので、変えちゃダメ！)
    pub fn collect_for_redeal(&self, tableau: &Tableau) -> Vec<Card> {
        let mut collected = Vec::with_capacity(tableau.iter().map(Vec::len).sum());

        for column in tableau.iter().rev() {
            let mut remaining = column.len();

            // 表向きのカードを上から
            while remaining > 0 && column[remaining - 1].is_face_up {
                collected.push(column[remaining - 1].clone());
                remaining -= 1;
            }

            // 残りの裏向きのカードを上から
            while remaining > 0 {
                collected.push(column[remaining - 1].clone());
                remaining -= 1;
            }
        }

        collected.reverse();
        collected
    }

    /// 集めて、並べ直す。
    pub fn redeal(&self, tableau: &Tableau) -> Tableau {
        let cards = self.collect_for_redeal(tableau);
        self.deal(cards)
    }
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::logic::deck::{create_standard_deck, shuffled_deck};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deal_full_deck_layout() {
        let tableau = DealSystem.deal(create_standard_deck());

        // 合計52枚
        assert_eq!(tableau.iter().map(Vec::len).sum::<usize>(), 52);

        // 列ごとの枚数: 7段分 + あまり3枚が 0,1,2 列目へ
        let lengths: Vec<usize> = tableau.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![8, 8, 8, 7, 7, 7, 7]);

        // 表向きの枚数: 列 c は 7 - c 枚 (+ あまりの1枚)
        let face_up: Vec<usize> = tableau
            .iter()
            .map(|column| column.iter().filter(|card| card.is_face_up).count())
            .collect();
        assert_eq!(face_up, vec![8, 7, 6, 4, 3, 2, 1]);

        // 列 6 は一番上だけ表
        assert!(tableau[6][6].is_face_up);
        assert!(tableau[6][..6].iter().all(|card| !card.is_face_up));

        println!("✅ 配りレイアウトテスト、成功！");
    }

    #[test]
    fn test_deal_uses_row_major_order() {
        let deck = create_standard_deck();
        let tableau = DealSystem.deal(deck.clone());

        // 1段目は deck[0..7]、2段目は deck[7..14] ...
        assert_eq!(tableau[0][0].rank, deck[0].rank);
        assert_eq!(tableau[6][0].suit, deck[6].suit);
        assert_eq!(tableau[6][0].rank, deck[6].rank);
        assert_eq!(tableau[0][1].rank, deck[7].rank);
        // あまりの3枚 (deck[49..52]) は 0,1,2 列目の一番上
        assert_eq!(tableau[0][7].rank, deck[49].rank);
        assert_eq!(tableau[2][7].rank, deck[51].rank);
    }

    #[test]
    fn test_every_column_has_a_face_up_card() {
        for seed in 0..20 {
            let tableau = DealSystem.deal(shuffled_deck(&mut StdRng::seed_from_u64(seed)));
            assert_eq!(tableau.iter().map(Vec::len).sum::<usize>(), 52);
            for column in tableau.iter().filter(|c| !c.is_empty()) {
                assert!(column.iter().any(|card| card.is_face_up));
            }
        }
    }

    #[test]
    fn test_short_deal_repairs_face_down_columns() {
        // 10枚だけ: 1段目 7 枚 (0 列目だけ表) + 2段目 3 枚
        let cards: Vec<Card> = create_standard_deck().into_iter().take(10).collect();
        let tableau = DealSystem.deal(cards);

        assert_eq!(tableau.iter().map(Vec::len).sum::<usize>(), 10);
        for column in tableau.iter() {
            assert!(column.last().map_or(true, |card| card.is_face_up), "一番上は表向きのはず");
        }
        // 列 3 は 1 枚だけで、修復でめくられる
        assert_eq!(tableau[3].len(), 1);
        assert!(tableau[3][0].is_face_up);
    }

    #[test]
    fn test_collect_for_redeal_order() {
        let mut tableau = empty_tableau();
        tableau[0] = vec![Card::new(Suit::Heart, Rank::Two), Card::face_up(Suit::Heart, Rank::Three)];
        tableau[6] = vec![Card::face_up(Suit::Club, Rank::Nine), Card::face_up(Suit::Club, Rank::Eight)];

        let collected = DealSystem.collect_for_redeal(&tableau);
        let names: Vec<String> = collected.iter().map(|c| c.to_string()).collect();

        // 集める順: 列6 の上から (8♣, 9♣)、列0 の上から (3♥, 2♥) → 逆順
        assert_eq!(names, vec!["2♥", "3♥", "9♣", "8♣"]);
    }

    #[test]
    fn test_redeal_keeps_every_card() {
        let tableau = DealSystem.deal(shuffled_deck(&mut StdRng::seed_from_u64(99)));
        let redealt = DealSystem.redeal(&tableau);

        let mut before: Vec<String> = tableau.iter().flatten().map(|c| c.to_string()).collect();
        let mut after: Vec<String> = redealt.iter().flatten().map(|c| c.to_string()).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after, "配り直しでカードが増えたり減ったりしちゃダメ！");
    }
}
