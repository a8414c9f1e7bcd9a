use anyhow::ensure;

use super::meld::{meld_shapes, MeldShape};
use super::vector::TileVector;
use crate::model::*;
use crate::util::misc::Res;

// 和了形までに必要な牌の入れ替え枚数 (向聴数+1)
pub type Distance = i32;

// 探索上の到達不能を表す値 実際の距離は20未満なので十分大きい
pub const DISTANCE_INF: Distance = 99;

#[inline]
fn add_distance(a: Distance, b: Distance) -> Distance {
    (a + b).min(DISTANCE_INF)
}

// required_melds: 和了までに必要な残りの面子数 (0~4)
// hand, restは呼び出し元の値を変更しない
// 国士無双は考慮しない
pub fn get_distance(required_melds: usize, hand: &TileVector, rest: &TileVector) -> Distance {
    let limit = if required_melds == 4 {
        seven_pairs_distance(hand, rest)
    } else {
        DISTANCE_INF
    };
    search_standard(required_melds, hand, rest, limit)
}

// get_distanceの入力検証付き版
pub fn try_get_distance(
    required_melds: usize,
    hand: &TileVector,
    rest: &TileVector,
) -> Res<Distance> {
    ensure!(
        required_melds <= 4,
        "required melds out of range: {}",
        required_melds
    );
    ensure!(hand.iter().all(|&c| c >= 0), "negative count in hand vector");
    ensure!(rest.iter().all(|&c| c >= 0), "negative count in rest vector");
    Ok(get_distance(required_melds, hand, rest))
}

// 通常形 (面子 * required_melds + 雀頭)
pub fn standard_distance(required_melds: usize, hand: &TileVector, rest: &TileVector) -> Distance {
    search_standard(required_melds, hand, rest, DISTANCE_INF)
}

// 七対子
// 2枚以上残っている牌種について対子までの不足枚数を求め,少ない順に7種を合計
// 合計が3以上の場合は対子の組み替えが必要になるので2倍する
pub fn seven_pairs_distance(hand: &TileVector, rest: &TileVector) -> Distance {
    let mut costs = [0; KIND];
    for k in 0..KIND {
        costs[k] = if rest[k] >= 2 {
            (2 - hand[k]).max(0)
        } else {
            DISTANCE_INF
        };
    }
    costs.sort_unstable();

    let sum: Distance = costs[..7].iter().sum();
    if sum <= 2 {
        sum
    } else {
        (sum * 2).min(DISTANCE_INF)
    }
}

// ツモると距離が縮まる牌種と,その牌種の手牌以外の残り枚数のリスト
pub fn effective_draws(
    required_melds: usize,
    hand: &TileVector,
    rest: &TileVector,
) -> Vec<(Kind, i32)> {
    let dist = get_distance(required_melds, hand, rest);
    let mut hand = *hand;
    let mut res = vec![];
    for k in 0..KIND {
        if rest[k] <= hand[k] {
            continue;
        }
        hand[k] += 1;
        let is_effective = get_distance(required_melds, &hand, rest) < dist;
        hand[k] -= 1;
        if is_effective {
            res.push((k, rest[k] - hand[k]));
        }
    }
    res
}

fn search_standard(
    required_melds: usize,
    hand: &TileVector,
    rest: &TileVector,
    limit: Distance,
) -> Distance {
    let mut search = Search {
        shapes: meld_shapes(),
        hand: *hand,
        rest: *rest,
    };
    let dist = search.run(required_melds, 0, 0, limit);
    debug_assert!(search.hand == *hand && search.rest == *rest);
    dist
}

// 分枝限定法による通常形の探索
// hand, restは面子を仮に取り除くたびに減算し,戻る前に必ず加算して元に戻す
struct Search<'a> {
    shapes: &'a [MeldShape],
    hand: TileVector,
    rest: TileVector,
}

impl Search<'_> {
    // cursor以降の面子形のみを試すことで,同じ面子の組み合わせを順列として重複して探索しない
    fn run(&mut self, n_melds: usize, cursor: usize, accum: Distance, mut limit: Distance) -> Distance {
        if n_melds == 0 {
            // 雀頭
            for k in 0..KIND {
                if self.rest[k] < 2 {
                    continue;
                }
                let cost = (2 - self.hand[k]).clamp(0, 2);
                limit = limit.min(add_distance(accum, cost));
            }
            return limit;
        }

        for mi in cursor..self.shapes.len() {
            let kinds = self.shapes[mi].kinds;
            let mut new_accum = accum;
            for &k in &kinds {
                self.rest[k] -= 1;
                if self.rest[k] < 0 {
                    new_accum = DISTANCE_INF; // 残っていない牌を使う面子
                }
                self.hand[k] -= 1;
                if self.hand[k] < 0 {
                    new_accum = add_distance(new_accum, 1); // 持っていない牌
                }
            }

            if new_accum < limit {
                limit = self.run(n_melds - 1, mi, new_accum, limit);
            }

            for &k in &kinds {
                self.rest[k] += 1;
                self.hand[k] += 1;
            }
        }

        limit
    }
}

#[cfg(test)]
fn vectors(exp: &str) -> (TileVector, TileVector) {
    let tiles = crate::util::common::tiles_from_string(exp).unwrap();
    (super::vector::build_hand_vector(&tiles), [TILE as i32; KIND])
}

#[cfg(test)]
fn kind(exp: &str) -> Kind {
    Tile::from_symbol(exp).unwrap().to_kind()
}

#[test]
fn test_complete_hand() {
    let (hand, rest) = vectors("m123456789p111z11");
    assert_eq!(get_distance(4, &hand, &rest), 0);
    assert_eq!(standard_distance(4, &hand, &rest), 0);
}

#[test]
fn test_tenpai() {
    let (hand, rest) = vectors("m123456789p111z1");
    assert_eq!(get_distance(4, &hand, &rest), 1);
}

#[test]
fn test_iishanten() {
    let (hand, rest) = vectors("m123456p1234s99z1");
    assert_eq!(get_distance(4, &hand, &rest), 2);
}

#[test]
fn test_required_melds() {
    let (hand, rest) = vectors("m12345");
    assert_eq!(get_distance(1, &hand, &rest), 1);

    let (hand, rest) = vectors("z1");
    assert_eq!(get_distance(0, &hand, &rest), 1);
    let (hand, rest) = vectors("z11");
    assert_eq!(get_distance(0, &hand, &rest), 0);
    let (hand, rest) = vectors("");
    assert_eq!(get_distance(0, &hand, &rest), 2);
}

#[test]
fn test_exhausted_tile() {
    let (hand, mut rest) = vectors("m12z11");
    assert_eq!(get_distance(1, &hand, &rest), 1);

    // m3が全て見えている場合はm123を作れない
    rest[kind("m3")] = 0;
    assert_eq!(get_distance(1, &hand, &rest), 2);
}

#[test]
fn test_exhausted_pair() {
    // z1が3枚見えている場合は雀頭にできない
    let (hand, mut rest) = vectors("m123z1");
    assert_eq!(get_distance(1, &hand, &rest), 1);
    rest[kind("z1")] = 1;
    assert_eq!(get_distance(1, &hand, &rest), 2);
}

#[test]
fn test_seven_pairs() {
    let (hand, rest) = vectors("m113355p2244s66z7");
    assert_eq!(seven_pairs_distance(&hand, &rest), 1);
    assert_eq!(get_distance(4, &hand, &rest), 1);

    let (hand, rest) = vectors("m113355p2244s66z77");
    assert_eq!(seven_pairs_distance(&hand, &rest), 0);
    assert_eq!(get_distance(4, &hand, &rest), 0);

    // 七対子は副露がある場合は考慮しない
    assert!(get_distance(3, &hand, &rest) > 0);
}

#[test]
fn test_seven_pairs_doubled() {
    let (hand, rest) = vectors("m113355p2244s1z17");
    assert_eq!(seven_pairs_distance(&hand, &rest), 2);

    let (hand, rest) = vectors("m1133p2244s159z17");
    assert_eq!(seven_pairs_distance(&hand, &rest), 6);
}

#[test]
fn test_seven_pairs_unobtainable() {
    let (hand, mut rest) = vectors("m113355p2244s66z7");
    rest[kind("z7")] = 1;
    assert_eq!(seven_pairs_distance(&hand, &rest), 2);

    let rest = [1; KIND];
    assert_eq!(seven_pairs_distance(&hand, &rest), DISTANCE_INF);
}

#[test]
fn test_unreachable() {
    let hand = [0; KIND];
    let rest = [1; KIND];
    assert_eq!(get_distance(4, &hand, &rest), DISTANCE_INF);
    assert_eq!(get_distance(0, &hand, &rest), DISTANCE_INF);
}

#[test]
fn test_vectors_unchanged() {
    let (hand, mut rest) = vectors("m123456p1234s99z1");
    rest[kind("p5")] = 0;
    let (hand0, rest0) = (hand, rest);
    for n in 0..=4 {
        get_distance(n, &hand, &rest);
        assert_eq!(hand, hand0);
        assert_eq!(rest, rest0);
    }
}

#[test]
fn test_try_get_distance() {
    let (mut hand, rest) = vectors("m123456789p111z1");
    assert_eq!(try_get_distance(4, &hand, &rest).unwrap(), 1);
    assert!(try_get_distance(5, &hand, &rest).is_err());
    hand[0] = -1;
    assert!(try_get_distance(4, &hand, &rest).is_err());
}

#[test]
fn test_effective_draws() {
    let (hand, rest) = vectors("m123456789p111z1");
    assert_eq!(effective_draws(4, &hand, &rest), vec![(kind("z1"), 3)]);

    // 両面待ち
    let (hand, rest) = vectors("m123456789p23z11");
    let draws = effective_draws(4, &hand, &rest);
    assert_eq!(draws, vec![(kind("p1"), 4), (kind("p4"), 4)]);
}
