use mahjong_distance::hand::*;
use mahjong_distance::model::*;
use proptest::prelude::*;

// 枝刈りなしで全ての面子形の組み合わせを列挙する比較用の実装
fn brute_force_standard(required_melds: usize, hand: &TileVector, rest: &TileVector) -> Distance {
    fn visit(
        n_melds: usize,
        cursor: usize,
        used: &mut TileVector,
        hand: &TileVector,
        rest: &TileVector,
    ) -> Distance {
        if n_melds == 0 {
            if (0..KIND).any(|k| used[k] > rest[k]) {
                return DISTANCE_INF;
            }
            let lack: i32 = (0..KIND).map(|k| (used[k] - hand[k]).max(0)).sum();
            let mut best = DISTANCE_INF;
            for k in 0..KIND {
                if rest[k] - used[k] >= 2 {
                    let cost = (2 - (hand[k] - used[k])).clamp(0, 2);
                    best = best.min((lack + cost).min(DISTANCE_INF));
                }
            }
            return best;
        }

        let shapes = meld_shapes();
        let mut best = DISTANCE_INF;
        for mi in cursor..shapes.len() {
            for &k in &shapes[mi].kinds {
                used[k] += 1;
            }
            best = best.min(visit(n_melds - 1, mi, used, hand, rest));
            for &k in &shapes[mi].kinds {
                used[k] -= 1;
            }
        }
        best
    }

    visit(required_melds, 0, &mut [0; KIND], hand, rest)
}

fn brute_force(required_melds: usize, hand: &TileVector, rest: &TileVector) -> Distance {
    let d = brute_force_standard(required_melds, hand, rest);
    if required_melds == 4 {
        d.min(seven_pairs_distance(hand, rest))
    } else {
        d
    }
}

// 残り枚数を超えない範囲で牌種のリストから手牌を作る
fn build_hand(kinds: &[usize], rest: &TileVector) -> TileVector {
    let mut hand = [0; KIND];
    for &k in kinds {
        if hand[k] < rest[k] {
            hand[k] += 1;
        }
    }
    hand
}

fn rest_strategy() -> impl Strategy<Value = TileVector> {
    prop::collection::vec(0..=4i32, KIND).prop_map(|v| {
        let mut rest = [0; KIND];
        rest.copy_from_slice(&v);
        rest
    })
}

fn situation_strategy(max_melds: usize) -> impl Strategy<Value = (usize, TileVector, TileVector)> {
    (0..=max_melds, rest_strategy()).prop_flat_map(|(n, rest)| {
        prop::collection::vec(0..KIND, 0..=(n * 3 + 2))
            .prop_map(move |kinds| (n, build_hand(&kinds, &rest), rest))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_vectors_unchanged((n, hand, rest) in situation_strategy(4)) {
        let (hand0, rest0) = (hand, rest);
        let _ = get_distance(n, &hand, &rest);
        let _ = effective_draws(n, &hand, &rest);
        prop_assert_eq!(hand, hand0);
        prop_assert_eq!(rest, rest0);
    }

    #[test]
    fn test_distance_range((n, hand, rest) in situation_strategy(4)) {
        let d = get_distance(n, &hand, &rest);
        prop_assert!((0..=DISTANCE_INF).contains(&d));
        prop_assert!(d <= standard_distance(n, &hand, &rest));
        if n == 4 {
            prop_assert!(d <= seven_pairs_distance(&hand, &rest));
        }
    }

    #[test]
    fn test_more_tiles_never_farther(
        (n, hand, rest) in situation_strategy(4),
        extra in prop::collection::vec(0..KIND, 1..4),
    ) {
        let mut more = hand;
        for k in extra {
            if more[k] < rest[k] {
                more[k] += 1;
            }
        }
        prop_assert!(get_distance(n, &more, &rest) <= get_distance(n, &hand, &rest));
    }

    #[test]
    fn test_effective_draws((n, hand, rest) in situation_strategy(3)) {
        let d = get_distance(n, &hand, &rest);
        for (k, count) in effective_draws(n, &hand, &rest) {
            prop_assert!(count > 0);
            prop_assert_eq!(count, rest[k] - hand[k]);
            let mut drawn = hand;
            drawn[k] += 1;
            prop_assert!(get_distance(n, &drawn, &rest) < d);
        }
    }

    #[test]
    fn test_six_pairs_and_single(kinds in prop::sample::subsequence((0..KIND).collect::<Vec<_>>(), 7)) {
        let rest = [TILE as i32; KIND];
        let mut hand = [0; KIND];
        for (i, &k) in kinds.iter().enumerate() {
            hand[k] = if i == 0 { 1 } else { 2 };
        }
        prop_assert_eq!(seven_pairs_distance(&hand, &rest), 1);
        prop_assert!(get_distance(4, &hand, &rest) <= 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_same_as_brute_force((n, hand, rest) in situation_strategy(3)) {
        prop_assert_eq!(get_distance(n, &hand, &rest), brute_force(n, &hand, &rest));
    }
}

#[test]
fn test_same_as_brute_force_four_melds() {
    let rest = [TILE as i32; KIND];
    for exp in ["m123456p1234s99z1", "m1133p2244s66z55z7", "m19p19s19z1234567"] {
        let tiles = mahjong_distance::util::common::tiles_from_string(exp).unwrap();
        let hand = build_hand_vector(&tiles);
        assert_eq!(get_distance(4, &hand, &rest), brute_force(4, &hand, &rest), "{}", exp);
    }
}
