use crate::model::*;

// 牌種ごとの枚数 探索中は一時的に負になることがある
pub type TileVector = [i32; KIND];

// 手牌の枚数ベクトル 赤5は通常の5として数える
pub fn build_hand_vector(tiles: &[Tile]) -> TileVector {
    let mut v = [0; KIND];
    for t in tiles {
        if t.is_valid() {
            v[t.to_kind()] += 1;
        }
    }
    v
}

// 公開情報から見た各牌種の残り枚数
// 4枚から全員の副露牌と,鳴かれていない捨て牌を引く
// 鳴かれた捨て牌は鳴いた側の副露で数えるのでここでは引かない
pub fn build_remainder_vector(stg: &Stage) -> TileVector {
    let mut v = [TILE as i32; KIND];
    for pl in &stg.players {
        for m in &pl.melds {
            for t in &m.tiles {
                v[t.to_kind()] -= 1;
            }
        }
        for d in &pl.discards {
            if !d.is_claimed() {
                v[d.tile.to_kind()] -= 1;
            }
        }
    }

    // 整合性のない入力でも負の値は返さない
    for c in v.iter_mut() {
        *c = (*c).max(0);
    }
    v
}

#[cfg(test)]
fn discard(t: Tile, meld: Option<Seat>) -> Discard {
    Discard {
        tile: t,
        drawn: false,
        meld,
    }
}

#[test]
fn test_hand_vector() {
    let tiles = crate::util::common::tiles_from_string("m1550p5z77").unwrap();
    let v = build_hand_vector(&tiles);
    assert_eq!(v[Tile(TM, 1).to_kind()], 1);
    assert_eq!(v[Tile(TM, 5).to_kind()], 3);
    assert_eq!(v[Tile(TP, 5).to_kind()], 1);
    assert_eq!(v[Tile(TZ, DR).to_kind()], 2);
    assert_eq!(v.iter().sum::<i32>(), 7);
}

#[test]
fn test_remainder_vector() {
    let mut stg = Stage::default();
    // seat1がseat0の捨て牌z5をポン
    stg.players[0].discards = vec![
        discard(Tile(TM, 1), None),
        discard(Tile(TZ, DW), Some(1)),
        discard(Tile(TS, 0), None),
    ];
    stg.players[1].melds = vec![Meld {
        meld_type: MeldType::Pon,
        tiles: vec![Tile(TZ, DW); 3],
        froms: vec![1, 1, 0],
    }];
    stg.players[2].discards = vec![discard(Tile(TM, 1), None)];

    let v = build_remainder_vector(&stg);
    assert_eq!(v[Tile(TM, 1).to_kind()], 2);
    assert_eq!(v[Tile(TZ, DW).to_kind()], 1);
    assert_eq!(v[Tile(TS, 5).to_kind()], 3);
    assert_eq!(v[Tile(TP, 9).to_kind()], 4);
    assert_eq!(v.iter().sum::<i32>(), 4 * KIND as i32 - 6);
}

#[test]
fn test_remainder_vector_never_negative() {
    let mut stg = Stage::default();
    for s in 0..SEAT {
        stg.players[s].discards = vec![discard(Tile(TP, 3), None); 2];
    }
    let v = build_remainder_vector(&stg);
    assert_eq!(v[Tile(TP, 3).to_kind()], 0);
    assert!(v.iter().all(|&c| c >= 0));
}
