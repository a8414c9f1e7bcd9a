use anyhow::{bail, ensure};

use super::misc::{vec_count, Res};
use crate::model::*;

pub fn tile_type_from_char(c: char) -> Res<Type> {
    Ok(match c {
        'm' => TM,
        'p' => TP,
        's' => TS,
        'z' => TZ,
        _ => bail!("invalid tile type: '{}'", c),
    })
}

pub fn tile_number_from_char(c: char) -> Res<Tnum> {
    match c.to_digit(10) {
        Some(n) => Ok(n as Tnum),
        None => bail!("invalid tile number: '{}'", c),
    }
}

// "m123p055z77" 形式の文字列を牌のリストに変換
pub fn tiles_from_string(exp: &str) -> Res<Vec<Tile>> {
    let mut tiles = vec![];
    let mut ti = None;
    for c in exp.chars() {
        match c {
            'm' | 'p' | 's' | 'z' => ti = Some(tile_type_from_char(c)?),
            '0'..='9' => {
                let ti = match ti {
                    Some(ti) => ti,
                    None => bail!("tile number befor tile type"),
                };
                let t = Tile(ti, tile_number_from_char(c)?);
                ensure!(t.is_valid(), "invalid tile: {}", t);
                tiles.push(t);
            }
            _ => bail!("invalid char: '{}'", c),
        }
    }
    Ok(tiles)
}

// "s789", "z555", "m5550" 形式の文字列を副露に変換
pub fn meld_from_string(exp: &str) -> Res<Meld> {
    let tiles = tiles_from_string(exp)?;
    ensure!(!tiles.is_empty(), "empty meld");
    ensure!(
        tiles.iter().all(|t| t.0 == tiles[0].0),
        "invalid meld: '{}'",
        exp
    );

    let mut nis: Vec<Tnum> = tiles.iter().map(|t| t.to_normal().1).collect();
    nis.sort();
    let diffs: Vec<usize> = nis.windows(2).map(|w| w[1] - w[0]).collect();

    let meld_type = if diffs.len() == 2 && vec_count(&diffs, &1) == 2 && tiles[0].is_suit() {
        MeldType::Chi
    } else if diffs.len() == 2 && vec_count(&diffs, &0) == 2 {
        MeldType::Pon
    } else if diffs.len() == 3 && vec_count(&diffs, &0) == 3 {
        MeldType::Minkan
    } else {
        bail!("invalid meld: '{}'", exp);
    };

    let froms = vec![0; tiles.len()];
    Ok(Meld {
        meld_type,
        tiles,
        froms,
    })
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("m123p05z77").unwrap();
    assert_eq!(
        tiles,
        vec![
            Tile(TM, 1),
            Tile(TM, 2),
            Tile(TM, 3),
            Tile(TP, 0),
            Tile(TP, 5),
            Tile(TZ, 7),
            Tile(TZ, 7),
        ]
    );
    assert!(tiles_from_string("123").is_err());
    assert!(tiles_from_string("z8").is_err());
    assert!(tiles_from_string("m1x").is_err());
}

#[test]
fn test_meld_from_string() {
    assert_eq!(meld_from_string("s978").unwrap().meld_type, MeldType::Chi);
    assert_eq!(meld_from_string("p505").unwrap().meld_type, MeldType::Pon);
    assert_eq!(meld_from_string("z1111").unwrap().meld_type, MeldType::Minkan);
    assert!(meld_from_string("z123").is_err());
    assert!(meld_from_string("m12p3").is_err());
    assert!(meld_from_string("m124").is_err());
}
