use std::fmt;
use std::sync::LazyLock;

use crate::model::*;

// [面子形カタログ]
// 門前の刻子と順子を牌種のIndex3つで表現したもの
// プロセス内で一度だけ生成され,以降は読み取り専用

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeldShapeType {
    Triplet, // 刻子
    Run,     // 順子
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeldShape {
    pub shape_type: MeldShapeType,
    pub kinds: [Kind; 3],
}

impl MeldShape {
    #[inline]
    fn triplet(k: Kind) -> Self {
        Self {
            shape_type: MeldShapeType::Triplet,
            kinds: [k, k, k],
        }
    }

    #[inline]
    fn run(k: Kind) -> Self {
        Self {
            shape_type: MeldShapeType::Run,
            kinds: [k, k + 1, k + 2],
        }
    }
}

impl fmt::Display for MeldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t0 = Tile::from_kind(self.kinds[0]);
        write!(f, "{}", ['m', 'p', 's', 'z'][t0.0])?;
        for &k in &self.kinds {
            write!(f, "{}", Tile::from_kind(k).1)?;
        }
        Ok(())
    }
}

static MELD_SHAPES: LazyLock<Vec<MeldShape>> = LazyLock::new(build_meld_shapes);

// 刻子34種 + 順子21種
// 探索はこの順序でカーソルを進めるので並びは常に同じである必要がある
#[inline]
pub fn meld_shapes() -> &'static [MeldShape] {
    &MELD_SHAPES
}

fn build_meld_shapes() -> Vec<MeldShape> {
    let mut shapes = vec![];
    for k in 0..KIND {
        shapes.push(MeldShape::triplet(k));
    }
    for ti in 0..TZ {
        for ni in 1..=7 {
            shapes.push(MeldShape::run(Tile(ti, ni).to_kind()));
        }
    }
    shapes
}

#[test]
fn test_meld_shapes() {
    let shapes = meld_shapes();
    assert_eq!(shapes.len(), 55);
    assert_eq!(shapes, &build_meld_shapes()[..]);

    let n_triplet = shapes
        .iter()
        .filter(|s| s.shape_type == MeldShapeType::Triplet)
        .count();
    assert_eq!(n_triplet, KIND);

    for s in shapes {
        let ts: Vec<Tile> = s.kinds.iter().map(|&k| Tile::from_kind(k)).collect();
        assert!(ts.iter().all(|t| t.0 == ts[0].0));
        match s.shape_type {
            MeldShapeType::Triplet => assert!(ts.iter().all(|&t| t == ts[0])),
            MeldShapeType::Run => {
                assert!(ts[0].is_suit());
                assert_eq!(ts[1].1, ts[0].1 + 1);
                assert_eq!(ts[2].1, ts[0].1 + 2);
            }
        }
    }
}

#[test]
fn test_meld_shape_display() {
    let shapes = meld_shapes();
    assert_eq!(shapes[0].to_string(), "m111");
    assert_eq!(shapes[KIND - 1].to_string(), "z777");
    assert_eq!(shapes[KIND].to_string(), "m123");
    assert_eq!(shapes[shapes.len() - 1].to_string(), "s789");
}
