use serde::{de, ser};

use super::*;
use crate::util::common::{tile_number_from_char, tile_type_from_char};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)

impl Tile {
    pub fn from_symbol(s: &str) -> Res<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            bail!("invalid tile symbol: '{}'", s);
        }
        let t = Self(tile_type_from_char(chars[0])?, tile_number_from_char(chars[1])?);
        ensure!(t.is_valid(), "invalid tile symbol: '{}'", s);
        Ok(t)
    }

    // 牌種のIndexから通常牌を生成 (赤5は生成されない)
    #[inline]
    pub fn from_kind(k: Kind) -> Self {
        debug_assert!(k < KIND);
        Self(k / 9, k % 9 + 1)
    }

    // 牌種のIndex 赤5は通常の5と同じIndexになる
    // 萬子:0~8, 筒子:9~17, 索子:18~26, 字牌:27~33
    #[inline]
    pub fn to_kind(self) -> Kind {
        let t = self.to_normal();
        debug_assert!(t.is_valid());
        t.0 * 9 + t.1 - 1
    }

    // 赤5の場合,通常の5を返却. それ以外の場合はコピーをそのまま返却.
    #[inline]
    pub fn to_normal(self) -> Self {
        if self.1 == 0 {
            Self(self.0, 5)
        } else {
            self
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        match self.0 {
            TM | TP | TS => self.1 <= 9,
            TZ => WE <= self.1 && self.1 <= DR,
            _ => false,
        }
    }

    // 赤5
    #[inline]
    pub fn is_red5(&self) -> bool {
        self.0 != TZ && self.1 == 0
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    // 字牌
    #[inline]
    pub fn is_hornor(&self) -> bool {
        self.0 == TZ
    }

    // ドラ表示牌からドラを返却
    pub fn dora_from_indicator(self) -> Self {
        let t = self.to_normal();
        let ni = if t.is_hornor() {
            match t.1 {
                WN => WE,
                DR => DW,
                i => i + 1,
            }
        } else {
            match t.1 {
                9 => 1,
                i => i + 1,
            }
        };
        Self(t.0, ni)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.0], self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // 赤5は4.5として比較
        let key = |t: &Tile| (t.0, if t.1 == 0 { 9 } else { t.1 * 2 });
        key(self).cmp(&key(other))
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

#[test]
fn test_tile_kind() {
    assert_eq!(Tile(TM, 1).to_kind(), 0);
    assert_eq!(Tile(TP, 0).to_kind(), Tile(TP, 5).to_kind());
    assert_eq!(Tile(TZ, DR).to_kind(), KIND - 1);
    for k in 0..KIND {
        assert_eq!(Tile::from_kind(k).to_kind(), k);
    }
}

#[test]
fn test_tile_symbol() {
    assert_eq!(Tile::from_symbol("s0").unwrap(), Tile(TS, 0));
    assert!(Tile::from_symbol("z0").is_err());
    assert!(Tile::from_symbol("z8").is_err());
    assert!(Tile::from_symbol("x1").is_err());

    let t: Tile = serde_json::from_str("\"p7\"").unwrap();
    assert_eq!(t, Tile(TP, 7));
    assert_eq!(serde_json::to_string(&Tile(TM, 0)).unwrap(), "\"m0\"");
    assert!(serde_json::from_str::<Tile>("\"m\"").is_err());
}

#[test]
fn test_dora_from_indicator() {
    assert_eq!(Tile(TM, 9).dora_from_indicator(), Tile(TM, 1));
    assert_eq!(Tile(TS, 0).dora_from_indicator(), Tile(TS, 6));
    assert_eq!(Tile(TZ, WN).dora_from_indicator(), Tile(TZ, WE));
    assert_eq!(Tile(TZ, DR).dora_from_indicator(), Tile(TZ, DW));
    assert_eq!(Tile(TZ, DW).dora_from_indicator(), Tile(TZ, DG));
}
