use super::*;
use crate::util::misc::vec_to_string;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub seat: Seat,             // 座席番号
    pub hand: Vec<Tile>,        // 手牌(ツモ牌を含む) 他家の手牌は空
    pub melds: Vec<Meld>,       // 鳴き一覧
    pub discards: Vec<Discard>, // 捨て牌一覧
}

impl Player {
    // 和了までに必要な残りの面子数
    #[inline]
    pub fn required_melds(&self) -> usize {
        4usize.saturating_sub(self.melds.len())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hand = self.hand.clone();
        hand.sort();
        writeln!(f, "seat: {}", self.seat)?;
        writeln!(f, "hand: {}", vec_to_string(&hand))?;
        writeln!(f, "melds: {}", vec_to_string(&self.melds))?;
        write!(f, "discards: {}", vec_to_string(&self.discards))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discard {
    pub tile: Tile,
    #[serde(default)]
    pub drawn: bool, // ツモ切りフラグ
    #[serde(default)]
    pub meld: Option<Seat>, // 鳴きが入った場合に鳴いたプレイヤーの座席をセット
}

impl Discard {
    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.meld.is_some()
    }
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_claimed() {
            write!(f, "{}*", self.tile)
        } else {
            write!(f, "{}", self.tile)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Chi,
    Pon,
    Minkan,
    Kakan,
    Ankan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub froms: Vec<Seat>,
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let z = self.tiles.iter().zip(self.froms.iter());
        let s: Vec<String> = z.map(|x| format!("{}({})", x.0, x.1)).collect();
        if s.is_empty() {
            write!(f, "{}", vec_to_string(&self.tiles))
        } else {
            write!(f, "{}", s.join("|"))
        }
    }
}
