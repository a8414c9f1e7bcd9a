use super::*;
use crate::util::misc::vec_to_string;

// 局の公開情報 (自家の手牌を含む)
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage {
    pub round: usize,            // 場 (東:0, 南:1, 西:2, 北:3)
    pub dealer: usize,           // 局 (0~3 = 親のseat)
    pub doras: Vec<Tile>,        // ドラ表示牌
    pub players: [Player; SEAT], // 各プレイヤー情報
}

impl Stage {
    #[inline]
    pub fn is_dealer(&self, seat: Seat) -> bool {
        seat == self.dealer
    }

    #[inline]
    pub fn get_prevalent_wind(&self) -> Tnum {
        self.round % SEAT + 1 // WE | WS | WW | WN
    }

    #[inline]
    pub fn get_seat_wind(&self, seat: Seat) -> Tnum {
        (seat + SEAT - self.dealer) % SEAT + 1 // WE | WS | WW | WN
    }

    // ドラ表示牌から実際のドラのリストを返却
    pub fn get_dora_tiles(&self) -> Vec<Tile> {
        self.doras.iter().map(|d| d.dora_from_indicator()).collect()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "round: {}, dealer: {}, doras: {}",
            self.round,
            self.dealer,
            vec_to_string(&self.doras),
        )?;

        let boader = "-".to_string().repeat(80);
        write!(f, "{}", boader)?;
        for p in &self.players {
            writeln!(f)?;
            writeln!(f, "{}", p)?;
            write!(f, "{}", boader)?;
        }
        Ok(())
    }
}

#[test]
fn test_winds() {
    let stg = Stage {
        round: 1,
        dealer: 2,
        ..Default::default()
    };
    assert_eq!(stg.get_prevalent_wind(), WS);
    assert_eq!(stg.get_seat_wind(2), WE);
    assert_eq!(stg.get_seat_wind(3), WS);
    assert_eq!(stg.get_seat_wind(1), WN);
    assert!(stg.is_dealer(2));
}
