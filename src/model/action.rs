use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    // 候補となるActionの配列は呼び出し側が用意する
    Nop, // Turn: ツモ切り, Call: 鳴き,ロンのスキップ

    // Turn Actions
    Discard,      // 打牌
    Riichi,       // リーチ
    Ankan,        // 暗槓
    Kakan,        // 加槓
    Tsumo,        // ツモ
    Kyushukyuhai, // 九種九牌

    // Call Actions (配列は鳴きにより手牌から消失する牌のリスト)
    Chi,    // チー
    Pon,    // ポン
    Minkan, // 明槓
    Ron,    // ロン
}

// Vec<Tile>は操作により手牌からなくなる牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action_type: ActionType,
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

impl Action {
    #[inline]
    pub fn new(action_type: ActionType, tiles: Vec<Tile>) -> Self {
        Self { action_type, tiles }
    }

    #[inline]
    pub fn nop() -> Self {
        Self::new(ActionType::Nop, vec![])
    }

    #[inline]
    pub fn discard(t: Tile) -> Self {
        Self::new(ActionType::Discard, vec![t])
    }

    #[inline]
    pub fn riichi(t: Tile) -> Self {
        Self::new(ActionType::Riichi, vec![t])
    }

    #[inline]
    pub fn tsumo() -> Self {
        Self::new(ActionType::Tsumo, vec![])
    }

    #[inline]
    pub fn kyushukyuhai() -> Self {
        Self::new(ActionType::Kyushukyuhai, vec![])
    }

    #[inline]
    pub fn chi(mut v: Vec<Tile>) -> Self {
        assert!(v.len() == 2);
        v.sort();
        Self::new(ActionType::Chi, v)
    }

    #[inline]
    pub fn pon(mut v: Vec<Tile>) -> Self {
        assert!(v.len() == 2);
        v.sort();
        Self::new(ActionType::Pon, v)
    }

    #[inline]
    pub fn ron() -> Self {
        Self::new(ActionType::Ron, vec![])
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.action_type, self.tiles)
    }
}
