use super::*;
use crate::error;
use crate::hand::*;

pub struct NewbieBuilder;

impl ActorBuilder for NewbieBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Newbie".to_string(),
            args: vec![Arg::int("seed", 0)],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Newbie::from_config(config))
    }
}

// 和了までの距離を元に候補手を評価するbot
// 同点の候補からはランダムに選択
pub struct Newbie {
    config: Config,
    rng: StdRng,
    seat: Seat,
}

impl Newbie {
    pub fn from_config(config: Config) -> Self {
        Self {
            rng: seeded_rng(&config),
            config,
            seat: NO_SEAT,
        }
    }
}

impl Actor for Newbie {
    fn init(&mut self, seat: Seat) {
        self.seat = seat;
    }

    fn select_action(&mut self, stg: &Stage, acts: &[Action]) -> Option<Action> {
        info!("Entering select_action(seat={}, {})", self.seat, vec_to_string(acts));
        let mut eval = match Evaluator::new(stg, self.seat) {
            Ok(eval) => eval,
            Err(e) => {
                error!("{}", e);
                return None;
            }
        };
        let outcome = choose_best(&mut self.rng, acts, |a| eval.evaluate(a)).cloned();
        info!("Exiting select_action with {:?}", outcome);
        outcome
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

// 数牌の数字ごとの評価値 (端に近いほど手放しやすい)
const NUMBER_TILE_SCORE: [i32; TNUM] = [0, 5, 7, 9, 9, 9, 9, 9, 7, 5];

// 候補手の評価 値が大きいほど良い手
pub struct Evaluator {
    required_melds: usize,
    hand: TileVector,
    rest: TileVector,
    doras: Vec<Tile>,  // ドラ (表示牌ではない)
    valued: Vec<Tile>, // 役牌 (三元牌,自風,場風)
}

impl Evaluator {
    pub fn new(stg: &Stage, seat: Seat) -> Res<Self> {
        let pl = stg
            .players
            .get(seat)
            .ok_or_else(|| anyhow!("invalid seat: {}", seat))?;
        let mut valued = vec![Tile(TZ, DW), Tile(TZ, DG), Tile(TZ, DR)];
        valued.push(Tile(TZ, stg.get_seat_wind(seat)));
        valued.push(Tile(TZ, stg.get_prevalent_wind()));

        Ok(Self {
            required_melds: pl.required_melds(),
            hand: build_hand_vector(&pl.hand),
            rest: build_remainder_vector(stg),
            doras: stg.get_dora_tiles(),
            valued,
        })
    }

    #[inline]
    fn get_distance(&self) -> Distance {
        get_distance(self.required_melds, &self.hand, &self.rest)
    }

    pub fn evaluate(&mut self, act: &Action) -> i32 {
        match act.action_type {
            ActionType::Tsumo | ActionType::Ron => 50000,
            ActionType::Riichi => 40000,
            ActionType::Kyushukyuhai => 30000,
            ActionType::Nop => 1,
            ActionType::Pon if !act.tiles.is_empty() => self.evaluate_pon(act.tiles[0]),
            ActionType::Chi | ActionType::Minkan | ActionType::Ankan | ActionType::Kakan => 0,
            ActionType::Discard if !act.tiles.is_empty() => {
                self.evaluate_discard(act.tiles[0])
            }
            _ => {
                error!("unknown action: {}", act);
                -1
            }
        }
    }

    // 役牌の刻子になるポンのみ評価
    fn evaluate_pon(&mut self, t: Tile) -> i32 {
        if !self.is_valued(t) {
            return 0;
        }

        let k = t.to_kind();
        let dist0 = self.get_distance();
        self.hand[k] -= 2;
        let dist1 = get_distance(self.required_melds.saturating_sub(1), &self.hand, &self.rest);
        self.hand[k] += 2;
        if dist0 < dist1 {
            return 0;
        }

        if self.doras.contains(&t.to_normal()) {
            return 20000;
        }
        if self.rest[k] == 2 {
            5000
        } else {
            0
        }
    }

    fn evaluate_discard(&mut self, t: Tile) -> i32 {
        let k = t.to_kind();
        self.hand[k] -= 1;

        let dist = self.get_distance();
        let dora = self.count_dora(t);
        let mut score = 10000 - (dist * 1000 + (1 + dora * 10) * self.tile_score(t));

        let mut detail = format!("{}: distance={}, dora={}", t, dist, dora);
        for (k2, n) in effective_draws(self.required_melds, &self.hand, &self.rest) {
            score += n * 10;
            detail += &format!(", {}({})", Tile::from_kind(k2), n);
        }
        debug!("{}, score={}", detail, score);

        self.hand[k] += 1;
        score
    }

    fn count_dora(&self, t: Tile) -> i32 {
        let n = vec_count(&self.doras, &t.to_normal()) as i32;
        if t.is_red5() {
            n + 1
        } else {
            n
        }
    }

    fn tile_score(&self, t: Tile) -> i32 {
        if t.is_suit() {
            NUMBER_TILE_SCORE[t.to_normal().1]
        } else if self.is_valued(t) {
            4
        } else {
            2
        }
    }

    #[inline]
    fn is_valued(&self, t: Tile) -> bool {
        self.valued.contains(&t)
    }
}

#[cfg(test)]
fn test_stage(hand: &str) -> Stage {
    let mut stg = Stage::default();
    for s in 0..SEAT {
        stg.players[s].seat = s;
    }
    stg.players[0].hand = crate::util::common::tiles_from_string(hand).unwrap();
    stg
}

#[cfg(test)]
fn discard_candidates(stg: &Stage) -> Vec<Action> {
    let mut tiles = stg.players[0].hand.clone();
    tiles.sort();
    tiles.dedup();
    tiles.into_iter().map(Action::discard).collect()
}

#[test]
fn test_win_first() {
    let stg = test_stage("m123456789p111z11");
    let mut acts = discard_candidates(&stg);
    acts.push(Action::riichi(Tile(TZ, WE)));
    acts.push(Action::tsumo());

    let mut a = create_actor("Newbie").unwrap();
    a.init(0);
    assert_eq!(a.select_action(&stg, &acts), Some(Action::tsumo()));
}

#[test]
fn test_discard_to_tenpai() {
    let stg = test_stage("m123456789p11z11s5");
    let acts = discard_candidates(&stg);

    let mut a = create_actor("Newbie(3)").unwrap();
    a.init(0);
    assert_eq!(a.select_action(&stg, &acts), Some(Action::discard(Tile(TS, 5))));
}

#[test]
fn test_discard_score() {
    let stg = test_stage("m123456789p11z11s5");
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    let hand0 = eval.hand;

    // 残り 距離1, s5=9点, 待ち p1(2枚) z1(2枚)
    assert_eq!(eval.evaluate(&Action::discard(Tile(TS, 5))), 10000 - 1009 + 40);
    assert_eq!(eval.hand, hand0);
}

#[test]
fn test_discard_dora() {
    let mut stg = test_stage("m123456789p11z11s5");
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    let plain = eval.evaluate(&Action::discard(Tile(TS, 5)));

    // ドラ表示牌s4 => s5がドラ
    stg.doras = vec![Tile(TS, 4)];
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::discard(Tile(TS, 5))), plain - 10 * 9);
    assert_eq!(eval.evaluate(&Action::discard(Tile(TS, 0))), plain - 20 * 9);
}

#[test]
fn test_pon() {
    // seat0, 東場 => 役牌は z1, z5, z6, z7
    let mut stg = test_stage("m123456p234s19z55");
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::pon(vec![Tile(TZ, WW); 2])), 0);
    assert_eq!(eval.evaluate(&Action::pon(vec![Tile(TZ, DW); 2])), 0);

    // z5が2枚見えていて残りが自分の2枚のみ
    stg.players[1].discards.push(Discard {
        tile: Tile(TZ, DW),
        drawn: false,
        meld: None,
    });
    stg.players[2].discards.push(Discard {
        tile: Tile(TZ, DW),
        drawn: false,
        meld: None,
    });
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::pon(vec![Tile(TZ, DW); 2])), 5000);

    // ドラ表示牌z7 => z5がドラ
    stg.doras = vec![Tile(TZ, DR)];
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::pon(vec![Tile(TZ, DW); 2])), 20000);

    let mut a = create_actor("Newbie").unwrap();
    a.init(0);
    let acts = vec![Action::nop(), Action::pon(vec![Tile(TZ, DW); 2])];
    assert_eq!(a.select_action(&stg, &acts), Some(acts[1].clone()));
}

#[test]
fn test_pon_reduces_required_melds() {
    // ポン後は必要な面子が1つ減る
    // 面子数を据え置くと距離2 -> 3で悪化扱い,減らすと距離1で改善
    let mut stg = test_stage("m123456p234s19z55");
    let eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.get_distance(), 2);

    let mut after = eval.hand;
    after[Tile(TZ, DW).to_kind()] -= 2;
    assert_eq!(get_distance(4, &after, &eval.rest), 3);
    assert_eq!(get_distance(3, &after, &eval.rest), 1);

    for s in 1..3 {
        stg.players[s].discards.push(Discard {
            tile: Tile(TZ, DW),
            drawn: false,
            meld: None,
        });
    }
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::pon(vec![Tile(TZ, DW); 2])), 5000);
}

#[test]
fn test_select_without_init() {
    let stg = test_stage("m123456789p11z11s5");
    let acts = discard_candidates(&stg);

    let mut a = create_actor("Newbie").unwrap();
    assert_eq!(a.select_action(&stg, &acts), None);
    assert!(Evaluator::new(&stg, NO_SEAT).is_err());

    a.init(0);
    assert!(a.select_action(&stg, &acts).is_some());
}

#[test]
fn test_pon_worsens_hand() {
    // z5の対子を崩すと七対子から遠ざかる
    let stg = test_stage("m1133p2244s66z55z7");
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::pon(vec![Tile(TZ, DW); 2])), 0);
}

#[test]
fn test_other_actions() {
    let stg = test_stage("m123456789p11z11");
    let mut eval = Evaluator::new(&stg, 0).unwrap();
    assert_eq!(eval.evaluate(&Action::nop()), 1);
    assert_eq!(eval.evaluate(&Action::chi(vec![Tile(TM, 1), Tile(TM, 2)])), 0);
    assert_eq!(eval.evaluate(&Action::kyushukyuhai()), 30000);
    assert_eq!(eval.evaluate(&Action::ron()), 50000);
    assert_eq!(eval.evaluate(&Action::new(ActionType::Discard, vec![])), -1);
}
