use super::*;

pub struct FickleBuilder;

impl ActorBuilder for FickleBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Fickle".to_string(),
            args: vec![Arg::int("seed", 0)],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Fickle::from_config(config))
    }
}

// 候補の中からランダムに選択するbot
pub struct Fickle {
    config: Config,
    rng: StdRng,
    seat: Seat,
}

impl Fickle {
    pub fn from_config(config: Config) -> Self {
        Self {
            rng: seeded_rng(&config),
            config,
            seat: NO_SEAT,
        }
    }
}

impl Actor for Fickle {
    fn init(&mut self, seat: Seat) {
        self.seat = seat;
    }

    fn select_action(&mut self, _stg: &Stage, acts: &[Action]) -> Option<Action> {
        info!("Entering select_action(seat={}, {})", self.seat, vec_to_string(acts));
        let outcome = acts.choose(&mut self.rng).cloned();
        info!("Exiting select_action with {:?}", outcome);
        outcome
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

#[test]
fn test_fickle() {
    let stg = Stage::default();
    let acts = vec![Action::nop(), Action::pon(vec![Tile(TZ, DW); 2])];

    let mut a = create_actor("Fickle(5)").unwrap();
    a.init(1);
    for _ in 0..10 {
        let act = a.select_action(&stg, &acts).unwrap();
        assert!(acts.contains(&act));
    }
    assert_eq!(a.select_action(&stg, &[]), None);

    // 同じseedなら同じ選択
    let mut a1 = create_actor("Fickle(9)").unwrap();
    let mut a2 = create_actor("Fickle(9)").unwrap();
    for _ in 0..10 {
        assert_eq!(a1.select_action(&stg, &acts), a2.select_action(&stg, &acts));
    }
}
