// 候補手の中から1つを選択するbot
mod fickle;
mod newbie;

use std::fmt;

use anyhow::{anyhow, bail, ensure};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::*;
use crate::util::misc::{vec_count, vec_to_string, Res};
use crate::util::variant::*;
use crate::{debug, info};

pub use newbie::Evaluator;

#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub args: Vec<Arg>,
}

// Actor trait
pub trait Actor: Send {
    // 局開始時の初期化処理
    fn init(&mut self, _seat: Seat) {}

    // 可能なアクションの選択
    // 候補が空の場合はNoneを返却
    fn select_action(&mut self, stg: &Stage, acts: &[Action]) -> Option<Action>;

    // Actorの詳細表示用
    fn get_config(&self) -> &Config;
}

impl fmt::Debug for dyn Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = self.get_config();
        let arg_str = conf
            .args
            .iter()
            .map(|a| format!("{}={}", a.name, a.value))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}({})", conf.name, arg_str)
    }
}

trait ActorBuilder {
    fn get_default_config(&self) -> Config;
    fn create(&self, config: Config) -> Box<dyn Actor>;
}

// "Newbie(42)" のような文字列からActorを生成
// 空の引数はデフォルト値のまま
pub fn create_actor(exp: &str) -> Res<Box<dyn Actor>> {
    let builders: Vec<Box<dyn ActorBuilder>> = vec![
        Box::new(fickle::FickleBuilder {}),
        Box::new(newbie::NewbieBuilder {}),
    ];

    let name: &str;
    let args: Vec<&str>;
    let paren_left = exp.find('(');
    let paren_right = exp.rfind(')');
    match (paren_left, paren_right) {
        (Some(l), Some(r)) => {
            ensure!(l < r, "invalid paren: {}", exp);
            args = exp[l + 1..r].split(',').map(|a| a.trim()).collect();
            name = &exp[..l];
        }
        (None, None) => {
            args = vec![];
            name = exp;
        }
        _ => bail!("invalid paren: {}", exp),
    }

    for b in &builders {
        let mut conf = b.get_default_config();
        if name != conf.name {
            continue;
        }

        ensure!(
            args.len() <= conf.args.len(),
            "expected {} arguments for {}. but {} arguments are provided.",
            conf.args.len(),
            name,
            args.len(),
        );

        for (i, &a) in args.iter().enumerate() {
            if !a.is_empty() {
                let arg = &mut conf.args[i];
                arg.value = arg
                    .value
                    .parse_as(a)
                    .map_err(|e| anyhow!("{}: {}={}", e, arg.name, a))?;
            }
        }

        return Ok(b.create(conf));
    }

    bail!("unknown actor name: {}", name)
}

// 最高評価の候補からランダムに1つ選択
fn choose_best<'a, R: rand::Rng>(
    rng: &mut R,
    acts: &'a [Action],
    mut evaluate: impl FnMut(&Action) -> i32,
) -> Option<&'a Action> {
    let mut best = vec![];
    let mut best_score = i32::MIN;
    for act in acts {
        let score = evaluate(act);
        if score > best_score {
            best.clear();
            best_score = score;
        }
        if score == best_score {
            best.push(act);
        }
    }
    best.choose(rng).copied()
}

fn seeded_rng(config: &Config) -> StdRng {
    StdRng::seed_from_u64(config.args[0].value.as_int() as u64)
}

#[test]
fn test_create_actor() {
    let a = create_actor("Newbie").unwrap();
    assert_eq!(format!("{:?}", a), "Newbie(seed=0)");
    let a = create_actor("Fickle(7)").unwrap();
    assert_eq!(format!("{:?}", a), "Fickle(seed=7)");
    let a = create_actor("Newbie()").unwrap();
    assert_eq!(format!("{:?}", a), "Newbie(seed=0)");

    assert!(create_actor("Unknown").is_err());
    assert!(create_actor("Newbie(1,2)").is_err());
    assert!(create_actor("Fickle(x)").is_err());
    assert!(create_actor("Fickle)1(").is_err());
    assert!(create_actor("Fickle(1").is_err());
}

#[test]
fn test_choose_best() {
    let acts = vec![
        Action::discard(Tile(TM, 1)),
        Action::discard(Tile(TM, 2)),
        Action::discard(Tile(TM, 3)),
    ];
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..20 {
        let a = choose_best(&mut rng, &acts, |a| if a.tiles[0].1 == 1 { 0 } else { 1 });
        assert!(a == Some(&acts[1]) || a == Some(&acts[2]));
    }
    assert_eq!(choose_best(&mut rng, &[], |_| 0), None);
}
