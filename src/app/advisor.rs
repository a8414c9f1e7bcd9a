use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};

use crate::actor::create_actor;
use crate::error;
use crate::model::*;
use crate::util::misc::*;

// 局面と候補手をJSONで受け取り,botが選択した手を出力するモード
#[derive(Debug)]
pub struct AdvisorApp {
    args: Vec<String>,
    actor_exp: String,
    file_path: String,
    detail: bool,
}

// 入力ファイルの形式
#[derive(Debug, Serialize, Deserialize)]
pub struct Situation {
    pub stage: Stage,
    pub seat: Seat,
    pub actions: Vec<Action>,
}

impl Situation {
    pub fn from_json(data: &str) -> Res<Self> {
        let s: Self = serde_json::from_str(data).context("invalid situation")?;
        ensure!(s.seat < SEAT, "invalid seat: {}", s.seat);
        Ok(s)
    }
}

impl AdvisorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            actor_exp: "Newbie".to_string(),
            file_path: "".to_string(),
            detail: false,
        }
    }

    pub fn run(&mut self) -> Res {
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-a" => self.actor_exp = next_value(&mut it, s)?,
                "-f" => self.file_path = next_value(&mut it, s)?,
                "-d" => self.detail = true,
                opt => {
                    print_usage();
                    bail!("unknown option: {}", opt);
                }
            }
        }

        if self.file_path.is_empty() {
            print_usage();
            bail!("situation file not specified");
        }

        let situation = Situation::from_json(&read_to_string(&self.file_path)?)?;
        if self.detail {
            println!("{}", situation.stage);
        }

        let act = advise(&self.actor_exp, &situation)?;
        println!("{}", serde_json::to_string(&act)?);
        Ok(())
    }
}

pub fn advise(actor_exp: &str, situation: &Situation) -> Res<Action> {
    let mut actor = create_actor(actor_exp)?;
    actor.init(situation.seat);
    match actor.select_action(&situation.stage, &situation.actions) {
        Some(act) => Ok(act),
        None => bail!("no action selected by {:?}", actor),
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ mahjong A -f FILE [-a ACTOR] [-d]
Options
    -a: actor expression (Newbie(seed), Fickle(seed)) default: Newbie
    -d: print stage
    -f: situation json file {{stage, seat, actions}}
"
    );
}

#[test]
fn test_advise() {
    let data = r#"{
        "stage": {
            "round": 0,
            "dealer": 0,
            "doras": ["z1"],
            "players": [
                {"seat": 0, "hand": ["m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9", "p1", "p1", "z1", "z1", "s5"]},
                {"seat": 1, "discards": [{"tile": "p1"}, {"tile": "z5", "meld": 2}]},
                {"seat": 2, "melds": [{"meld_type": "Pon", "tiles": ["z5", "z5", "z5"]}]},
                {"seat": 3}
            ]
        },
        "seat": 0,
        "actions": [
            {"action_type": "Discard", "tiles": ["p1"]},
            {"action_type": "Discard", "tiles": ["s5"]},
            {"action_type": "Discard", "tiles": ["z1"]}
        ]
    }"#;
    let situation = Situation::from_json(data).unwrap();
    assert_eq!(situation.stage.players[2].melds[0].tiles.len(), 3);
    assert!(situation.stage.players[1].discards[1].is_claimed());

    let act = advise("Newbie", &situation).unwrap();
    assert_eq!(act, Action::discard(Tile(TS, 5)));

    let act = advise("Fickle(1)", &situation).unwrap();
    assert!(situation.actions.contains(&act));
}

#[test]
fn test_invalid_situation() {
    assert!(Situation::from_json("{}").is_err());
    assert!(Situation::from_json(r#"{"stage": {}, "seat": 4, "actions": []}"#).is_err());
    assert!(Situation::from_json(r#"{"stage": {"doras": ["z9"]}, "seat": 0, "actions": []}"#).is_err());

    let situation = Situation::from_json(r#"{"stage": {}, "seat": 0, "actions": []}"#).unwrap();
    assert!(advise("Newbie", &situation).is_err());
}
