use std::fs::File;
use std::io::{self, BufRead};

use anyhow::{bail, Context};

use crate::error;
use crate::hand::*;
use crate::model::*;
use crate::util::common::*;
use crate::util::misc::*;

// 手牌の和了までの距離を計算するモード
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
        }
    }

    pub fn run(&mut self) -> Res {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s)?,
                _ => {
                    if s.starts_with('-') {
                        bail!("unknown option: {}", s);
                    }
                    if !exp.is_empty() {
                        bail!("multiple expression is not allowed");
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            bail!("invalid input");
        }

        if !exp.is_empty() {
            self.process_expression(&exp)?;
        } else {
            self.run_from_file(&file_path)?;
        }
        Ok(())
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path).with_context(|| format!("failed to open '{}'", file_path))?;
        let lines = io::BufReader::new(file).lines();
        let mut n_error = 0;
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
                n_error += 1;
            }
            println!();
        }
        if n_error != 0 {
            bail!("{} expression(s) failed", n_error);
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.detail);
        calculator.parse(exp)?;
        if calculator.run() == Verify::Error {
            bail!("verify failed: {}", exp);
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

// 入力形式: 手牌,副露,副露.../見えている牌/期待する距離
// 例: m123456789p11z1s5,z555/p1z1/2
#[derive(Debug)]
struct Calculator {
    detail: bool,
    hand: Vec<Tile>,
    melds: Vec<Meld>,
    visibles: Vec<Tile>,
    verify: Option<Distance>,
}

impl Calculator {
    fn new(detail: bool) -> Self {
        Self {
            detail,
            hand: vec![],
            melds: vec![],
            visibles: vec![],
            verify: None,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        if exps.len() > 3 {
            bail!("too many '/' in expression: {}", input);
        }

        self.parse_hand_meld(exps[0])?;
        if let Some(exp) = exps.get(1) {
            self.visibles = tiles_from_string(exp)?;
        }
        if let Some(exp) = exps.get(2) {
            self.verify = Some(
                exp.parse::<Distance>()
                    .with_context(|| format!("invalid distance: '{}'", exp))?,
            );
        }

        if self.hand.len() + self.melds.len() * 3 > 14 {
            bail!("too many tiles: {}", input);
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn parse_hand_meld(&mut self, input: &str) -> Res {
        for (i, exp) in input.split(',').enumerate() {
            if i == 0 {
                self.hand = tiles_from_string(exp)?;
            } else {
                self.melds.push(meld_from_string(exp)?);
            }
        }
        if self.melds.len() > 4 {
            bail!("too many melds: {}", input);
        }
        Ok(())
    }

    // 副露と見えている牌は公開情報として残り枚数から除外
    fn create_stage(&self) -> Stage {
        let mut stg = Stage::default();
        stg.players[0].hand = self.hand.clone();
        stg.players[0].melds = self.melds.clone();
        stg.players[1].discards = self
            .visibles
            .iter()
            .map(|&tile| Discard {
                tile,
                drawn: false,
                meld: None,
            })
            .collect();
        stg
    }

    fn run(&self) -> Verify {
        let stg = self.create_stage();
        let required_melds = stg.players[0].required_melds();
        let hand = build_hand_vector(&self.hand);
        let rest = build_remainder_vector(&stg);
        if self.detail {
            println!("hand: {:?}", hand);
            println!("rest: {:?}", rest);
        }

        let dist = get_distance(required_melds, &hand, &rest);
        let standard = standard_distance(required_melds, &hand, &rest);
        let seven_pairs = if required_melds == 4 {
            seven_pairs_distance(&hand, &rest).to_string()
        } else {
            "-".to_string()
        };
        println!(
            "distance: {}, standard: {}, seven pairs: {}",
            dist, standard, seven_pairs
        );

        let draws: Vec<String> = effective_draws(required_melds, &hand, &rest)
            .iter()
            .map(|&(k, n)| format!("{}({})", Tile::from_kind(k), n))
            .collect();
        println!("effective draws: {}", vec_to_string(&draws));

        let verify = match self.verify {
            Some(d) if d == dist => Verify::Ok,
            Some(_) => Verify::Error,
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        verify
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ mahjong D EXPRESSION [-d]
    $ mahjong D -f FILE [-d]
Expression
    HAND[,MELD...][/VISIBLE_TILES][/EXPECTED_DISTANCE]
Options
    -d: print debug info
    -f: read expresisons from file instead of a commandline expression
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/distance_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false);
            calculator.parse(&e).unwrap();
            assert_eq!(Verify::Ok, calculator.run(), "{}", exp);
        }
    }
}

#[test]
fn test_calculator_parse_error() {
    assert!(Calculator::new(false).parse("m123x").is_err());
    assert!(Calculator::new(false).parse("m123,z12").is_err());
    assert!(Calculator::new(false).parse("m123/z1/a").is_err());
    assert!(Calculator::new(false).parse("m123/z1/1/2").is_err());
    assert!(Calculator::new(false).parse("m111222333444555").is_err());
    assert!(Calculator::new(false).parse("m111222333444,z555,p555").is_err());

    // 14枚ちょうどは受け付ける
    assert!(Calculator::new(false).parse("m11122233344455").is_ok());
    assert!(Calculator::new(false).parse("m11122233344,z555").is_ok());
}
