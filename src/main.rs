#![warn(rust_2018_idioms)]

use mahjong_distance::app;
use mahjong_distance::util::log;
use mahjong_distance::{error, error_exit};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error_exit!("mode not specified");
    }

    // ログレベルは全モード共通のオプション
    let mut args2 = vec![];
    for a in &args[2..] {
        match a.as_str() {
            "-v" => log::set_level(log::LEVEL_DEBUG),
            "-q" => log::set_level(log::LEVEL_ERROR),
            _ => args2.push(a.clone()),
        }
    }

    let res = match args[1].as_str() {
        "D" => {
            // Distance (和了までの距離計算モード)
            app::CalculatorApp::new(args2).run()
        }
        "A" => {
            // Advisor (局面から打牌を選択するモード)
            app::AdvisorApp::new(args2).run()
        }
        m => {
            error_exit!("unknown mode: {}", m);
        }
    };

    if let Err(e) = res {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
