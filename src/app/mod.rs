// mainから直接呼び出すアプリケーションの動作モード(D, A)のモジュール

mod advisor;
mod calculator;

pub use advisor::{advise, AdvisorApp, Situation};
pub use calculator::CalculatorApp;
