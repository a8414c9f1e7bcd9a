// 汎用的な関数やマクロ
pub mod common;
pub mod log;
pub mod misc;
pub mod variant;
