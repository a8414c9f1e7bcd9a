use std::sync::atomic::{AtomicUsize, Ordering};

// ログの出力レベル 数値が大きいほど詳細
pub const LEVEL_ERROR: usize = 0;
pub const LEVEL_INFO: usize = 1;
pub const LEVEL_DEBUG: usize = 2;

static LEVEL: AtomicUsize = AtomicUsize::new(LEVEL_INFO);

pub fn set_level(level: usize) {
    LEVEL.store(level, Ordering::Relaxed);
}

#[inline]
pub fn enabled(level: usize) -> bool {
    level <= LEVEL.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_ERROR) {
            eprintln!(
                "[ERROR]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_INFO) {
            eprintln!(
                "[INFO]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_DEBUG) {
            eprintln!(
                "[DEBUG]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        $crate::error!($($arg)*);
        std::process::exit(1);
    }};
}
