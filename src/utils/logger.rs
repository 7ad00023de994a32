use chrono::Local;
use std::fmt::Arguments;

/// Leveled operator logger. Battle-facing text goes through the battle
/// log; these lines are runtime diagnostics only.
pub struct Logger;

impl Logger {
    pub fn info(args: Arguments) {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        println!("[INFO ] [{stamp}] {args}");
    }

    pub fn debug(args: Arguments) {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        println!("[DEBUG] [{stamp}] {args}");
    }

    pub fn warn(args: Arguments) {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        eprintln!("[WARN ] [{stamp}] {args}");
    }

    pub fn error(args: Arguments) {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        eprintln!("[ERROR] [{stamp}] {args}");
    }
}

#[macro_export]
macro_rules! logger {
    (INFO, $($arg:tt)*) => {
        Logger::info(format_args!($($arg)*))
    };
    (DEBUG, $($arg:tt)*) => {
        Logger::debug(format_args!($($arg)*))
    };
    (WARN, $($arg:tt)*) => {
        Logger::warn(format_args!($($arg)*))
    };
    (ERROR, $($arg:tt)*) => {
        Logger::error(format_args!($($arg)*))
    };
}
