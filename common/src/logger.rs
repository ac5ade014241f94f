use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_quiet(quiet: bool) {
    ENABLED.store(!quiet, Ordering::Relaxed);
}

pub fn log(message: &str) {
    if ENABLED.load(Ordering::Relaxed) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}] {}", timestamp, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
