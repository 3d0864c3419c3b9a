//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Logger forwarding records to `console.error`/`warn`/`info`/`debug`.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls only adjust the level.
///
/// Returns true if this call installed the logger.
pub fn init(level: LevelFilter) -> bool {
    let installed = match log::set_logger(&LOGGER) {
        Ok(()) => true,
        // Already installed by an earlier call; keep it and just relevel
        Err(_) => false,
    };
    log::set_max_level(level);
    if installed {
        log::debug!("console logger installed at level {level}");
    }
    installed
}

/// Parse a level name such as "debug" or "WARN".
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_installs_once() {
        // Warn keeps the crate's debug/trace output away from the console,
        // which only exists on wasm.
        assert!(init(LevelFilter::Warn));
        assert!(!init(LevelFilter::Warn));
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
