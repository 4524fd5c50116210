// `log` backend for the browser: records go to the developer console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

pub fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::Error => ConsoleMethod::Error,
        Level::Warn => ConsoleMethod::Warn,
        Level::Info => ConsoleMethod::Info,
        Level::Debug | Level::Trace => ConsoleMethod::Debug,
    }
}

pub fn format_record(record: &Record) -> String {
    format!("[{}] {}", record.target(), record.args())
}

struct WebLogger;

static LOGGER: WebLogger = WebLogger;

impl Log for WebLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format_record(record));
        match console_method(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&message),
            ConsoleMethod::Warn => web_sys::console::warn_1(&message),
            ConsoleMethod::Info => web_sys::console::info_1(&message),
            ConsoleMethod::Debug => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

// Safe to call more than once: only the first call installs the logger.
pub fn init_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}


#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn levels_map_to_console_methods() {
        assert_eq!(console_method(Level::Error), ConsoleMethod::Error);
        assert_eq!(console_method(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::Info), ConsoleMethod::Info);
        assert_eq!(console_method(Level::Debug), ConsoleMethod::Debug);
        assert_eq!(console_method(Level::Trace), ConsoleMethod::Debug);
    }

    #[wasm_bindgen_test]
    fn record_includes_target() {
        let message = format_record(
            &Record::builder()
                .args(format_args!("Skipping game state update"))
                .target("tianji_board::client")
                .build(),
        );
        assert_eq!(message, "[tianji_board::client] Skipping game state update");
    }
}
