use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Browser console sink, stamped with local wall-clock time
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn clock() -> String {
        let now = js_sys::Date::new_0();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds(),
            now.get_milliseconds()
        )
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let line: wasm_bindgen::JsValue = format!("[{}] 🛍️ {}", Self::clock(), entry).into();
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}
