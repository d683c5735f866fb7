//! Browser-backed implementations of the domain service traits.

use std::sync::atomic::{AtomicU8, Ordering};

use js_sys::{Date, Math};
use wasm_bindgen::JsValue;

use crate::domain::{
    environment::{Clock, ClockReading, RandomSource},
    logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider},
};
use crate::time_utils::{format_clock_time, format_time_label};

const FALLBACK_LOCALE: &str = "en-US";

/// Console logger implementation for WASM environment
pub struct ConsoleLogger {
    min_level: AtomicU8,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level: AtomicU8::new(min_level as u8) }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn min_level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => {
                format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message)
            }
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level() {
            return;
        }
        let formatted = Self::format_log_entry(&entry);
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => gloo::console::debug!(formatted),
            LogLevel::Info => gloo::console::info!(formatted),
            LogLevel::Warn => gloo::console::warn!(formatted),
            LogLevel::Error => gloo::console::error!(formatted),
        }
    }

    fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }
}

/// Log timestamps from `Date.now()`, printed as local `HH:MM:SS.mmm`.
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{}.{:03}",
            format_clock_time(date.get_hours(), date.get_minutes(), date.get_seconds()),
            date.get_milliseconds()
        )
    }
}

/// Local wall clock; labels use the browser's preferred locale.
#[derive(Debug, Clone)]
pub struct BrowserClock {
    locale: String,
}

impl Default for BrowserClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserClock {
    pub fn new() -> Self {
        let locale = web_sys::window()
            .and_then(|window| window.navigator().language())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        Self::with_locale(locale)
    }

    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }
}

impl Clock for BrowserClock {
    fn now(&self) -> ClockReading {
        let date = Date::new_0();
        ClockReading {
            hour: date.get_hours(),
            label: format_time_label(&date, &self.locale),
        }
    }
}

/// `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&self) -> f64 {
        Math::random()
    }
}
