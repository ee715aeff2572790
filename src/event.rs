//! Diagnostic log and table event callbacks.
//!
//! The library never installs a logger. Hosts register callbacks here and
//! receive debug output plus structured notifications (focus moves, fresh
//! column allocations) as they happen.

use serde::Serialize;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Structured notification emitted by the table core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TableEvent {
    /// Focus moved from one row to another.
    Focus { from: usize, to: usize },
    /// A width vector was computed for a viewport width.
    Allocated { width: usize, widths: Vec<usize> },
}

impl TableEvent {
    /// Short event name, used as the first callback argument.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Focus { .. } => "focus",
            Self::Allocated { .. } => "allocated",
        }
    }

    /// JSON payload for the event.
    #[must_use]
    pub fn data(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback. Receives `(name, json_data)`.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    let mut guard = event_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    let mut guard = event_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a table event to the registered callback.
pub fn emit_event(event: &TableEvent) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(event.name(), &event.data());
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a log line.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payloads() {
        let focus = TableEvent::Focus { from: 1, to: 3 };
        assert_eq!(focus.name(), "focus");
        assert_eq!(focus.data(), r#"{"event":"focus","from":1,"to":3}"#);

        let alloc = TableEvent::Allocated {
            width: 40,
            widths: vec![6, 1, 7],
        };
        assert_eq!(alloc.name(), "allocated");
        assert_eq!(
            alloc.data(),
            "{\"event\":\"allocated\",\"width\":40,\"widths\":[6,1,7]}"
        );
    }

    #[test]
    fn test_emit_without_callback_is_silent() {
        emit_log(LogLevel::Debug, "nobody listening");
        emit_event(&TableEvent::Focus { from: 0, to: 0 });
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
