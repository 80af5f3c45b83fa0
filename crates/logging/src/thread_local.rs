//! crates/logging/src/thread_local.rs
//! Thread-local storage for verbosity configuration and event collection.

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use std::cell::RefCell;
use std::fmt;

thread_local! {
    static VERBOSITY: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = RefCell::new(Vec::new());
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Info-level diagnostic event.
    Info {
        /// The info flag category.
        flag: InfoFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
    /// Debug-level diagnostic event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the rendered message without its category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Debug { message, .. } => message,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info { message, .. } => f.write_str(message),
            Self::Debug { flag, message, .. } => write!(f, "[{}] {}", flag.as_str(), message),
        }
    }
}

/// Initialize verbosity configuration for the current thread.
pub fn init(config: VerbosityConfig) {
    VERBOSITY.with(|v| {
        *v.borrow_mut() = config;
    });
}

/// Check if the info flag is at or above the specified level.
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().info.get(flag) >= level)
}

/// Check if the debug flag is at or above the specified level.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().debug.get(flag) >= level)
}

/// Emit an info diagnostic event.
pub fn emit_info(flag: InfoFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Info {
            flag,
            level,
            message,
        });
    });
}

/// Emit a debug diagnostic event.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Apply an info flag token to the current configuration.
pub fn apply_info_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_info_flag(token))
}

/// Apply a debug flag token to the current configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_debug_flag(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_check() {
        let mut config = VerbosityConfig::default();
        config.info.roots = 2;
        config.debug.walk = 3;

        init(config);

        assert!(info_gte(InfoFlag::Roots, 1));
        assert!(info_gte(InfoFlag::Roots, 2));
        assert!(!info_gte(InfoFlag::Roots, 3));

        assert!(debug_gte(DebugFlag::Walk, 1));
        assert!(debug_gte(DebugFlag::Walk, 3));
        assert!(!debug_gte(DebugFlag::Walk, 4));
    }

    #[test]
    fn test_emit_and_drain() {
        init(VerbosityConfig::default());
        let _ = drain_events();

        emit_info(InfoFlag::Roots, 1, "two roots".to_string());
        emit_debug(DebugFlag::Archive, 2, "central directory at 120".to_string());

        let events = drain_events();
        assert_eq!(
            events,
            vec![
                DiagnosticEvent::Info {
                    flag: InfoFlag::Roots,
                    level: 1,
                    message: "two roots".to_string(),
                },
                DiagnosticEvent::Debug {
                    flag: DebugFlag::Archive,
                    level: 2,
                    message: "central directory at 120".to_string(),
                },
            ]
        );
        assert!(drain_events().is_empty());
    }

    #[test]
    fn test_display_prefixes_debug_category() {
        let info = DiagnosticEvent::Info {
            flag: InfoFlag::Stats,
            level: 1,
            message: "3 resources".to_string(),
        };
        let debug = DiagnosticEvent::Debug {
            flag: DebugFlag::Dup,
            level: 1,
            message: "a.txt already listed".to_string(),
        };

        assert_eq!(info.to_string(), "3 resources");
        assert_eq!(debug.to_string(), "[dup] a.txt already listed");
        assert_eq!(debug.message(), "a.txt already listed");
    }

    #[test]
    fn test_apply_flag_updates_current_thread() {
        init(VerbosityConfig::default());
        apply_debug_flag("resolve2").unwrap();
        assert!(debug_gte(DebugFlag::Resolve, 2));
        assert!(apply_info_flag("bogus").is_err());
    }
}
