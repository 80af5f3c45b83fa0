//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity flag system.
//!
//! [`ListerLayer`] is a tracing-subscriber layer that maps each event's target
//! onto an info or debug flag and records the event only when the current
//! thread's [`VerbosityConfig`] enables that flag at the event's level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//!
//! logging::trace_roots!("2 search roots declare 'payloads'");
//! for event in logging::drain_events() {
//!     eprintln!("{event}");
//! }
//! ```

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::targets;
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that bridges tracing events to the verbosity flags.
#[derive(Debug, Default)]
pub struct ListerLayer {
    _private: (),
}

impl ListerLayer {
    /// Create a new layer. Filtering consults the thread-local configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        match target {
            targets::NAME => Some(InfoFlag::Name),
            targets::ROOTS => Some(InfoFlag::Roots),
            targets::SKIP => Some(InfoFlag::Skip),
            targets::STATS => Some(InfoFlag::Stats),
            _ => None,
        }
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        match target {
            targets::ARCHIVE => Some(DebugFlag::Archive),
            targets::DISCOVER => Some(DebugFlag::Discover),
            targets::DUP => Some(DebugFlag::Dup),
            targets::RESOLVE => Some(DebugFlag::Resolve),
            targets::WALK => Some(DebugFlag::Walk),
            _ => None,
        }
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO | Level::DEBUG => 1,
            Level::TRACE => 2,
        }
    }
}

impl<S> Layer<S> for ListerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            if debug_gte(debug_flag, verbosity_level) {
                if let Some(message) = MessageVisitor::extract(event) {
                    emit_debug(debug_flag, verbosity_level, message);
                }
            }
            return;
        }

        if let Some(info_flag) = Self::target_to_info_flag(target) {
            if info_gte(info_flag, verbosity_level) {
                if let Some(message) = MessageVisitor::extract(event) {
                    emit_info(info_flag, verbosity_level, message);
                }
            }
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl MessageVisitor {
    fn extract(event: &tracing::Event<'_>) -> Option<String> {
        let mut visitor = Self::default();
        event.record(&mut visitor);
        visitor.message
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Initialize tracing with the given verbosity configuration.
///
/// The configuration is installed for the calling thread. The global
/// subscriber is installed on first use only; later calls still update the
/// thread-local configuration and return `false`.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    tracing_subscriber::registry()
        .with(ListerLayer::new())
        .try_init()
        .is_ok()
}

/// Initialize tracing with a custom filter layered in front of the bridge.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let filter = EnvFilter::from_default_env();
/// init_tracing_with_filter(VerbosityConfig::from_verbose_level(2), filter);
/// ```
pub fn init_tracing_with_filter<F>(config: VerbosityConfig, filter: F) -> bool
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(ListerLayer::new())
        .try_init()
        .is_ok()
}
