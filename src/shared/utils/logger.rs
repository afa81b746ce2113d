use log::{debug, error, info, trace, warn};
use std::sync::Once;
use std::time::{Duration, Instant};

static INIT: Once = Once::new();

/// Connection checkouts slower than this are reported
pub const SLOW_ACQUIRE: Duration = Duration::from_millis(100);

/// Install the global logger. Safe to call more than once.
///
/// `RUST_LOG` overrides the per-module defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("homework_teachers_lib", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tower_http", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_millis()
            .format_module_path(false)
            .init();

        info!("Logger ready");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Log lines with a fixed shape for the events this service cares about
pub struct LogContext;

impl LogContext {
    /// A finished store read
    pub fn db_operation(operation: &str, table: &str, elapsed: Duration) {
        debug!("DB: {} on {} took {}ms", operation, table, elapsed.as_millis());
    }

    /// A roster search, before (`results = None`) or after it ran
    pub fn search_operation(scope: &str, filters: &str, results: Option<usize>) {
        match results {
            Some(count) => info!("Search: {} [{}] returned {} teachers", scope, filters, count),
            None => debug!("Search: starting {} [{}]", scope, filters),
        }
    }

    /// Candidate counts around one refinement stage
    pub fn refinement_stage(stage: &str, before: usize, after: usize) {
        trace!("Refinement {}: {} -> {}", stage, before, after);
    }

    pub fn slow_operation(operation: &str, elapsed: Duration) {
        warn!("Slow: {} took {}ms", operation, elapsed.as_millis());
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Times an operation and logs its duration when finished
pub struct TimedOperation {
    start: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish_with_info(self, info: &str) -> Duration {
        let elapsed = self.elapsed();
        info!("{} ({}) took {}ms", self.operation, info, elapsed.as_millis());
        elapsed
    }
}
