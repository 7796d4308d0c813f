use crate::args::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Who else is writing to the terminal while logs go to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Console,
    /// The alternate screen is up; anything on stderr lands mid-frame.
    Interactive,
}

impl LogTarget {
    /// Most verbose level that may reach stderr, whatever `RUST_LOG` says.
    pub fn ceiling(self) -> LevelFilter {
        match self {
            LogTarget::Console => LevelFilter::TRACE,
            LogTarget::Interactive => LevelFilter::ERROR,
        }
    }
}

/// `RUST_LOG` directives when present and valid, else `level`.
fn env_filter(rust_log: Option<&str>, level: LogLevel) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.directive()))
}

/// Install the stderr subscriber. `RUST_LOG` wins over `level` when set;
/// the target's ceiling caps both.
pub fn init(level: LogLevel, target: LogTarget) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(rust_log.as_deref(), level);

    let output = fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(target.ceiling());

    // A second init (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_flag_level() {
        let filter = env_filter(Some("debug"), LogLevel::Warn);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_flag_level_used_without_rust_log() {
        assert_eq!(
            env_filter(None, LogLevel::Warn).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            env_filter(Some("  "), LogLevel::Info).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_interactive_ceiling_caps_rust_log() {
        let filter = env_filter(Some("debug"), LogLevel::Error);
        let requested = filter.max_level_hint().unwrap_or(LevelFilter::TRACE);

        assert_eq!(
            requested.min(LogTarget::Interactive.ceiling()),
            LevelFilter::ERROR
        );
        assert_eq!(
            requested.min(LogTarget::Console.ceiling()),
            LevelFilter::DEBUG
        );
    }
}
