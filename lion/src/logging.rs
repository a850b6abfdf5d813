// Log setup shared by the lion binaries

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_DIRECTIVE: &str = "lion=warn";

/// Directive forced on by `--verbose`.
pub const VERBOSE_DIRECTIVE: &str = "lion=debug";

/// Builds the log filter from a `RUST_LOG` value.
///
/// `rust_log` is used as given; without it the filter is [`DEFAULT_DIRECTIVE`].
/// `verbose` appends [`VERBOSE_DIRECTIVE`], replacing any other `lion` level.
pub fn env_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let base = match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    };
    let directives = if verbose {
        format!("{},{}", base, VERBOSE_DIRECTIVE)
    } else {
        base
    };
    EnvFilter::new(directives)
}

/// Installs a stderr subscriber filtered by `RUST_LOG` and `--verbose`.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .init();
}
