//! Tracing subscriber setup for the binary
//!
//! Library code only emits events; installing the subscriber is left to
//! `main` so embedders keep control of their own output.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Filter used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_FILTER: &str = "basic_calc=info";

/// Installs the global `fmt` subscriber
pub fn init() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn second_init_reports_error() {
        let _ = init();
        assert!(matches!(init(), Err(AppError::Logging(_))));
    }
}
