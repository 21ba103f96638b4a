use thiserror::Error;

use crate::config::LayoutError;

/// Failures that stop the application before or while it runs
///
/// Arithmetic never fails; invalid operands surface as `NaN`/`Infinity`
/// in the result field instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid window layout: {0}")]
    Layout(#[from] LayoutError),
    #[cfg(windows)]
    #[error("Window error: {0}")]
    Window(#[from] crate::ui::WindowError),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
    #[error("No native window surface is available on this platform")]
    UnsupportedPlatform,
}
