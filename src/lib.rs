//! Two-operand arithmetic calculator
//!
//! `domain` holds the pure operations and the text/number conversions,
//! `app` binds them to injected input and output fields, `config` describes
//! the native window geometry and `ui` hosts everything in a Win32 window.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
#[cfg(windows)]
pub mod ui;

pub use app::{Calculator, CalculatorEvent, InputField, OutputField, TextField};
pub use domain::Operation;
pub use error::AppError;
