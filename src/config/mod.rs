//! User-facing configuration
//!
//! The calculator has no persisted settings; the only configurable surface
//! is the geometry of the native window, kept here so it can be validated
//! and tested without a display.

pub mod layout;

pub use layout::{LayoutError, Side, WindowLayout};
