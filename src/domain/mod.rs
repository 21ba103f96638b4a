//! Domain logic and core data structures
//!
//! Pure arithmetic, number parsing and rendering, and geometry. Nothing in
//! here knows about Win32 or any other host surface.

pub mod core;
pub mod number;
pub mod operation;

pub use number::{format_number, parse_int};
pub use operation::{BinaryOp, Operation};
