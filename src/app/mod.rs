//! Application orchestration layer
//!
//! Wires the pure operations to injected input and output fields and
//! exposes the activation entry point hosts call when a trigger fires.

pub mod controller;
pub mod fields;

pub use controller::{BINDINGS, Binding, Calculator, CalculatorEvent};
pub use fields::{InputField, OutputField, TextField};
