pub mod window;

pub use window::{CalculatorWindow, EditField, LabelField, WindowError};
