//! The four binary arithmetic operations
//!
//! Every operation shares one contract: two `f64` operands in, one `f64`
//! out, no state and no validation. Invalid operands and zero divisors
//! produce the usual IEEE-754 sentinels (`NaN`, `±inf`) instead of errors.

use std::fmt;

/// Signature shared by every operation
pub type BinaryOp = fn(f64, f64) -> f64;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// True division; a zero divisor yields `±inf` or `NaN`
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Identifies one of the four trigger roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in binding order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Position of this operation in `ALL`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the function bound to this operation
    pub const fn function(self) -> BinaryOp {
        match self {
            Operation::Add => add,
            Operation::Subtract => subtract,
            Operation::Multiply => multiply,
            Operation::Divide => divide,
        }
    }

    /// Fixed role identifier of the trigger control
    pub fn role(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Label shown on the trigger button
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [0.0, 1.0, -1.0, 2.0, 7.0, -13.0, 42.0, 1000.0, -99999.0];

    #[test]
    fn arithmetic_matches_operators() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!((Operation::Add.function())(a, b), a + b);
                assert_eq!((Operation::Subtract.function())(a, b), a - b);
                assert_eq!((Operation::Multiply.function())(a, b), a * b);
            }
        }
    }

    #[test]
    fn divide_is_not_truncating() {
        assert_eq!(divide(7.0, 2.0), 3.5);
        assert_eq!(divide(-7.0, 2.0), -3.5);
        assert_eq!(divide(1.0, 3.0), 1.0 / 3.0);
    }

    #[test]
    fn divide_by_zero_yields_sentinels() {
        assert_eq!(divide(5.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn nan_operands_propagate() {
        for op in Operation::ALL {
            let function = op.function();
            assert!(function(f64::NAN, 3.0).is_nan(), "{op} left NaN");
            assert!(function(3.0, f64::NAN).is_nan(), "{op} right NaN");
        }
    }

    #[test]
    fn operand_order_is_left_then_right() {
        assert_eq!((Operation::Subtract.function())(10.0, 4.0), 6.0);
        assert_eq!((Operation::Divide.function())(10.0, 4.0), 2.5);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, op) in Operation::ALL.into_iter().enumerate() {
            assert_eq!(op.index(), position);
        }
    }

    #[test]
    fn symbols_are_distinct() {
        let symbols: Vec<_> = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
    }
}
