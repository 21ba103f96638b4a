//! Calculator controller
//!
//! Owns the two operand fields and the result field, holds the fixed table
//! of trigger bindings and runs one activation per trigger event. There is
//! no state beyond "idle": every activation reads, computes and writes in a
//! single synchronous step.

use tracing::debug;

use crate::app::fields::{InputField, OutputField};
use crate::domain::number::{format_number, parse_int};
use crate::domain::operation::{BinaryOp, Operation};

/// Association between one trigger role and the function it fires
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub operation: Operation,
    pub function: BinaryOp,
}

impl Binding {
    const fn new(operation: Operation) -> Self {
        Self {
            operation,
            function: operation.function(),
        }
    }
}

/// The four bindings, one per trigger, indexed by `Operation::index`
pub const BINDINGS: [Binding; 4] = {
    let mut table = [Binding::new(Operation::Add); 4];
    let mut index = 0;
    while index < Operation::ALL.len() {
        table[index] = Binding::new(Operation::ALL[index]);
        index += 1;
    }
    table
};

/// Events a host forwards to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorEvent {
    /// The trigger control for this operation was activated
    Activated(Operation),
}

/// Two-operand calculator bound to injected fields
///
/// `L` and `R` supply the left and right operand text, `O` displays the result.
#[derive(Debug)]
pub struct Calculator<L, R, O> {
    left: L,
    right: R,
    output: O,
    bindings: [Binding; 4],
}

impl<L: InputField, R: InputField, O: OutputField> Calculator<L, R, O> {
    /// Creates a calculator over the given fields
    ///
    /// # Arguments
    /// * `left` - Field holding the first operand
    /// * `right` - Field holding the second operand
    /// * `output` - Field that receives every result
    pub fn new(left: L, right: R, output: O) -> Self {
        Self {
            left,
            right,
            output,
            bindings: BINDINGS,
        }
    }

    /// Dispatches a host event
    ///
    /// # Returns
    /// The numeric result written to the output field
    pub fn handle_event(&self, event: CalculatorEvent) -> f64 {
        match event {
            CalculatorEvent::Activated(operation) => self.activate(operation),
        }
    }

    /// Runs the operation bound to `operation` against the current field values
    ///
    /// Both operands are reparsed from their fields, the bound function is
    /// applied as `(left, right)` and the rendered result replaces the
    /// output field's content. Unparseable text and zero divisors surface
    /// as `NaN`/`Infinity` in the output rather than as errors.
    pub fn activate(&self, operation: Operation) -> f64 {
        let function = self.bindings[operation.index()].function;

        let left_text = self.left.text();
        let right_text = self.right.text();
        let left = parse_int(&left_text);
        let right = parse_int(&right_text);

        let result = function(left, right);
        let rendered = format_number(result);

        debug!(
            %operation,
            left = %left_text,
            right = %right_text,
            result = %rendered,
            "operation activated"
        );

        self.output.set_text(&rendered);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fields::TextField;

    fn calculator(
        left: &str,
        right: &str,
    ) -> (Calculator<TextField, TextField, TextField>, TextField) {
        let output = TextField::default();
        let calc = Calculator::new(TextField::new(left), TextField::new(right), output.clone());
        (calc, output)
    }

    const INTEGERS: [i64; 10] = [0, 1, -1, 2, 4, 10, -13, 255, 1_000_000, -987_654];

    #[test]
    fn one_binding_per_operation() {
        let operations: Vec<_> = BINDINGS.iter().map(|b| b.operation).collect();
        assert_eq!(operations, Operation::ALL);
        for operation in Operation::ALL {
            assert_eq!(BINDINGS[operation.index()].operation, operation);
        }
    }

    #[test]
    fn add_subtract_multiply_display_exact_integers() {
        for a in INTEGERS {
            for b in INTEGERS {
                let (calc, output) = calculator(&a.to_string(), &b.to_string());

                calc.activate(Operation::Add);
                assert_eq!(output.get(), (a + b).to_string());

                calc.activate(Operation::Subtract);
                assert_eq!(output.get(), (a - b).to_string());

                calc.activate(Operation::Multiply);
                assert_eq!(output.get(), (a * b).to_string());
            }
        }
    }

    #[test]
    fn divide_displays_true_quotient_for_nonzero_divisors() {
        for a in INTEGERS {
            for b in INTEGERS.into_iter().filter(|b| *b != 0) {
                let (calc, output) = calculator(&a.to_string(), &b.to_string());
                let expected = a as f64 / b as f64;

                assert_eq!(calc.activate(Operation::Divide), expected);
                assert_eq!(output.get().parse::<f64>(), Ok(expected), "{a} / {b}");
                if a % b == 0 {
                    assert_eq!(output.get(), (a / b).to_string(), "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn divide_uses_floating_point_semantics() {
        let (calc, output) = calculator("7", "2");
        assert_eq!(calc.activate(Operation::Divide), 3.5);
        assert_eq!(output.get(), "3.5");

        let (calc, output) = calculator("10", "4");
        calc.activate(Operation::Divide);
        assert_eq!(output.get(), "2.5");

        let (calc, output) = calculator("1", "3");
        calc.activate(Operation::Divide);
        assert_eq!(output.get(), "0.3333333333333333");
    }

    #[test]
    fn divide_by_zero_displays_sentinel() {
        let (calc, output) = calculator("5", "0");
        calc.activate(Operation::Divide);
        assert_eq!(output.get(), "Infinity");

        let (calc, output) = calculator("-5", "0");
        calc.activate(Operation::Divide);
        assert_eq!(output.get(), "-Infinity");

        let (calc, output) = calculator("0", "0");
        assert!(calc.activate(Operation::Divide).is_nan());
        assert_eq!(output.get(), "NaN");
    }

    #[test]
    fn non_numeric_input_displays_nan() {
        for operation in Operation::ALL {
            let (calc, output) = calculator("abc", "3");
            calc.activate(operation);
            assert_eq!(output.get(), "NaN", "{operation} with bad left operand");

            let (calc, output) = calculator("3", "");
            calc.activate(operation);
            assert_eq!(output.get(), "NaN", "{operation} with empty right operand");
        }
    }

    #[test]
    fn trailing_text_is_ignored() {
        let (calc, output) = calculator("12px", " 3.9");
        calc.activate(Operation::Multiply);
        assert_eq!(output.get(), "36");
    }

    #[test]
    fn latest_activation_replaces_previous_result() {
        let left = TextField::new("10");
        let right = TextField::new("4");
        let output = TextField::new("stale");
        let calc = Calculator::new(left.clone(), right.clone(), output.clone());

        calc.activate(Operation::Add);
        assert_eq!(output.get(), "14");

        right.set("3");
        calc.activate(Operation::Multiply);
        assert_eq!(output.get(), "30");
        assert_eq!(left.get(), "10");
    }

    #[test]
    fn result_is_not_recomputed_on_input_change() {
        let left = TextField::new("2");
        let right = TextField::new("2");
        let output = TextField::default();
        let calc = Calculator::new(left.clone(), right, output.clone());

        calc.activate(Operation::Add);
        left.set("40");
        assert_eq!(output.get(), "4");
    }

    #[test]
    fn handle_event_activates_bound_operation() {
        let (calc, output) = calculator("9", "3");
        let result = calc.handle_event(CalculatorEvent::Activated(Operation::Subtract));
        assert_eq!(result, 6.0);
        assert_eq!(output.get(), "6");
    }

    #[test]
    fn operand_fields_may_differ_in_type() {
        let output = TextField::default();
        let right = TextField::new("5");
        let calc = Calculator::new(TextField::new("20"), &right, output.clone());

        calc.activate(Operation::Divide);
        assert_eq!(output.get(), "4");
    }

    #[test]
    fn borrowed_fields_can_be_injected() {
        let left = TextField::new("6");
        let right = TextField::new("7");
        let output = TextField::default();
        let calc = Calculator::new(&left, &right, &output);

        calc.activate(Operation::Multiply);
        assert_eq!(output.get(), "42");
    }
}
