//! The seam between the environment and the statement walker.

use crate::{Display, EvalResult, FunctionDefinition};

/// Runs a function body.
///
/// [`Display::execute`] installs the callee's activation and then hands the
/// display back to the evaluator, which reads and writes variables through it
/// and may call `execute` again for nested calls.
pub trait Evaluator {
    fn evaluate(&mut self, display: &mut Display, function: &FunctionDefinition) -> EvalResult;
}

impl<F> Evaluator for F
where
    F: FnMut(&mut Display, &FunctionDefinition) -> EvalResult,
{
    fn evaluate(&mut self, display: &mut Display, function: &FunctionDefinition) -> EvalResult {
        self(display, function)
    }
}
