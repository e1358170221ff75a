use super::ast::Expr;
use super::bindings::{BindingTable, Letter};
use super::parser::{is_blank, parse};
use crate::ExprError;
use zenfractal_core::{Complex, Scalar};

/// Evaluation context: one binding table reused across many `eval` calls.
///
/// Letters are resolved while parsing, so each `eval` sees the bindings as
/// they are at the moment it is called. Not meant to be shared between
/// threads; give each worker its own runtime.
#[derive(Clone, Debug)]
pub struct Runtime<S> {
    bindings: BindingTable<S>,
}

impl<S: Scalar> Runtime<S> {
    pub fn new() -> Self {
        Self {
            bindings: BindingTable::new(),
        }
    }

    /// Bind `letter` (which must be in `a..z`) to `value`.
    pub fn set_value(&mut self, letter: char, value: Complex<S>) -> Result<(), ExprError> {
        let letter = Letter::try_from(letter)?;
        self.bindings.set(letter, value);
        Ok(())
    }

    pub fn value(&self, letter: char) -> Result<&Complex<S>, ExprError> {
        Ok(self.bindings.get(Letter::try_from(letter)?))
    }

    pub fn bindings(&self) -> &BindingTable<S> {
        &self.bindings
    }

    /// Parse `source` with every letter replaced by its current value.
    pub fn parse(&self, source: &str) -> Result<Expr<S>, ExprError> {
        Ok(parse(source, &self.bindings)?)
    }

    /// Parse and evaluate `source` against the current bindings. Blank input
    /// evaluates to zero.
    pub fn eval(&self, source: &str) -> Result<Complex<S>, ExprError> {
        if is_blank(source) {
            return Ok(Complex::zero());
        }
        let expr = self.parse(source)?;
        Ok(expr.eval(&self.bindings))
    }
}

impl<S: Scalar> Default for Runtime<S> {
    fn default() -> Self {
        Self::new()
    }
}
