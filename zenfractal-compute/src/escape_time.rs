//! Escape-time iteration.
//!
//! With `c = start` and `z₀ = start`, step `z` through the recurrence and
//! report the first step `i` whose result has `|z|² > 4`. Points that stay
//! bounded for `max_iterations` steps report `max_iterations`.

use crate::builtins;
use crate::expr::{is_blank, parse_symbolic, BindingTable, Expr, Letter, Node, Runtime};
use crate::ExprError;
use std::convert::Infallible;
use std::sync::Arc;
use zenfractal_core::{BuiltinFractal, Complex, Recurrence, Scalar};

/// Squared escape radius (radius 2).
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

#[inline]
fn escape_loop<S, E, F>(start: &Complex<S>, max_iterations: u32, mut step: F) -> Result<u32, E>
where
    S: Scalar,
    F: FnMut(&Complex<S>, &Complex<S>) -> Result<Complex<S>, E>,
{
    let radius_sq = S::from_f64(ESCAPE_RADIUS_SQ);
    let c = start;
    let mut z = start.clone();

    for i in 0..max_iterations {
        z = step(&z, c)?;
        if z.norm_sq() > radius_sq {
            return Ok(i);
        }
    }

    Ok(max_iterations)
}

#[inline]
fn infallible_loop<S, F>(start: &Complex<S>, max_iterations: u32, mut step: F) -> u32
where
    S: Scalar,
    F: FnMut(&Complex<S>, &Complex<S>) -> Complex<S>,
{
    match escape_loop::<S, Infallible, _>(start, max_iterations, |z, c| Ok(step(z, c))) {
        Ok(n) => n,
        Err(never) => match never {},
    }
}

/// Iterate a built-in recurrence. The formula is fixed at compile time; no
/// parsing or binding lookups are involved.
pub fn iterate_builtin<S: Scalar>(
    fractal: BuiltinFractal,
    start: &Complex<S>,
    max_iterations: u32,
) -> u32 {
    match fractal {
        BuiltinFractal::Mandelbrot => infallible_loop(start, max_iterations, builtins::mandelbrot),
        BuiltinFractal::Octopus => infallible_loop(start, max_iterations, builtins::octopus),
        BuiltinFractal::Quartic => infallible_loop(start, max_iterations, builtins::quartic),
    }
}

/// Iterate `source` through an explicit runtime, re-parsing on every step.
///
/// `c` is bound once to `start`, `z` is rebound to each iterate. Slow, but
/// it exercises exactly the `set_value` + `eval` contract; prefer
/// [`EscapeTimeIterator`] for rendering.
pub fn iterate_with_runtime<S: Scalar>(
    runtime: &mut Runtime<S>,
    source: &str,
    start: &Complex<S>,
    max_iterations: u32,
) -> Result<u32, ExprError> {
    runtime.set_value('c', start.clone())?;
    escape_loop(start, max_iterations, |z, _c| {
        runtime.set_value('z', z.clone())?;
        runtime.eval(source)
    })
}

/// Iterate any recurrence once. Parses custom text on every call; reuse an
/// [`EscapeTimeIterator`] when iterating many points.
pub fn iterate<S: Scalar>(
    start: &Complex<S>,
    max_iterations: u32,
    recurrence: &Recurrence,
) -> Result<u32, ExprError> {
    Ok(EscapeTimeIterator::new(recurrence)?.iterate(start, max_iterations))
}

#[derive(Clone, Debug)]
enum Prepared<S> {
    Builtin(BuiltinFractal),
    Expression {
        expr: Arc<Expr<S>>,
        bindings: BindingTable<S>,
        scratch: Vec<Complex<S>>,
    },
}

/// A recurrence prepared for iterating many points.
///
/// Custom text is parsed once into a tree with variable leaves; each step
/// rebinds `z` and evaluates the tree in place. Clones share the tree but get
/// their own bindings and scratch space, so one clone per worker thread is
/// enough for parallel rendering.
#[derive(Clone, Debug)]
pub struct EscapeTimeIterator<S> {
    prepared: Prepared<S>,
}

impl<S: Scalar> EscapeTimeIterator<S> {
    pub fn new(recurrence: &Recurrence) -> Result<Self, ExprError> {
        let prepared = match recurrence {
            Recurrence::Builtin(fractal) => Prepared::Builtin(*fractal),
            Recurrence::Custom(source) => {
                let expr = Self::compile(source)?;
                log::debug!("compiled recurrence {:?} into {} nodes", source, expr.nodes().len());
                Prepared::Expression {
                    scratch: Vec::with_capacity(expr.nodes().len()),
                    expr: Arc::new(expr),
                    bindings: BindingTable::new(),
                }
            }
        };
        Ok(Self { prepared })
    }

    /// Blank text evaluates to zero, matching [`Runtime::eval`].
    fn compile(source: &str) -> Result<Expr<S>, ExprError> {
        if is_blank(source) {
            let mut expr = Expr::new();
            expr.push(Node::Constant(Complex::zero()));
            return Ok(expr);
        }
        Ok(parse_symbolic(source)?)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.prepared, Prepared::Builtin(_))
    }

    pub fn iterate(&mut self, start: &Complex<S>, max_iterations: u32) -> u32 {
        match &mut self.prepared {
            Prepared::Builtin(fractal) => iterate_builtin(*fractal, start, max_iterations),
            Prepared::Expression {
                expr,
                bindings,
                scratch,
            } => {
                bindings.set(Letter::C, start.clone());
                infallible_loop(start, max_iterations, |z, _c| {
                    bindings.set(Letter::Z, z.clone());
                    expr.eval_with(bindings, scratch)
                })
            }
        }
    }
}
