//! Error types for expression parsing, evaluation and frame rendering.

use thiserror::Error;
use zenfractal_core::CoreError;

/// What went wrong at a [`SyntaxError`] position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A character that cannot start a term
    UnexpectedChar(char),
    /// Input ended where a term was required
    UnexpectedEnd,
    /// `(` never closed
    MissingCloseParen,
    /// `)` with no matching `(`
    UnmatchedCloseParen,
    /// A complete expression followed by something that is not an operator
    TrailingInput(char),
    /// Parentheses nested deeper than the parser allows
    NestingTooDeep,
}

/// Malformed expression source. `position` is a byte offset into the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("syntax error at position {position}: {}", describe(.kind))]
pub struct SyntaxError {
    pub position: usize,
    pub kind: SyntaxErrorKind,
}

fn describe(kind: &SyntaxErrorKind) -> String {
    match kind {
        SyntaxErrorKind::UnexpectedChar(c) => format!("unexpected character {c:?}"),
        SyntaxErrorKind::UnexpectedEnd => "unexpected end of expression".to_string(),
        SyntaxErrorKind::MissingCloseParen => "expected ')'".to_string(),
        SyntaxErrorKind::UnmatchedCloseParen => "unmatched ')'".to_string(),
        SyntaxErrorKind::TrailingInput(c) => format!("unexpected {c:?} after expression"),
        SyntaxErrorKind::NestingTooDeep => "parentheses nested too deeply".to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("variable {0:?} is outside the range a..z")]
    OutOfRange(char),
}

/// Why a frame could not be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid frame request: {0}")]
    Request(#[from] CoreError),

    #[error("invalid recurrence: {0}")]
    Expr(#[from] ExprError),
}
