//! Recursive descent parser for recurrence expressions.
//!
//! ```text
//! expr    := add_sub
//! add_sub := mul ( ('+' | '-') mul )*
//! mul     := term ( '*' term )*
//! term    := letter | '(' add_sub ')'
//! letter  := 'a'..'z'
//! ```
//!
//! Tokens are single characters; spaces, tabs and newlines between them are
//! ignored. Both binary levels are left-associative.

use super::ast::{BinaryOp, Expr, Node, NodeId};
use super::bindings::{BindingTable, Letter};
use crate::error::{SyntaxError, SyntaxErrorKind};
use zenfractal_core::Scalar;

/// Deepest parenthesis nesting accepted. Bounds parser recursion.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Decides what leaf a variable letter becomes.
pub trait LeafResolver<S> {
    fn leaf(&self, letter: Letter) -> Node<S>;
}

/// Resolves each letter immediately to its current value.
impl<S: Scalar> LeafResolver<S> for BindingTable<S> {
    fn leaf(&self, letter: Letter) -> Node<S> {
        Node::Constant(self.get(letter).clone())
    }
}

/// Keeps letters as variable references, for trees evaluated many times
/// against changing bindings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Symbolic;

impl<S> LeafResolver<S> for Symbolic {
    fn leaf(&self, letter: Letter) -> Node<S> {
        Node::Variable(letter)
    }
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

/// True when `source` holds nothing but grammar whitespace.
pub fn is_blank(source: &str) -> bool {
    source.chars().all(is_whitespace)
}

/// Parse `source`, turning every letter into a leaf via `resolver`.
pub fn parse<S, R>(source: &str, resolver: &R) -> Result<Expr<S>, SyntaxError>
where
    S: Scalar,
    R: LeafResolver<S>,
{
    Parser {
        source,
        position: 0,
        depth: 0,
        resolver,
        expr: Expr::new(),
    }
    .parse()
}

/// Parse keeping letters as [`Node::Variable`] leaves.
pub fn parse_symbolic<S: Scalar>(source: &str) -> Result<Expr<S>, SyntaxError> {
    parse(source, &Symbolic)
}

struct Parser<'a, S, R> {
    source: &'a str,
    /// Byte offset of the next unread character
    position: usize,
    depth: usize,
    resolver: &'a R,
    expr: Expr<S>,
}

impl<'a, S: Scalar, R: LeafResolver<S>> Parser<'a, S, R> {
    fn parse(mut self) -> Result<Expr<S>, SyntaxError> {
        self.add_sub()?;
        match self.peek() {
            None => Ok(self.expr),
            Some(')') => Err(self.error(SyntaxErrorKind::UnmatchedCloseParen)),
            Some(c) => Err(self.error(SyntaxErrorKind::TrailingInput(c))),
        }
    }

    fn add_sub(&mut self) -> Result<NodeId, SyntaxError> {
        let mut lhs = self.mul()?;

        loop {
            let op = match self.peek() {
                Some('+') => BinaryOp::Add,
                Some('-') => BinaryOp::Sub,
                _ => break,
            };
            self.advance();

            let rhs = self.mul()?;
            lhs = self.expr.push(Node::Binary { op, lhs, rhs });
        }

        Ok(lhs)
    }

    fn mul(&mut self) -> Result<NodeId, SyntaxError> {
        let mut lhs = self.term()?;

        while self.peek() == Some('*') {
            self.advance();

            let rhs = self.term()?;
            lhs = self.expr.push(Node::Binary {
                op: BinaryOp::Mul,
                lhs,
                rhs,
            });
        }

        Ok(lhs)
    }

    fn term(&mut self) -> Result<NodeId, SyntaxError> {
        match self.peek() {
            Some(c) if c.is_ascii_lowercase() => {
                let letter = Letter::try_from(c)
                    .map_err(|_| self.error(SyntaxErrorKind::UnexpectedChar(c)))?;
                self.advance();
                Ok(self.expr.push(self.resolver.leaf(letter)))
            }
            Some('(') => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(self.error(SyntaxErrorKind::NestingTooDeep));
                }
                self.advance();

                self.depth += 1;
                let inner = self.add_sub()?;
                self.depth -= 1;

                if self.peek() != Some(')') {
                    return Err(self.error(SyntaxErrorKind::MissingCloseParen));
                }
                self.advance();
                Ok(inner)
            }
            Some(c) => Err(self.error(SyntaxErrorKind::UnexpectedChar(c))),
            None => Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !is_whitespace(c) {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.current()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            position: self.position,
            kind,
        }
    }
}
