//! Expression tree.
//!
//! Nodes live in one arena in post-order: every child precedes its parent and a
//! left subtree precedes the right one, so evaluation is a single forward pass
//! that visits operands in the same order a recursive evaluator would. The
//! root is the last node. Dropping an [`Expr`] frees the whole tree at once.

use super::bindings::{BindingTable, Letter};
use std::fmt;
use zenfractal_core::{Complex, Scalar};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    #[inline]
    pub fn apply<S: Scalar>(self, lhs: &Complex<S>, rhs: &Complex<S>) -> Complex<S> {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
        }
    }
}

/// Index of a node inside its [`Expr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node<S> {
    /// Value copied out of a binding table when the expression was parsed
    Constant(Complex<S>),
    /// Looked up in the binding table passed to each evaluation
    Variable(Letter),
    Binary {
        op: BinaryOp,
        lhs: NodeId,
        rhs: NodeId,
    },
}

/// A parsed, immutable expression tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr<S> {
    nodes: Vec<Node<S>>,
}

impl<S: Scalar> Expr<S> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node; operands must already be in the arena.
    pub(crate) fn push(&mut self, node: Node<S>) -> NodeId {
        debug_assert!(match &node {
            Node::Binary { lhs, rhs, .. } => lhs.0 < self.nodes.len() && rhs.0 < self.nodes.len(),
            _ => true,
        });
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    pub fn root(&self) -> NodeId {
        NodeId(self.nodes.len().saturating_sub(1))
    }

    /// True when no leaf needs a binding table, i.e. every letter was resolved
    /// at parse time.
    pub fn is_resolved(&self) -> bool {
        !self.nodes.iter().any(|n| matches!(n, Node::Variable(_)))
    }

    /// Copy of this tree with every variable replaced by its current binding.
    pub fn resolve(&self, bindings: &BindingTable<S>) -> Expr<S> {
        let nodes = self
            .nodes
            .iter()
            .map(|node| match node {
                Node::Variable(letter) => Node::Constant(bindings.get(*letter).clone()),
                other => other.clone(),
            })
            .collect();
        Expr { nodes }
    }

    pub fn eval(&self, bindings: &BindingTable<S>) -> Complex<S> {
        let mut scratch = Vec::with_capacity(self.nodes.len());
        self.eval_with(bindings, &mut scratch)
    }

    /// Evaluate using a caller-owned scratch buffer, so repeated evaluation of
    /// the same tree does not allocate.
    pub fn eval_with(
        &self,
        bindings: &BindingTable<S>,
        scratch: &mut Vec<Complex<S>>,
    ) -> Complex<S> {
        scratch.clear();
        for node in &self.nodes {
            let value = match node {
                Node::Constant(value) => value.clone(),
                Node::Variable(letter) => bindings.get(*letter).clone(),
                Node::Binary { op, lhs, rhs } => op.apply(&scratch[lhs.0], &scratch[rhs.0]),
            };
            scratch.push(value);
        }
        scratch.pop().unwrap_or_else(Complex::zero)
    }

    fn fmt_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        S: fmt::Display,
    {
        match &self.nodes[id.0] {
            Node::Constant(value) => write!(f, "{value}"),
            Node::Variable(letter) => write!(f, "{}", letter.as_char()),
            Node::Binary { op, lhs, rhs } => {
                write!(f, "(")?;
                self.fmt_node(*lhs, f)?;
                write!(f, "{}", op.symbol())?;
                self.fmt_node(*rhs, f)?;
                write!(f, ")")
            }
        }
    }
}

/// Fully parenthesised form, which makes grouping and associativity visible.
impl<S: Scalar + fmt::Display> fmt::Display for Expr<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return Ok(());
        }
        self.fmt_node(self.root(), f)
    }
}
