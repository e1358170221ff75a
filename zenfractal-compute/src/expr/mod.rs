//! Expression runtime: parser, tree, variable bindings and evaluation context.

pub mod ast;
pub mod bindings;
pub mod parser;
pub mod runtime;

pub use ast::{BinaryOp, Expr, Node, NodeId};
pub use bindings::{BindingTable, Letter, BINDING_SLOTS};
pub use parser::{is_blank, parse, parse_symbolic, LeafResolver, Symbolic, MAX_NESTING_DEPTH};
pub use runtime::Runtime;
