pub mod builtins;
pub mod error;
pub mod escape_time;
pub mod expr;
pub mod render;

pub use error::{ExprError, RenderError, SyntaxError, SyntaxErrorKind};
pub use escape_time::{
    iterate, iterate_builtin, iterate_with_runtime, EscapeTimeIterator, ESCAPE_RADIUS_SQ,
};
pub use expr::{parse, parse_symbolic, BindingTable, Expr, Letter, Runtime};
pub use render::{render_frame, render_frame_parallel};

// Re-export core types for convenience
pub use zenfractal_core::*;
