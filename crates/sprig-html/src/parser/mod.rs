//! Tree builder: drives the tokenizer and links recognized nodes into a
//! [`DomTree`](sprig_dom::DomTree).

/// Parser state machine and driver loop.
pub mod core;
/// Fatal parse errors and their context window.
pub mod error;
/// Debug printing of parsed trees.
pub mod print;
/// Per-token tracing hook.
pub mod trace;

pub use self::core::Parser;
pub use error::{ParseError, context_window};
pub use print::{format_tree, print_forest, print_tree};
pub use trace::{TraceEvent, Tracer};
