//! JavaScript fragment builders.
//!
//! One builder struct per syntactic shape. Block-shaped builders (functions,
//! conditionals, loops, try/catch) take a body producer closure at build
//! time, run the rendered skeleton through [`crate::format::indent`], and
//! return a [`Built`] pairing the formatted fragment with the descriptor
//! that produced it. Expression-shaped builders render a single line and
//! apply [`crate::format::clean`] only.

mod calls;
mod control;
mod exceptions;
mod fns;
mod statements;

pub use calls::{ChainCall, MethodCall, NewInstance};
pub use control::{ForLoop, If};
pub use exceptions::{CatchBlock, TryBlock};
pub use fns::{FirstClassFn, Method};
pub use statements::{PropertyAssign, Reassign, Return, Var};

/// A rendered fragment paired with the descriptor that produced it.
///
/// Builders consume their descriptor and echo it back here so the caller
/// can keep referring to names, arguments, and other fields after the
/// fragment is rendered.
#[derive(Debug, Clone)]
pub struct Built<T> {
    /// The descriptor, possibly augmented by the builder (see
    /// [`PropertyAssign::build`]).
    pub data: T,
    /// The formatted fragment, complete and self-contained.
    pub code: String,
}
