//! Composable builders for emitting JavaScript source fragments.
//!
//! This crate is the text-assembly half of a code generator: a higher-level
//! generator decides *what* code to produce and calls these builders to
//! govern *how* the produced text is composed and formatted. Builders are
//! pure; the only state anywhere is the per-session [`IteratorNames`]
//! cursor.
//!
//! Block-shaped builders take a body producer closure, invoked exactly once
//! at build time, and return a [`Built`] pairing the formatted fragment
//! with the descriptor that produced it. Nesting works by passing an inner
//! builder's output as the outer builder's body.
//!
//! # Example
//!
//! ```
//! use jsfrag::{ForLoop, IteratorNames};
//!
//! let mut names = IteratorNames::new();
//! let i = names.next_name();
//!
//! let built = ForLoop::new(format!("var {i} = 0"), format!("{i} < 10"), format!("{i}++"))
//!     .build(|| format!("doWork({i});"));
//!
//! assert_eq!(
//!     built.code,
//!     "for (var i = 0; i < 10; i++) {\n    doWork(i);\n}"
//! );
//! ```
//!
//! Indentation is deliberately flat: each block applies exactly one 4-space
//! unit to the interior lines it wraps, so nesting depth accumulates only
//! through composition. See [`format`] for the exact contract.

mod iterators;

pub mod ast;
pub mod format;
pub mod validate;

pub use ast::{
    Built, CatchBlock, ChainCall, FirstClassFn, ForLoop, If, Method,
    MethodCall, NewInstance, PropertyAssign, Reassign, Return, TryBlock, Var,
};
pub use iterators::IteratorNames;
pub use validate::{Validate, ValidateError};
