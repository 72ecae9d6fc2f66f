//! Opt-in strict validation for builder descriptors.
//!
//! The build path stays permissive: builders never inspect their inputs and
//! never fail, so output is byte-identical whether or not a caller
//! validates. Callers that want early diagnostics run [`Validate::validate`]
//! (or [`identifier`] directly) before building.

use thiserror::Error;

use crate::ast::{
    ChainCall, FirstClassFn, Method, MethodCall, NewInstance, PropertyAssign,
    Reassign, Var,
};

/// JavaScript reserved words; identifiers may not shadow these.
const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Validation failure for a descriptor field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("identifier is empty")]
    EmptyIdentifier,
    #[error("`{0}` is not a valid JavaScript identifier")]
    InvalidIdentifier(String),
    #[error("`{0}` is a reserved word")]
    ReservedWord(String),
}

/// Check that `name` is a well-formed, non-reserved JavaScript identifier.
pub fn identifier(name: &str) -> Result<(), ValidateError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(ValidateError::EmptyIdentifier);
    };

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Err(ValidateError::InvalidIdentifier(name.to_string()));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Err(ValidateError::InvalidIdentifier(name.to_string()));
    }
    if RESERVED_WORDS.contains(&name) {
        return Err(ValidateError::ReservedWord(name.to_string()));
    }

    Ok(())
}

/// Strict descriptor checks, separate from the permissive build path.
///
/// Only fields that must be identifiers are checked: defined names and
/// parameter names. Receivers, call arguments, and values are arbitrary
/// expressions and pass through untouched.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}

impl Validate for FirstClassFn {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.name)?;
        self.args.iter().try_for_each(|arg| identifier(arg))
    }
}

impl Validate for Method {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.name)?;
        self.args.iter().try_for_each(|arg| identifier(arg))
    }
}

impl Validate for MethodCall {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.name)
    }
}

impl Validate for ChainCall {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.name)
    }
}

impl Validate for PropertyAssign {
    fn validate(&self) -> Result<(), ValidateError> {
        // Bracket access quotes the property, so any string is allowed.
        if self.dot_notation {
            identifier(&self.prop)
        } else {
            Ok(())
        }
    }
}

impl Validate for Var {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.name)
    }
}

impl Validate for Reassign {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.name)
    }
}

impl Validate for NewInstance {
    fn validate(&self) -> Result<(), ValidateError> {
        identifier(&self.ty)
    }
}
