//! Call and construction expression builders.

use crate::format;

/// Builder for a method call statement.
///
/// Arguments are raw expressions, joined with `", "`. The receiver defaults
/// to `this`.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub receiver: Option<String>,
    pub name: String,
    pub args: Vec<String>,
}

impl MethodCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            receiver: None,
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Set the receiver expression (defaults to `this`).
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Add an argument expression.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Replace the argument list.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Render the call statement.
    pub fn build(&self) -> String {
        format::clean(&format!(
            "{}.{}({});",
            self.receiver.as_deref().unwrap_or("this"),
            self.name,
            self.args.join(", ")
        ))
    }
}

/// Builder for one link of a method chain, `.name(args)`.
///
/// Carries no receiver and no terminator; the caller appends it to an
/// existing expression.
#[derive(Debug, Clone)]
pub struct ChainCall {
    pub name: String,
    pub args: Vec<String>,
}

impl ChainCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument expression.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Render the chain link.
    pub fn build(&self) -> String {
        format::clean(&format!(".{}({})", self.name, self.args.join(", ")))
    }
}

/// Builder for a constructor call expression, `new Type();`.
#[derive(Debug, Clone)]
pub struct NewInstance {
    pub ty: String,
}

impl NewInstance {
    pub fn new(ty: impl Into<String>) -> Self {
        Self { ty: ty.into() }
    }

    /// Render the constructor call.
    pub fn build(&self) -> String {
        format::clean(&format!("new {}();", self.ty))
    }
}
