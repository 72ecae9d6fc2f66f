//! Single-line statement builders.

use crate::format;

use super::Built;

/// Builder for a property assignment statement.
///
/// Renders dot access by default, or bracket-indexed access via
/// [`bracket_notation`]. `build` fills the descriptor's `name` field with
/// the rendered assignment target so the caller can reference the
/// just-assigned property in later fragments.
///
/// # Example
///
/// ```
/// use jsfrag::PropertyAssign;
///
/// let built = PropertyAssign::new("count", "0").receiver("state").build();
/// assert_eq!(built.code, "state.count = 0;");
/// assert_eq!(built.data.name.as_deref(), Some("state.count"));
/// ```
///
/// [`bracket_notation`]: PropertyAssign::bracket_notation
#[derive(Debug, Clone)]
pub struct PropertyAssign {
    pub receiver: Option<String>,
    pub prop: String,
    pub value: String,
    pub dot_notation: bool,
    /// Rendered assignment target, filled in by [`build`](Self::build).
    pub name: Option<String>,
}

impl PropertyAssign {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            receiver: None,
            prop: prop.into(),
            value: value.into(),
            dot_notation: true,
            name: None,
        }
    }

    /// Set the receiver expression (defaults to `this`).
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Render bracket-indexed access (`recv["prop"]`) instead of dot access.
    pub fn bracket_notation(mut self) -> Self {
        self.dot_notation = false;
        self
    }

    /// Render the assignment, returning the descriptor augmented with the
    /// derived target name.
    pub fn build(mut self) -> Built<Self> {
        let receiver = self.receiver.as_deref().unwrap_or("this");

        let (code, target) = if self.dot_notation {
            (
                format!("{}.{} = {};", receiver, self.prop, self.value),
                format!("{}.{}", receiver, self.prop),
            )
        } else {
            (
                format!("{}[\"{}\"] = {};", receiver, self.prop, self.value),
                format!("{}[\"{}\"]", receiver, self.prop),
            )
        };
        self.name = Some(target);

        Built {
            code: format::clean(&code),
            data: self,
        }
    }
}

/// Builder for a `var` declaration, with or without an initializer.
#[derive(Debug, Clone)]
pub struct Var {
    pub name: String,
    pub value: Option<String>,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Set the initializer expression.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render the declaration.
    pub fn build(self) -> Built<Self> {
        let code = match &self.value {
            Some(value) => format!("var {} = {};", self.name, value),
            None => format!("var {};", self.name),
        };

        Built {
            code: format::clean(&code),
            data: self,
        }
    }
}

/// Builder for reassigning an existing binding.
#[derive(Debug, Clone)]
pub struct Reassign {
    pub name: String,
    pub value: String,
}

impl Reassign {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render the reassignment.
    pub fn build(self) -> Built<Self> {
        let code = format!("{} = {};", self.name, self.value);

        Built {
            code: format::clean(&code),
            data: self,
        }
    }
}

/// Builder for a `return` statement.
///
/// An absent value renders as `return undefined;`.
#[derive(Debug, Clone, Default)]
pub struct Return {
    pub value: Option<String>,
}

impl Return {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the returned expression.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render the return statement.
    pub fn build(&self) -> String {
        format::clean(&format!(
            "return {};",
            self.value.as_deref().unwrap_or("undefined")
        ))
    }
}
