//! Exception guard and handler builders.

use crate::format;

/// Builder for a `try` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TryBlock;

impl TryBlock {
    pub fn new() -> Self {
        Self
    }

    /// Render the guard, invoking `body` once for the inner fragment.
    pub fn build<F>(self, body: F) -> String
    where
        F: FnOnce() -> String,
    {
        let code = format!("try {{\n{}\n}}", body());
        format::indent(&code)
    }
}

/// Builder for a `catch` block.
///
/// The body producer receives the bound error-variable name (empty when no
/// binding was set) so the handler text can reference it.
#[derive(Debug, Clone, Default)]
pub struct CatchBlock {
    pub arg: Option<String>,
}

impl CatchBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the caught error to a variable name.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    /// Render the handler, invoking `body` once with the bound name.
    pub fn build<F>(self, body: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let arg = self.arg.as_deref().unwrap_or("");
        let code = format!("catch({}) {{\n{}\n}}", arg, body(arg));
        format::indent(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_block() {
        let code = TryBlock::new().build(|| "risky();".to_string());
        assert_eq!(code, "try {\n    risky();\n}");
    }

    #[test]
    fn test_catch_block_passes_bound_name_to_body() {
        let code = CatchBlock::new()
            .arg("err")
            .build(|err| format!("console.error({});", err));
        assert_eq!(code, "catch(err) {\n    console.error(err);\n}");
    }

    #[test]
    fn test_catch_block_without_binding() {
        let code = CatchBlock::new().build(|arg| {
            assert_eq!(arg, "");
            "recover();".to_string()
        });
        assert_eq!(code, "catch() {\n    recover();\n}");
    }
}
