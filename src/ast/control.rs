//! Conditional and loop builders.

use crate::format;

use super::Built;

/// Builder for an `if` block.
#[derive(Debug, Clone)]
pub struct If {
    pub condition: String,
}

impl If {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }

    /// Render the conditional, invoking `body` once for the inner fragment.
    pub fn build<F>(self, body: F) -> Built<Self>
    where
        F: FnOnce() -> String,
    {
        let code = format!("if ({}) {{\n{}\n}}", self.condition, body());

        Built {
            code: format::indent(&code),
            data: self,
        }
    }
}

/// Builder for a counted `for` loop.
///
/// The three header clauses are taken as raw text; pair with
/// [`crate::IteratorNames`] to pick a counter name that will not collide
/// in nested loops.
///
/// # Example
///
/// ```
/// use jsfrag::ForLoop;
///
/// let built = ForLoop::new("var i = 0", "i < 10", "i++")
///     .build(|| "doWork(i);".to_string());
///
/// assert_eq!(
///     built.code,
///     "for (var i = 0; i < 10; i++) {\n    doWork(i);\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ForLoop {
    pub start: String,
    pub stop: String,
    pub step: String,
}

impl ForLoop {
    pub fn new(
        start: impl Into<String>,
        stop: impl Into<String>,
        step: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
            step: step.into(),
        }
    }

    /// Render the loop, invoking `body` once for the inner fragment.
    pub fn build<F>(self, body: F) -> Built<Self>
    where
        F: FnOnce() -> String,
    {
        let code = format!(
            "for ({}; {}; {}) {{\n{}\n}}",
            self.start,
            self.stop,
            self.step,
            body()
        );

        Built {
            code: format::indent(&code),
            data: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_block() {
        let built = If::new("x > 0").build(|| "handle(x);".to_string());
        assert_eq!(built.code, "if (x > 0) {\n    handle(x);\n}");
    }

    #[test]
    fn test_if_echoes_condition() {
        let built = If::new("ready").build(|| "go();".to_string());
        assert_eq!(built.data.condition, "ready");
    }

    #[test]
    fn test_for_loop_three_lines_no_trailing_blank() {
        let built = ForLoop::new("var i = 0", "i < 10", "i++")
            .build(|| "doWork(i);".to_string());
        assert_eq!(
            built.code,
            "for (var i = 0; i < 10; i++) {\n    doWork(i);\n}"
        );
        assert_eq!(built.code.split('\n').count(), 3);
        assert!(!built.code.ends_with('\n'));
    }

    #[test]
    fn test_nested_loops_accumulate_one_unit_per_level() {
        let inner = ForLoop::new("var j = 0", "j < n", "j++")
            .build(|| "visit(i, j);".to_string());
        let outer = ForLoop::new("var i = 0", "i < n", "i++").build(|| inner.code);
        assert_eq!(
            outer.code,
            "for (var i = 0; i < n; i++) {\n    for (var j = 0; j < n; j++) {\n        visit(i, j);\n    }\n}"
        );
    }
}
