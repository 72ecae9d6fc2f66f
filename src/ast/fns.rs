//! Function definition builders.

use crate::format;

use super::Built;

/// Builder for a function bound to a `var` declaration.
///
/// # Example
///
/// ```
/// use jsfrag::FirstClassFn;
///
/// let built = FirstClassFn::new("add")
///     .arg("a")
///     .arg("b")
///     .build(|| "return a + b;".to_string());
///
/// assert_eq!(
///     built.code,
///     "var add = function(a,b) {\n    return a + b;\n};"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FirstClassFn {
    pub name: String,
    pub args: Vec<String>,
}

impl FirstClassFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a parameter name.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Replace the parameter list.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Render the function, invoking `body` once for the inner fragment.
    pub fn build<F>(self, body: F) -> Built<Self>
    where
        F: FnOnce() -> String,
    {
        let code = format!(
            "var {} = function({}) {{\n{}\n}};",
            self.name,
            self.args.join(","),
            body()
        );

        Built {
            code: format::indent(&code),
            data: self,
        }
    }
}

/// Builder for a function assigned to an object property.
///
/// The receiver defaults to `this`, matching the common case of attaching
/// methods inside a constructor body.
#[derive(Debug, Clone)]
pub struct Method {
    pub receiver: Option<String>,
    pub name: String,
    pub args: Vec<String>,
}

impl Method {
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

    /// Add a parameter name.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Replace the parameter list.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Render the method, invoking `body` once for the inner fragment.
    pub fn build<F>(self, body: F) -> Built<Self>
    where
        F: FnOnce() -> String,
    {
        let code = format!(
            "{}.{} = function({}) {{\n{}\n}};",
            self.receiver.as_deref().unwrap_or("this"),
            self.name,
            self.args.join(", "),
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
    fn test_first_class_fn_no_args() {
        let built = FirstClassFn::new("init").build(|| "setup();".to_string());
        assert_eq!(built.code, "var init = function() {\n    setup();\n};");
    }

    #[test]
    fn test_first_class_fn_joins_args_without_space() {
        let built = FirstClassFn::new("add")
            .args(["a", "b", "c"])
            .build(|| "return a + b + c;".to_string());
        assert!(built.code.starts_with("var add = function(a,b,c) {"));
    }

    #[test]
    fn test_first_class_fn_echoes_descriptor() {
        let built = FirstClassFn::new("go").arg("x").build(|| "x();".to_string());
        assert_eq!(built.data.name, "go");
        assert_eq!(built.data.args, ["x"]);
    }

    #[test]
    fn test_method_defaults_to_this() {
        let built = Method::new("render").build(|| "draw();".to_string());
        assert_eq!(built.code, "this.render = function() {\n    draw();\n};");
    }

    #[test]
    fn test_method_with_receiver_and_args() {
        let built = Method::new("greet")
            .receiver("App.prototype")
            .args(["name", "loud"])
            .build(|| "say(name);".to_string());
        assert_eq!(
            built.code,
            "App.prototype.greet = function(name, loud) {\n    say(name);\n};"
        );
    }

    #[test]
    fn test_body_producer_invoked_once() {
        let mut calls = 0;
        Method::new("tick").build(|| {
            calls += 1;
            "count();".to_string()
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_multi_line_body_inserted_verbatim() {
        let built = FirstClassFn::new("run").build(|| "a();\nb();".to_string());
        assert_eq!(
            built.code,
            "var run = function() {\n    a();\n    b();\n};"
        );
    }
}
