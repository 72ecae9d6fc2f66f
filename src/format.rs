//! Indentation and line cleanup for rendered fragments.
//!
//! Every block-shaped builder funnels its skeleton through [`indent`];
//! expression-shaped builders apply [`clean`] on their single line.

/// Width of one indent unit, in spaces.
pub const TAB_WIDTH: usize = 4;

/// Number of indent units applied to interior lines of a block fragment.
///
/// Indentation is flat: each `indent` pass adds exactly this many units to
/// interior lines, regardless of how deep the fragment will end up nested.
/// Depth accumulates only through composition, when an enclosing builder
/// runs its own pass over an already-indented body.
pub const BLOCK_DEPTH: usize = 1;

pub(crate) fn tabs(n: usize) -> String {
    " ".repeat(TAB_WIDTH * n)
}

/// Reindent a multi-line fragment.
///
/// The first and last lines are emitted at column 0 (they are the block's
/// own open and close lines); every interior line gains one indent unit on
/// top of whatever leading whitespace it already carries. All lines pass
/// through [`clean`].
pub fn indent(code: &str) -> String {
    let lines: Vec<&str> = code.split('\n').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || i == last {
                clean(line)
            } else {
                format!("{}{}", tabs(BLOCK_DEPTH), clean(line))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse every run of two or more statement terminators into one.
///
/// Guards against the double-`;` artifact produced when a builder's own
/// terminator collides with a value fragment that already ends in one.
/// Idempotent.
pub fn clean(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());
    let mut in_run = false;

    for ch in line.chars() {
        if ch == ';' {
            if !in_run {
                cleaned.push(';');
                in_run = true;
            }
        } else {
            cleaned.push(ch);
            in_run = false;
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs() {
        assert_eq!(tabs(0), "");
        assert_eq!(tabs(1), "    ");
        assert_eq!(tabs(2), "        ");
    }

    #[test]
    fn test_indent_three_lines() {
        let code = "if (x) {\ndoWork();\n}";
        assert_eq!(indent(code), "if (x) {\n    doWork();\n}");
    }

    #[test]
    fn test_indent_keeps_edges_at_column_zero() {
        let indented = indent("try {\na();\nb();\n}");
        let lines: Vec<&str> = indented.split('\n').collect();
        assert_eq!(lines[0], "try {");
        assert_eq!(lines[1], "    a();");
        assert_eq!(lines[2], "    b();");
        assert_eq!(lines[3], "}");
    }

    #[test]
    fn test_indent_is_flat_not_depth_aware() {
        // Interior lines keep their existing indentation and gain one unit,
        // so a pre-indented inner block accumulates through composition.
        let inner = "if (a) {\n    x();\n}";
        let outer = format!("for (;;) {{\n{}\n}}", inner);
        assert_eq!(
            indent(&outer),
            "for (;;) {\n    if (a) {\n        x();\n    }\n}"
        );
    }

    #[test]
    fn test_indent_single_line() {
        assert_eq!(indent("var x = 1;"), "var x = 1;");
    }

    #[test]
    fn test_indent_cleans_every_line() {
        assert_eq!(indent("if (x) {\ny();;\n};;"), "if (x) {\n    y();\n};");
    }

    #[test]
    fn test_clean_collapses_terminator_runs() {
        assert_eq!(clean("a();;"), "a();");
        assert_eq!(clean("a();;;"), "a();");
        assert_eq!(clean("a();; b();;;"), "a(); b();");
    }

    #[test]
    fn test_clean_leaves_single_terminator() {
        assert_eq!(clean("a();"), "a();");
        assert_eq!(clean("no terminator"), "no terminator");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean("x = y;;;");
        assert_eq!(clean(&once), once);
    }
}
