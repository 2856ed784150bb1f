//! Small text-assembly helpers shared by the script and rectangle builders.

/// One unit of rectangle nesting indentation.
pub(crate) const INDENT: &str = "  ";

/// Append `line` to `buffer` on a new line.
///
/// The first append into an empty buffer takes no leading newline, so
/// sibling blocks join with single separators.
pub(crate) fn append_line(buffer: &mut String, line: &str) {
    if buffer.is_empty() {
        buffer.push_str(line);
    } else {
        buffer.push('\n');
        buffer.push_str(line);
    }
}

/// Indent a (possibly multi-line) block by one [`INDENT`] unit.
///
/// Every embedded newline is re-indented uniformly, so content nested `k`
/// levels deep ends up prefixed with `k` indent units on every line.
pub(crate) fn indent_block(block: &str) -> String {
    format!("{INDENT}{}", block.replace('\n', &format!("\n{INDENT}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_line_into_empty_buffer() {
        let mut buffer = String::new();
        append_line(&mut buffer, "first");
        append_line(&mut buffer, "second");
        assert_eq!(buffer, "first\nsecond");
    }

    #[test]
    fn test_indent_block_single_line() {
        assert_eq!(indent_block("class A"), "  class A");
    }

    #[test]
    fn test_indent_block_reindents_embedded_newlines() {
        assert_eq!(indent_block("class A {\n  +x\n}"), "  class A {\n    +x\n  }");
    }
}
