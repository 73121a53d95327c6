//! Escaping utilities for report generation.
//!
//! Listing titles come straight from scraped pages and may contain Markdown
//! syntax or control characters. Escape them before embedding in a report.

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// Escapes pipes and backslashes and flattens line breaks, so a title can
/// never split or break out of its cell.
///
/// ```
/// use product_ranker::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("A | B"), "A \\| B");
/// assert_eq!(escape_markdown_table("two\nlines"), "two lines");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\\' => result.push_str("\\\\"),
            '\n' | '\r' | '\t' => result.push(' '),
            c if c.is_control() => {}
            _ => result.push(c),
        }
    }
    result
}

/// Strip control characters (including ANSI escapes) from terminal output.
#[must_use]
pub fn strip_control(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}
