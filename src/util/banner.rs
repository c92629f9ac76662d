//! Banner text used by the report surface and generated-file headers

/// Default banner width in columns
pub const DEFAULT_WIDTH: usize = 100;

/// Center `text` inside `width` columns, padding on both sides
fn centered(
    text: &str,
    width: usize,
) -> String {
    let padding = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}{}", " ".repeat(padding), text, " ".repeat(padding))
}

/// Banner printed between report sections:
///
/// ```text
/// ------------------
///
///      Lexical Analysis
///
/// ------------------
/// ```
pub fn banner(
    text: &str,
    width: usize,
) -> String {
    let rule = "-".repeat(width);
    let blank = " ".repeat(width);
    format!(
        "{rule}\n{blank}\n{}\n{blank}\n{rule}\n",
        centered(text, width)
    )
}

/// The same banner wrapped in a C block comment
pub fn comment_header(
    text: &str,
    width: usize,
) -> String {
    format!("/*\n{}*/\n", banner(text, width))
}
