//! Engine rich-text markup helpers.
//!
//! The engine reads descriptions as JSON strings in which a line break is the
//! literal two-character sequence backslash + `n`, not a real newline. All
//! joining in sheet-forge goes through [`LINE_BREAK_TOKEN`] so the token is
//! counted like any other text when measuring length.

/// Literal line-break token understood by the engine's text renderer.
pub const LINE_BREAK_TOKEN: &str = "\\n";

const COLOR_OPEN: &str = "<color=";
const COLOR_CLOSE: &str = "</color>";

/// Length of `s` in characters, the unit every text budget is measured in.
pub fn text_len(s: &str) -> usize {
    s.chars().count()
}

/// Wrap `text` in a `<color=...>` tag.
pub fn colorize(text: &str, color: &str) -> String {
    format!("{COLOR_OPEN}{color}>{text}{COLOR_CLOSE}")
}

/// True if `text` already carries an opening and a closing colour tag.
pub fn is_colorized(text: &str) -> bool {
    text.contains(COLOR_OPEN) && text.contains(COLOR_CLOSE)
}

/// Colour `text` unless it is already colour-tagged.
///
/// Already tagged text is returned untouched (including its surrounding
/// whitespace); otherwise the trimmed text is wrapped.
pub fn colorize_once(text: &str, color: &str) -> String {
    if is_colorized(text) {
        text.to_string()
    } else {
        colorize(text.trim(), color)
    }
}

/// Replace real line breaks (CRLF, CR or LF) with [`LINE_BREAK_TOKEN`].
pub fn normalize_line_breaks(s: &str) -> String {
    s.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', LINE_BREAK_TOKEN)
}

/// Join lines with [`LINE_BREAK_TOKEN`].
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(LINE_BREAK_TOKEN)
}

/// Map full-width digits (`０`..`９`) to their ASCII forms and trim.
pub fn normalize_digits(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            _ => c,
        })
        .collect()
}
