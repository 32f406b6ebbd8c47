//! Writing exported files.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ExportError;

/// Indentation used for exported JSON unless a dataset says otherwise.
pub const DEFAULT_INDENT: usize = 2;

/// Pretty-print `value` with `indent` spaces per level, keeping non-ASCII
/// text unescaped.
pub fn to_json_bytes<T: Serialize>(value: &T, indent: usize) -> Result<Vec<u8>, ExportError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T, indent: usize) -> Result<(), ExportError> {
    let bytes = to_json_bytes(value, indent)?;
    write_bytes(path, &bytes)
}

/// Write UTF-8 text, creating parent directories.
pub fn write_text(path: &Path, text: &str) -> Result<(), ExportError> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_err = |e| ExportError::io(path.display().to_string(), e);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_width() {
        let value = serde_json::json!({ "a": ["火"] });
        let two = String::from_utf8(to_json_bytes(&value, 2).unwrap()).unwrap();
        assert_eq!(two, "{\n  \"a\": [\n    \"火\"\n  ]\n}");
        let three = String::from_utf8(to_json_bytes(&value, 3).unwrap()).unwrap();
        assert_eq!(three, "{\n   \"a\": [\n      \"火\"\n   ]\n}");
    }

    #[test]
    fn test_line_break_token_is_escaped_backslash() {
        let value = serde_json::json!("a\\nb");
        let out = String::from_utf8(to_json_bytes(&value, 2).unwrap()).unwrap();
        assert_eq!(out, r#""a\\nb""#);
    }
}
