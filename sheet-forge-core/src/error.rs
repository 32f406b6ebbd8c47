use thiserror::Error;

/// Errors raised while building formatted text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A section's short rendering is longer than its full rendering.
    #[error("Malformed section '{name}': short text is {short_len} chars, full text is {full_len}")]
    MalformedSection {
        name: String,
        short_len: usize,
        full_len: usize,
    },
}

impl FormatError {
    pub fn malformed_section(name: impl Into<String>, short_len: usize, full_len: usize) -> Self {
        Self::MalformedSection {
            name: name.into(),
            short_len,
            full_len,
        }
    }
}
