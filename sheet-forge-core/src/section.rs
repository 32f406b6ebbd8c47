//! Set-bonus sections and their full/short renderings.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::markup::{self, LINE_BREAK_TOKEN, text_len};

/// Suffix appended to a tier's piece count, e.g. `"2件套："`.
pub const TIER_SUFFIX: &str = "件套：";

/// One named bonus entry with a full and an abbreviated rendering.
///
/// The short rendering is never longer than the full one; a section without
/// a real short form carries its full text in both slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSection {
    name: String,
    full_text: String,
    short_text: String,
}

impl EffectSection {
    /// Build a section, rejecting a short text longer than the full text.
    ///
    /// An empty `short_text` means "no shorter form" and is stored as the
    /// full text.
    pub fn new(
        name: impl Into<String>,
        full_text: impl Into<String>,
        short_text: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let name = name.into();
        let full_text = full_text.into();
        let mut short_text = short_text.into();
        if short_text.is_empty() {
            short_text = full_text.clone();
        }

        let (short_len, full_len) = (text_len(&short_text), text_len(&full_text));
        if short_len > full_len {
            return Err(FormatError::malformed_section(name, short_len, full_len));
        }

        Ok(Self {
            name,
            full_text,
            short_text,
        })
    }

    /// A section with no shorter form.
    pub fn unabridged(name: impl Into<String>, full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        Self {
            name: name.into(),
            short_text: full_text.clone(),
            full_text,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn short_text(&self) -> &str {
        &self.short_text
    }

    /// Characters saved by switching to the short rendering.
    pub fn gain(&self) -> usize {
        text_len(&self.full_text) - text_len(&self.short_text)
    }
}

/// A set-bonus tier: how many pieces are needed and what they grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub need: String,
    pub effect: String,
}

impl Tier {
    pub fn new(need: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            need: need.into(),
            effect: effect.into(),
        }
    }

    /// A tier only renders when both the piece count and the effect are set.
    pub fn is_complete(&self) -> bool {
        !self.need.is_empty() && !self.effect.is_empty()
    }

    pub fn prefix(&self) -> String {
        format!("{}{TIER_SUFFIX}", self.need)
    }

    /// Uncoloured `"{need}件套：{effect}"` line.
    pub fn plain_line(&self) -> String {
        format!("{}{}", self.prefix(), self.effect)
    }
}

/// Colours used when rendering set sections into engine markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetStyle {
    /// Colour of the set-name header line.
    pub name_color: String,
    /// Colour of the `"N件套："` prefix on highlighted tiers.
    pub tier_prefix_color: String,
    /// Piece counts whose prefix gets coloured. Others stay plain.
    pub highlighted_needs: Vec<String>,
}

impl Default for SetStyle {
    fn default() -> Self {
        Self {
            name_color: "#71db60".to_string(),
            tier_prefix_color: "#FFFFFFBF".to_string(),
            highlighted_needs: vec!["2".to_string(), "4".to_string()],
        }
    }
}

impl SetStyle {
    /// Coloured set-name header.
    pub fn header(&self, name: &str) -> String {
        markup::colorize(name, &self.name_color)
    }

    /// Render one tier line, or `None` if the tier is incomplete.
    pub fn tier_line(&self, tier: &Tier) -> Option<String> {
        if !tier.is_complete() {
            return None;
        }
        let need = markup::normalize_digits(&tier.need);
        if self.highlighted_needs.iter().any(|n| *n == need) {
            Some(format!(
                "{}{}",
                markup::colorize(&tier.prefix(), &self.tier_prefix_color),
                tier.effect
            ))
        } else {
            Some(tier.plain_line())
        }
    }

    /// Header followed by every complete tier line.
    pub fn render_full(&self, name: &str, tiers: &[Tier]) -> String {
        let mut lines = vec![self.header(name)];
        lines.extend(tiers.iter().filter_map(|t| self.tier_line(t)));
        markup::join_lines(&lines)
    }

    /// Header followed by the one-line summary. `None` without a summary.
    pub fn render_short(&self, name: &str, summary: &str) -> Option<String> {
        let summary = summary.trim();
        if summary.is_empty() {
            return None;
        }
        Some(format!("{}{LINE_BREAK_TOKEN}{summary}", self.header(name)))
    }
}
