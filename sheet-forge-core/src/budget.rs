//! Length-budgeted description blocks.
//!
//! A description block is a base line followed by set-bonus sections, joined
//! with a separator token. When the full rendering is longer than the budget,
//! sections are switched to their short renderings one at a time, largest
//! saving first, until the block fits or nothing is left to shorten.

use std::cmp::Reverse;

use crate::markup::{LINE_BREAK_TOKEN, text_len};
use crate::section::EffectSection;

/// Maximum length of a composed block, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    /// No length check at all.
    #[default]
    Unlimited,
    /// At most this many characters, markup and separators included.
    Chars(usize),
}

impl Budget {
    /// `None` means unlimited.
    pub fn from_limit(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unlimited, Self::Chars)
    }

    pub fn allows(&self, len: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Chars(max) => len <= *max,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Chars(max) => Some(*max),
        }
    }
}

/// The inputs for one composed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionBlock {
    base_line: Option<String>,
    sections: Vec<EffectSection>,
    budget: Budget,
}

impl DescriptionBlock {
    pub fn new(base_line: Option<String>, sections: Vec<EffectSection>, budget: Budget) -> Self {
        Self {
            base_line,
            sections,
            budget,
        }
    }

    pub fn base_line(&self) -> Option<&str> {
        self.base_line.as_deref()
    }

    pub fn sections(&self) -> &[EffectSection] {
        &self.sections
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }
}

/// Result of formatting a [`DescriptionBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    /// The composed text (best effort when over budget).
    pub text: String,
    /// False when even the shortest rendering exceeds the budget.
    pub within_budget: bool,
    /// Indices of sections rendered with their short text, in section order.
    pub shortened: Vec<usize>,
}

impl FormattedText {
    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        text_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_shortened(&self) -> bool {
        !self.shortened.is_empty()
    }
}

/// Composes description blocks under a character budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionBudgetFormatter {
    separator: String,
}

impl Default for DescriptionBudgetFormatter {
    fn default() -> Self {
        Self::new(LINE_BREAK_TOKEN)
    }
}

impl DescriptionBudgetFormatter {
    /// Create a formatter joining parts with `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn format(&self, block: &DescriptionBlock) -> FormattedText {
        self.format_parts(block.base_line(), block.sections(), block.budget())
    }

    /// Compose `base_line` and `sections`, shortening sections as needed.
    ///
    /// Sections keep their order and each contributes exactly one rendering.
    /// Sections are shortened in descending order of gain; ties keep their
    /// original order. Sections with no gain are never shortened.
    pub fn format_parts(
        &self,
        base_line: Option<&str>,
        sections: &[EffectSection],
        budget: Budget,
    ) -> FormattedText {
        let mut use_short = vec![false; sections.len()];
        let mut len = self.joined_len(base_line, sections);

        if !budget.allows(len) {
            let mut order: Vec<usize> = (0..sections.len()).collect();
            order.sort_by_key(|&i| Reverse(sections[i].gain()));

            for i in order {
                if budget.allows(len) {
                    break;
                }
                let gain = sections[i].gain();
                if gain == 0 {
                    // Sorted by gain, so nothing after this can help either.
                    break;
                }
                use_short[i] = true;
                len -= gain;
            }
        }

        let text = self.join(base_line, sections, &use_short);
        debug_assert_eq!(text_len(&text), len);

        FormattedText {
            text,
            within_budget: budget.allows(len),
            shortened: use_short
                .iter()
                .enumerate()
                .filter_map(|(i, &short)| short.then_some(i))
                .collect(),
        }
    }

    /// Length of the all-full rendering.
    fn joined_len(&self, base_line: Option<&str>, sections: &[EffectSection]) -> usize {
        let parts = base_line.map(text_len).into_iter().chain(
            sections
                .iter()
                .map(|section| text_len(section.full_text())),
        );

        let mut count = 0usize;
        let mut total = 0;
        for part_len in parts {
            total += part_len;
            count += 1;
        }
        total + count.saturating_sub(1) * text_len(&self.separator)
    }

    fn join(&self, base_line: Option<&str>, sections: &[EffectSection], use_short: &[bool]) -> String {
        let parts: Vec<&str> = base_line
            .into_iter()
            .chain(sections.iter().zip(use_short).map(|(section, &short)| {
                if short {
                    section.short_text()
                } else {
                    section.full_text()
                }
            }))
            .collect();
        parts.join(&self.separator)
    }
}

#[cfg(test)]
#[path = "tests/budget_tests.rs"]
mod tests;
