//! Multi-level upgrade descriptions.
//!
//! An upgrade description is written once with bracketed alternatives, one
//! per level: `"Deal (10/20/30) damage"`. Expanding it yields one text per
//! level, plus a transition text showing the previous level turning into the
//! next one.

use crate::markup::{self, LINE_BREAK_TOKEN};

/// How expanded level texts are decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
    /// Colour applied to each chosen alternative. `None` leaves them plain.
    pub alt_color: Option<String>,
    /// Start every derived text with a line-break token.
    pub prefix_newline: bool,
}

impl Default for LevelStyle {
    fn default() -> Self {
        Self {
            alt_color: Some("#86e1f1".to_string()),
            prefix_newline: true,
        }
    }
}

/// Text shown while upgrading to a level, and the level's resting text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPair {
    pub transition: String,
    pub final_text: String,
}

impl LevelPair {
    pub fn new(transition: impl Into<String>, final_text: impl Into<String>) -> Self {
        Self {
            transition: transition.into(),
            final_text: final_text.into(),
        }
    }
}

/// A bracketed group of alternatives inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltGroup {
    /// Byte offset of the opening parenthesis.
    pub start: usize,
    /// Byte offset one past the closing parenthesis.
    pub end: usize,
    /// Trimmed alternatives, never empty.
    pub alts: Vec<String>,
}

impl AltGroup {
    /// Alternative for `level`, or the last one if the group is shorter.
    pub fn choice(&self, level: usize) -> &str {
        self.alts
            .get(level)
            .or_else(|| self.alts.last())
            .map_or("", String::as_str)
    }
}

/// Separator placed between two consecutive level texts in a transition.
pub fn level_arrow() -> String {
    format!("{LINE_BREAK_TOKEN}{LINE_BREAK_TOKEN}↓{LINE_BREAK_TOKEN}{LINE_BREAK_TOKEN}")
}

/// Find every `(...)` group that contains no nested parentheses.
pub fn collect_groups(template: &str) -> Vec<AltGroup> {
    let bytes = template.as_bytes();
    let mut groups = Vec::new();
    let mut pos = 0;

    while let Some(open) = bytes[pos..].iter().position(|&b| b == b'(').map(|p| p + pos) {
        let inner = open + 1;
        match bytes[inner..]
            .iter()
            .position(|&b| b == b'(' || b == b')')
            .map(|p| p + inner)
        {
            Some(close) if bytes[close] == b')' => {
                let alts = template[inner..close]
                    .split('/')
                    .map(|alt| alt.trim().to_string())
                    .collect();
                groups.push(AltGroup {
                    start: open,
                    end: close + 1,
                    alts,
                });
                pos = close + 1;
            }
            // Another '(' before any ')': restart from the inner one.
            Some(next_open) => pos = next_open,
            None => break,
        }
    }

    groups
}

/// Number of levels a template describes.
///
/// Without groups the sheet's limit decides (at least one level). With
/// groups it is the widest group, capped by a positive limit.
pub fn level_count(groups: &[AltGroup], limit: i64) -> usize {
    let positive_limit = usize::try_from(limit).ok().filter(|&l| l > 0);
    let widest = groups.iter().map(|g| g.alts.len()).max();

    match (widest, positive_limit) {
        (None, Some(l)) => l,
        (None, None) => 1,
        (Some(w), Some(l)) => w.min(l),
        (Some(w), None) => w,
    }
}

/// Render the text for one level.
pub fn render_level(template: &str, groups: &[AltGroup], level: usize, style: &LevelStyle) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for group in groups {
        out.push_str(&template[last..group.start]);
        let choice = group.choice(level);
        match &style.alt_color {
            Some(color) => out.push_str(&markup::colorize_once(choice, color)),
            None => out.push_str(choice),
        }
        last = group.end;
    }
    out.push_str(&template[last..]);

    let mut text = markup::normalize_line_breaks(&out);
    if style.prefix_newline && !text.starts_with(LINE_BREAK_TOKEN) {
        text.insert_str(0, LINE_BREAK_TOKEN);
    }
    text
}

/// Expand a template into per-level pairs.
///
/// Returns the pairs and the derived level count.
pub fn derive_pairs(template: &str, limit: i64, style: &LevelStyle) -> (Vec<LevelPair>, usize) {
    let groups = collect_groups(template);
    let count = level_count(&groups, limit);
    let finals: Vec<String> = (0..count)
        .map(|level| render_level(template, &groups, level, style))
        .collect();

    let arrow = level_arrow();
    let mut pairs = Vec::with_capacity(count);
    pairs.push(LevelPair::new(finals[0].clone(), finals[0].clone()));
    for window in finals.windows(2) {
        pairs.push(LevelPair::new(
            format!("{}{arrow}{}", window[0], window[1]),
            window[1].clone(),
        ));
    }

    (pairs, count)
}

/// Normalise explicitly written pairs.
///
/// Real line breaks become tokens; a blank final text falls back to the
/// transition text.
pub fn explicit_pairs(raw: &[(String, String)]) -> Vec<LevelPair> {
    raw.iter()
        .map(|(transition, final_text)| {
            let transition = markup::normalize_line_breaks(transition);
            let final_text = if final_text.trim().is_empty() {
                transition.clone()
            } else {
                markup::normalize_line_breaks(final_text)
            };
            LevelPair::new(transition, final_text)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/levels_tests.rs"]
mod tests;
