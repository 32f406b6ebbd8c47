//! Plain-text dumps for localisation and proofreading.

use sheet_forge_core::{LINE_BREAK_TOKEN, SetStyle, Tier};
use sheet_forge_table::{BonusSetTable, ItemTextRow};

const TIER_JOINER: &str = "  ";

/// Set name, its tier lines on one line, then a blank line, per set.
pub fn render_set_text(sets: &BonusSetTable) -> String {
    let mut lines = Vec::with_capacity(sets.len() * 3);
    for set in sets.iter() {
        let tiers: Vec<String> = set.complete_tiers().map(Tier::plain_line).collect();
        lines.push(set.name.clone());
        lines.push(tiers.join(TIER_JOINER));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Item title, then `(base)`, set header and summary as one engine line.
pub fn render_item_text(items: &[ItemTextRow], sets: &BonusSetTable, style: &SetStyle) -> String {
    let mut lines = Vec::with_capacity(items.len() * 3);
    for item in items {
        lines.push(item.title.clone());
        lines.push(item_block(item, sets, style));
        lines.push(String::new());
    }
    lines.join("\n")
}

fn item_block(item: &ItemTextRow, sets: &BonusSetTable, style: &SetStyle) -> String {
    let Some(set_name) = item.set_name.as_deref() else {
        return String::new();
    };

    let mut parts = Vec::with_capacity(3);
    if !item.base_effect.is_empty() {
        parts.push(format!("({})", item.base_effect));
    }
    parts.push(style.header(set_name));
    let summary = match sets.get(set_name) {
        Some(set) => set.summary_or_effects(),
        None => {
            log::warn!("Item '{}': unknown set '{set_name}'", item.title);
            String::new()
        }
    };
    parts.push(summary);
    parts.join(LINE_BREAK_TOKEN)
}
