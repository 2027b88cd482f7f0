//! Terminal display-width accounting for the block report.
//!
//! Box alignment breaks if any glyph occupies more columns than assumed, so
//! width is computed per character: a fixed, enumerated set of wide symbols
//! counts as two columns, everything else as one. Box-drawing characters and
//! ASCII all render single-width.

/// Symbols that terminals render two columns wide. Only glyphs the report
/// can actually emit (plus close kin) are enumerated.
const WIDE_GLYPHS: &[char] = &['⛔', '❌', '✅', '🚫', '⚠', '📦', '💡', '🔒'];

/// Columns occupied by a single character.
pub fn char_width(c: char) -> usize {
    if WIDE_GLYPHS.contains(&c) { 2 } else { 1 }
}

/// Columns occupied by a string.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate `s` so its display width is at most `max`, appending `…` when
/// content was dropped. The result's width never exceeds `max`.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = char_width(c);
        // Reserve one column for the ellipsis
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
