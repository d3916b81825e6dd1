//! Terminal rendering helpers for reflections.
//!
//! All functions are pure string builders: they take gateway values plus the
//! language-display table and return formatted text. No I/O here, so every
//! layout can be tested with substitute language tables.

use reflections_core::{LanguageCode, LanguageTable, Reflection, StatisticsSummary};
use std::collections::BTreeMap;
use std::fmt::Write;

const BOX_WIDTH: usize = 78;
const WIDE_WIDTH: usize = 100;

/// Greedy word wrap to at most `width` characters per line.
///
/// Counts characters, not display cells; wide glyphs may overflow slightly,
/// matching the rest of the fixed-width layout.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    for _ in len..width {
        padded.push(' ');
    }
    padded
}

/// Centers `text` within `width` characters.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), text)
}

fn box_line(out: &mut String, text: &str, inner: usize) {
    let _ = writeln!(out, "\u{2502} {} \u{2502}", pad_right(text, inner));
}

fn box_rule(out: &mut String, left: char, right: char, inner: usize) {
    let _ = writeln!(out, "{left}{}{right}", "\u{2500}".repeat(inner + 2));
}

/// Renders one reflection inside a box; `show_full_text` toggles the body.
pub fn boxed_reflection(reflection: &Reflection, show_full_text: bool) -> String {
    let inner = BOX_WIDTH - 4;
    let mut out = String::new();

    box_rule(&mut out, '\u{250c}', '\u{2510}', inner);
    box_line(&mut out, &format!("\u{1F4C5} {}", reflection.date), inner);
    box_rule(&mut out, '\u{251c}', '\u{2524}', inner);
    box_line(&mut out, &format!("\u{1F4D6} {}", reflection.title), inner);
    box_rule(&mut out, '\u{251c}', '\u{2524}', inner);
    for line in wrap_text(&format!("\u{1F4AD} {}", reflection.quote), inner) {
        box_line(&mut out, &line, inner);
    }
    if show_full_text {
        box_rule(&mut out, '\u{251c}', '\u{2524}', inner);
        for line in wrap_text(&reflection.text, inner) {
            box_line(&mut out, &line, inner);
        }
    }
    box_rule(&mut out, '\u{251c}', '\u{2524}', inner);
    box_line(&mut out, &format!("\u{1F4DA} {}", reflection.reference), inner);
    box_rule(&mut out, '\u{2514}', '\u{2518}', inner);

    out
}

fn display_label(table: &LanguageTable, code: &LanguageCode) -> String {
    match table.label(code) {
        Some(label) => label.to_string(),
        None => code.to_string(),
    }
}

/// Renders every language variant of one date, in language-code order.
pub fn multilingual_display(
    variants: &BTreeMap<LanguageCode, Reflection>,
    date: &str,
    table: &LanguageTable,
) -> String {
    let mut out = String::new();
    let rule = "\u{2550}".repeat(WIDE_WIDTH);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", center(&format!("Daily reflections for {date}"), WIDE_WIDTH));
    let _ = writeln!(out, "{rule}");

    let last = variants.len().saturating_sub(1);
    for (index, (code, reflection)) in variants.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", center(&display_label(table, code), WIDE_WIDTH));
        let _ = writeln!(out, "{}", "\u{2500}".repeat(WIDE_WIDTH));
        let _ = writeln!(out, "\u{1F4D6} {}", reflection.title);
        for line in wrap_text(&reflection.quote, WIDE_WIDTH - 4) {
            let _ = writeln!(out, "  \u{201C}{line}\u{201D}");
        }
        for line in wrap_text(&reflection.text, WIDE_WIDTH - 4) {
            let _ = writeln!(out, "   {line}");
        }
        let _ = writeln!(out, "\u{1F4DA} {}", reflection.reference);
        if index < last {
            let _ = writeln!(out, "{}", "\u{b7}".repeat(WIDE_WIDTH));
        }
    }

    let _ = writeln!(out, "{rule}");
    out
}

/// Renders the statistics table with per-language display labels.
pub fn stats_table(summary: &StatisticsSummary, table: &LanguageTable) -> String {
    let inner = 46;
    let mut out = String::new();

    box_rule(&mut out, '\u{250c}', '\u{2510}', inner);
    box_line(&mut out, &center("STORE STATISTICS", inner), inner);
    box_rule(&mut out, '\u{251c}', '\u{2524}', inner);
    box_line(
        &mut out,
        &format!("Total reflections: {}", summary.total_count),
        inner,
    );
    box_rule(&mut out, '\u{251c}', '\u{2524}', inner);
    for (code, count) in &summary.by_language {
        box_line(
            &mut out,
            &format!("{}: {count}", display_label(table, code)),
            inner,
        );
    }
    box_rule(&mut out, '\u{2514}', '\u{2518}', inner);

    out
}
