// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bluom CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `BLUOM_THEME` first, then `COLORFGBG`, then defaults to dark. Colour is
//! only emitted on a TTY and never when `NO_COLOR` is set, so piped output
//! stays plain.
//!
//! The authority badge lives here and only here. It is a display threshold on
//! the raw link count and has nothing to do with how results are scored.

use bluom::{CatalogSummary, RankedRecord};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Shown in place of results when the catalog could not be loaded.
pub const LOAD_FAILED_ADVISORY: &str =
    "The catalog could not be loaded. Search is unavailable until it is reloaded.";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BLUOM_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off.
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to at most `max` characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let b = border();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!("{}│{}{}{}{}│{}", b, reset(), content, " ".repeat(pad), b, reset());
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let b = border();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        b,
        reset(),
        label_part,
        b,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    let b = border();
    println!("{}├{}┤{}", b, "─".repeat(BOX_WIDTH), reset());
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let b = border();
    println!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// AUTHORITY BADGE
// ═══════════════════════════════════════════════════════════════════════════

/// Display-only popularity marker derived from the raw link count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityBadge {
    /// More than 5 inbound links.
    High,
    /// More than 1 inbound link.
    Linked,
}

impl AuthorityBadge {
    pub fn for_links(links: Option<u64>) -> Option<Self> {
        match links {
            Some(n) if n > 5 => Some(AuthorityBadge::High),
            Some(n) if n > 1 => Some(AuthorityBadge::Linked),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthorityBadge::High => "high authority",
            AuthorityBadge::Linked => "linked",
        }
    }
}

/// Color-coded badge, empty when the record earns none.
pub fn authority_badge(links: Option<u64>) -> String {
    match AuthorityBadge::for_links(links) {
        Some(badge @ AuthorityBadge::High) => {
            themed(BRIGHT_GREEN, &[BOLD], &format!("[{}]", badge.label()))
        }
        Some(badge @ AuthorityBadge::Linked) => themed(GREEN, &[], &format!("[{}]", badge.label())),
        None => String::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.2}", score);
    let color_fn: fn() -> String = if score >= 100.0 {
        BRIGHT_GREEN
    } else if score >= 50.0 {
        GREEN
    } else if score >= 10.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color_fn, &[], &text)
}

/// Render one result as a card inside the current box.
pub fn result_card(position: usize, result: &RankedRecord) {
    let record = &result.record;
    let title = if record.title.trim().is_empty() {
        "(untitled)"
    } else {
        record.title.as_str()
    };

    let heading = format!(
        " {:>3}. {}",
        position,
        themed(BRIGHT_CYAN, &[BOLD], &truncate(title, BOX_WIDTH - 8))
    );
    row(&heading);
    row(&format!("      {}", themed(BLUE, &[], &truncate(&record.url, BOX_WIDTH - 7))));
    if !record.description.trim().is_empty() {
        row(&format!(
            "      {}",
            themed(GRAY, &[], &truncate(record.description.trim(), BOX_WIDTH - 7))
        ));
    }
    let links = record
        .links
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    row(&format!(
        "      score {}   links {}  {}",
        score_value(result.score),
        pad_right(&links, 6),
        authority_badge(record.links)
    ));
}

/// Render a full result list: header with count, cards, footer.
///
/// `limit` only bounds how many cards are drawn; the count is always the full
/// number of matches. Zero means no limit.
pub fn result_list(query: &str, results: &[RankedRecord], limit: usize) {
    let shown = if limit == 0 {
        results.len()
    } else {
        results.len().min(limit)
    };
    section_top(&format!(
        "{} result{} for \"{}\"",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        truncate(query, 40)
    ));
    if results.is_empty() {
        row(&themed(GRAY, &[], " No matching domains."));
    }
    for (i, result) in results.iter().take(shown).enumerate() {
        if i > 0 {
            section_mid();
        }
        result_card(i + 1, result);
    }
    if shown < results.len() {
        section_mid();
        row(&themed(
            GRAY,
            &[DIM],
            &format!(" … {} more not shown", results.len() - shown),
        ));
    }
    section_bot();
}

/// Static advisory in place of results.
pub fn load_failed_advisory() {
    section_top("Catalog unavailable");
    row(&format!(" {}", themed(RED, &[BOLD], LOAD_FAILED_ADVISORY)));
    section_bot();
}

/// Render catalog statistics.
pub fn catalog_summary(location: &str, summary: &CatalogSummary) {
    section_top("Catalog");
    row(&format!(" source        {}", truncate(location, BOX_WIDTH - 16)));
    row(&format!(" records       {}", summary.records));
    row(&format!(" fingerprint   {:08x}", summary.fingerprint));
    section_mid();
    row(&format!(
        " links         {} with, {} without",
        summary.with_links, summary.without_links
    ));
    row(&format!(" total links   {}", summary.total_links));
    row(&format!(" max links     {}", summary.max_links));
    row(&format!(" untitled      {}", summary.untitled));
    row(&format!(" invalid urls  {}", summary.invalid_urls));
    if !summary.duplicate_domains.is_empty() {
        section_mid();
        row(&themed(
            YELLOW,
            &[BOLD],
            &format!(" {} duplicate domains", summary.duplicate_domains.len()),
        ));
        for (domain, count) in &summary.duplicate_domains {
            row(&format!("   {} ×{}", truncate(domain, BOX_WIDTH - 12), count));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
