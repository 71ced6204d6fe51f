// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the stable-match CLI.
//!
//! Colored verdicts, box-drawn bench summaries and timing values. Colors are
//! OneDark true-color codes; `NO_COLOR` and non-TTY stdout turn them off, so
//! piped output is plain text that scripts can match on.

use std::sync::OnceLock;

use stable_match::Verdict;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod palette {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

static USE_COLORS: OnceLock<bool> = OnceLock::new();

/// Colors only for an interactive stdout without `NO_COLOR`. Cached.
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        atty::is(atty::Stream::Stdout)
    })
}

fn paint_with(enabled: bool, color: (u8, u8, u8), modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), rgb(color), text, RESET)
    } else {
        text.to_string()
    }
}

fn paint(color: (u8, u8, u8), modifiers: &[&str], text: &str) -> String {
    paint_with(use_colors(), color, modifiers, text)
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

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        rgb(palette::GRAY)
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

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", paint(palette::CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

fn verdict_with(enabled: bool, verdict: &Verdict) -> String {
    let text = verdict.to_string();
    match verdict {
        Verdict::Stable => paint_with(enabled, palette::GREEN, &[BOLD], &text),
        Verdict::Unstable(_) => paint_with(enabled, palette::YELLOW, &[BOLD], &text),
        Verdict::Invalid(_) => paint_with(enabled, palette::RED, &[BOLD], &text),
    }
}

/// The verdict line, colored by outcome.
pub fn verdict(verdict: &Verdict) -> String {
    verdict_with(use_colors(), verdict)
}

pub fn error(text: &str) -> String {
    paint(palette::RED, &[BOLD], text)
}

pub fn success(text: &str) -> String {
    paint(palette::GREEN, &[], text)
}

pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

/// Color-coded timing value in µs (green=fast, yellow=medium, red=slow)
pub fn timing_us(value: f64) -> String {
    let text = format!("{:>12.1}", value);
    let color = if value < 1_000.0 {
        palette::GREEN
    } else if value < 100_000.0 {
        palette::YELLOW
    } else {
        palette::RED
    };
    paint(color, &[], &text)
}
