// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display primitives for the cramer CLI.
//!
//! Two themes, OneDark for dark terminals and One Light for light ones. The
//! active theme is process-wide and can be switched at runtime (the shell's
//! `theme` command does exactly that). When nobody has picked one, detection
//! tries `CRAMER_THEME` first, then `COLORFGBG`, then defaults to dark.
//!
//! Respects `NO_COLOR` and drops all escapes when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `--theme` flag or shell `theme` command
//! 2. `CRAMER_THEME` env var ("dark" or "light")
//! 3. `COLORFGBG` env var (terminal background hint)
//! 4. Default to dark theme

use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME SELECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        }
    }
}

const UNSET: u8 = 0;
const DARK: u8 = 1;
const LIGHT: u8 = 2;

/// Active theme; `UNSET` until detected or chosen
static THEME: AtomicU8 = AtomicU8::new(UNSET);

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("CRAMER_THEME")
        .ok()
        .as_deref()
        .and_then(Theme::parse)
    {
        return theme;
    }

    // COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                // Colors 0-6 are dark, 7+ are light except 8 (dark gray)
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme, detecting it on first use
pub fn theme() -> Theme {
    match THEME.load(Ordering::Relaxed) {
        DARK => Theme::Dark,
        LIGHT => Theme::Light,
        _ => {
            let detected = detect_theme();
            set_theme(detected);
            detected
        }
    }
}

/// Pick the theme explicitly
pub fn set_theme(theme: Theme) {
    let code = match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    };
    THEME.store(code, Ordering::Relaxed);
}

/// Switch dark <-> light and return the new theme
pub fn toggle_theme() -> Theme {
    let next = theme().toggled();
    set_theme(next);
    next
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191); // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66); // #383a42 (foreground)
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

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

// Solution/accent, headings, errors, warnings, borders
theme_color!(GREEN);
theme_color!(CYAN);
theme_color!(RED);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(WHITE);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
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

/// Border escape, empty when colors are off
fn border(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
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

/// Print a content line: │ content          │
///
/// Lines wider than the box (large systems) drop the right border.
pub fn row(content: &str) {
    let b = border(GRAY);
    let r = reset();
    let len = visible_len(content);
    if len > BOX_WIDTH {
        println!("{}│{}{}", b, r, content);
        return;
    }
    let pad = BOX_WIDTH - len;
    println!("{}│{}{}{}{}│{}", b, r, content, " ".repeat(pad), b, r);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let b = border(GRAY);
    let r = reset();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", b, r, label_part, b, "─".repeat(remaining), r);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let b = border(GRAY);
    let r = reset();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}├{}{}{}{}┤{}", b, r, label_part, b, "─".repeat(remaining), r);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(GRAY), "─".repeat(BOX_WIDTH), reset());
}

/// Print double-line header in the given accent: ╔══════════════════╗
pub fn double_header(accent: fn() -> String) {
    println!("{}╔{}╗{}", border(accent), "═".repeat(BOX_WIDTH), reset());
}

/// Print double-line divider: ╠══════════════════╣
pub fn double_divider(accent: fn() -> String) {
    println!("{}╠{}╣{}", border(accent), "═".repeat(BOX_WIDTH), reset());
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer(accent: fn() -> String) {
    println!("{}╚{}╝{}", border(accent), "═".repeat(BOX_WIDTH), reset());
}

/// Print a line inside a double box: ║ content          ║
pub fn row_double(accent: fn() -> String, content: &str) {
    let b = border(accent);
    let r = reset();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}║{}{}{}{}║{}", b, r, content, " ".repeat(pad), b, r);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Variable name `x3`, in the heading color
pub fn variable(index: usize) -> String {
    themed(CYAN, &[BOLD], &format!("x{}", index + 1))
}

/// Numeric value to six decimals, in the body color
pub fn value(v: f64) -> String {
    themed(WHITE, &[], &format!("{:.6}", v))
}

/// Numeric value highlighted as a result
pub fn highlight(text: &str) -> String {
    themed(GREEN, &[BOLD], text)
}

/// Secondary text
pub fn muted(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// `=` in green or `≈` in yellow
pub fn agreement_symbol(symbol: &str, equal: bool) -> String {
    if equal {
        themed(GREEN, &[BOLD], symbol)
    } else {
        themed(YELLOW, &[BOLD], symbol)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
