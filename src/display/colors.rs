//! Color tokens
//!
//! Categories carry an opaque color token (e.g. `bg-blue-500`). The core
//! never interprets it; this module maps tokens to hex codes and terminal
//! escapes for display.

use crate::reports::UtilizationBand;

/// Hex code used for any token not in the table
pub const FALLBACK_HEX: &str = "#3b82f6";

const TOKEN_HEX: &[(&str, &str)] = &[
    ("bg-blue-500", "#3b82f6"),
    ("bg-green-500", "#10b981"),
    ("bg-purple-500", "#8b5cf6"),
    ("bg-yellow-500", "#f59e0b"),
    ("bg-pink-500", "#ec4899"),
    ("bg-red-500", "#ef4444"),
    ("bg-indigo-500", "#6366f1"),
    ("bg-teal-500", "#14b8a6"),
    ("bg-orange-500", "#f97316"),
    ("bg-gray-500", "#6b7280"),
];

/// Tokens offered when creating a category
pub const CATEGORY_PALETTE: &[&str] = &[
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-yellow-500",
    "bg-pink-500",
    "bg-red-500",
    "bg-indigo-500",
    "bg-teal-500",
    "bg-orange-500",
];

/// Hex code for a color token
pub fn token_hex(token: &str) -> &'static str {
    TOKEN_HEX
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, hex)| *hex)
        .unwrap_or(FALLBACK_HEX)
}

/// Whether the token is one we know how to render
pub fn is_known_token(token: &str) -> bool {
    TOKEN_HEX.iter().any(|(t, _)| *t == token)
}

fn hex_rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (channel(1..3), channel(3..5), channel(5..7))
}

/// Wrap `text` in a 24-bit foreground escape for the token's color
pub fn paint_token(text: &str, token: &str) -> String {
    let (r, g, b) = hex_rgb(token_hex(token));
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}

/// Wrap `text` in the escape for a utilization band (green, amber, red)
pub fn paint_band(text: &str, band: UtilizationBand) -> String {
    let code = match band {
        UtilizationBand::Ok => "32",
        UtilizationBand::Warning => "33",
        UtilizationBand::Over => "31",
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_tokens() {
        assert_eq!(token_hex("bg-red-500"), "#ef4444");
        assert_eq!(token_hex("bg-gray-500"), "#6b7280");
        assert_eq!(token_hex("chartreuse"), FALLBACK_HEX);
        assert!(is_known_token("bg-teal-500"));
        assert!(!is_known_token(""));
    }

    #[test]
    fn test_palette_tokens_are_known() {
        assert!(CATEGORY_PALETTE.iter().all(|t| is_known_token(t)));
    }

    #[test]
    fn test_paint() {
        assert_eq!(hex_rgb("#10b981"), (16, 185, 129));
        assert_eq!(paint_token("x", "bg-blue-500"), "\x1b[38;2;59;130;246mx\x1b[0m");
        assert_eq!(paint_band("x", UtilizationBand::Over), "\x1b[31mx\x1b[0m");
    }
}
