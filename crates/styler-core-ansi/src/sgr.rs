//! SGR code resolution tables.
//!
//! The chat client renders the basic SGR set: bold (`1`), underline (`4`), foreground colors
//! `30`-`37`, and background colors `40`-`47`. Each of the two color ranges is addressed
//! through a fixed 8-entry swatch table mapping the picker's hex values to codes. Lookup is
//! case-insensitive on the hex string; a value outside the table resolves to that range's
//! default code. This fallback is deliberate: the model accepts any color value, and the
//! degradation happens here, at resolution time.

use styler_core::{Style, StyleKind};

/// SGR code for bold.
pub const BOLD: u8 = 1;

/// SGR code for underline.
pub const UNDERLINE: u8 = 4;

/// Fallback foreground code (white) for hex values outside [`FOREGROUND_SWATCHES`].
pub const DEFAULT_FOREGROUND: u8 = 37;

/// Fallback background code for hex values outside [`BACKGROUND_SWATCHES`].
pub const DEFAULT_BACKGROUND: u8 = 43;

/// The eight foreground swatches: lowercase hex → SGR code `30`-`37`.
pub const FOREGROUND_SWATCHES: [(&str, u8); 8] = [
    ("#4f545c", 30), // black
    ("#dc322f", 31), // red
    ("#859900", 32), // green
    ("#b58900", 33), // yellow
    ("#268bd2", 34), // blue
    ("#d33682", 35), // magenta
    ("#2aa198", 36), // cyan
    ("#ffffff", 37), // white
];

/// The eight background swatches: lowercase hex → SGR code `40`-`47`.
pub const BACKGROUND_SWATCHES: [(&str, u8); 8] = [
    ("#002b36", 40),
    ("#cb4b16", 41),
    ("#586e75", 42),
    ("#657b83", 43),
    ("#839496", 44),
    ("#6c71c4", 45),
    ("#93a1a1", 46),
    ("#fdf6e3", 47),
];

fn lookup(table: &[(&str, u8)], value: &str, default: u8) -> u8 {
    table
        .iter()
        .find(|(hex, _)| hex.eq_ignore_ascii_case(value))
        .map(|(_, code)| *code)
        .unwrap_or(default)
}

/// Resolve a foreground hex value to its SGR code, falling back to [`DEFAULT_FOREGROUND`].
pub fn foreground_code(value: &str) -> u8 {
    lookup(&FOREGROUND_SWATCHES, value, DEFAULT_FOREGROUND)
}

/// Resolve a background hex value to its SGR code, falling back to [`DEFAULT_BACKGROUND`].
pub fn background_code(value: &str) -> u8 {
    lookup(&BACKGROUND_SWATCHES, value, DEFAULT_BACKGROUND)
}

/// Resolve a style to its single SGR code.
pub fn style_code(style: &Style) -> u8 {
    match style.kind() {
        StyleKind::Bold => BOLD,
        StyleKind::Underline => UNDERLINE,
        StyleKind::Foreground => foreground_code(style.value()),
        StyleKind::Background => background_code(style.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_table_covers_30_to_37() {
        let mut codes: Vec<u8> = FOREGROUND_SWATCHES.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        assert_eq!(codes, (30..=37).collect::<Vec<u8>>());
    }

    #[test]
    fn test_background_table_covers_40_to_47() {
        let mut codes: Vec<u8> = BACKGROUND_SWATCHES.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        assert_eq!(codes, (40..=47).collect::<Vec<u8>>());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(foreground_code("#DC322F"), 31);
        assert_eq!(background_code("#FDF6E3"), 47);
    }

    #[test]
    fn test_unmapped_values_fall_back() {
        assert_eq!(foreground_code("#123456"), DEFAULT_FOREGROUND);
        assert_eq!(background_code("#123456"), DEFAULT_BACKGROUND);
        assert_eq!(foreground_code(""), DEFAULT_FOREGROUND);
    }

    #[test]
    fn test_style_code_dispatch() {
        assert_eq!(style_code(&Style::bold()), BOLD);
        assert_eq!(style_code(&Style::underline()), UNDERLINE);
        assert_eq!(style_code(&Style::foreground("#268bd2")), 34);
        assert_eq!(style_code(&Style::background("#002b36")), 40);
    }
}
