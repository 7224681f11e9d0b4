// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color literal parsing and WCAG relative luminance / contrast math.
//!
//! Only the forms that appear in inline `style` attributes are understood:
//! `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`. Named colors and
//! `hsl()` are not resolved. The alpha component of `rgba()` is validated and
//! then dropped, so a translucent color is judged as if it were opaque.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum contrast ratio for normal text (WCAG 1.4.3, Level AA)
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+)\s*)?\)")
        .expect("valid regex")
});

/// An opaque sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// User-agent default for unvisited links
    pub const LINK_BLUE: Color = Color::new(0, 0, 0xee);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS color literal. Returns `None` for anything that is not
    /// hex or `rgb()`/`rgba()` notation.
    pub fn parse(value: &str) -> Option<Color> {
        let trimmed = value.trim().to_lowercase();
        if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if trimmed.starts_with("rgb") {
            parse_rgb(&trimmed)
        } else {
            None
        }
    }

    /// Relative luminance per WCAG 2.x, in `[0, 1]`
    pub fn luminance(self) -> f64 {
        let linear = [self.r, self.g, self.b].map(|c| {
            let v = c as f64 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });
        0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hex digits after the `#`. Digit groups are a third of the length, so
/// `abc` expands to `aabbcc`.
fn parse_hex(hex: &str) -> Option<Color> {
    let group = hex.len() / 3;
    if hex.is_empty() || hex.len() % 3 != 0 || group > 2 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| -> Option<u8> {
        let digits = &hex[i * group..(i + 1) * group];
        let digits = if group == 1 { digits.repeat(2) } else { digits.to_string() };
        u8::from_str_radix(&digits, 16).ok()
    };

    Some(Color::new(channel(0)?, channel(1)?, channel(2)?))
}

fn parse_rgb(value: &str) -> Option<Color> {
    let caps = RGB_RE.captures(value)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    if let Some(alpha) = caps.get(4) {
        alpha.as_str().parse::<f64>().ok()?;
    }
    Some(Color::new(r, g, b))
}

/// Contrast ratio between two colors, always `>= 1.0` (21.0 for black on white)
pub fn contrast_ratio(fg: Color, bg: Color) -> f64 {
    let l1 = fg.luminance();
    let l2 = bg.luminance();
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two color literals, `None` if either does not parse
pub fn contrast_ratio_str(fg: &str, bg: &str) -> Option<f64> {
    Some(contrast_ratio(Color::parse(fg)?, Color::parse(bg)?))
}
