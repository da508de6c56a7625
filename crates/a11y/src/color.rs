//! Resolved-style color parsing.
//!
//! Handles the value shapes a host adapter reports for `color` and
//! `background-color`: hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), functional
//! `rgb()`/`rgba()`, the `transparent` keyword, and a small set of named
//! colors. Anything else parses to `None` and the contrast check treats the
//! element as unevaluable.

use std::sync::OnceLock;

use regex_lite::Regex;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Parse a resolved style color value.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        if value.is_empty() {
            return None;
        }
        if value == "transparent" {
            return Some(Self {
                r: 0,
                g: 0,
                b: 0,
                alpha: 0.0,
            });
        }
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        if value.starts_with("rgb") {
            return parse_rgb_fn(&value);
        }
        named_color(&value)
    }

    /// Fully transparent colors render no ink at all.
    pub fn is_transparent(&self) -> bool {
        self.alpha == 0.0
    }

    /// Whether two colors have identical ink, ignoring alpha.
    pub fn same_rgb(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = digits(&hex[0..1])?;
            let g = digits(&hex[1..2])?;
            let b = digits(&hex[2..3])?;
            Some(Color::opaque(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let r = digits(&hex[0..2])?;
            let g = digits(&hex[2..4])?;
            let b = digits(&hex[4..6])?;
            let alpha = if hex.len() == 8 {
                digits(&hex[6..8])? as f64 / 255.0
            } else {
                1.0
            };
            Some(Color { r, g, b, alpha })
        }
        _ => None,
    }
}

fn rgb_fn_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
            .ok()
    })
    .as_ref()
}

fn parse_rgb_fn(value: &str) -> Option<Color> {
    let captures = rgb_fn_regex()?.captures(value)?;
    let channel = |i: usize| -> Option<u8> { captures.get(i)?.as_str().parse().ok() };
    let alpha = match captures.get(4) {
        Some(a) => a.as_str().parse().ok()?,
        None => 1.0,
    };
    Some(Color {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        alpha,
    })
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::opaque(0, 0, 0),
        "white" => Color::opaque(255, 255, 255),
        "red" => Color::opaque(255, 0, 0),
        "green" => Color::opaque(0, 128, 0),
        "blue" => Color::opaque(0, 0, 255),
        "yellow" => Color::opaque(255, 255, 0),
        "orange" => Color::opaque(255, 165, 0),
        "gray" | "grey" => Color::opaque(128, 128, 128),
        "silver" => Color::opaque(192, 192, 192),
        "lightgray" | "lightgrey" => Color::opaque(211, 211, 211),
        "darkgray" | "darkgrey" => Color::opaque(169, 169, 169),
        _ => return None,
    };
    Some(color)
}

/// Documented table of foreground/background pairs known to read poorly.
///
/// This is the whole contrast heuristic: equality, transparency, and
/// membership here. It is intentionally NOT a relative-luminance ratio;
/// replacing it with one would shift compliance scores and is a separate,
/// reviewed change.
const KNOWN_POOR_PAIRS: [((u8, u8, u8), (u8, u8, u8)); 6] = [
    // yellow on white / white on yellow
    ((255, 255, 0), (255, 255, 255)),
    ((255, 255, 255), (255, 255, 0)),
    // light grays on white
    ((211, 211, 211), (255, 255, 255)),
    ((192, 192, 192), (255, 255, 255)),
    // mid-gray on silver and the reverse
    ((128, 128, 128), (169, 169, 169)),
    ((169, 169, 169), (128, 128, 128)),
];

/// Whether a foreground/background pair is in the known-poor table.
pub fn is_known_poor_pair(foreground: &Color, background: &Color) -> bool {
    KNOWN_POOR_PAIRS.contains(&(foreground.rgb(), background.rgb()))
}
