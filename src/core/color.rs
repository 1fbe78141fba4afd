use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color, serialized as the CSS string the rendering surface consumes
/// (`"rgba(r, g, b, a)"`; hex `#rrggbb` is accepted on parse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Neutral placeholder used before a color source has run.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::rgba(201, 203, 207, 0.8)
    }

    #[must_use]
    pub fn to_css(self) -> String {
        // f64 Display prints the shortest string that parses back to the same
        // value, so the alpha channel survives save/load cycles exactly.
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    #[must_use]
    pub fn parse_css(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let body = input
            .strip_prefix("rgba")
            .or_else(|| input.strip_prefix("rgb"))?
            .trim()
            .strip_prefix('(')?
            .strip_suffix(')')?;
        let mut parts = body.split(',').map(str::trim);

        let r = parts.next()?.parse::<u8>().ok()?;
        let g = parts.next()?.parse::<u8>().ok()?;
        let b = parts.next()?.parse::<u8>().ok()?;
        let a = match parts.next() {
            Some(raw) => raw.parse::<f64>().ok().filter(|a| (0.0..=1.0).contains(a))?,
            None => 1.0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b, a })
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CssColorVisitor;

        impl Visitor<'_> for CssColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a css color string like \"rgba(54, 162, 235, 0.8)\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
                Color::parse_css(value)
                    .ok_or_else(|| E::custom(format!("unrecognized color: {value:?}")))
            }
        }

        deserializer.deserialize_str(CssColorVisitor)
    }
}

/// Injected capability that supplies colors for new datasets and segments.
///
/// Keeping color generation behind a trait decouples the mutation and
/// transform layers from any host palette singleton, and lets tests pin a
/// fixed source for byte-identical output.
pub trait ColorSource {
    fn next_colors(&mut self, count: usize) -> Vec<Color>;

    fn next_color(&mut self) -> Color {
        self.next_colors(1)
            .into_iter()
            .next()
            .unwrap_or_else(Color::placeholder)
    }
}

const PALETTE: [(u8, u8, u8); 8] = [
    (54, 162, 235),
    (255, 99, 132),
    (255, 159, 64),
    (75, 192, 192),
    (153, 102, 255),
    (255, 205, 86),
    (22, 160, 133),
    (201, 60, 100),
];

/// Deterministic default color source cycling a fixed palette.
#[derive(Debug, Clone, Default)]
pub struct PaletteColorSource {
    cursor: usize,
}

impl PaletteColorSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for PaletteColorSource {
    fn next_colors(&mut self, count: usize) -> Vec<Color> {
        (0..count)
            .map(|_| {
                let (r, g, b) = PALETTE[self.cursor % PALETTE.len()];
                self.cursor += 1;
                Color::rgba(r, g, b, 0.8)
            })
            .collect()
    }
}
