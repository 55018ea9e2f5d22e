//! Colour type, parsing and blending.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::error::{Result, ScatterError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats (case-insensitive, `#` required):
    /// - `#RRGGBB` (alpha defaults to 255)
    /// - `#RRGGBBAA`
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || ScatterError::InvalidColorFormat {
            value: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
                parse_hex_byte(&hex[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Sample a colour with every channel (alpha included) drawn
    /// independently and uniformly from `0..=255`.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let [r, g, b, a] = rng.next_u32().to_le_bytes();
        Self::new(r, g, b, a)
    }

    /// Composite `overlay` over an opaque `base` (source-over on RGB).
    ///
    /// Each channel is `base * (1 - a) + overlay * a` with `a = overlay.a / 255`,
    /// truncated. Evaluated in integers so the truncation is exact. The result
    /// is always fully opaque.
    pub fn blend(base: Colour, overlay: Colour) -> Colour {
        let alpha = overlay.a as u32;
        let mix = |b: u8, o: u8| ((b as u32 * (255 - alpha) + o as u32 * alpha) / 255) as u8;
        Colour::rgb(
            mix(base.r, overlay.r),
            mix(base.g, overlay.g),
            mix(base.b, overlay.b),
        )
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from an RGBA array.
    pub fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// How the colour of each scatter point is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourSpec {
    /// Every point uses the same colour.
    Fixed(Colour),
    /// Every point samples a fresh random colour.
    Random,
}

impl ColourSpec {
    /// Parse `random` (any case) or a hex colour.
    pub fn parse(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else {
            Colour::from_hex(s).map(Self::Fixed)
        }
    }

    /// Produce the colour for one use. `Random` consumes one draw from `rng`;
    /// `Fixed` consumes nothing.
    pub fn resolve(&self, rng: &mut dyn RngCore) -> Colour {
        match self {
            Self::Fixed(colour) => *colour,
            Self::Random => Colour::random(rng),
        }
    }
}

impl FromStr for ColourSpec {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ColourSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(colour) => colour.fmt(f),
            Self::Random => f.write_str("random"),
        }
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ScatterError::InvalidColorFormat {
        value: s.to_string(),
    })
}
