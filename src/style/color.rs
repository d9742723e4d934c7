//! RGBA colors parsed from stylesheet literals.

use std::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color from components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from components including alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(literal: &str) -> Option<Color> {
        let hex = literal.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Look up a well-known color name. Case-insensitive.
    pub fn named(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "transparent" => Color::TRANSPARENT,
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "lime" => Color::rgb(0, 255, 0),
            "blue" => Color::BLUE,
            "yellow" => Color::rgb(255, 255, 0),
            "orange" => Color::rgb(255, 165, 0),
            "cyan" => Color::rgb(0, 255, 255),
            "magenta" => Color::rgb(255, 0, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            "cornflowerblue" => Color::rgb(100, 149, 237),
            _ => return None,
        };
        Some(color)
    }

    /// Parse either a hex literal or a well-known name.
    pub fn parse(literal: &str) -> Option<Color> {
        if literal.starts_with('#') {
            Color::from_hex(literal)
        } else {
            Color::named(literal)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}
