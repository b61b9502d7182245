//! Accent-color hex codec.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Default accent color (`#3b82f6`, blue).
pub const DEFAULT_ACCENT: Rgb = Rgb {
    r: 0x3b,
    g: 0x82,
    b: 0xf6,
};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `#RGB` or `#RRGGBB` (leading `#` optional, case-insensitive).
    ///
    /// Shorthand digits are doubled, so `#f00` equals `#ff0000`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ColorError::InvalidColorFormat(input.to_string());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = nibble * 0x11;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Canonical lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Space-separated channel triplet (`"59 130 246"`).
    pub fn triplet(self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_ACCENT
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
