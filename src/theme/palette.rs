//! Predefined accent colors offered by the color picker.

use super::color::Rgb;

/// One named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb,
}

pub const PALETTE: [PaletteEntry; 10] = [
    entry("Blue", 0x3b, 0x82, 0xf6),
    entry("Purple", 0x8b, 0x5c, 0xf6),
    entry("Pink", 0xec, 0x48, 0x99),
    entry("Red", 0xef, 0x44, 0x44),
    entry("Orange", 0xf9, 0x73, 0x16),
    entry("Yellow", 0xea, 0xb3, 0x08),
    entry("Green", 0x22, 0xc5, 0x5e),
    entry("Teal", 0x14, 0xb8, 0xa6),
    entry("Cyan", 0x06, 0xb6, 0xd4),
    entry("Indigo", 0x63, 0x66, 0xf1),
];

const fn entry(name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry {
        name,
        color: Rgb::new(r, g, b),
    }
}

/// Look up an entry by case-insensitive name.
pub fn find_by_name(name: &str) -> Option<PaletteEntry> {
    let trimmed = name.trim();
    PALETTE
        .iter()
        .copied()
        .find(|entry| entry.name.eq_ignore_ascii_case(trimmed))
}

/// Look up the entry whose color matches exactly.
pub fn find_by_color(color: Rgb) -> Option<PaletteEntry> {
    PALETTE.iter().copied().find(|entry| entry.color == color)
}
