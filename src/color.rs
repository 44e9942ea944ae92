// src/color.rs

//! Defines `ColorEntry`, one 24-bit RGB color value, and the fixed range of
//! every such value from `#000000` to `#FFFFFF`.

use std::fmt;

// Bounds of the 24-bit RGB space
pub const COLOR_INDEX_MIN: u32 = 0x00_0000;
pub const COLOR_INDEX_MAX: u32 = 0xFF_FFFF;
/// Number of entries in `COLOR_INDEX_MIN..=COLOR_INDEX_MAX` (2^24).
pub const COLOR_COUNT: usize = (COLOR_INDEX_MAX - COLOR_INDEX_MIN) as usize + 1;

const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const CHANNEL_MASK: u32 = 0xFF;

/// A single color index paired with its hexadecimal form.
///
/// Formats as `"<decimal>": #<RRGGBB>`, where the hex digits are uppercase
/// and zero-padded to six places, e.g. `"255": #0000FF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorEntry {
    index: u32,
}

impl ColorEntry {
    /// Returns `None` if `index` does not fit in 24 bits.
    pub fn new(index: u32) -> Option<Self> {
        if index > COLOR_INDEX_MAX {
            return None;
        }
        Some(ColorEntry { index })
    }

    /// Packs the three channels as `0xRRGGBB`.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorEntry {
            index: (u32::from(r) << RED_SHIFT) | (u32::from(g) << GREEN_SHIFT) | u32::from(b),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Splits the index back into its `(r, g, b)` channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.index >> RED_SHIFT) & CHANNEL_MASK) as u8,
            ((self.index >> GREEN_SHIFT) & CHANNEL_MASK) as u8,
            (self.index & CHANNEL_MASK) as u8,
        )
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": #{:06X}", self.index, self.index)
    }
}

/// Every `ColorEntry` in ascending index order, generated lazily.
pub fn color_entries() -> impl ExactSizeIterator<Item = ColorEntry> + DoubleEndedIterator {
    // Half-open so the range stays ExactSizeIterator for u32.
    (COLOR_INDEX_MIN..COLOR_INDEX_MAX + 1).map(|index| ColorEntry { index })
}
