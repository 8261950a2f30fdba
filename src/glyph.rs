//! Custom 5x8 characters for the HD44780-style LCD.
//!
//! Each glyph is eight row bytes, top row first. Only the low five bits of a
//! row are drawn; bit 4 is the leftmost pixel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GLYPH_COLUMNS, GLYPH_ROWS, GLYPH_ROW_MASK, prelude::*};

/// One custom character bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, From, Into, Serialize, Deserialize)]
pub struct Glyph([u8; GLYPH_ROWS]);

impl Glyph {
    pub const fn new(rows: [u8; GLYPH_ROWS]) -> Self {
        Self(rows)
    }

    /// Row bytes in the order the LCD expects them
    pub const fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.0
    }

    /// Whether the pixel at `row`, `col` (0 = leftmost) is lit.
    /// Coordinates outside the 5x8 cell are never lit.
    pub const fn pixel(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_ROWS || col >= GLYPH_COLUMNS {
            return false;
        }
        let bit = GLYPH_COLUMNS - 1 - col;
        self.0[row] & (1 << bit) != 0
    }

    /// True when no row sets bits beyond the drawable columns.
    pub const fn is_well_formed(&self) -> bool {
        let mut i = 0;
        while i < GLYPH_ROWS {
            if self.0[i] & !GLYPH_ROW_MASK != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GLYPH_ROWS {
            for col in 0..GLYPH_COLUMNS {
                f.write_str(if self.pixel(row, col) { "#" } else { "." })?;
            }
            if row + 1 < GLYPH_ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub const ALIEN_1: Glyph = Glyph::new([
    0b00100, 0b00010, 0b00111, 0b01101, 0b11111, 0b10111, 0b10100, 0b00011,
]);
pub const ALIEN_2: Glyph = Glyph::new([
    0b00100, 0b01000, 0b11100, 0b10110, 0b11111, 0b11101, 0b00101, 0b11000,
]);
pub const ALARM_ICON: Glyph = Glyph::new([
    0b00100, 0b01010, 0b01010, 0b01010, 0b01010, 0b11111, 0b00000, 0b00100,
]);
pub const BATTERY_ICON: Glyph = Glyph::new([
    0b01110, 0b11011, 0b10001, 0b10001, 0b10001, 0b11101, 0b11111, 0b11111,
]);

/// The custom characters loaded into the LCD, in CGRAM slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Icon {
    #[display(fmt = "alien_1")]
    #[serde(rename = "alien_1")]
    Alien1,
    #[display(fmt = "alien_2")]
    #[serde(rename = "alien_2")]
    Alien2,
    #[display(fmt = "alarm")]
    #[serde(rename = "alarm")]
    Alarm,
    #[display(fmt = "battery")]
    #[serde(rename = "battery")]
    Battery,
}

impl Icon {
    pub const ALL: [Self; 4] = [Self::Alien1, Self::Alien2, Self::Alarm, Self::Battery];

    /// CGRAM character code the icon is stored under
    pub const fn slot(self) -> u8 {
        self as u8
    }

    pub const fn glyph(self) -> Glyph {
        match self {
            Self::Alien1 => ALIEN_1,
            Self::Alien2 => ALIEN_2,
            Self::Alarm => ALARM_ICON,
            Self::Battery => BATTERY_ICON,
        }
    }
}
