use crate::error::{ThemeError, ThemeResult};
use std::fmt;

/// A packed `0xRRGGBBAA` color as stored in theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Decode a hex color string.
    ///
    /// Accepts exactly 6 (`RRGGBB`, alpha forced to `FF`) or 8 (`RRGGBBAA`)
    /// hexadecimal digits. Anything else is rejected instead of being
    /// truncated into a garbage value.
    pub fn decode(hex: &str) -> ThemeResult<Self> {
        if hex.is_empty() {
            return Err(ThemeError::EmptyColor);
        }

        let digits = hex.chars().count();
        if digits != 6 && digits != 8 {
            return Err(ThemeError::InvalidColorLength {
                value: hex.to_string(),
            });
        }

        // from_str_radix alone would also accept a leading '+'
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColorDigits {
                value: hex.to_string(),
            });
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| ThemeError::InvalidColorDigits {
            value: hex.to_string(),
        })?;

        if digits == 6 {
            Ok(Self((value << 8) | 0xFF))
        } else {
            Ok(Self(value))
        }
    }

    pub fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn a(self) -> u8 {
        self.0 as u8
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}
