use std::{fmt, str::FromStr};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a color from explicit channel values.
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[inline(always)]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a fully opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_hex_alpha(hex, 255)
    }

    /// Creates a color from a packed `0xRRGGBB` value and a separate alpha.
    pub const fn from_hex_alpha(hex: u32, alpha: u8) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            alpha,
        )
    }

    /// Returns a new color with the specified alpha value.
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    /// Packs the color channels back into `0xRRGGBB`, dropping alpha.
    pub const fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;

        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let mut packed: u32 = 0;
        for char in digits.chars() {
            let nibble = char
                .to_digit(16)
                .ok_or(ParseColorError::InvalidDigit(char))?;
            packed = (packed << 4) | nibble;
        }

        match digits.len() {
            6 => Ok(Self::from_hex(packed)),
            8 => Ok(Self::from_hex_alpha(packed >> 8, (packed & 0xFF) as u8)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
