//! Foundation color palette.
//!
//! Brand reds are ordered by interaction state (default, hover, pressed), the
//! gray ramp runs from white to black, and the 500-step hues carry semantic
//! meaning.

use crate::primitives::Color;

// Brand
pub const RED_500: Color = Color::from_hex(0xEC1D31);
/// Hover state of [`RED_500`].
pub const RED_600: Color = Color::from_hex(0xCF1722);
/// Pressed state of [`RED_500`].
pub const RED_700: Color = Color::from_hex(0xB7131C);

// Neutrals
pub const WHITE: Color = Color::from_hex(0xFFFFFF);
/// Soft background.
pub const GRAY_50: Color = Color::from_hex(0xF8FAFC);
pub const GRAY_100: Color = Color::from_hex(0xF1F5F9);
/// Lines and borders.
pub const GRAY_200: Color = Color::from_hex(0xE2E8F0);
pub const GRAY_300: Color = Color::from_hex(0xCBD5E1);
pub const GRAY_400: Color = Color::from_hex(0x94A3B8);
/// Muted text.
pub const GRAY_500: Color = Color::from_hex(0x64748B);
pub const GRAY_600: Color = Color::from_hex(0x475569);
/// Main text.
pub const GRAY_700: Color = Color::from_hex(0x334155);
pub const GRAY_800: Color = Color::from_hex(0x1E293B);
pub const GRAY_900: Color = Color::from_hex(0x0F172A);
pub const BLACK: Color = Color::from_hex(0x000000);

// Semantic
/// Success.
pub const GREEN_500: Color = Color::from_hex(0x22C55E);
/// Warning.
pub const ORANGE_500: Color = Color::from_hex(0xF97316);
/// Info and links.
pub const BLUE_500: Color = Color::from_hex(0x3B82F6);
/// Accent.
pub const VIOLET_500: Color = Color::from_hex(0x8B5CF6);

/// The neutral ramp, lightest first.
pub const GRAY_RAMP: [Color; 12] = [
    WHITE, GRAY_50, GRAY_100, GRAY_200, GRAY_300, GRAY_400, GRAY_500, GRAY_600, GRAY_700,
    GRAY_800, GRAY_900, BLACK,
];

macro_rules! named_colors {
    ( $( $name:ident ),+ $(,)? ) => {
        /// Every palette color keyed by its constant name.
        pub const ALL: &[(&str, Color)] = &[ $( (stringify!($name), $name) ),+ ];
    };
}

named_colors!(
    RED_500, RED_600, RED_700, WHITE, GRAY_50, GRAY_100, GRAY_200, GRAY_300, GRAY_400, GRAY_500,
    GRAY_600, GRAY_700, GRAY_800, GRAY_900, BLACK, GREEN_500, ORANGE_500, BLUE_500, VIOLET_500,
);

/// Looks up a palette color by its constant name, e.g. `"RED_500"`.
pub fn by_name(name: &str) -> Option<Color> {
    ALL.iter()
        .find(|(color_name, _)| *color_name == name)
        .map(|(_, color)| *color)
}
