//! Foundation typography.
//!
//! Display styles set headlines in the brand sans, text styles set body copy
//! in Inter.

use crate::primitives::{FontSpec, FontWeight};

pub const FONT_FAMILY_SANS: &str = "Commerce Sans";
pub const FONT_FAMILY_INTER: &str = "Inter";

// Display
pub const DISPLAY_XL_BOLD: FontSpec = FontSpec::new(FONT_FAMILY_SANS, 48., 60., FontWeight::Bold);
pub const DISPLAY_LG_BOLD: FontSpec = FontSpec::new(FONT_FAMILY_SANS, 36., 44., FontWeight::Bold);
pub const DISPLAY_MD_BOLD: FontSpec = FontSpec::new(FONT_FAMILY_SANS, 30., 38., FontWeight::Bold);

// Text
pub const TEXT_LG_REGULAR: FontSpec =
    FontSpec::new(FONT_FAMILY_INTER, 18., 28., FontWeight::Regular);
pub const TEXT_MD_REGULAR: FontSpec =
    FontSpec::new(FONT_FAMILY_INTER, 16., 24., FontWeight::Regular);
pub const TEXT_SM_REGULAR: FontSpec =
    FontSpec::new(FONT_FAMILY_INTER, 14., 20., FontWeight::Regular);
pub const TEXT_XS_REGULAR: FontSpec =
    FontSpec::new(FONT_FAMILY_INTER, 12., 18., FontWeight::Regular);
