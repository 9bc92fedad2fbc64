pub const BORDER_RADIUS_SMALL: f32 = 4.;
/// Standard radius for inputs and buttons.
pub const BORDER_RADIUS_MEDIUM: f32 = 8.;
pub const BORDER_RADIUS_LARGE: f32 = 12.;

/// Standard button height.
pub const BUTTON_HEIGHT_MD: f32 = 44.;
pub const BUTTON_HEIGHT_SM: f32 = 36.;
pub const BUTTON_HEIGHT_XS: f32 = 30.;

/// Matches [`BUTTON_HEIGHT_MD`] so inputs and buttons line up in a row.
pub const INPUT_HEIGHT: f32 = 44.;
