#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::{
    palette,
    primitives::{Color, FontSpec},
    tokens::*,
    typography,
};

/// Button styles and the theme each one draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn theme(&self) -> ButtonTheme)]
pub enum ButtonVariant {
    /// Solid brand red.
    #[assoc(theme = BUTTON_PRIMARY)]
    Primary,
    /// White with an outline.
    #[assoc(theme = BUTTON_SECONDARY)]
    Secondary,
}

/// Button size steps.
///
/// Each size has a corresponding corner radius for consistent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn height(&self) -> f32)]
#[func(pub fn corner_radius(&self) -> CornerRadiusKind)]
pub enum ButtonSize {
    #[assoc(height = BUTTON_HEIGHT_MD)]
    #[assoc(corner_radius = CornerRadiusKind::Medium)]
    Md,
    #[assoc(height = BUTTON_HEIGHT_SM)]
    #[assoc(corner_radius = CornerRadiusKind::Medium)]
    Sm,
    #[assoc(height = BUTTON_HEIGHT_XS)]
    #[assoc(corner_radius = CornerRadiusKind::Small)]
    Xs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn value(&self) -> f32)]
pub enum CornerRadiusKind {
    #[assoc(value = BORDER_RADIUS_SMALL)]
    Small,
    #[assoc(value = BORDER_RADIUS_MEDIUM)]
    Medium,
    #[assoc(value = BORDER_RADIUS_LARGE)]
    Large,
}

/// Headline text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn spec(&self) -> FontSpec)]
pub enum DisplayStyle {
    #[assoc(spec = typography::DISPLAY_XL_BOLD)]
    Xl,
    #[assoc(spec = typography::DISPLAY_LG_BOLD)]
    Lg,
    #[assoc(spec = typography::DISPLAY_MD_BOLD)]
    Md,
}

/// Body text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn spec(&self) -> FontSpec)]
pub enum TextStyle {
    #[assoc(spec = typography::TEXT_LG_REGULAR)]
    Lg,
    #[assoc(spec = typography::TEXT_MD_REGULAR)]
    Md,
    #[assoc(spec = typography::TEXT_SM_REGULAR)]
    Sm,
    #[assoc(spec = typography::TEXT_XS_REGULAR)]
    Xs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn color(&self) -> Color)]
pub enum SemanticColor {
    #[assoc(color = palette::GREEN_500)]
    Success,
    #[assoc(color = palette::ORANGE_500)]
    Warning,
    /// Also used for links.
    #[assoc(color = palette::BLUE_500)]
    Info,
    #[assoc(color = palette::VIOLET_500)]
    Accent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variant_theme() {
        assert_eq!(ButtonVariant::Primary.theme(), BUTTON_PRIMARY);
        assert_eq!(ButtonVariant::Secondary.theme(), BUTTON_SECONDARY);
    }

    #[test]
    fn test_button_size_height() {
        assert_eq!(ButtonSize::Md.height(), BUTTON_HEIGHT_MD);
        assert_eq!(ButtonSize::Sm.height(), BUTTON_HEIGHT_SM);
        assert_eq!(ButtonSize::Xs.height(), BUTTON_HEIGHT_XS);
    }

    #[test]
    fn test_button_size_corner_radius() {
        assert!(matches!(
            ButtonSize::Md.corner_radius(),
            CornerRadiusKind::Medium
        ));
        assert!(matches!(
            ButtonSize::Sm.corner_radius(),
            CornerRadiusKind::Medium
        ));
        assert!(matches!(
            ButtonSize::Xs.corner_radius(),
            CornerRadiusKind::Small
        ));
    }

    #[test]
    fn test_corner_radius_ordering() {
        let small = CornerRadiusKind::Small.value();
        let medium = CornerRadiusKind::Medium.value();
        let large = CornerRadiusKind::Large.value();

        assert!(small < medium, "Small should be < Medium");
        assert!(medium < large, "Medium should be < Large");
    }

    #[test]
    fn test_size_ordering() {
        let xs = ButtonSize::Xs.height();
        let sm = ButtonSize::Sm.height();
        let md = ButtonSize::Md.height();

        assert!(xs < sm, "Xs should be < Sm");
        assert!(sm < md, "Sm should be < Md");
    }

    #[test]
    fn test_text_kinds() {
        assert_eq!(DisplayStyle::Xl.spec(), typography::DISPLAY_XL_BOLD);
        assert_eq!(DisplayStyle::Lg.spec(), typography::DISPLAY_LG_BOLD);
        assert_eq!(DisplayStyle::Md.spec(), typography::DISPLAY_MD_BOLD);

        assert_eq!(TextStyle::Lg.spec(), typography::TEXT_LG_REGULAR);
        assert_eq!(TextStyle::Md.spec(), typography::TEXT_MD_REGULAR);
        assert_eq!(TextStyle::Sm.spec(), typography::TEXT_SM_REGULAR);
        assert_eq!(TextStyle::Xs.spec(), typography::TEXT_XS_REGULAR);
    }

    #[test]
    fn test_semantic_colors() {
        assert_eq!(SemanticColor::Success.color(), palette::GREEN_500);
        assert_eq!(SemanticColor::Warning.color(), palette::ORANGE_500);
        assert_eq!(SemanticColor::Info.color(), palette::BLUE_500);
        assert_eq!(SemanticColor::Accent.color(), palette::VIOLET_500);
    }
}
