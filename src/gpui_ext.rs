//! Conversions from catalog values into gpui's styling types.

use gpui::{Font, Hsla, Pixels, Rgba, SharedString, font, px};

use crate::{
    primitives::{Color, FontSpec, FontWeight},
    tokens::{ButtonSize, CornerRadiusKind},
};

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = [color.r, color.g, color.b, color.a].map(|c| (c as f32) / 255.0);
        Rgba { r, g, b, a }
    }
}

impl From<Color> for Hsla {
    fn from(color: Color) -> Self {
        Rgba::from(color).into()
    }
}

impl From<FontWeight> for gpui::FontWeight {
    fn from(weight: FontWeight) -> Self {
        gpui::FontWeight(weight.value() as f32)
    }
}

impl FontSpec {
    /// A gpui font with this spec's family and weight.
    pub fn font(&self) -> Font {
        Font {
            weight: self.weight.into(),
            ..font(SharedString::new_static(self.family))
        }
    }

    pub fn text_size(&self) -> Pixels {
        px(self.size)
    }

    pub fn line_height_px(&self) -> Pixels {
        px(self.line_height)
    }
}

impl ButtonSize {
    pub fn height_px(&self) -> Pixels {
        px(self.height())
    }
}

impl CornerRadiusKind {
    pub fn px(&self) -> Pixels {
        px(self.value())
    }
}
