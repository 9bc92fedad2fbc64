/// Typographic weight on the usual 100–900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum FontWeight {
    Regular = 400,
    Medium = 500,
    Bold = 700,
}

impl FontWeight {
    /// The numeric weight code.
    #[inline(always)]
    pub const fn value(self) -> u16 {
        self as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown font weight {0}, expected 400, 500 or 700")]
pub struct UnknownFontWeight(pub u16);

impl TryFrom<u16> for FontWeight {
    type Error = UnknownFontWeight;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            400 => Ok(Self::Regular),
            500 => Ok(Self::Medium),
            700 => Ok(Self::Bold),
            other => Err(UnknownFontWeight(other)),
        }
    }
}

/// Describes how a run of text should be set. Sizes are in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub size: f32,
    pub line_height: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub const fn new(
        family: &'static str,
        size: f32,
        line_height: f32,
        weight: FontWeight,
    ) -> Self {
        Self {
            family,
            size,
            line_height,
            weight,
        }
    }

    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_codes() {
        assert_eq!(FontWeight::Regular.value(), 400);
        assert_eq!(FontWeight::Medium.value(), 500);
        assert_eq!(FontWeight::Bold.value(), 700);
    }

    #[test]
    fn test_font_weight_try_from() {
        for weight in [FontWeight::Regular, FontWeight::Medium, FontWeight::Bold] {
            assert_eq!(FontWeight::try_from(weight.value()), Ok(weight));
        }

        assert_eq!(FontWeight::try_from(600), Err(UnknownFontWeight(600)));
        assert_eq!(FontWeight::try_from(0), Err(UnknownFontWeight(0)));
    }

    #[test]
    fn test_with_weight_keeps_metrics() {
        let spec = FontSpec::new("Inter", 16., 24., FontWeight::Regular);
        let bold = spec.with_weight(FontWeight::Bold);

        assert_eq!(bold.family, "Inter");
        assert_eq!(bold.size, 16.);
        assert_eq!(bold.line_height, 24.);
        assert_eq!(bold.weight, FontWeight::Bold);
    }
}
