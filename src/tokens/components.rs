use crate::{palette, primitives::Color};

/// Pointer interaction state of a pressable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Pressed,
}

/// Validation and focus state of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputState {
    #[default]
    Default,
    Focus,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonTheme {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
}

impl ButtonTheme {
    pub const fn background_for(&self, state: InteractionState) -> Color {
        match state {
            InteractionState::Default => self.background,
            InteractionState::Hover => self.background_hover,
            InteractionState::Pressed => self.background_pressed,
        }
    }
}

/// Solid brand red button. The border matches the background.
pub const BUTTON_PRIMARY: ButtonTheme = ButtonTheme {
    background: palette::RED_500,
    text: palette::WHITE,
    border: palette::RED_500,
    background_hover: palette::RED_600,
    background_pressed: palette::RED_700,
};

/// White outline button.
pub const BUTTON_SECONDARY: ButtonTheme = ButtonTheme {
    background: palette::WHITE,
    text: palette::GRAY_700,
    border: palette::GRAY_300,
    background_hover: palette::GRAY_50,
    background_pressed: palette::GRAY_100,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputTheme {
    pub background: Color,
    pub text: Color,
    pub placeholder: Color,
    pub border: Color,
    pub border_focus: Color,
    pub border_error: Color,
}

impl InputTheme {
    pub const fn border_for(&self, state: InputState) -> Color {
        match state {
            InputState::Default => self.border,
            InputState::Focus => self.border_focus,
            InputState::Error => self.border_error,
        }
    }
}

pub const INPUT_DEFAULT: InputTheme = InputTheme {
    background: palette::WHITE,
    text: palette::GRAY_900,
    placeholder: palette::GRAY_400,
    border: palette::GRAY_200,
    border_focus: palette::RED_500,
    border_error: palette::RED_500,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleTheme {
    pub track_off: Color,
    pub track_on: Color,
    pub thumb: Color,
}

impl ToggleTheme {
    pub const fn track(&self, on: bool) -> Color {
        if on { self.track_on } else { self.track_off }
    }
}

pub const TOGGLE_SWITCH: ToggleTheme = ToggleTheme {
    track_off: palette::GRAY_300,
    track_on: palette::RED_500,
    thumb: palette::WHITE,
};

/// Colors shared by checkboxes and radios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlTheme {
    pub border_unchecked: Color,
    pub background_checked: Color,
    pub checkmark: Color,
}

impl ControlTheme {
    /// A checked control draws its border in the fill color.
    pub const fn border(&self, checked: bool) -> Color {
        if checked {
            self.background_checked
        } else {
            self.border_unchecked
        }
    }

    /// Unchecked controls have no fill.
    pub const fn fill(&self, checked: bool) -> Option<Color> {
        if checked {
            Some(self.background_checked)
        } else {
            None
        }
    }
}

pub const CHECKBOX_DEFAULT: ControlTheme = ControlTheme {
    border_unchecked: palette::GRAY_300,
    background_checked: palette::RED_500,
    checkmark: palette::WHITE,
};
