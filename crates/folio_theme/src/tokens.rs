//! Color tokens per scheme

use folio_core::Color;
use serde::Serialize;

use crate::scheme::ColorScheme;

/// Semantic colors used by the page
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorTokens {
    // Surfaces
    pub background: Color,
    pub surface: Color,
    // Text
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_link: Color,
    pub text_link_hover: Color,
    // Accent
    pub primary: Color,
    /// Decorative blob fill
    pub primary_subtle: Color,
    /// Heading underline
    pub primary_highlight: Color,
    // Borders
    pub border: Color,
    // Badges
    pub badge_bg: Color,
    pub badge_text: Color,
}

impl ColorTokens {
    pub fn light() -> Self {
        let primary = Color::from_hex(0x18181B);
        Self {
            background: Color::WHITE,
            surface: Color::from_hex(0xFAFAFA),
            text_primary: Color::from_hex(0x09090B),
            text_muted: Color::from_hex(0x71717A),
            text_link: Color::from_hex(0x3B82F6),
            text_link_hover: Color::from_hex(0x1D4ED8),
            primary,
            primary_subtle: primary.with_alpha(0.05),
            primary_highlight: primary.with_alpha(0.3),
            border: Color::from_hex(0xE4E4E7),
            badge_bg: Color::from_hex(0xF4F4F5),
            badge_text: Color::from_hex(0x18181B),
        }
    }

    pub fn dark() -> Self {
        let primary = Color::from_hex(0xFAFAFA);
        Self {
            background: Color::from_hex(0x09090B),
            surface: Color::from_hex(0x18181B),
            text_primary: Color::from_hex(0xFAFAFA),
            text_muted: Color::from_hex(0xA1A1AA),
            text_link: Color::from_hex(0x3B82F6),
            text_link_hover: Color::from_hex(0x1D4ED8),
            primary,
            primary_subtle: primary.with_alpha(0.05),
            primary_highlight: primary.with_alpha(0.3),
            border: Color::from_hex(0x27272A),
            badge_bg: Color::from_hex(0x27272A),
            badge_text: Color::from_hex(0xFAFAFA),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

/// Resolved theme: a scheme and its tokens
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemeState {
    scheme: ColorScheme,
    colors: ColorTokens,
}

impl ThemeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            colors: ColorTokens::for_scheme(scheme),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemes_differ() {
        let light = ThemeState::new(ColorScheme::Light);
        let dark = ThemeState::new(ColorScheme::Dark);
        assert_ne!(light.colors().background, dark.colors().background);
        assert_eq!(dark.scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_subtle_is_translucent_primary() {
        let tokens = ColorTokens::dark();
        assert_eq!(tokens.primary_subtle.a, 0.05);
        assert_eq!(tokens.primary_subtle.r, tokens.primary.r);
    }
}
