//! Fallback appearance values shared by every text field an application
//! creates.
//!
//! `TextFieldDefaults` replaces the usual global style singleton with a plain
//! value: the application root owns one (or several), tweaks it, and seeds
//! every field from it via
//! [`TextFieldProperties::new`](super::text_field::TextFieldProperties::new).
//! Changing a defaults value affects fields whose properties are built
//! afterwards; fields that overrode an attribute keep their override. The
//! value is `Clone` and carries no synchronization — if an application shares
//! one across threads, concurrent writers race and the last write wins.

use crate::terminal::{Background, Colour, Foreground, Style};

/// Which colour of a [`ColourPair`] is used at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColourScheme {
    Light,
    Dark,
}

/// A colour with a light-mode and a dark-mode variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColourPair {
    pub light: Colour,
    pub dark: Colour,
}

impl ColourPair {
    pub const fn new(light: Colour, dark: Colour) -> Self {
        Self { light, dark }
    }

    /// The same colour in both schemes.
    pub const fn same(colour: Colour) -> Self {
        Self {
            light: colour,
            dark: colour,
        }
    }

    #[inline]
    pub fn resolve(&self, scheme: ColourScheme) -> Colour {
        match scheme {
            ColourScheme::Light => self.light,
            ColourScheme::Dark => self.dark,
        }
    }
}

/// The attributes a terminal can vary per-glyph, standing in for a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontStyle {
    pub bold: bool,
    pub underline: bool,
}

impl FontStyle {
    pub const fn normal() -> Self {
        Self {
            bold: false,
            underline: false,
        }
    }

    pub const fn bold() -> Self {
        Self {
            bold: true,
            underline: false,
        }
    }

    pub const fn underline() -> Self {
        Self {
            bold: false,
            underline: true,
        }
    }

    #[inline]
    pub fn style(&self, background: Colour, foreground: Colour) -> Style {
        Style {
            background: Background(background),
            foreground: Foreground(foreground),
            bold: self.bold,
            underline: self.underline,
        }
    }
}

/// The style of a text field's outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderType {
    /// A full box around the input row.
    Box,
    /// A single underline below the input row.
    Underline,
}

/// Default and dark-mode values for every stylable text field attribute.
///
/// No validation is performed on stored values.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldDefaults {
    pub text_colour: ColourPair,
    pub title_colour: ColourPair,
    pub placeholder_colour: ColourPair,
    pub disable_colour: ColourPair,
    pub background_colour: ColourPair,
    pub error_colour: ColourPair,
    pub border_colour: ColourPair,
    pub title_font: FontStyle,
    pub error_font: FontStyle,
    pub border_width: usize,
    pub corner_radius: usize,
    pub border_type: BorderType,
    pub disable_autocorrection: bool,
}

impl Default for TextFieldDefaults {
    fn default() -> Self {
        const GRAY: Colour = Colour::rgb(146, 146, 146);
        const DIM_WHITE: Colour = Colour::rgb(77, 77, 77);
        const LIGHT_GRAY: Colour = Colour::rgb(190, 190, 190);
        const DARK_GRAY: Colour = Colour::rgb(64, 64, 64);
        const RED: Colour = Colour::rgb(215, 0, 0);

        Self {
            text_colour: ColourPair::new(Colour::black(), Colour::white()),
            title_colour: ColourPair::new(Colour::black(), Colour::white()),
            placeholder_colour: ColourPair::new(GRAY, DIM_WHITE),
            disable_colour: ColourPair::new(LIGHT_GRAY, DARK_GRAY),
            background_colour: ColourPair::new(Colour::white(), Colour::black()),
            error_colour: ColourPair::same(RED),
            border_colour: ColourPair::new(Colour::black(), Colour::white()),
            title_font: FontStyle::bold(),
            error_font: FontStyle::normal(),
            border_width: 1,
            corner_radius: 1,
            border_type: BorderType::Box,
            disable_autocorrection: false,
        }
    }
}
