//! A configurable text field component for terminal user interfaces.
//!
//! The crate is built around a small declarative component model: widgets
//! implement [`Component`](component::Component), describe themselves by
//! drawing to a [`Canvas`](terminal::Canvas) and are composed with the
//! flexbox-style combinators in [`layout`]. On top of the kernel sits
//! [`TextField`](components::text_field::TextField), a single-line input
//! with a title label, placeholder, secure entry, trailing icon, border and
//! error styling, character-count truncation and light/dark colour variants.
//!
//! Appearance fallbacks live in
//! [`TextFieldDefaults`](components::defaults::TextFieldDefaults), a plain
//! value owned by the application root and handed to each field when its
//! properties are built:
//!
//! ```
//! use formfield::components::{
//!     defaults::{BorderType, TextFieldDefaults},
//!     text_field::TextFieldProperties,
//! };
//!
//! let defaults = TextFieldDefaults::default();
//! let properties = TextFieldProperties::new(&defaults)
//!     .title("Username")
//!     .placeholder("e.g. ada")
//!     .max_count(32)
//!     .border_type(BorderType::Underline);
//! assert_eq!(properties.height(), 3);
//! ```

pub mod app;
pub mod component;
pub mod components;
pub mod error;
pub mod frontend;
pub mod terminal;
pub mod text;

pub use app::App;
pub use component::{
    layout::{
        self, auto, column, column_iter, fixed, row, row_iter, FlexBasis, FlexDirection, Item,
        Layout,
    },
    BindingMatch, BindingTransition, Callback, Component, ShouldRender,
};
pub use error::{Error, Result};
pub use terminal::{Background, Canvas, Colour, Foreground, Key, Position, Rect, Size, Style};
