//! An abstract specification of a lightweight terminal.
//!
//! All components ultimately draw to a `Canvas`, a grid of styled grapheme
//! cells. A frontend is responsible for presenting a canvas on a real
//! terminal.

pub use canvas::{Background, Canvas, Colour, Foreground, Style, Textel};
pub use input::Key;

/// A 2D rectangle with usize coordinates. Re-exported from
/// [euclid](https://docs.rs/euclid).
pub type Rect = euclid::default::Rect<usize>;

/// A 2D position with usize coordinates. Re-exported from
/// [euclid](https://docs.rs/euclid).
pub type Position = euclid::default::Point2D<usize>;

/// A 2D size with usize width and height. Re-exported from
/// [euclid](https://docs.rs/euclid).
pub type Size = euclid::default::Size2D<usize>;

pub(crate) mod canvas;
pub(crate) mod input;
