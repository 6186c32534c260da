use smallstr::SmallString;
use std::{cmp, iter};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::Size;
use crate::terminal::Rect;

pub type TextelContent = SmallString<[u8; 8]>;

/// One cell of a canvas: a grapheme cluster and the style it is drawn with.
#[derive(Clone, Default, PartialEq)]
pub struct Textel {
    pub style: Style,
    pub grapheme: TextelContent,
}

/// A rectangular grid of styled grapheme cells that components draw to.
///
/// Cells occupied by the continuation of a wide grapheme are `None`.
#[derive(Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<Option<Textel>>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            buffer: iter::repeat(Textel::default())
                .map(Some)
                .take(size.width * size.height)
                .collect(),
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn buffer(&self) -> &[Option<Textel>] {
        self.buffer.as_slice()
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut [Option<Textel>] {
        self.buffer.as_mut_slice()
    }

    #[inline]
    pub fn resize(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
        self.buffer
            .resize(size.width * size.height, Default::default());
    }

    #[inline]
    pub fn clear(&mut self, style: Style) {
        self.buffer
            .iter_mut()
            .for_each(|textel| clear_textel(textel, style));
    }

    #[inline]
    pub fn clear_region(&mut self, region: Rect, style: Style) {
        let y_range = region.origin.y..cmp::min(region.origin.y + region.size.height, self.height);
        let x_range = region.origin.x..cmp::min(region.origin.x + region.size.width, self.width);
        for y in y_range {
            self.buffer[y * self.width + x_range.start..y * self.width + x_range.end]
                .iter_mut()
                .for_each(|textel| clear_textel(textel, style));
        }
    }

    /// Draws a string starting at `(x, y)`, returning the display width that
    /// was painted. Output is clipped to the canvas and to the current line.
    #[inline]
    pub fn draw_str(&mut self, x: usize, y: usize, style: Style, text: &str) -> usize {
        self.draw_graphemes(x, y, style, UnicodeSegmentation::graphemes(text, true))
    }

    #[inline]
    pub fn draw_graphemes(
        &mut self,
        x: usize,
        y: usize,
        style: Style,
        grapheme_iter: impl Iterator<Item = impl Into<TextelContent>>,
    ) -> usize {
        if y >= self.height || x >= self.width {
            return 0;
        }

        let initial_offset = y * self.width + x;
        let max_offset = (y + 1) * self.width - 1;
        let mut current_offset = initial_offset;

        for grapheme in grapheme_iter {
            if current_offset > max_offset {
                break;
            }

            let grapheme = grapheme.into();
            let grapheme_width = UnicodeWidthStr::width(grapheme.as_ref());
            if grapheme_width == 0 {
                continue;
            }

            self.buffer[current_offset] = Some(Textel { style, grapheme });

            // Cells covered by the remainder of a wide grapheme are blanked.
            let num_modified = cmp::min(grapheme_width, max_offset - current_offset + 1);
            self.buffer[current_offset + 1..current_offset + num_modified]
                .iter_mut()
                .for_each(|textel| *textel = None);

            current_offset += num_modified;
        }
        current_offset - initial_offset
    }

    /// Copies the whole of `source` into `self`, placed at `region.origin`
    /// and clipped to both canvases.
    #[inline]
    pub fn copy_region(&mut self, source: &Self, region: Rect) {
        let y_range = cmp::min(region.origin.y, self.height)
            ..cmp::min(region.origin.y + source.height, self.height);
        let x_range = cmp::min(region.origin.x, self.width)
            ..cmp::min(region.origin.x + source.width, self.width);

        for y in y_range {
            self.buffer[y * self.width + x_range.start..y * self.width + x_range.end]
                .iter_mut()
                .zip(
                    source.buffer[(y - region.origin.y) * source.width
                        ..(y - region.origin.y) * source.width + (x_range.end - x_range.start)]
                        .iter(),
                )
                .for_each(|(textel, other)| *textel = other.clone());
        }
    }
}

/// How a grapheme is drawn: background and foreground colours plus the bold
/// and underline attributes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    pub background: Background,
    pub foreground: Foreground,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    #[inline]
    pub fn normal(background: impl Into<Background>, foreground: impl Into<Foreground>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
            bold: false,
            underline: false,
        }
    }

    #[inline]
    pub fn bold(background: impl Into<Background>, foreground: impl Into<Foreground>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
            bold: true,
            underline: false,
        }
    }

    #[inline]
    pub fn underline(background: impl Into<Background>, foreground: impl Into<Foreground>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
            bold: false,
            underline: true,
        }
    }

    #[inline]
    pub const fn same_colour(colour: Colour) -> Self {
        Self {
            background: Background(colour),
            foreground: Foreground(colour),
            bold: false,
            underline: false,
        }
    }
}

impl Default for Style {
    #[inline]
    fn default() -> Self {
        Style::same_colour(Colour::black())
    }
}

/// A 24-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Colour {
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Background(pub Colour);

impl From<Colour> for Background {
    fn from(colour: Colour) -> Self {
        Self(colour)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Foreground(pub Colour);

impl From<Colour> for Foreground {
    fn from(colour: Colour) -> Self {
        Self(colour)
    }
}

#[inline]
fn clear_textel(textel: &mut Option<Textel>, style: Style) {
    match *textel {
        Some(Textel {
            style: ref mut textel_style,
            ref mut grapheme,
        }) => {
            *textel_style = style;
            grapheme.clear();
            grapheme.push_str(" ");
        }
        _ => {
            *textel = Some(Textel {
                style,
                grapheme: " ".into(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Position;

    fn row(canvas: &Canvas, y: usize) -> String {
        let width = canvas.size().width;
        canvas.buffer()[y * width..(y + 1) * width]
            .iter()
            .map(|textel| {
                textel
                    .as_ref()
                    .map(|textel| textel.grapheme.as_ref())
                    .unwrap_or("")
            })
            .collect()
    }

    #[test]
    fn draw_str_places_graphemes() {
        let mut canvas = Canvas::new(Size::new(8, 2));
        canvas.clear(Style::default());
        let width = canvas.draw_str(1, 0, Style::default(), "hey");
        assert_eq!(width, 3);
        assert_eq!(row(&canvas, 0), " hey    ");
        assert_eq!(row(&canvas, 1), "        ");
    }

    #[test]
    fn draw_str_clips_to_line() {
        let mut canvas = Canvas::new(Size::new(4, 1));
        canvas.clear(Style::default());
        canvas.draw_str(2, 0, Style::default(), "long text");
        assert_eq!(row(&canvas, 0), "  lo");
    }

    #[test]
    fn draw_str_out_of_bounds_is_a_noop() {
        let mut canvas = Canvas::new(Size::new(4, 1));
        canvas.clear(Style::default());
        assert_eq!(canvas.draw_str(0, 7, Style::default(), "nope"), 0);
        assert_eq!(canvas.draw_str(4, 0, Style::default(), "nope"), 0);
        assert_eq!(row(&canvas, 0), "    ");
    }

    #[test]
    fn wide_graphemes_blank_the_covered_cell() {
        let mut canvas = Canvas::new(Size::new(4, 1));
        canvas.clear(Style::default());
        canvas.draw_str(0, 0, Style::default(), "中x");
        assert!(canvas.buffer()[1].is_none());
        assert_eq!(row(&canvas, 0), "中x ");
    }

    #[test]
    fn copy_region_is_clipped() {
        let mut screen = Canvas::new(Size::new(4, 2));
        screen.clear(Style::default());
        let mut patch = Canvas::new(Size::new(3, 1));
        patch.clear(Style::default());
        patch.draw_str(0, 0, Style::default(), "abc");
        screen.copy_region(&patch, Rect::new(Position::new(2, 1), patch.size()));
        assert_eq!(row(&screen, 0), "    ");
        assert_eq!(row(&screen, 1), "  ab");
    }
}
