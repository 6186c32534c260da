//! Converts a `Canvas` into a minimal set of abstract paint operations.

use unicode_width::UnicodeWidthStr;

use super::Result;
use crate::terminal::{Canvas, Colour, Position, Size, Style};

/// Damage-tracking painter: remembers the previously presented screen and
/// only emits operations for cells that changed, coalescing cursor moves and
/// style switches.
pub struct Painter {
    screen: Canvas,
    current_position: Position,
    current_style: Style,
}

pub enum PaintOperation<'a> {
    WriteContent(&'a str),
    SetStyle(&'a Style),
    MoveTo(Position),
}

impl Painter {
    pub const INITIAL_STYLE: Style = Style::same_colour(Colour::black());

    pub fn new(size: Size) -> Self {
        Self {
            screen: Canvas::new(size),
            current_position: Position::new(0, 0),
            current_style: Self::INITIAL_STYLE,
        }
    }

    #[inline]
    pub fn paint<'a>(
        &mut self,
        target: &'a Canvas,
        mut paint: impl FnMut(PaintOperation<'a>) -> Result<()>,
    ) -> Result<()> {
        let Self {
            ref mut screen,
            ref mut current_position,
            ref mut current_style,
        } = *self;
        let size = target.size();
        let force_redraw = size != screen.size();
        if force_redraw {
            screen.resize(size);
        }

        screen
            .buffer_mut()
            .iter_mut()
            .zip(target.buffer())
            .enumerate()
            .try_for_each(|(index, (current, new))| -> Result<()> {
                if force_redraw {
                    *current = None;
                }

                if *current == *new {
                    return Ok(());
                }

                if let Some(new) = new {
                    let position = Position::new(index % size.width, index / size.width);
                    if position != *current_position {
                        paint(PaintOperation::MoveTo(position))?;
                        *current_position = position;
                    }

                    if new.style != *current_style {
                        paint(PaintOperation::SetStyle(&new.style))?;
                        *current_style = new.style;
                    }

                    let content_width = UnicodeWidthStr::width(new.grapheme.as_ref());
                    paint(PaintOperation::WriteContent(&new.grapheme))?;
                    current_position.x = (index + content_width) % size.width;
                    current_position.y = (index + content_width) / size.width;
                }
                *current = new.clone();

                Ok(())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_paint_of_identical_canvas_emits_nothing() {
        let size = Size::new(4, 2);
        let mut canvas = Canvas::new(size);
        canvas.clear(Style::default());
        canvas.draw_str(0, 0, Style::default(), "ab");

        let mut painter = Painter::new(size);
        let mut operations = 0;
        painter
            .paint(&canvas, |_| {
                operations += 1;
                Ok(())
            })
            .unwrap();
        assert!(operations > 0);

        let mut operations_after = 0;
        painter
            .paint(&canvas, |_| {
                operations_after += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(operations_after, 0);
    }

    #[test]
    fn resize_forces_a_full_repaint() {
        let mut canvas = Canvas::new(Size::new(2, 1));
        canvas.clear(Style::default());

        let mut painter = Painter::new(Size::new(2, 1));
        painter.paint(&canvas, |_| Ok(())).unwrap();

        let mut larger = Canvas::new(Size::new(3, 1));
        larger.clear(Style::default());
        let mut writes = 0;
        painter
            .paint(&larger, |operation| {
                if let PaintOperation::WriteContent(_) = operation {
                    writes += 1;
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(writes, 3);
    }
}
