//! Flexbox-style composition of canvases.
//!
//! A [`Layout`] is a tree of containers whose leaves are canvases drawn by
//! components. Containers split their frame between children along one axis:
//! `fixed` children take exactly the requested size, `auto` children share
//! whatever is left.

use smallvec::SmallVec;
use std::cmp;

use crate::terminal::{Canvas, Position, Rect, Size};

#[inline]
pub fn column(children: impl IntoIterator<Item = Item>) -> Layout {
    container(FlexDirection::Column, children)
}

#[inline]
pub fn column_iter(children: impl Iterator<Item = Item>) -> Layout {
    container(FlexDirection::Column, children)
}

#[inline]
pub fn row(children: impl IntoIterator<Item = Item>) -> Layout {
    container(FlexDirection::Row, children)
}

#[inline]
pub fn row_iter(children: impl Iterator<Item = Item>) -> Layout {
    container(FlexDirection::Row, children)
}

#[inline]
pub fn container(direction: FlexDirection, children: impl IntoIterator<Item = Item>) -> Layout {
    Layout::Container(Box::new(Container {
        direction,
        children: children.into_iter().collect(),
    }))
}

/// A child that shares the space left over by `fixed` siblings.
#[inline]
pub fn auto(layout: Layout) -> Item {
    Item {
        node: layout,
        flex: FlexBasis::Auto,
    }
}

/// A child with a fixed size along the container's axis.
#[inline]
pub fn fixed(size: usize, layout: Layout) -> Item {
    Item {
        node: layout,
        flex: FlexBasis::Fixed(size),
    }
}

#[derive(Clone)]
pub enum Layout {
    Container(Box<Container>),
    Canvas(Canvas),
}

impl Layout {
    /// Flattens the layout tree onto `screen`, placing it inside `frame`.
    pub fn render_into(self, frame: Rect, screen: &mut Canvas) {
        match self {
            Self::Canvas(canvas) => screen.copy_region(&canvas, frame),
            Self::Container(container) => {
                let frames: SmallVec<[Rect; ARRAY_SIZE]> =
                    splits_iter(frame, container.direction, container.children.iter()).collect();
                for (child, child_frame) in container.children.into_iter().zip(frames) {
                    child.node.render_into(child_frame, screen);
                }
            }
        }
    }
}

impl From<Canvas> for Layout {
    fn from(canvas: Canvas) -> Self {
        Self::Canvas(canvas)
    }
}

#[derive(Clone)]
pub struct Container {
    children: SmallVec<[Item; ARRAY_SIZE]>,
    direction: FlexDirection,
}

#[derive(Clone)]
pub struct Item {
    node: Layout,
    flex: FlexBasis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlexBasis {
    Auto,
    Fixed(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlexDirection {
    Column,
    Row,
}

impl FlexDirection {
    #[inline]
    pub(crate) fn dimension(self, size: Size) -> usize {
        match self {
            FlexDirection::Row => size.width,
            FlexDirection::Column => size.height,
        }
    }
}

pub const ARRAY_SIZE: usize = 4;

#[inline]
fn splits_iter<'a>(
    frame: Rect,
    direction: FlexDirection,
    children: impl Iterator<Item = &'a Item> + Clone + 'a,
) -> impl Iterator<Item = Rect> + 'a {
    let total_size = direction.dimension(frame.size);

    // Compute how much space is available for stretched components
    let (stretched_budget, num_stretched_children, total_fixed_size) = {
        let mut stretched_budget = total_size;
        let mut num_stretched_children = 0;
        let mut total_fixed_size = 0;
        for child in children.clone() {
            match child.flex {
                FlexBasis::Auto => {
                    num_stretched_children += 1;
                }
                FlexBasis::Fixed(size) => {
                    stretched_budget = stretched_budget.saturating_sub(size);
                    total_fixed_size += size;
                }
            }
        }
        (stretched_budget, num_stretched_children, total_fixed_size)
    };

    // Divvy up the available space equally between stretched components.
    let stretched_size = if num_stretched_children > 0 {
        stretched_budget / num_stretched_children
    } else {
        0
    };
    let mut remainder =
        total_size.saturating_sub(num_stretched_children * stretched_size + total_fixed_size);
    let mut remaining_size = total_size;

    children
        .map(move |child| match child.flex {
            FlexBasis::Auto => {
                let offset = total_size - remaining_size;
                let size = if remainder > 0 {
                    remainder -= 1;
                    stretched_size + 1
                } else {
                    stretched_size
                };
                remaining_size -= size;
                (offset, size)
            }
            FlexBasis::Fixed(size) => {
                let offset = total_size - remaining_size;
                let size = cmp::min(remaining_size, size);
                remaining_size -= size;
                (offset, size)
            }
        })
        .map(move |(offset, size)| match direction {
            FlexDirection::Row => Rect::new(
                Position::new(frame.origin.x + offset, frame.origin.y),
                Size::new(size, frame.size.height),
            ),
            FlexDirection::Column => Rect::new(
                Position::new(frame.origin.x, frame.origin.y + offset),
                Size::new(frame.size.width, size),
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Style;

    fn marker(size: Size, text: &str) -> Canvas {
        let mut canvas = Canvas::new(size);
        canvas.clear(Style::default());
        canvas.draw_str(0, 0, Style::default(), text);
        canvas
    }

    fn cell(canvas: &Canvas, x: usize, y: usize) -> String {
        canvas.buffer()[y * canvas.size().width + x]
            .as_ref()
            .map(|textel| textel.grapheme.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn column_of_fixed_and_auto_children() {
        let frame = Rect::new(Position::new(0, 0), Size::new(4, 6));
        let mut screen = Canvas::new(frame.size);
        column(vec![
            fixed(1, marker(Size::new(4, 1), "a").into()),
            auto(marker(Size::new(4, 4), "b").into()),
            fixed(1, marker(Size::new(4, 1), "c").into()),
        ])
        .render_into(frame, &mut screen);

        assert_eq!(cell(&screen, 0, 0), "a");
        assert_eq!(cell(&screen, 0, 1), "b");
        assert_eq!(cell(&screen, 0, 5), "c");
    }

    #[test]
    fn row_splits_leftover_space_between_stretched_children() {
        let frame = Rect::new(Position::new(0, 0), Size::new(10, 1));
        let frames: Vec<Rect> = {
            let children = vec![
                fixed(3, marker(Size::new(3, 1), "x").into()),
                auto(marker(Size::new(1, 1), "y").into()),
                auto(marker(Size::new(1, 1), "z").into()),
            ];
            splits_iter(frame, FlexDirection::Row, children.iter()).collect()
        };
        assert_eq!(frames[0].size.width, 3);
        assert_eq!(frames[1].size.width + frames[2].size.width, 7);
        assert_eq!(frames[1].origin.x, 3);
        assert_eq!(frames[2].origin.x, 3 + frames[1].size.width);
    }

    #[test]
    fn fixed_children_are_clamped_to_the_frame() {
        let frame = Rect::new(Position::new(0, 0), Size::new(1, 2));
        let children = vec![
            fixed(1, marker(Size::new(1, 1), "x").into()),
            fixed(5, marker(Size::new(1, 1), "y").into()),
        ];
        let frames: Vec<Rect> =
            splits_iter(frame, FlexDirection::Column, children.iter()).collect();
        assert_eq!(frames[1].size.height, 1);
    }
}
