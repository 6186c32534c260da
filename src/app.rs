//! A synchronous event loop that drives a root component.

use smallvec::SmallVec;

use crate::{
    component::{BindingTransition, Component},
    frontend::{Event, Frontend},
    terminal::{Canvas, Key, Position, Rect},
    Result, ShouldRender,
};

/// Runs a root [`Component`]: renders it, feeds it key presses and keeps it
/// sized to the terminal.
///
/// Multi-key bindings are supported the same way components declare them: a
/// `BindingTransition::Continue` keeps the pressed keys buffered for the
/// next event, anything else clears them.
pub struct App<RootT: Component> {
    properties: RootT::Properties,
}

impl<RootT: Component> App<RootT> {
    pub fn new(properties: RootT::Properties) -> Self {
        Self { properties }
    }

    pub fn run_event_loop(self, mut frontend: impl Frontend) -> Result<()> {
        let mut frame = Rect::new(Position::new(0, 0), frontend.size()?);
        let mut root = RootT::create(self.properties, frame);
        let mut pressed: SmallVec<[Key; 8]> = SmallVec::new();
        let events = frontend.events().clone();
        let mut should_render = ShouldRender::Yes;

        loop {
            if should_render == ShouldRender::Yes {
                let mut screen = Canvas::new(frame.size);
                root.view().render_into(frame, &mut screen);
                let num_bytes = frontend.present(&screen)?;
                log::debug!(
                    "presented {}x{} canvas ({} bytes)",
                    frame.size.width,
                    frame.size.height,
                    num_bytes
                );
            }

            should_render = match events.recv() {
                Ok(Event::Key(key)) => {
                    pressed.push(key);
                    let binding = root.input_binding(&pressed);
                    match binding.transition {
                        BindingTransition::Continue => {}
                        BindingTransition::Clear => pressed.clear(),
                        BindingTransition::Exit => {
                            return Ok(());
                        }
                    }
                    match binding.message {
                        Some(message) => root.update(message),
                        None => ShouldRender::No,
                    }
                }
                Ok(Event::Resize(size)) => {
                    frame = Rect::new(Position::new(0, 0), size);
                    root.resize(frame);
                    ShouldRender::Yes
                }
                // The frontend has gone away; there is nothing left to drive.
                Err(_) => return Ok(()),
            };
        }
    }
}
