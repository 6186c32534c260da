//! Frontends present a [`Canvas`](crate::terminal::Canvas) on a real
//! terminal and surface its input events.

#[cfg(feature = "frontend-crossterm")]
pub mod crossterm;
#[cfg(feature = "frontend-crossterm")]
pub use self::crossterm::Crossterm;

pub mod painter;

use crossbeam_channel::Receiver;
use std::io;
use thiserror::Error;

use crate::terminal::{Canvas, Key, Size};

/// A trait for frontends that draw a [`Canvas`](crate::terminal::Canvas) to
/// the terminal.
///
/// Input events are decoded on a reader thread and handed over through a
/// channel, so the event loop can block on `events().recv()`.
pub trait Frontend {
    /// Returns the size of the underlying terminal.
    fn size(&self) -> Result<Size>;

    /// Draws the canvas to the terminal, returning the number of bytes
    /// written.
    fn present(&mut self, canvas: &Canvas) -> Result<usize>;

    /// The channel on which user input events arrive.
    fn events(&self) -> &Receiver<Event>;
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug)]
pub enum Event {
    Key(Key),
    Resize(Size),
}

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "frontend-crossterm")]
    #[error(transparent)]
    Crossterm(#[from] crossterm::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(feature = "frontend-crossterm")]
pub fn default() -> Result<crossterm::Crossterm> {
    crossterm::Crossterm::new()
}
