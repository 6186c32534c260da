use crossbeam_channel::Receiver;
use crossterm::{queue, QueueableCommand};
use std::{
    io::{self, BufWriter, Stdout, Write},
    thread,
};

use super::{
    painter::{PaintOperation, Painter},
    Event, Frontend, Result,
};
use crate::terminal::{Canvas, Colour, Key, Size, Style};

pub type Error = crossterm::ErrorKind;

/// A [`Frontend`] on top of the `crossterm` crate.
///
/// Key and resize events are decoded by a dedicated reader thread and
/// forwarded on a channel, mirroring the blocking `crossterm::event::read`
/// API into the synchronous event loop.
pub struct Crossterm {
    target: FrameBuffer<BufWriter<Stdout>>,
    painter: Painter,
    events: Receiver<Event>,
}

impl Crossterm {
    pub fn new() -> Result<Self> {
        let size = crossterm::terminal::size()
            .map(|(width, height)| Size::new(width as usize, height as usize))?;
        let mut frontend = Self {
            target: FrameBuffer::new(BufWriter::with_capacity(1 << 20, io::stdout())),
            painter: Painter::new(size),
            events: spawn_event_reader(),
        };
        initialise_tty(&mut frontend.target)?;
        Ok(frontend)
    }
}

impl Frontend for Crossterm {
    #[inline]
    fn size(&self) -> Result<Size> {
        Ok(crossterm::terminal::size()
            .map(|(width, height)| Size::new(width as usize, height as usize))?)
    }

    #[inline]
    fn present(&mut self, canvas: &Canvas) -> Result<usize> {
        let Self {
            ref mut target,
            ref mut painter,
            ..
        } = *self;
        target.begin_frame();
        painter.paint(canvas, |operation| {
            match operation {
                PaintOperation::WriteContent(grapheme) => {
                    queue!(target, crossterm::style::Print(grapheme))?
                }
                PaintOperation::SetStyle(style) => queue_set_style(target, style)?,
                PaintOperation::MoveTo(position) => queue!(
                    target,
                    crossterm::cursor::MoveTo(position.x as u16, position.y as u16)
                )?,
            }
            Ok(())
        })?;
        target.flush()?;
        Ok(target.frame_bytes())
    }

    #[inline]
    fn events(&self) -> &Receiver<Event> {
        &self.events
    }
}

impl Drop for Crossterm {
    fn drop(&mut self) {
        queue!(
            self.target,
            crossterm::style::ResetColor,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        )
        .expect("Failed to restore screen when closing `crossterm` frontend.");
        self.target
            .flush()
            .expect("Failed to restore screen when closing `crossterm` frontend.");
        crossterm::terminal::disable_raw_mode()
            .expect("Failed to disable raw mode when closing `crossterm` frontend.");
    }
}

fn spawn_event_reader() -> Receiver<Event> {
    let (sender, receiver) = crossbeam_channel::bounded(2048);
    thread::spawn(move || loop {
        match crossterm::event::read() {
            Ok(crossterm::event::Event::Key(key_event)) => {
                if sender.send(Event::Key(map_key(key_event))).is_err() {
                    break;
                }
            }
            Ok(crossterm::event::Event::Resize(width, height)) => {
                if sender
                    .send(Event::Resize(Size::new(width as usize, height as usize)))
                    .is_err()
                {
                    break;
                }
            }
            Ok(_) => {}
            Err(error) => {
                log::error!("reading terminal events failed: {}", error);
                break;
            }
        }
    });
    receiver
}

#[inline]
fn initialise_tty(target: &mut impl Write) -> Result<()> {
    target
        .queue(crossterm::terminal::EnterAlternateScreen)?
        .queue(crossterm::cursor::Hide)?;
    crossterm::terminal::enable_raw_mode()?;
    queue_set_style(target, &Painter::INITIAL_STYLE)?;
    target.flush()?;
    Ok(())
}

#[inline]
fn queue_set_style(target: &mut impl Write, style: &Style) -> Result<()> {
    use crossterm::style::{
        Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor,
    };

    // Bold
    if style.bold {
        queue!(target, SetAttribute(Attribute::Bold))?;
    } else {
        // `Reset` clears all attributes; `NoBold` is not reliably supported
        // across terminals. See crossterm-rs/crossterm#294.
        queue!(target, SetAttribute(Attribute::Reset))?;
    }

    // Underline
    if style.underline {
        queue!(target, SetAttribute(Attribute::Underlined))?;
    } else {
        queue!(target, SetAttribute(Attribute::NoUnderline))?;
    }

    // Background
    {
        let Colour { red, green, blue } = style.background.0;
        queue!(
            target,
            SetBackgroundColor(Color::Rgb {
                r: red,
                g: green,
                b: blue
            })
        )?;
    }

    // Foreground
    {
        let Colour { red, green, blue } = style.foreground.0;
        queue!(
            target,
            SetForegroundColor(Color::Rgb {
                r: red,
                g: green,
                b: blue
            })
        )?;
    }

    Ok(())
}

/// Buffered terminal output that tracks how many bytes the frame being
/// painted has queued, so [`Frontend::present`] can report the cost of each
/// repaint.
struct FrameBuffer<WriterT: Write> {
    writer: WriterT,
    frame_bytes: usize,
}

impl<WriterT: Write> FrameBuffer<WriterT> {
    fn new(writer: WriterT) -> Self {
        Self {
            writer,
            frame_bytes: 0,
        }
    }

    fn begin_frame(&mut self) {
        self.frame_bytes = 0;
    }

    fn frame_bytes(&self) -> usize {
        self.frame_bytes
    }
}

impl<WriterT: Write> Write for FrameBuffer<WriterT> {
    #[inline]
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        let num_bytes = self.writer.write(buffer)?;
        self.frame_bytes += num_bytes;
        Ok(num_bytes)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[inline]
fn map_key(key: crossterm::event::KeyEvent) -> Key {
    use crossterm::event::{KeyCode, KeyModifiers};
    match key.code {
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::F(number) => Key::F(number),
        KeyCode::Null => Key::Null,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(character) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(character)
        }
        KeyCode::Char(character) if key.modifiers.contains(KeyModifiers::ALT) => {
            Key::Alt(character)
        }
        KeyCode::Char(character) => Key::Char(character),
        KeyCode::Enter => Key::Char('\n'),
        KeyCode::Tab => Key::Char('\t'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_buffer_counts_bytes_per_frame() {
        let mut buffer = FrameBuffer::new(Vec::new());
        buffer.write_all(b"escape codes").unwrap();
        assert_eq!(buffer.frame_bytes(), 12);

        buffer.begin_frame();
        assert_eq!(buffer.frame_bytes(), 0);
        buffer.write_all(b"more").unwrap();
        buffer.flush().unwrap();
        assert_eq!(buffer.frame_bytes(), 4);
    }
}
