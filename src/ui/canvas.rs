use std::io::{self, Write};

use crossterm::{
    cursor::{MoveTo, MoveUp},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

/// The few terminal operations in-place rendering needs.
///
/// Keeps escape sequences out of the gauge and sampling code so a non-ANSI
/// target only has to implement this.
pub trait TerminalCanvas {
    fn move_cursor_up(&mut self, lines: u16) -> io::Result<()>;
    /// Erase from the cursor to the end of the screen
    fn clear_to_end(&mut self) -> io::Result<()>;
    /// Erase from the cursor to the end of the current line
    fn clear_line_tail(&mut self) -> io::Result<()>;
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// ANSI canvas over any writer (stdout in the binary, a buffer in tests)
pub struct AnsiCanvas<W: Write> {
    out: W,
}

impl<W: Write> AnsiCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the whole screen and home the cursor
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalCanvas for AnsiCanvas<W> {
    fn move_cursor_up(&mut self, lines: u16) -> io::Result<()> {
        // MoveUp(0) still moves one line on most terminals
        if lines == 0 {
            return Ok(());
        }
        queue!(self.out, MoveUp(lines))
    }

    fn clear_to_end(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::FromCursorDown))
    }

    fn clear_line_tail(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::UntilNewLine))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(f: impl FnOnce(&mut AnsiCanvas<Vec<u8>>) -> io::Result<()>) -> String {
        let mut canvas = AnsiCanvas::new(Vec::new());
        f(&mut canvas).unwrap();
        String::from_utf8(canvas.into_inner()).unwrap()
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(emitted(|c| c.move_cursor_up(100)), "\x1b[100A");
        assert_eq!(emitted(|c| c.move_cursor_up(0)), "");
        assert_eq!(emitted(|c| c.clear_to_end()), "\x1b[J");
        assert_eq!(emitted(|c| c.clear_line_tail()), "\x1b[K");
        assert_eq!(emitted(|c| c.write("CPU █")), "CPU █");
    }

    #[test]
    fn clear_screen_starts_with_erase_all() {
        assert!(emitted(|c| c.clear_screen()).starts_with("\x1b[2J"));
    }
}
