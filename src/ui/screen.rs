//! In-place frame presentation.
//!
//! Protocol: reserve `line_budget` blank lines once, then on every tick move
//! the cursor back up by the same amount, write the frame and clear
//! everything below it. The clear-down is what removes the tail of a longer
//! previous frame, so the budget must exceed the longest frame. Each line
//! also erases its own tail, since a label can get shorter between ticks
//! ("10.00%" -> "9.00%").

use std::io;

use crate::ui::canvas::TerminalCanvas;
use crate::ui::frame::{max_frame_lines, Frame};

/// Smallest display region ever reserved
pub const MIN_LINE_BUDGET: u16 = 100;

/// Region size for a host with `cores` cores: the fixed floor, grown when
/// a full frame wouldn't fit below it.
pub fn line_budget_for(cores: usize, floor: u16) -> u16 {
    let needed = max_frame_lines(cores) + 1;
    u16::try_from(needed).unwrap_or(u16::MAX).max(floor)
}

pub struct Compositor<C> {
    canvas: C,
    line_budget: u16,
    allocated: bool,
}

impl<C: TerminalCanvas> Compositor<C> {
    pub fn new(canvas: C, line_budget: u16) -> Self {
        Self {
            canvas,
            line_budget,
            allocated: false,
        }
    }

    pub fn line_budget(&self) -> u16 {
        self.line_budget
    }

    /// Reserve the display region. Idempotent.
    pub fn allocate(&mut self) -> io::Result<()> {
        if self.allocated {
            return Ok(());
        }
        self.canvas.write(&"\n".repeat(self.line_budget as usize))?;
        self.canvas.flush()?;
        self.allocated = true;
        Ok(())
    }

    /// Overwrite the previous frame with `frame`
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.allocate()?;
        self.canvas.move_cursor_up(self.line_budget)?;

        // Anything past the budget would scroll the region
        let visible = frame.len().min(self.line_budget as usize);
        for line in &frame.lines[..visible] {
            self.canvas.write(line)?;
            self.canvas.clear_line_tail()?;
            self.canvas.write("\n")?;
        }

        self.canvas.clear_to_end()?;
        self.canvas.flush()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }
}
