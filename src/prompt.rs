//! Start-up confirmation gate

use std::io::{BufRead, Write};

use anyhow::Result;

/// Outcome of the y/n prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Declined,
    /// Attempts ran out or input ended
    GaveUp,
}

/// Ask whether to start monitoring.
///
/// Accepts `y`/`n` (trimmed, any case). Anything else, including a read
/// error, costs one of `max_attempts` tries. Only failures to write the
/// prompt itself are returned as errors.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, max_attempts: u32) -> Result<Confirmation> {
    writeln!(out, "Press Enter to quit the program...")?;
    writeln!(out, "Do you want to continue monitoring? (y/n)")?;
    out.flush()?;

    let mut line = String::new();
    for _ in 0..max_attempts {
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(Confirmation::GaveUp),
            Ok(_) => {}
            Err(e) => {
                writeln!(out, "Error reading input: {}", e)?;
                continue;
            }
        }

        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(Confirmation::Proceed),
            "n" => return Ok(Confirmation::Declined),
            _ => writeln!(out, "Invalid input. Please enter 'y' or 'n'.")?,
        }
    }

    Ok(Confirmation::GaveUp)
}
