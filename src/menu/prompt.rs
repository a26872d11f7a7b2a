//! Line-based prompting over any reader and writer

use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::error::ExpenseResult;

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one trimmed line
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Wait for Enter
    pub fn pause(&mut self) -> ExpenseResult<()> {
        self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    /// Clear the screen and home the cursor
    pub fn clear(&mut self) -> ExpenseResult<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
