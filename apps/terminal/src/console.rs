//! # Console
//!
//! Line-oriented prompts over any reader/writer pair.
//!
//! The session talks to `Console<StdinLock, Stdout>` in production and to
//! `Console<Cursor<&[u8]>, Vec<u8>>` in tests. Numeric prompts loop until
//! they get something parseable; only end of input escapes them.

use std::fmt::Display;
use std::io::{BufRead, Write};

use cafeteria_core::Money;

use crate::error::{AppError, AppResult};

const INVALID_NUMBER: &str = "❌ Por favor ingresa un número válido.";

/// ANSI: clear screen, cursor home.
const CLEAR: &str = "\x1B[2J\x1B[1;1H";

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            clear_screen: true,
        }
    }

    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `prompt` and reads one line, trimmed.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line is just
    /// unparseable input for the numeric prompts.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    /// Re-prompts until the answer parses as an integer.
    pub fn prompt_int(&mut self, prompt: &str) -> AppResult<i64> {
        loop {
            match self.read_line(prompt)?.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }

    /// Re-prompts until the answer parses as an amount (up to two decimals).
    pub fn prompt_money(&mut self, prompt: &str) -> AppResult<Money> {
        loop {
            match self.read_line(prompt)?.parse::<Money>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }

    /// `s`/`S` is yes; anything else is no.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.read_line(&format!("{} (s/n): ", prompt))?;
        Ok(answer.eq_ignore_ascii_case("s"))
    }

    pub fn pause(&mut self) -> AppResult<()> {
        self.read_line("\nPresiona Enter para continuar...")?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> AppResult<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Gives back the writer, e.g. to inspect a test transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}
