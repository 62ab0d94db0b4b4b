//! Line-oriented terminal I/O.

use std::fmt::Display;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads user input line by line and writes rendered text.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Show `label` and read one line. `None` once input is exhausted.
    pub async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `prompt`, but re-asks until something non-empty is entered.
    pub async fn prompt_required(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label).await? {
                Some(value) if value.is_empty() => self.say("Please fill out this field.")?,
                other => return Ok(other),
            }
        }
    }

    /// Required field with a pre-filled value: an empty line keeps `current`.
    pub async fn prompt_prefilled(
        &mut self,
        label: &str,
        current: &str,
    ) -> io::Result<Option<String>> {
        if current.is_empty() {
            return self.prompt_required(&format!("{label}: ")).await;
        }
        let entered = self.prompt(&format!("{label} [{current}]: ")).await?;
        Ok(entered.map(|value| {
            if value.is_empty() {
                current.to_string()
            } else {
                value
            }
        }))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
