//! Line-oriented console input with retry for numeric answers.
//!
//! Every read returns `Ok(None)` once input is exhausted so callers can
//! end the session cleanly.

use smarttask_core::Priority;
use std::io::{BufRead, Write};

use crate::error::ShellResult;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl AsRef<str>) -> ShellResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Writes `label` without a newline and reads one line.
    pub fn ask(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads an integer, re-prompting until one is entered.
    pub fn ask_int(&mut self, label: &str) -> ShellResult<Option<i64>> {
        let mut answer = self.ask(label)?;
        loop {
            let Some(line) = answer else {
                return Ok(None);
            };
            if let Ok(value) = line.trim().parse::<i64>() {
                return Ok(Some(value));
            }
            answer = self.ask("  ⚠ Please enter a valid number: ")?;
        }
    }

    /// Reads a priority choice: 1 = HIGH, 3 = LOW, anything else MEDIUM.
    pub fn ask_priority(&mut self) -> ShellResult<Option<Priority>> {
        self.say("  Priority (1=HIGH, 2=MEDIUM, 3=LOW):")?;
        let choice = self.ask_int("  Option: ")?;
        Ok(choice.map(|choice| match choice {
            1 => Priority::high(),
            3 => Priority::low(),
            _ => Priority::medium(),
        }))
    }

    fn read_line(&mut self) -> ShellResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::Prompt;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_int_retries_until_a_number_arrives() {
        let mut prompt = prompt("abc\n\n 12 \n");

        assert_eq!(prompt.ask_int("id: ").unwrap(), Some(12));
        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output.matches("Please enter a valid number").count(), 2);
    }

    #[test]
    fn ask_int_returns_none_at_end_of_input() {
        let mut prompt = prompt("nope\n");
        assert_eq!(prompt.ask_int("id: ").unwrap(), None);
    }

    #[test]
    fn ask_priority_maps_choices() {
        let mut prompt = prompt("1\n3\n2\n9\n");
        let picks: Vec<String> = (0..4)
            .map(|_| prompt.ask_priority().unwrap().unwrap().as_str().to_string())
            .collect();
        assert_eq!(picks, ["HIGH", "LOW", "MEDIUM", "MEDIUM"]);
    }

    #[test]
    fn ask_strips_line_endings_only() {
        let mut prompt = prompt("  spaced name \r\n");
        assert_eq!(prompt.ask("name: ").unwrap().as_deref(), Some("  spaced name "));
    }
}
