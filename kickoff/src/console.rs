use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use kickoff_core::error::{KickoffError, Result};
use kickoff_core::ko_print;
use kickoff_messages::MESSAGES;

/// Line-oriented interaction with the person at the keyboard.
pub trait Console {
    /// Show `prompt` and read one line without its line ending.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Ask a yes/no question. Anything other than yes counts as no.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Wait until the user presses Enter.
    fn pause(&mut self) -> Result<()>;

    /// Clear the screen before the menu is drawn again.
    fn clear(&mut self);
}

/// The real terminal: stdin for input, stdout for prompts.
pub struct TerminalConsole {
    clear_screen: bool,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new(clear_screen: bool) -> Self {
        Self {
            clear_screen,
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }

    fn read_raw(&self) -> Result<Option<String>> {
        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| KickoffError::Prompt(format!("Failed to read input: {e}")))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(input)))
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        ko_print!("{prompt}");
        self.read_raw()
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        if !self.interactive {
            let answer = self.read_line(&format!("{question} (y/n): "))?;
            return Ok(answer.as_deref().is_some_and(is_yes));
        }

        match dialoguer::Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
        {
            Ok(answer) => Ok(answer),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Err(KickoffError::Cancelled)
            }
            Err(e) => Err(KickoffError::Prompt(e.to_string())),
        }
    }

    fn pause(&mut self) -> Result<()> {
        self.read_line(MESSAGES.menu.press_enter).map(|_| ())
    }

    fn clear(&mut self) {
        if self.clear_screen && io::stdout().is_terminal() {
            print!("\x1B[2J\x1B[1;1H");
            let _ = io::stdout().flush();
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// A console fed from a fixed list of input lines, for driving sessions in tests.
///
/// Prompts are recorded instead of printed. `pause` consumes one line, the
/// same way Enter does on a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    pauses: usize,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.prompts.push(question.to_string());
        Ok(self.inputs.pop_front().as_deref().is_some_and(is_yes))
    }

    fn pause(&mut self) -> Result<()> {
        self.pauses += 1;
        self.inputs.pop_front();
        Ok(())
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("3\n".to_string()), "3");
        assert_eq!(strip_line_ending("3\r\n".to_string()), "3");
        assert_eq!(strip_line_ending(" app ".to_string()), " app ");
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn test_scripted_console_records_prompts() {
        let mut console = ScriptedConsole::new(["demo", "y", ""]);

        assert_eq!(console.read_line("Name: ").unwrap().as_deref(), Some("demo"));
        assert!(console.confirm("Clean up?").unwrap());
        console.pause().unwrap();
        assert_eq!(console.read_line("Again: ").unwrap(), None);
        assert!(!console.confirm("More?").unwrap());

        assert_eq!(console.prompts(), ["Name: ", "Clean up?", "Again: ", "More?"]);
        assert_eq!(console.pauses(), 1);
        assert_eq!(console.remaining(), 0);
    }
}
