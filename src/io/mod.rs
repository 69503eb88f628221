//! Output abstraction
//!
//! Reports go through [`OutputWriter`] so tests can capture them.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Collects output in memory.
#[derive(Default)]
pub struct MockOutput {
    pub messages: Vec<String>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, one message per line.
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

impl OutputWriter for MockOutput {
    fn writeln(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
