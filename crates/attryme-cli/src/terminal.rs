// Terminal collaborators: stdin confirmation and stderr error alerts

use std::io::{self, BufRead, Write};

use attryme::{compose_alert, ConfirmPrompt, Notifier};
use colored::Colorize;
use tracing::warn;

/// Asks `[y/N]` on stderr and reads the answer from stdin
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stderr(),
        }
    }
}

impl Default for TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    #[cfg(test)]
    fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "ok"
    )
}

impl<R: BufRead, W: Write> ConfirmPrompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        let shown = write!(self.output, "{} {} ", message.yellow(), "[y/N]".bold())
            .and_then(|_| self.output.flush());
        if let Err(e) = shown {
            warn!("Failed to show confirmation prompt: {}", e);
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("Failed to read confirmation answer: {}", e);
                false
            }
        }
    }
}

/// Prints the alert (heading + error list) to stderr
pub struct TerminalNotifier {
    header: String,
    rich: bool,
}

impl TerminalNotifier {
    pub fn new(header: String, rich: bool) -> Self {
        Self { header, rich }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        let alert = compose_alert(message, self.rich, &self.header);
        if self.rich {
            eprintln!("{}", alert);
        } else {
            eprintln!("{}", alert.red());
        }
    }
}
