//! Injected collaborators: the confirmation prompt and the error notifier
//!
//! The validator never talks to a UI directly. Callers hand in something that
//! can ask the user a yes/no question and something that can show the final
//! error text. Closures work for both.

/// Asks the user to confirm before the form is accepted
pub trait ConfirmPrompt {
    /// Show `message` and block until the user answers
    fn confirm(&mut self, message: &str) -> bool;
}

/// Shows the formatted error text of a failed pass
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Answers every confirmation with the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Keeps every notification for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
