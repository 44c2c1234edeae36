// attryme - attribute-driven form validation
// Reads declared constraints off form fields, checks the current values, and
// reports numbered error messages before a form is allowed through.

pub mod attributes;
pub mod collaborators;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod form;
pub mod format;
pub mod result;
pub mod rules;
pub mod validator;

// Re-export core types
pub use collaborators::{AutoConfirm, ConfirmPrompt, Notifier, RecordingNotifier};
pub use config::Config;
pub use descriptor::{any_checked, FieldDescriptor, FieldType};
pub use error::FormError;
pub use form::Form;
pub use format::{compose_alert, confirmation_message, format_errors};
pub use result::ValidationResult;
pub use rules::{Rule, RuleRegistry};
pub use validator::{run, FieldValidator};
