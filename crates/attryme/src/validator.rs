//! The validation pass
//!
//! One pass walks the fields in order and threads an accumulator through:
//! the errors found so far and whether any confirmation was declined. Every
//! check runs for every field; nothing short-circuits. Once all fields are
//! done the accumulator becomes a [`ValidationResult`], and a failed pass is
//! reported to the notifier exactly once.

use std::borrow::Cow;

use tracing::{debug, info};

use crate::collaborators::{ConfirmPrompt, Notifier};
use crate::config::ValidatorSection;
use crate::descriptor::{any_checked, FieldDescriptor, FieldType};
use crate::format::{confirmation_message, format_errors};
use crate::result::ValidationResult;
use crate::rules::RuleRegistry;

/// Accumulator threaded through the pass
#[derive(Debug, Default)]
struct Pass {
    errors: Vec<String>,
    confirmations: usize,
    declined: bool,
}

impl Pass {
    fn finish(self) -> ValidationResult {
        if self.errors.is_empty() && !self.declined {
            ValidationResult::success()
        } else {
            ValidationResult::failure(self.errors)
        }
    }
}

/// Validates a form's fields against their declared constraints
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    registry: RuleRegistry,
    rich: bool,
}

impl FieldValidator {
    /// Validator with the built-in rules and plain-text error output
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            rich: false,
        }
    }

    pub fn from_config(config: &ValidatorSection) -> Self {
        Self::new().rich(config.rich)
    }

    /// Report errors as an HTML list instead of plain text
    pub fn rich(mut self, rich: bool) -> Self {
        self.rich = rich;
        self
    }

    pub fn is_rich(&self) -> bool {
        self.rich
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Run one validation pass
    ///
    /// # Arguments
    /// * `fields` - Form fields in document order
    /// * `confirm` - Asked once per field that requests confirmation
    /// * `notify` - Receives the formatted error list when the pass fails
    ///
    /// # Returns
    /// Valid only when no check failed and no confirmation was declined. A
    /// declined confirmation with no errors still notifies, with an empty list.
    pub fn run<C, N>(
        &self,
        fields: &[FieldDescriptor],
        confirm: &mut C,
        notify: &mut N,
    ) -> ValidationResult
    where
        C: ConfirmPrompt + ?Sized,
        N: Notifier + ?Sized,
    {
        let pass = fields.iter().fold(Pass::default(), |mut pass, field| {
            let errors = self.check_field(field);
            debug!(field = %field.id, errors = errors.len(), "checked field");
            pass.errors.extend(errors);

            if field.request_confirmation {
                pass.confirmations += 1;
                let message = confirmation_message(field.confirmation_message.as_deref());
                if !confirm.confirm(&message) {
                    debug!(field = %field.id, "confirmation declined");
                    pass.declined = true;
                }
            }
            pass
        });

        info!(
            fields = fields.len(),
            errors = pass.errors.len(),
            confirmations = pass.confirmations,
            declined = pass.declined,
            "validation pass finished"
        );

        let result = pass.finish();
        if !result.is_valid {
            notify.notify(&format_errors(&result.errors, self.rich));
        }
        result
    }

    /// Every failing check for one field, in check order
    ///
    /// Runs the required, format, minimum length, disallowed value and
    /// allowed value checks. Confirmation is not part of this.
    pub fn check_field(&self, field: &FieldDescriptor) -> Vec<String> {
        let normalized = trimmed(field);
        let field = &*normalized;
        let mut errors = Vec::new();

        if let Some(error) = required_error(field) {
            errors.push(error);
        }

        if !field.value.is_empty() {
            if let Some(error) = self.registry.check(field) {
                errors.push(error);
            }
        }

        if let Some(min_length) = field.min_length {
            if field.value_len() < min_length {
                errors.push(format!(
                    "{} must contain {} or more characters. Your value is: {}",
                    field.display_name, min_length, field.value
                ));
            }
        }

        if field.invalid_options.contains(&field.value) {
            errors.push(invalid_option(field));
        }

        if !field.valid_options.is_empty()
            && field.field_type != Some(FieldType::String)
            && !field.valid_options.contains(&field.value)
        {
            errors.push(invalid_option(field));
        }

        errors
    }
}

/// `value` is a public field, so a hand-built descriptor can skip the trim
/// that `with_value` and deserialization apply
fn trimmed(field: &FieldDescriptor) -> Cow<'_, FieldDescriptor> {
    if field.value.trim().len() == field.value.len() {
        Cow::Borrowed(field)
    } else {
        Cow::Owned(field.clone().with_value(&field.value))
    }
}

fn required_error(field: &FieldDescriptor) -> Option<String> {
    if !field.required {
        return None;
    }
    if field.is_group() {
        return (!any_checked(&field.checked)).then(|| {
            format!(
                "At least one {} selected option is required.",
                field.display_name
            )
        });
    }
    field
        .is_empty_equivalent()
        .then(|| format!("{} is required.", field.display_name))
}

fn invalid_option(field: &FieldDescriptor) -> String {
    format!(
        "{} contains an invalid option. Your value is: {}",
        field.display_name, field.value
    )
}

/// Run one pass with the built-in rules and plain-text output
pub fn run<C, N>(fields: &[FieldDescriptor], confirm: &mut C, notify: &mut N) -> ValidationResult
where
    C: ConfirmPrompt + ?Sized,
    N: Notifier + ?Sized,
{
    FieldValidator::new().run(fields, confirm, notify)
}
