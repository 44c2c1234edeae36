use std::path::Path;

use anyhow::{Context, Result};
use attryme::{
    AutoConfirm, Config, ConfirmPrompt, FieldValidator, Form, Notifier, ValidationResult,
};
use colored::Colorize;
use tracing::debug;

use crate::terminal::{TerminalNotifier, TerminalPrompt};

pub struct CheckOptions {
    pub rich: bool,
    /// Fixed answer for confirmations; `None` defers to the config file
    pub assume: Option<bool>,
    pub json: bool,
}

/// Settings for one run after merging command-line flags over the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub rich: bool,
    /// `None` asks on the terminal
    pub assume: Option<bool>,
}

impl Settings {
    /// `--rich` adds to the config's `rich`; `--yes`/`--no` override `[prompt] assume`
    pub fn resolve(options: &CheckOptions, config: &Config) -> Self {
        Self {
            rich: options.rich || config.validator.rich,
            assume: options.assume.or(config.prompt.assume),
        }
    }
}

/// Validate one form file. Returns whether the form would be accepted.
pub fn execute(form_path: &Path, config_path: &Path, options: CheckOptions) -> Result<bool> {
    let config = Config::load(config_path)?;
    debug!(?config, "loaded configuration");

    let form = Form::load(form_path)
        .with_context(|| format!("Failed to load form {:?}", form_path))?;

    let settings = Settings::resolve(&options, &config);
    let mut notifier = TerminalNotifier::new(config.validator.alert_header.clone(), settings.rich);
    let result = check_form(
        &form,
        &config,
        settings,
        &mut TerminalPrompt::new(),
        &mut notifier,
    )
    .with_context(|| format!("Invalid form {:?}", form_path))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid {
        let name = form.name.as_deref().unwrap_or("form");
        eprintln!(
            "{} {} ({} fields)",
            "✓".green().bold(),
            format!("{} is valid", name).green(),
            form.len()
        );
    }

    Ok(result.is_valid)
}

/// Run one pass over a loaded form
///
/// `terminal` is asked only when no fixed answer was configured.
pub fn check_form<P, N>(
    form: &Form,
    config: &Config,
    settings: Settings,
    terminal: &mut P,
    notify: &mut N,
) -> Result<ValidationResult>
where
    P: ConfirmPrompt + ?Sized,
    N: Notifier + ?Sized,
{
    form.validate_ids()?;

    let validator = FieldValidator::from_config(&config.validator).rich(settings.rich);
    let result = match settings.assume {
        Some(answer) => validator.run(&form.fields, &mut AutoConfirm(answer), notify),
        None => validator.run(&form.fields, terminal, notify),
    };
    Ok(result)
}
