//! Rule registry - lookup from a field's type tag to its format or range check
//!
//! Each field runs at most one rule: the one registered under its `type` tag.
//! Tags with no registered rule (`checkbox`, `radio`, `string`, unknown tags)
//! run no format check.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::descriptor::FieldDescriptor;

pub mod patterns;
pub mod range;

pub use patterns::{FormatRule, PasswordRule};
pub use range::{RangeBetween, RangeMax, RangeMin};

/// A single rule category check
pub trait Rule: Send + Sync {
    /// Rule name (for logging and listings)
    fn name(&self) -> &str;

    /// Check the field's value
    ///
    /// # Returns
    /// * `None` - The value passes
    /// * `Some(message)` - Human-readable error for this field
    fn check(&self, field: &FieldDescriptor) -> Option<String>;
}

/// Registry of rules keyed by type tag
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a registry holding the built-in rules
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_rules();
        registry
    }

    /// Create a registry with no rules at all
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    fn register_builtin_rules(&mut self) {
        self.register("password", Arc::new(PasswordRule));
        self.register("digit", Arc::new(FormatRule::digit()));
        self.register("date", Arc::new(FormatRule::date()));
        self.register("email", Arc::new(FormatRule::email()));
        self.register("phone", Arc::new(FormatRule::phone()));
        self.register("zip", Arc::new(FormatRule::zip()));
        self.register("ipaddress", Arc::new(FormatRule::ip_address()));
        self.register("rangemax", Arc::new(RangeMax));
        self.register("rangemin", Arc::new(RangeMin));
        self.register("rangebetween", Arc::new(RangeBetween));

        debug!("Registered {} built-in rules", self.rules.len());
    }

    /// Register a rule under a tag, replacing any rule already there
    pub fn register(&mut self, tag: &str, rule: Arc<dyn Rule>) {
        debug!("Registering rule: {} -> {}", tag, rule.name());
        self.rules.insert(tag.to_string(), rule);
    }

    /// Remove the rule for a tag
    pub fn unregister(&mut self, tag: &str) -> Option<Arc<dyn Rule>> {
        self.rules.remove(tag)
    }

    /// Get the rule for a tag
    pub fn get(&self, tag: &str) -> Option<Arc<dyn Rule>> {
        self.rules.get(tag).cloned()
    }

    /// All registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rule selected by the field's type tag
    ///
    /// Returns `None` when the field has no tag, the tag has no rule, or the
    /// value passes.
    pub fn check(&self, field: &FieldDescriptor) -> Option<String> {
        let tag = field.type_tag()?;
        let rule = self.rules.get(tag)?;
        let outcome = rule.check(field);
        if outcome.is_some() {
            debug!(field = %field.id, rule = rule.name(), "rule failed");
        }
        outcome
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
