//! Declarative `e_*` attribute extraction
//!
//! Form fields declare their constraints as string attributes on the element
//! (`e_type="zip"`, `e_required="true"`, `e_list="Sail,Motor"`, ...). This
//! module turns such an attribute map into a [`FieldDescriptor`].
//!
//! An attribute that is absent or set to the empty string counts as
//! unspecified. Boolean attributes are only true for the literal `"true"`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::descriptor::{FieldDescriptor, FieldType};

pub const ATTR_TYPE: &str = "e_type";
pub const ATTR_DEFAULT: &str = "e_default";
pub const ATTR_NAME: &str = "e_name";
pub const ATTR_REQUIRED: &str = "e_required";
pub const ATTR_INVALID: &str = "e_invalid";
pub const ATTR_MIN: &str = "e_min";
pub const ATTR_MAX: &str = "e_max";
pub const ATTR_LENGTH: &str = "e_length";
pub const ATTR_LIST: &str = "e_list";
pub const ATTR_CONFIRM: &str = "e_confirm";
pub const ATTR_CONFIRM_MSG: &str = "e_confirmMsg";

/// Every attribute name the extractor understands
pub const ATTRIBUTE_NAMES: &[&str] = &[
    ATTR_TYPE,
    ATTR_DEFAULT,
    ATTR_NAME,
    ATTR_REQUIRED,
    ATTR_INVALID,
    ATTR_MIN,
    ATTR_MAX,
    ATTR_LENGTH,
    ATTR_LIST,
    ATTR_CONFIRM,
    ATTR_CONFIRM_MSG,
];

/// Read view over one element's attributes
struct Attrs<'a> {
    id: &'a str,
    map: &'a BTreeMap<String, String>,
}

impl<'a> Attrs<'a> {
    fn get(&self, name: &str) -> Option<&'a str> {
        self.map
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn flag(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }

    fn list(&self, name: &str) -> Vec<String> {
        self.get(name).map(parse_option_list).unwrap_or_default()
    }

    fn number(&self, name: &str) -> Option<f64> {
        let raw = self.get(name)?;
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            _ => {
                warn!(field = self.id, attribute = name, value = raw, "ignoring non-numeric bound");
                None
            }
        }
    }

    fn length(&self, name: &str) -> Option<usize> {
        let raw = self.get(name)?;
        match raw.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(field = self.id, attribute = name, value = raw, "ignoring malformed length");
                None
            }
        }
    }
}

/// Split a comma separated option list, trimming entries and dropping blanks
///
/// # Examples
/// ```
/// use attryme::attributes::parse_option_list;
/// assert_eq!(parse_option_list("Sail, Motor,,Other"), vec!["Sail", "Motor", "Other"]);
/// ```
pub fn parse_option_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl FieldDescriptor {
    /// Build a descriptor from an element's declared attributes
    ///
    /// # Arguments
    /// * `id` - Element id
    /// * `value` - Current value (trimmed here)
    /// * `attrs` - Attribute name to attribute value
    /// * `checked` - Checked flags of the options, for checkbox/radio groups
    pub fn from_attributes(
        id: impl Into<String>,
        value: &str,
        attrs: &BTreeMap<String, String>,
        checked: Vec<bool>,
    ) -> Self {
        let id = id.into();
        let view = Attrs { id: &id, map: attrs };

        for key in attrs.keys() {
            if key.starts_with("e_") && !ATTRIBUTE_NAMES.contains(&key.as_str()) {
                debug!(field = %id, attribute = %key, "unknown validation attribute");
            }
        }

        FieldDescriptor {
            id: id.clone(),
            value: value.trim().to_string(),
            field_type: view.get(ATTR_TYPE).map(FieldType::parse),
            display_name: view.get(ATTR_NAME).unwrap_or_default().to_string(),
            default_value: view.get(ATTR_DEFAULT).map(str::to_string),
            required: view.flag(ATTR_REQUIRED),
            invalid_options: view.list(ATTR_INVALID),
            valid_options: view.list(ATTR_LIST),
            min_length: view.length(ATTR_LENGTH),
            min: view.number(ATTR_MIN),
            max: view.number(ATTR_MAX),
            request_confirmation: view.flag(ATTR_CONFIRM),
            confirmation_message: view.get(ATTR_CONFIRM_MSG).map(str::to_string),
            checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_attribute_set() {
        let map = attrs(&[
            ("e_type", "rangebetween"),
            ("e_name", "Boat Length"),
            ("e_required", "true"),
            ("e_default", "0"),
            ("e_min", "10"),
            ("e_max", "80"),
            ("e_length", "2"),
            ("e_invalid", "13, 66"),
            ("e_confirm", "true"),
            ("e_confirmMsg", "Is the length right? "),
        ]);
        let field = FieldDescriptor::from_attributes("length", " 24 ", &map, vec![]);

        assert_eq!(field.id, "length");
        assert_eq!(field.value, "24");
        assert_eq!(field.field_type, Some(FieldType::RangeBetween));
        assert_eq!(field.display_name, "Boat Length");
        assert_eq!(field.default_value.as_deref(), Some("0"));
        assert!(field.required);
        assert_eq!(field.min, Some(10.0));
        assert_eq!(field.max, Some(80.0));
        assert_eq!(field.min_length, Some(2));
        assert_eq!(field.invalid_options, vec!["13", "66"]);
        assert!(field.request_confirmation);
        assert_eq!(field.confirmation_message.as_deref(), Some("Is the length right? "));
    }

    #[test]
    fn test_empty_attributes_are_unspecified() {
        let map = attrs(&[("e_type", ""), ("e_name", ""), ("e_required", ""), ("e_list", "")]);
        let field = FieldDescriptor::from_attributes("x", "v", &map, vec![]);

        assert_eq!(field.field_type, None);
        assert_eq!(field.display_name, "");
        assert!(!field.required);
        assert!(field.valid_options.is_empty());
    }

    #[test]
    fn test_only_literal_true_is_true() {
        let map = attrs(&[("e_required", "yes"), ("e_confirm", "TRUE")]);
        let field = FieldDescriptor::from_attributes("x", "", &map, vec![]);
        assert!(!field.required);
        assert!(!field.request_confirmation);
    }

    #[test]
    fn test_malformed_numbers_are_dropped() {
        let map = attrs(&[("e_min", "ten"), ("e_max", "NaN"), ("e_length", "-3")]);
        let field = FieldDescriptor::from_attributes("x", "", &map, vec![]);
        assert_eq!(field.min, None);
        assert_eq!(field.max, None);
        assert_eq!(field.min_length, None);
    }

    #[test]
    fn test_group_flags_are_kept() {
        let map = attrs(&[("e_type", "checkbox"), ("e_required", "true")]);
        let field = FieldDescriptor::from_attributes("extras", "", &map, vec![false, true]);
        assert!(field.is_group());
        assert_eq!(field.checked, vec![false, true]);
    }
}
