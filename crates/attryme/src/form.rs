//! Form descriptions loaded from JSON or TOML
//!
//! A form file lists its fields in document order. Each entry is either a
//! typed descriptor or the element's raw `e_*` attributes. Attribute values
//! may be strings, booleans or numbers, and unknown keys fail the load:
//!
//! ```toml
//! name = "boat"
//!
//! [[fields]]
//! id = "zip"
//! type = "zip"
//! displayName = "Zip"
//! value = "90210"
//!
//! [[fields]]
//! id = "kind"
//! value = "SELECT"
//! attributes = { e_name = "Boat Type", e_required = "true", e_default = "SELECT" }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::descriptor::FieldDescriptor;
use crate::error::{FormError, Result};

/// An ordered set of fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub name: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawForm {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

/// One entry of the `fields` list
///
/// An entry with an `attributes` table goes through the `e_*` attribute
/// rules; any other entry is a typed descriptor. Unknown keys fail the load
/// in both shapes.
#[derive(Deserialize)]
#[serde(try_from = "Map<String, Value>")]
struct FieldEntry(FieldDescriptor);

/// Keys allowed next to `attributes`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AttributeEntry {
    id: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    checked: Vec<bool>,
}

impl TryFrom<Map<String, Value>> for FieldEntry {
    type Error = String;

    fn try_from(mut entry: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let in_field = |e: &dyn std::fmt::Display| format!("field {:?}: {}", id, e);

        let descriptor = match entry.remove("attributes") {
            Some(attributes) => {
                let attrs = attribute_strings(attributes).map_err(|e| in_field(&e))?;
                let AttributeEntry { id, value, checked } =
                    serde_json::from_value(Value::Object(entry)).map_err(|e| in_field(&e))?;
                FieldDescriptor::from_attributes(id, &value, &attrs, checked)
            }
            None => serde_json::from_value(Value::Object(entry)).map_err(|e| in_field(&e))?,
        };
        Ok(FieldEntry(descriptor))
    }
}

/// Attribute values are text in markup. Booleans and numbers written
/// unquoted in a form file are read as their text.
fn attribute_strings(attributes: Value) -> std::result::Result<BTreeMap<String, String>, String> {
    let map = match attributes {
        Value::Object(map) => map,
        other => return Err(format!("attributes must be a table, found {}", other)),
    };
    map.into_iter()
        .map(|(name, value)| match value {
            Value::String(text) => Ok((name, text)),
            Value::Bool(flag) => Ok((name, flag.to_string())),
            Value::Number(number) => Ok((name, number.to_string())),
            other => Err(format!(
                "attribute {} must be a string, boolean or number, found {}",
                name, other
            )),
        })
        .collect()
}

impl From<RawForm> for Form {
    fn from(raw: RawForm) -> Self {
        Form {
            name: raw.name,
            fields: raw.fields.into_iter().map(|FieldEntry(field)| field).collect(),
        }
    }
}

impl Form {
    pub fn new(name: Option<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawForm = serde_json::from_str(content)?;
        Ok(raw.into())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawForm = toml::from_str(content)?;
        Ok(raw.into())
    }

    /// Load a form file, choosing the format by extension (`.json` or `.toml`)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let form = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => return Err(FormError::UnsupportedFormat(path.to_path_buf())),
        };

        debug!("Loaded {} fields from {:?}", form.fields.len(), path);
        Ok(form)
    }

    /// Look a field up by id
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Check that every field has a unique, non-empty id
    ///
    /// The validator itself assumes this; call it before running a pass on
    /// untrusted input.
    pub fn validate_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.id.is_empty() {
                return Err(FormError::MissingId(index));
            }
            if !seen.insert(field.id.as_str()) {
                return Err(FormError::DuplicateId(field.id.clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{AutoConfirm, RecordingNotifier};
    use crate::descriptor::FieldType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_mixed_entries() {
        let json = r#"{
            "name": "signup",
            "fields": [
                { "id": "email", "type": "email", "displayName": "Email", "value": " a@b.com " },
                { "id": "kind", "value": "SELECT",
                  "attributes": { "e_name": "Kind", "e_required": "true", "e_default": "SELECT" } }
            ]
        }"#;
        let form = Form::from_json_str(json).unwrap();

        assert_eq!(form.name.as_deref(), Some("signup"));
        assert_eq!(form.len(), 2);
        let email = form.field("email").unwrap();
        assert_eq!(email.field_type, Some(FieldType::Email));
        assert_eq!(email.value, "a@b.com");

        let kind = form.field("kind").unwrap();
        assert!(kind.required);
        assert!(kind.is_empty_equivalent());
    }

    #[test]
    fn test_toml_form() {
        let toml = r#"
            [[fields]]
            id = "qty"
            type = "rangebetween"
            displayName = "Quantity"
            value = "5"
            min = 1
            max = 10

            [[fields]]
            id = "extras"
            checked = [false, true]
            attributes = { e_type = "checkbox", e_name = "Extra", e_required = "true" }
        "#;
        let form = Form::from_toml_str(toml).unwrap();

        let qty = form.field("qty").unwrap();
        assert_eq!(qty.min, Some(1.0));
        assert_eq!(qty.max, Some(10.0));

        let extras = form.field("extras").unwrap();
        assert!(extras.is_group());
        assert_eq!(extras.checked, vec![false, true]);
    }

    #[test]
    fn test_validate_ids() {
        let ok = Form::new(None, vec![FieldDescriptor::new("a"), FieldDescriptor::new("b")]);
        assert!(ok.validate_ids().is_ok());

        let dup = Form::new(None, vec![FieldDescriptor::new("a"), FieldDescriptor::new("a")]);
        assert!(matches!(dup.validate_ids(), Err(FormError::DuplicateId(id)) if id == "a"));

        let missing = Form::new(None, vec![FieldDescriptor::new("a"), FieldDescriptor::new("")]);
        assert!(matches!(missing.validate_ids(), Err(FormError::MissingId(1))));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Form::load("Cargo.toml.bak").unwrap_err();
        assert!(matches!(err, FormError::Io { .. }));

        let err = Form::load(env!("CARGO_MANIFEST_DIR").to_string() + "/src/lib.rs").unwrap_err();
        assert!(matches!(err, FormError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_unquoted_attribute_values() {
        let toml = r#"
            [[fields]]
            id = "name"
            value = ""
            attributes = { e_name = "Name", e_required = true }
        "#;
        let form = Form::from_toml_str(toml).unwrap();
        let name = form.field("name").unwrap();
        assert!(name.required);
        assert_eq!(name.display_name, "Name");

        let mut notifier = RecordingNotifier::new();
        let result = crate::run(&form.fields, &mut AutoConfirm(true), &mut notifier);
        assert_eq!(result.errors, vec!["Name is required."]);

        let json = r#"{ "fields": [
            { "id": "pin", "value": "1",
              "attributes": { "e_name": "PIN", "e_length": 4, "e_max": 9.5 } }
        ] }"#;
        let form = Form::from_json_str(json).unwrap();
        let pin = form.field("pin").unwrap();
        assert_eq!(pin.min_length, Some(4));
        assert_eq!(pin.max, Some(9.5));

        let result = crate::run(&form.fields, &mut AutoConfirm(true), &mut notifier);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_unknown_keys_fail_the_load() {
        let typo = r#"{ "fields": [ { "id": "name", "displayName": "Name", "requried": true } ] }"#;
        let err = Form::from_json_str(typo).unwrap_err();
        assert!(matches!(err, FormError::Json(_)));
        assert!(err.to_string().contains("requried"));

        let snake = "[[fields]]\nid = \"name\"\ndisplay_name = \"Name\"\n";
        assert!(matches!(Form::from_toml_str(snake), Err(FormError::Toml(_))));

        let beside_attributes = r#"{ "fields": [
            { "id": "kind", "required": true, "attributes": { "e_name": "Kind" } }
        ] }"#;
        assert!(Form::from_json_str(beside_attributes).is_err());

        let nested = r#"{ "fields": [ { "id": "kind", "attributes": { "e_list": ["a", "b"] } } ] }"#;
        let err = Form::from_json_str(nested).unwrap_err();
        assert!(err.to_string().contains("e_list"));

        assert!(Form::from_json_str(r#"{ "feilds": [] }"#).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Form::from_json_str("{"), Err(FormError::Json(_))));
    }
}
