// File: src/descriptor.rs
// Purpose: Field descriptors and the type tag that selects a field's rule

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `type` tag of a field, selecting which format or range rule runs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Password,
    Digit,
    Date,
    Email,
    Phone,
    Zip,
    RangeMax,
    RangeMin,
    RangeBetween,
    IpAddress,
    Checkbox,
    Radio,
    /// Free text; disables the allowed-value check
    String,
    /// Any tag without a built-in meaning
    Other(String),
}

impl FieldType {
    /// Parse a type tag (case-sensitive, like the attribute values it comes from)
    ///
    /// # Examples
    /// ```
    /// use attryme::FieldType;
    /// assert_eq!(FieldType::parse("zip"), FieldType::Zip);
    /// assert_eq!(FieldType::parse("rangebetween"), FieldType::RangeBetween);
    /// assert_eq!(FieldType::parse("color"), FieldType::Other("color".to_string()));
    /// ```
    pub fn parse(tag: &str) -> Self {
        match tag {
            "password" => FieldType::Password,
            "digit" => FieldType::Digit,
            "date" => FieldType::Date,
            "email" => FieldType::Email,
            "phone" => FieldType::Phone,
            "zip" => FieldType::Zip,
            "rangemax" => FieldType::RangeMax,
            "rangemin" => FieldType::RangeMin,
            "rangebetween" => FieldType::RangeBetween,
            "ipaddress" => FieldType::IpAddress,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "string" => FieldType::String,
            other => FieldType::Other(other.to_string()),
        }
    }

    /// Canonical tag, used as the rule registry key
    pub fn as_tag(&self) -> &str {
        match self {
            FieldType::Password => "password",
            FieldType::Digit => "digit",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Zip => "zip",
            FieldType::RangeMax => "rangemax",
            FieldType::RangeMin => "rangemin",
            FieldType::RangeBetween => "rangebetween",
            FieldType::IpAddress => "ipaddress",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::String => "string",
            FieldType::Other(tag) => tag,
        }
    }

    /// Checkbox and radio fields are groups of options with checked flags
    pub fn is_group(&self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(FieldType::parse(&tag))
    }
}

/// One form field: its current value plus its declared constraints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldDescriptor {
    pub id: String,

    /// Current value, whitespace-trimmed. The validator trims again, for
    /// descriptors built as struct literals.
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub value: String,

    #[serde(default, rename = "type")]
    pub field_type: Option<FieldType>,

    /// Name used in error messages
    #[serde(default)]
    pub display_name: String,

    /// A value equal to this counts as unfilled (e.g. a "SELECT" placeholder)
    #[serde(default)]
    pub default_value: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub invalid_options: Vec<String>,

    #[serde(default)]
    pub valid_options: Vec<String>,

    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,

    #[serde(default)]
    pub request_confirmation: bool,

    #[serde(default)]
    pub confirmation_message: Option<String>,

    /// Checked flags of a checkbox/radio group, one per option
    #[serde(default)]
    pub checked: Vec<bool>,
}

fn deserialize_trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl AsRef<str>) -> Self {
        self.value = value.as_ref().trim().to_string();
        self
    }

    pub fn with_type(mut self, tag: &str) -> Self {
        self.field_type = Some(FieldType::parse(tag));
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_default_value(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_invalid_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invalid_options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_valid_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Ask for confirmation before the form is accepted
    pub fn with_confirmation(mut self, message: Option<&str>) -> Self {
        self.request_confirmation = true;
        self.confirmation_message = message.map(str::to_string);
        self
    }

    pub fn with_checked(mut self, checked: impl Into<Vec<bool>>) -> Self {
        self.checked = checked.into();
        self
    }

    /// Tag of the field's rule category, if any
    pub fn type_tag(&self) -> Option<&str> {
        self.field_type.as_ref().map(FieldType::as_tag)
    }

    pub fn is_group(&self) -> bool {
        self.field_type.as_ref().is_some_and(FieldType::is_group)
    }

    /// Blank, or equal to the declared default value
    pub fn is_empty_equivalent(&self) -> bool {
        self.value.is_empty() || self.default_value.as_deref() == Some(self.value.as_str())
    }

    /// Number of characters in the value (not bytes)
    pub fn value_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// True iff at least one option of a checkbox/radio group is checked
pub fn any_checked(flags: &[bool]) -> bool {
    flags.iter().any(|&checked| checked)
}
