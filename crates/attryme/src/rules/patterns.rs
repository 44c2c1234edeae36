// File: src/rules/patterns.rs
// Purpose: Format rules backed by fixed patterns

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;
use crate::descriptor::FieldDescriptor;

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_.+-]+@[a-z0-9-]+\.[a-z0-9.-]+$").unwrap());

// Optional +country digit and area code, then 3 + 4 digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:\+?[0-9]?[\s.\-]?(?:\([0-9]{3}\)|[0-9]{3})[\s.\-]?)?[0-9]{3}[\s.\-]?[0-9]{4}$",
    )
    .unwrap()
});

static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}(?:[-\s]?[0-9]{4})?$").unwrap());

static IP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").unwrap());

const MIN_YEAR: i32 = 1900;

pub fn is_digit(value: &str) -> bool {
    DIGIT_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn is_valid_zip(value: &str) -> bool {
    ZIP_REGEX.is_match(value)
}

pub fn is_valid_ip_address(value: &str) -> bool {
    IP_REGEX.is_match(value)
}

/// `MM/DD/YYYY`, year 1900 or later, and a real calendar day
pub fn is_valid_date(value: &str) -> bool {
    let Some(caps) = DATE_REGEX.captures(value) else {
        return false;
    };
    let (Ok(month), Ok(day), Ok(year)) = (
        caps[1].parse::<u32>(),
        caps[2].parse::<u32>(),
        caps[3].parse::<i32>(),
    ) else {
        return false;
    };
    year >= MIN_YEAR && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// 4-16 characters with an upper case letter, a lower case letter and a
/// digit, and no whitespace
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    (4..=16).contains(&len)
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && !value.chars().any(char::is_whitespace)
}

/// A rule that tests the value against a predicate and reports
/// `"{name} contains an invalid format. {requirement}, your value is: {value}"`
#[derive(Clone, Copy)]
pub struct FormatRule {
    name: &'static str,
    test: fn(&str) -> bool,
    requirement: &'static str,
}

impl FormatRule {
    pub fn new(name: &'static str, test: fn(&str) -> bool, requirement: &'static str) -> Self {
        Self {
            name,
            test,
            requirement,
        }
    }

    pub fn digit() -> Self {
        Self::new("digit", is_digit, "Must be a digit")
    }

    pub fn date() -> Self {
        Self::new("date", is_valid_date, "Must be a date in MM/DD/YYYY")
    }

    pub fn email() -> Self {
        Self::new("email", is_valid_email, "Must be a valid email address")
    }

    pub fn phone() -> Self {
        Self::new(
            "phone",
            is_valid_phone,
            "Must be a valid phone number from 7-10 digits",
        )
    }

    pub fn zip() -> Self {
        Self::new("zip", is_valid_zip, "Must be a valid 5 or 9 digit US Zip Code")
    }

    pub fn ip_address() -> Self {
        Self::new("ipaddress", is_valid_ip_address, "Must be a valid IP Address")
    }
}

impl Rule for FormatRule {
    fn name(&self) -> &str {
        self.name
    }

    fn check(&self, field: &FieldDescriptor) -> Option<String> {
        if (self.test)(&field.value) {
            return None;
        }
        Some(format!(
            "{} contains an invalid format. {}, your value is: {}",
            field.display_name, self.requirement, field.value
        ))
    }
}

/// Password strength rule. The value is not echoed back in the message.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRule;

impl Rule for PasswordRule {
    fn name(&self) -> &str {
        "password"
    }

    fn check(&self, field: &FieldDescriptor) -> Option<String> {
        if is_valid_password(&field.value) {
            return None;
        }
        Some(format!(
            "{} contains an invalid format. Must be at least 4 characters long and contain one (1) Upper Case, one (1) lower case, and one (1) number. Example: MyPassword_123",
            field.display_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last+tag@example-mail.co.uk", true)]
    #[case("USER@EXAMPLE.COM", true)]
    #[case("a@b", false)]
    #[case("@b.com", false)]
    #[case("a b@c.com", false)]
    #[case("a@@b.com", false)]
    fn test_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[rstest]
    #[case("12345", true)]
    #[case("12345-6789", true)]
    #[case("12345 6789", true)]
    #[case("123456789", true)]
    #[case("1234", false)]
    #[case("12345-678", false)]
    #[case("abcde", false)]
    fn test_zip(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_zip(value), expected);
    }

    #[rstest]
    #[case("42", true)]
    #[case("-7", true)]
    #[case("+0", true)]
    #[case("4.2", false)]
    #[case("12a", false)]
    #[case("-", false)]
    fn test_digit(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_digit(value), expected);
    }

    #[rstest]
    #[case("02/29/2024", true)]
    #[case("12/31/1999", true)]
    #[case("01/01/1900", true)]
    #[case("02/29/2023", false)]
    #[case("02/29/1900", false)]
    #[case("04/31/2020", false)]
    #[case("13/01/2020", false)]
    #[case("00/10/2020", false)]
    #[case("1/1/2020", false)]
    #[case("12/31/1899", false)]
    #[case("2020-01-01", false)]
    fn test_date(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_date(value), expected);
    }

    #[rstest]
    #[case("555-1234", true)]
    #[case("5551234", true)]
    #[case("555-123-4567", true)]
    #[case("(555) 123-4567", true)]
    #[case("+1 555.123.4567", true)]
    #[case("5551234567", true)]
    #[case("12345", false)]
    #[case("555-12345", false)]
    #[case("phone", false)]
    fn test_phone(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_phone(value), expected);
    }

    #[rstest]
    #[case("192.168.0.1", true)]
    #[case("255.255.255.255", true)]
    #[case("0.0.0.0", true)]
    #[case("256.1.1.1", false)]
    #[case("1.2.3", false)]
    #[case("1.2.3.4.5", false)]
    fn test_ip_address(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_ip_address(value), expected);
    }

    #[rstest]
    #[case("MyPass1", true)]
    #[case("aB3x", true)]
    #[case("aB3", false)]
    #[case("alllower1", false)]
    #[case("ALLUPPER1", false)]
    #[case("NoDigitsHere", false)]
    #[case("Has Space1", false)]
    #[case("Abcdefghijklmno12", false)]
    fn test_password(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_password(value), expected);
    }

    #[test]
    fn test_format_rule_message() {
        let field = FieldDescriptor::new("zip")
            .with_display_name("Zip")
            .with_value("1234");
        assert_eq!(
            FormatRule::zip().check(&field).as_deref(),
            Some("Zip contains an invalid format. Must be a valid 5 or 9 digit US Zip Code, your value is: 1234")
        );
    }

    #[test]
    fn test_password_message_hides_value() {
        let field = FieldDescriptor::new("pw")
            .with_display_name("Password")
            .with_value("secret");
        let message = PasswordRule.check(&field).unwrap();
        assert!(message.starts_with("Password contains an invalid format."));
        assert!(!message.contains("secret"));
    }
}
