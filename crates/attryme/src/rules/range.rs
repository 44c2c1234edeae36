//! Numeric range rules
//!
//! The value is parsed as a number. A value that is not a finite number, or
//! a rule whose bound was never declared, always fails.

use super::Rule;
use crate::descriptor::FieldDescriptor;

/// Parse a field value as a finite number
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn fmt_bound(bound: Option<f64>) -> String {
    bound.map_or_else(|| "an unspecified limit".to_string(), |b| b.to_string())
}

/// Fails when `value >= max`
#[derive(Debug, Clone, Copy)]
pub struct RangeMax;

impl Rule for RangeMax {
    fn name(&self) -> &str {
        "rangemax"
    }

    fn check(&self, field: &FieldDescriptor) -> Option<String> {
        let ok = matches!(
            (parse_number(&field.value), field.max),
            (Some(value), Some(max)) if value < max
        );
        (!ok).then(|| {
            format!(
                "{} must not exceed {}, your value is: {}",
                field.display_name,
                fmt_bound(field.max),
                field.value
            )
        })
    }
}

/// Fails when `value <= min`
#[derive(Debug, Clone, Copy)]
pub struct RangeMin;

impl Rule for RangeMin {
    fn name(&self) -> &str {
        "rangemin"
    }

    fn check(&self, field: &FieldDescriptor) -> Option<String> {
        let ok = matches!(
            (parse_number(&field.value), field.min),
            (Some(value), Some(min)) if value > min
        );
        (!ok).then(|| {
            format!(
                "{} must be {} or greater, your value is: {}",
                field.display_name,
                fmt_bound(field.min),
                field.value
            )
        })
    }
}

/// Fails unless `min < value < max`
#[derive(Debug, Clone, Copy)]
pub struct RangeBetween;

impl Rule for RangeBetween {
    fn name(&self) -> &str {
        "rangebetween"
    }

    fn check(&self, field: &FieldDescriptor) -> Option<String> {
        let ok = matches!(
            (parse_number(&field.value), field.min, field.max),
            (Some(value), Some(min), Some(max)) if min < value && value < max
        );
        (!ok).then(|| {
            format!(
                "{} must be between {} and {}, your value is: {}",
                field.display_name,
                fmt_bound(field.min),
                fmt_bound(field.max),
                field.value
            )
        })
    }
}
