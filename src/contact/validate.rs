use std::sync::LazyLock;

use regex::Regex;

use super::{ContactFormData, Field, ValidationErrors};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

struct LengthRule {
    label: &'static str,
    min: usize,
    max: usize,
}

const NAME: LengthRule = LengthRule {
    label: "Name",
    min: 2,
    max: 100,
};
const SUBJECT: LengthRule = LengthRule {
    label: "Subject",
    min: 3,
    max: 200,
};
const DESCRIPTION: LengthRule = LengthRule {
    label: "Description",
    min: 10,
    max: 1000,
};

impl LengthRule {
    fn check(&self, value: &str) -> Option<String> {
        let value = value.trim();
        let len = value.chars().count();
        if len == 0 {
            Some(format!("{} is required", self.label))
        } else if len < self.min {
            Some(format!(
                "{} must be at least {} characters long",
                self.label, self.min
            ))
        } else if len > self.max {
            Some(format!(
                "{} must be at most {} characters long",
                self.label, self.max
            ))
        } else {
            None
        }
    }
}

fn check_email(value: &str) -> Option<String> {
    // surrounding spaces pass the check but stay in the posted payload
    let value = value.trim();
    if value.is_empty() {
        Some("Email is required".to_string())
    } else if !EMAIL_PATTERN.is_match(value) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

/// Checks every field of the form and returns the messages for the ones that fail.
///
/// Whitespace around a value is ignored for the checks but left in place in `form`.
pub fn validate(form: &ContactFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in Field::ALL {
        let value = form.get(field);
        let res = match field {
            Field::Name => NAME.check(value),
            Field::Email => check_email(value),
            Field::Subject => SUBJECT.check(value),
            Field::Description => DESCRIPTION.check(value),
        };
        if let Some(message) = res {
            errors.insert(field, message);
        }
    }
    errors
}
