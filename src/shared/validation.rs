// src/shared/validation.rs
//
// Field-level request validation. A `Validator` collects violations in the
// order the checks run; each violation is one `{field, message}` pair with
// the field named by its dotted path.

use email_address::EmailAddress;
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Required string: non-empty and within `max` characters.
    pub fn require_str(&mut self, field: &str, value: &str, max: usize) {
        if value.trim().is_empty() {
            self.push(field, format!("{} is required", display_name(field)));
        } else if value.chars().count() > max {
            self.push(
                field,
                format!("{} must be less than {} characters", display_name(field), max),
            );
        }
    }

    /// Optional string: only the maximum length is enforced when present.
    pub fn check_max(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.push(
                    field,
                    format!("{} must be less than {} characters", display_name(field), max),
                );
            }
        }
    }

    /// Optional URL field: a syntactically valid URL or the empty string
    /// (treated as absent) both pass.
    pub fn check_url(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() && Url::parse(v).is_err() {
                self.push(field, format!("Invalid {} URL", display_name(field)));
            }
        }
    }

    /// Every element of a sequence must be a well-formed URL.
    pub fn check_url_seq(&mut self, field: &str, values: &[String]) {
        for (idx, v) in values.iter().enumerate() {
            if Url::parse(v).is_err() {
                self.push(&format!("{}.{}", field, idx), "Invalid image URL");
            }
        }
    }

    pub fn check_email(&mut self, field: &str, value: &str) {
        if !EmailAddress::is_valid(value) {
            self.push(field, "Invalid email address");
        }
    }

    /// Inclusive integer range.
    pub fn check_range(&mut self, field: &str, value: i32, min: i32, max: i32) {
        if value < min {
            self.push(
                field,
                format!("{} must be at least {}", display_name(field), min),
            );
        } else if value > max {
            self.push(
                field,
                format!("{} must be at most {}", display_name(field), max),
            );
        }
    }

    pub fn check_min(&mut self, field: &str, value: i32, min: i32) {
        if value < min {
            self.push(
                field,
                format!("{} must be at least {}", display_name(field), min),
            );
        }
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Normalize an optional URL-shaped input: empty string means absent.
pub fn empty_as_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Pagination defaults shared by every list query: `limit` defaults to 10
/// and is clamped to 1..=100, `offset` defaults to 0.
pub fn clamp_page(limit: Option<u32>, offset: Option<u32>) -> (u64, u64) {
    let limit = limit.map_or(DEFAULT_LIMIT, u64::from).clamp(1, MAX_LIMIT);
    let offset = offset.map_or(0, u64::from);
    (limit, offset)
}

fn display_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    for c in chars {
        if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_string_rejects_empty() {
        let mut v = Validator::new();
        v.require_str("title", "", 200);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[0].message, "Title is required");
    }

    #[test]
    fn required_string_rejects_over_max() {
        let mut v = Validator::new();
        v.require_str("title", &"x".repeat(201), 200);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors[0].message, "Title must be less than 200 characters");
    }

    #[test]
    fn camel_case_field_gets_readable_name() {
        let mut v = Validator::new();
        v.check_max("longDescription", Some(&"x".repeat(2001)), 2000);
        let errors = v.finish().unwrap_err();
        assert_eq!(
            errors[0].message,
            "Long description must be less than 2000 characters"
        );
    }

    #[test]
    fn empty_url_is_not_a_failure() {
        let mut v = Validator::new();
        v.check_url("githubUrl", Some(""));
        assert!(v.finish().is_ok());
    }

    #[test]
    fn malformed_url_is_a_failure() {
        let mut v = Validator::new();
        v.check_url("githubUrl", Some("not a url"));
        let errors = v.finish().unwrap_err();
        assert_eq!(errors[0].field, "githubUrl");
    }

    #[test]
    fn url_sequence_names_offending_index() {
        let mut v = Validator::new();
        v.check_url_seq(
            "images",
            &["https://example.com/a.png".to_string(), "nope".to_string()],
        );
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "images.1");
    }

    #[test]
    fn email_check() {
        let mut v = Validator::new();
        v.check_email("email", "not-an-email");
        v.check_email("email", "jane@example.com");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid email address");
    }

    #[test]
    fn violations_keep_check_order() {
        let mut v = Validator::new();
        v.require_str("title", "", 200);
        v.check_range("level", 9, 1, 5);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[1].field, "level");
        assert_eq!(errors[1].message, "Level must be at most 5");
    }

    #[test]
    fn clamp_page_defaults_and_bounds() {
        assert_eq!(clamp_page(None, None), (10, 0));
        assert_eq!(clamp_page(Some(1000), Some(25)), (100, 25));
        assert_eq!(clamp_page(Some(0), None), (1, 0));
    }

    #[test]
    fn empty_as_none_normalizes() {
        assert_eq!(empty_as_none(Some(String::new())), None);
        assert_eq!(
            empty_as_none(Some("https://a.io".to_string())),
            Some("https://a.io".to_string())
        );
        assert_eq!(empty_as_none(None), None);
    }
}
