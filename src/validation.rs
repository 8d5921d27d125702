use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(EMAIL_PATTERN).ok());

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Inline error messages keyed by form field, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    messages: BTreeMap<F, &'static str>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: &'static str) {
        self.messages.insert(field, message);
    }

    /// Returns true when the field had an error.
    pub fn remove(&mut self, field: F) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: F) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.messages.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for email in ["anna@example.com", "a.b@c.it", "x@sub.domain.org", "a@b.c."] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "anna",
            "anna@",
            "@example.com",
            "anna@example",
            "anna@@example.com",
            "an na@example.com",
            "anna@exa mple.com",
            "anna@.com",
            "anna@example.",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn removing_one_error_keeps_the_rest() {
        let mut errors = FieldErrors::new();
        errors.insert(2u8, "second");
        errors.insert(1u8, "first");

        assert!(errors.remove(1));
        assert!(!errors.remove(1));
        assert_eq!(errors.get(2), Some("second"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![2]);
    }
}
