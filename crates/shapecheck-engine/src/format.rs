//! String format checks

use regex::Regex;
use std::sync::OnceLock;

/// Dot-separated atoms in the local part, at least one dotted label in the
/// domain, and an alphabetic top-level label of two or more characters.
/// Domain labels start and end with an alphanumeric.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Check a `local-part@domain.tld` shape
pub fn is_email(candidate: &str) -> bool {
    email_regex().is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(is_email("o'brien@example.ie"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_email("hi"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@.com"));
        assert!(!is_email(".a@b.com"));
        assert!(!is_email("a..b@c.com"));
        assert!(!is_email("a@b.c"));
        assert!(!is_email("a b@c.com"));
    }

    #[test]
    fn domain_labels_cannot_end_with_hyphen() {
        assert!(!is_email("a@b-.com"));
        assert!(!is_email("a@mail.b-.com"));
        assert!(is_email("a@b-c.com"));
        assert!(is_email("a@x.b.com"));
    }
}
