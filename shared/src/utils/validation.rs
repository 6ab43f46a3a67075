//! Email validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Basic local@domain.tld shape. Deliverability is the mail server's
// problem, not ours.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Check if an email address has a valid `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
