//! Structural validation rules for each PII category
//!
//! Whole-value rules (`is_*`) require the entire value to have the shape;
//! embedded finders (`find_*`) return every accepted substring of a free-text
//! value. Patterns are compiled once on first use. A pattern that fails to
//! compile simply never matches; `pattern_health` reports it.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{PiiError, PiiResult};

type CompiledPattern = Lazy<Result<Regex, regex::Error>>;

macro_rules! rule_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: CompiledPattern = Lazy::new(|| Regex::new($regex_str));
    };
}

// Whole-value shapes
rule_pattern!(PHONE_FULL, r"^\d{10}$");
rule_pattern!(AADHAR_FULL, r"^\d{4}\s?\d{4}\s?\d{4}$");
rule_pattern!(PASSPORT_FULL, r"^[A-PR-WYa-pr-wy][1-9]\d{6}$");
rule_pattern!(UPI_FULL, r"^[\w.-]+@[\w.-]+$");
rule_pattern!(EMAIL_FULL, r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$");
rule_pattern!(IP_FULL, r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$");
rule_pattern!(PIN_PREFIX, r"^\d{6}");

// Free-text searches
rule_pattern!(ADDRESS_TEXT, r"\d+\s+\w+.*\d{6}");
rule_pattern!(PHONE_EMBEDDED, r"\b\d{10}\b");
rule_pattern!(EMAIL_EMBEDDED, r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+");
rule_pattern!(AADHAR_EMBEDDED, r"\b\d{4}\s?\d{4}\s?\d{4}\b");

/// Every built-in pattern with its rule name, for health reporting
fn all_patterns() -> [(&'static str, &'static CompiledPattern); 11] {
    [
        ("phone", &PHONE_FULL),
        ("aadhar", &AADHAR_FULL),
        ("passport", &PASSPORT_FULL),
        ("upi_id", &UPI_FULL),
        ("email", &EMAIL_FULL),
        ("ip_address", &IP_FULL),
        ("pin_code", &PIN_PREFIX),
        ("address", &ADDRESS_TEXT),
        ("embedded_phone", &PHONE_EMBEDDED),
        ("embedded_email", &EMAIL_EMBEDDED),
        ("embedded_aadhar", &AADHAR_EMBEDDED),
    ]
}

/// Force compilation of every pattern and report the first failure
pub fn pattern_health() -> PiiResult<()> {
    for (rule, pattern) in all_patterns() {
        if let Err(e) = Lazy::force(pattern) {
            return Err(PiiError::PatternCompilation { rule, message: e.to_string() });
        }
    }
    Ok(())
}

fn is_match(pattern: &CompiledPattern, value: &str) -> bool {
    Lazy::force(pattern).as_ref().is_ok_and(|re| re.is_match(value))
}

fn find_all<'t>(pattern: &CompiledPattern, text: &'t str) -> Vec<&'t str> {
    match Lazy::force(pattern) {
        Ok(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        Err(_) => Vec::new(),
    }
}

fn starts_with_mobile_prefix(digits: &str) -> bool {
    matches!(digits.chars().next(), Some('6'..='9'))
}

/// Aadhaar numbers are matched with grouping spaces removed
pub fn strip_spaces(value: &str) -> String {
    value.replace(' ', "")
}

/// 10 digits, first digit 6-9
pub fn is_phone(value: &str) -> bool {
    is_match(&PHONE_FULL, value) && starts_with_mobile_prefix(value)
}

/// 12 digits once spaces are stripped, not starting with `0`
pub fn is_aadhar(value: &str) -> bool {
    let digits = strip_spaces(value);
    is_match(&AADHAR_FULL, &digits) && !digits.starts_with('0')
}

/// Passport letter (Q, X and Z excluded) followed by 1-9 and six digits
pub fn is_passport(value: &str) -> bool {
    is_match(&PASSPORT_FULL, value)
}

pub fn is_upi(value: &str) -> bool {
    is_match(&UPI_FULL, value)
}

/// Stricter than [`is_upi`]: the domain must carry a dotted suffix
pub fn is_email(value: &str) -> bool {
    is_match(&EMAIL_FULL, value)
}

/// Four dot-separated groups of 1-3 digits; octet ranges are not checked
pub fn is_ip(value: &str) -> bool {
    is_match(&IP_FULL, value)
}

/// A single name field counts only with two or more words
pub fn is_full_name(value: &str) -> bool {
    value.split_whitespace().nth(1).is_some()
}

/// House number, street text and a 6-digit postal code, in that order
pub fn is_address(value: &str) -> bool {
    is_match(&ADDRESS_TEXT, value)
}

pub fn is_name_pair(first_name: &str, last_name: &str) -> bool {
    !first_name.trim().is_empty() && !last_name.trim().is_empty()
}

pub fn is_city_pin(city: &str, pin_code: &str) -> bool {
    is_match(&PIN_PREFIX, pin_code) && !city.trim().is_empty()
}

pub fn is_device_id(value: &str) -> bool {
    value.chars().count() > 6
}

/// Phone-shaped substrings of `text` with a mobile prefix
pub fn find_phones(text: &str) -> Vec<&str> {
    find_all(&PHONE_EMBEDDED, text).into_iter().filter(|m| starts_with_mobile_prefix(m)).collect()
}

pub fn find_emails(text: &str) -> Vec<&str> {
    find_all(&EMAIL_EMBEDDED, text)
}

/// Aadhaar-shaped substrings (grouping spaces allowed) not starting with `0`
pub fn find_aadhars(text: &str) -> Vec<&str> {
    find_all(&AADHAR_EMBEDDED, text)
        .into_iter()
        .filter(|m| {
            let digits = strip_spaces(m);
            digits.chars().count() == 12 && !digits.starts_with('0')
        })
        .collect()
}
