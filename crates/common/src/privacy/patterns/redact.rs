//! Category-specific masking functions
//!
//! All maskers are pure and total: they never panic on unexpected input and
//! operate on characters rather than bytes. Their outputs deliberately fail
//! the matching structural rule, so masking an already masked value is a
//! no-op for the engine.

/// Fixed token substituted for values that are masked in full
pub const REDACTED_SENTINEL: &str = "[REDACTED_PII]";

fn head(value: &str, n: usize) -> String {
    value.chars().take(n).collect()
}

fn tail(value: &str, n: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(n)).collect()
}

/// `9876543210` → `98XXXXXX10`
pub fn mask_phone(value: &str) -> String {
    format!("{}XXXXXX{}", head(value, 2), tail(value, 2))
}

/// `1234 5678 9012` → `12XXXXXXXX12`
pub fn mask_aadhar(value: &str) -> String {
    let digits = value.replace(' ', "");
    format!("{}XXXXXXXX{}", head(&digits, 2), tail(&digits, 2))
}

/// `P1234567` → `PXXXXXXX`
pub fn mask_passport(value: &str) -> String {
    format!("{}XXXXXXX", head(value, 1))
}

fn mask_handle(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };
    let local_len = local.chars().count();
    if local_len > 2 {
        format!("{}XXX@{}", head(local, 2), domain)
    } else {
        format!("{}@{}", "X".repeat(local_len), domain)
    }
}

/// `ravi@example.com` → `raXXX@example.com`; short local parts are fully
/// replaced (`a@b.com` → `X@b.com`)
pub fn mask_email(value: &str) -> String {
    mask_handle(value)
}

/// Same shape as [`mask_email`]: `ravi@okaxis` → `raXXX@okaxis`
pub fn mask_upi(value: &str) -> String {
    mask_handle(value)
}

/// Each word longer than one character keeps its initial: `Ravi K Sharma` →
/// `RXXX K SXXX`
pub fn mask_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            if word.chars().count() > 1 {
                format!("{}XXX", head(word, 1))
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `192.168.1.5` → `192.XXX.XXX.5`
pub fn mask_ip(value: &str) -> String {
    let first = value.split('.').next().unwrap_or_default();
    let last = value.rsplit('.').next().unwrap_or_default();
    format!("{}.XXX.XXX.{}", first, last)
}

/// Address, city, PIN code and device identifiers are masked in full
pub fn mask_full(_value: &str) -> String {
    REDACTED_SENTINEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_two_leading_and_trailing_digits() {
        assert_eq!(mask_phone("9876543210"), "98XXXXXX10");
    }

    #[test]
    fn aadhar_strips_spaces_before_masking() {
        assert_eq!(mask_aadhar("1234 5678 9012"), "12XXXXXXXX12");
        assert_eq!(mask_aadhar("123456789012"), "12XXXXXXXX12");
    }

    #[test]
    fn passport_keeps_first_character() {
        assert_eq!(mask_passport("P1234567"), "PXXXXXXX");
    }

    #[test]
    fn handles_mask_local_part() {
        assert_eq!(mask_email("ravi.kumar@example.com"), "raXXX@example.com");
        assert_eq!(mask_email("ab@example.com"), "XX@example.com");
        assert_eq!(mask_email("a@b.com"), "X@b.com");
        assert_eq!(mask_upi("ravi@okaxis"), "raXXX@okaxis");
        assert_eq!(mask_upi("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn name_masks_each_word() {
        assert_eq!(mask_name("Ravi Kumar"), "RXXX KXXX");
        assert_eq!(mask_name("Ravi K  Sharma"), "RXXX K SXXX");
        assert_eq!(mask_name("  Ravi "), "RXXX");
        assert_eq!(mask_name("Élodie Ünal"), "ÉXXX ÜXXX");
    }

    #[test]
    fn ip_keeps_first_and_last_octet() {
        assert_eq!(mask_ip("192.168.1.5"), "192.XXX.XXX.5");
    }

    #[test]
    fn full_mask_uses_sentinel() {
        assert_eq!(mask_full("12 MG Road, Pune 411001"), REDACTED_SENTINEL);
    }

    #[test]
    fn masks_are_fixed_points() {
        assert_eq!(mask_name(&mask_name("Ravi Kumar")), "RXXX KXXX");
        assert_eq!(mask_email(&mask_email("ravi@example.com")), "raXXX@example.com");
        assert_eq!(mask_email(&mask_email("a@b.com")), "X@b.com");
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;
        use crate::privacy::patterns::rules;

        proptest! {
            #[test]
            fn masked_phone_is_not_a_phone(value in "[6-9][0-9]{9}") {
                prop_assert!(rules::is_phone(&value));
                prop_assert!(!rules::is_phone(&mask_phone(&value)));
            }

            #[test]
            fn masked_aadhar_is_not_an_aadhar(value in "[1-9][0-9]{3} ?[0-9]{4} ?[0-9]{4}") {
                prop_assert!(rules::is_aadhar(&value));
                prop_assert!(!rules::is_aadhar(&mask_aadhar(&value)));
            }

            #[test]
            fn masked_passport_is_not_a_passport(value in "[A-PR-WY][1-9][0-9]{6}") {
                prop_assert!(!rules::is_passport(&mask_passport(&value)));
            }

            #[test]
            fn masked_ip_is_not_an_ip(value in "[0-9]{1,3}(\\.[0-9]{1,3}){3}") {
                prop_assert!(!rules::is_ip(&mask_ip(&value)));
            }

            #[test]
            fn name_mask_is_a_fixed_point(value in "\\PC{0,30}") {
                let once = mask_name(&value);
                prop_assert_eq!(mask_name(&once), once);
            }
        }
    }
}
