//! Category rule table
//!
//! The registry maps record fields to a category, a structural validator and
//! a masker. The orchestrator only walks this table, so adding a category or
//! a new field for an existing category does not touch its control flow.

use std::collections::HashSet;


use super::error::PiiResult;
use super::redact;
use super::rules;
use super::types::{CategoryKind, PiiCategory};
use crate::error::CommonError;

/// Whole-value check for one field
pub type Validator = fn(&str) -> bool;
/// Joint check for two fields, arguments in field order
pub type PairValidator = fn(&str, &str) -> bool;
/// Masking function
pub type Redactor = fn(&str) -> String;
/// Returns accepted PII substrings of a free-text value, in order
pub type Finder = fn(&str) -> Vec<&str>;

/// How a rule reads the record
#[derive(Debug, Clone, Copy)]
pub enum RuleShape {
    /// One field checked and masked on its own
    Single { field: &'static str, validate: Validator, redact: Redactor },
    /// Two fields that only count when both are present
    Pair { fields: [&'static str; 2], validate: PairValidator, redact: [Redactor; 2] },
}

/// One row of the registry
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub category: PiiCategory,
    pub shape: RuleShape,
    /// Fields of this rule are consumed whole and skipped by the embedded scan
    pub scan_exempt: bool,
}

impl FieldRule {
    fn single(
        category: PiiCategory,
        field: &'static str,
        validate: Validator,
        redact: Redactor,
        scan_exempt: bool,
    ) -> Self {
        Self { category, shape: RuleShape::Single { field, validate, redact }, scan_exempt }
    }

    fn pair(
        category: PiiCategory,
        fields: [&'static str; 2],
        validate: PairValidator,
        redact: [Redactor; 2],
    ) -> Self {
        Self { category, shape: RuleShape::Pair { fields, validate, redact }, scan_exempt: false }
    }

    /// Field names this rule reads
    pub fn fields(&self) -> &[&'static str] {
        match &self.shape {
            RuleShape::Single { field, .. } => std::slice::from_ref(field),
            RuleShape::Pair { fields, .. } => fields,
        }
    }

    pub const fn kind(&self) -> CategoryKind {
        self.category.kind()
    }
}

/// Substring scanner used on free-text fields
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedRule {
    pub category: PiiCategory,
    pub find: Finder,
    pub redact: Redactor,
}

/// Immutable table of field rules and embedded scanners
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<FieldRule>,
    embedded: Vec<EmbeddedRule>,
}

impl RuleRegistry {
    /// Build a registry from explicit tables
    pub fn new(rules: Vec<FieldRule>, embedded: Vec<EmbeddedRule>) -> Self {
        Self { rules, embedded }
    }

    /// The built-in rule set
    pub fn builtin() -> Self {
        use PiiCategory as C;

        let rules = vec![
            // Standalone
            FieldRule::single(C::Phone, "phone", rules::is_phone, redact::mask_phone, true),
            FieldRule::single(C::Aadhar, "aadhar", rules::is_aadhar, redact::mask_aadhar, true),
            FieldRule::single(
                C::Passport,
                "passport",
                rules::is_passport,
                redact::mask_passport,
                true,
            ),
            FieldRule::single(C::UpiId, "upi_id", rules::is_upi, redact::mask_upi, true),
            // Combinable
            FieldRule::single(C::Name, "name", rules::is_full_name, redact::mask_name, true),
            FieldRule::single(C::Email, "email", rules::is_email, redact::mask_email, true),
            FieldRule::single(C::Address, "address", rules::is_address, redact::mask_full, true),
            FieldRule::single(C::Ip, "ip_address", rules::is_ip, redact::mask_ip, false),
            FieldRule::single(
                C::Device,
                "device_id",
                rules::is_device_id,
                redact::mask_full,
                false,
            ),
            FieldRule::pair(
                C::Name,
                ["first_name", "last_name"],
                rules::is_name_pair,
                [redact::mask_name, redact::mask_name],
            ),
            FieldRule::pair(
                C::Address,
                ["city", "pin_code"],
                rules::is_city_pin,
                [redact::mask_full, redact::mask_full],
            ),
        ];

        let embedded = vec![
            EmbeddedRule {
                category: C::Phone,
                find: rules::find_phones,
                redact: redact::mask_phone,
            },
            EmbeddedRule {
                category: C::Email,
                find: rules::find_emails,
                redact: redact::mask_email,
            },
            EmbeddedRule {
                category: C::Aadhar,
                find: rules::find_aadhars,
                redact: redact::mask_aadhar,
            },
        ];

        Self { rules, embedded }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn embedded(&self) -> &[EmbeddedRule] {
        &self.embedded
    }

    /// Whether a field is consumed whole and so skipped by the embedded scan
    pub fn is_scan_exempt(&self, field: &str) -> bool {
        self.rules.iter().any(|rule| rule.scan_exempt && rule.fields().iter().any(|f| *f == field))
    }

    /// Verify the patterns compiled and the table is usable
    ///
    /// # Errors
    /// - `PatternCompilation` if a built-in pattern failed to compile
    /// - `Internal` if the table has no field rules
    /// - `Validation` if a field is read by more than one rule, or standalone
    ///   rules do not all come before combinable ones
    pub fn health_check(&self) -> PiiResult<()> {
        rules::pattern_health()?;
        if self.rules.is_empty() {
            return Err(CommonError::internal_with_context("no field rules", "rule_registry").into());
        }

        let mut seen = HashSet::new();
        for field in self.rules.iter().flat_map(|rule| rule.fields().iter().copied()) {
            if !seen.insert(field) {
                return Err(CommonError::validation(field, "read by more than one rule").into());
            }
        }

        let first_combinable =
            self.rules.iter().position(|rule| rule.kind() == CategoryKind::Combinable);
        if let Some(start) = first_combinable {
            if let Some(late) =
                self.rules[start..].iter().find(|rule| rule.kind() == CategoryKind::Standalone)
            {
                return Err(CommonError::validation(
                    late.fields()[0],
                    "standalone rule listed after a combinable rule",
                )
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorClassification, ErrorSeverity};

    #[test]
    fn builtin_covers_every_category() {
        let registry = RuleRegistry::builtin();
        for category in [
            PiiCategory::Phone,
            PiiCategory::Aadhar,
            PiiCategory::Passport,
            PiiCategory::UpiId,
            PiiCategory::Name,
            PiiCategory::Email,
            PiiCategory::Address,
            PiiCategory::Ip,
            PiiCategory::Device,
        ] {
            assert!(
                registry.rules().iter().any(|rule| rule.category == category),
                "no rule for {category}"
            );
        }
        assert!(registry.health_check().is_ok());
    }

    #[test]
    fn scan_exemptions_cover_directly_handled_fields() {
        let registry = RuleRegistry::builtin();
        for field in ["name", "email", "address", "phone", "aadhar", "passport", "upi_id"] {
            assert!(registry.is_scan_exempt(field), "{field} should be exempt");
        }
        for field in
            ["first_name", "last_name", "city", "pin_code", "device_id", "ip_address", "notes"]
        {
            assert!(!registry.is_scan_exempt(field), "{field} should be scanned");
        }
    }

    #[test]
    fn builtin_lists_standalone_rules_first() {
        let kinds: Vec<_> = RuleRegistry::builtin().rules().iter().map(FieldRule::kind).collect();
        let split = kinds.iter().position(|kind| *kind == CategoryKind::Combinable).unwrap();
        assert_eq!(split, 4);
        assert!(kinds[split..].iter().all(|kind| *kind == CategoryKind::Combinable));
    }

    #[test]
    fn empty_registry_fails_health_check() {
        let registry = RuleRegistry::new(Vec::new(), Vec::new());
        let err = registry.health_check().unwrap_err();
        assert!(err.is_critical());
        assert_eq!(err.to_string(), "Internal error in 'rule_registry': no field rules");
    }

    #[test]
    fn field_claimed_twice_fails_health_check() {
        let registry = RuleRegistry::new(
            vec![
                FieldRule::single(
                    PiiCategory::Email,
                    "contact",
                    rules::is_email,
                    redact::mask_email,
                    true,
                ),
                FieldRule::single(PiiCategory::Ip, "contact", rules::is_ip, redact::mask_ip, false),
            ],
            Vec::new(),
        );
        let err = registry.health_check().unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(
            err.to_string(),
            "Validation error for field 'contact': read by more than one rule"
        );
    }

    #[test]
    fn standalone_after_combinable_fails_health_check() {
        let registry = RuleRegistry::new(
            vec![
                FieldRule::single(
                    PiiCategory::Email,
                    "email",
                    rules::is_email,
                    redact::mask_email,
                    true,
                ),
                FieldRule::single(
                    PiiCategory::Phone,
                    "phone",
                    rules::is_phone,
                    redact::mask_phone,
                    true,
                ),
            ],
            Vec::new(),
        );
        let err = registry.health_check().unwrap_err();
        assert!(err.to_string().contains("'phone'"));
        assert!(!err.is_critical());
    }
}
