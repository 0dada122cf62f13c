//! Per-record decision
//!
//! A [`Decision`] is computed once from the original record and never
//! mutated afterwards. Everything the resolver writes into the redacted copy
//! is derived from it, so the keep/restore outcome does not depend on the
//! order fields are visited in.

use std::collections::BTreeSet;

use piiarc_common::privacy::patterns::{
    CategoryKind, FieldRule, PiiCategory, RuleRegistry, RuleShape,
};
use piiarc_domain::{value_to_text, Record};

/// A masked value a matched rule wants to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedaction {
    pub category: PiiCategory,
    pub field: &'static str,
    pub masked: String,
}

/// Immutable evidence gathered from one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    standalone: BTreeSet<PiiCategory>,
    markers: BTreeSet<PiiCategory>,
    pair_present: bool,
    redactions: Vec<PendingRedaction>,
}

impl Decision {
    /// Run every registry rule against `record`
    pub fn evaluate(registry: &RuleRegistry, record: &Record) -> Self {
        let mut decision = Self::default();

        for rule in registry.rules() {
            let Some(masked) = match_rule(rule, record) else {
                continue;
            };
            match rule.kind() {
                CategoryKind::Standalone => decision.standalone.insert(rule.category),
                CategoryKind::Combinable => decision.markers.insert(rule.category),
            };
            decision.redactions.extend(masked);
        }

        // Presence only: the values need not be valid
        decision.pair_present = registry.rules().iter().any(|rule| {
            rule.category == PiiCategory::Name
                && matches!(rule.shape, RuleShape::Pair { .. })
                && rule.fields().iter().all(|field| record.contains_key(*field))
        });

        decision
    }

    /// Standalone categories that matched
    pub fn standalone(&self) -> &BTreeSet<PiiCategory> {
        &self.standalone
    }

    /// Combinable categories that matched
    pub fn markers(&self) -> &BTreeSet<PiiCategory> {
        &self.markers
    }

    /// Whether both halves of the name pair exist in the record
    pub const fn pair_present(&self) -> bool {
        self.pair_present
    }

    /// Every masked value produced by a matching rule, in table order
    pub fn redactions(&self) -> &[PendingRedaction] {
        &self.redactions
    }

    pub fn standalone_fired(&self) -> bool {
        !self.standalone.is_empty()
    }

    /// Two or more markers, or the name pair present with `name` among them
    pub fn combination_fired(&self) -> bool {
        self.markers.len() >= 2 || (self.pair_present && self.markers.contains(&PiiCategory::Name))
    }

    /// Categories whose fields go back to their original values
    ///
    /// Only a lone marker with no standalone hit is restored, and only when
    /// the name pair is absent. A lone non-name marker therefore stays masked
    /// whenever `first_name` and `last_name` are both present.
    pub fn restored_categories(&self) -> BTreeSet<PiiCategory> {
        if self.markers.len() == 1 && !self.standalone_fired() && !self.pair_present {
            self.markers.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Verdict before the embedded scan runs
    pub fn is_pii_before_scan(&self) -> bool {
        self.standalone_fired() || self.combination_fired()
    }
}

/// Masked values for a rule that matches, `None` when it does not apply
fn match_rule(rule: &FieldRule, record: &Record) -> Option<Vec<PendingRedaction>> {
    match rule.shape {
        RuleShape::Single { field, validate, redact } => {
            let text = value_to_text(record.get(field)?);
            validate(&text).then(|| {
                vec![PendingRedaction { category: rule.category, field, masked: redact(&text) }]
            })
        }
        RuleShape::Pair {
            fields: [first, second],
            validate,
            redact: [redact_first, redact_second],
        } => {
            let first_text = value_to_text(record.get(first)?);
            let second_text = value_to_text(record.get(second)?);
            validate(&first_text, &second_text).then(|| {
                vec![
                    PendingRedaction {
                        category: rule.category,
                        field: first,
                        masked: redact_first(&first_text),
                    },
                    PendingRedaction {
                        category: rule.category,
                        field: second,
                        masked: redact_second(&second_text),
                    },
                ]
            })
        }
    }
}
