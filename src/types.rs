use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::validate_fraction;
use crate::errors::{MiningError, Result};

/// An itemset (set of items, kept in frequency-rank order)
pub type ItemSet = Vec<String>;

/// Frequent pattern with its absolute occurrence count and relative support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentPattern {
    pub items: ItemSet,
    pub count: usize,
    pub support: f64,
}

/// Association rule: antecedent → consequent
///
/// Immutable after construction. Both sides are non-empty and disjoint, their
/// union is a mined pattern, and support/confidence lie in (0, 1]. Items are
/// kept in the frequency-rank order used throughout the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    antecedent: ItemSet,
    consequent: ItemSet,
    support: f64,
    confidence: f64,
}

impl AssociationRule {
    /// Build a rule, validating the value contract.
    pub fn new(
        antecedent: ItemSet,
        consequent: ItemSet,
        support: f64,
        confidence: f64,
    ) -> Result<Self> {
        if antecedent.is_empty() || consequent.is_empty() {
            return Err(MiningError::InvalidRule(
                "both rule sides must be non-empty".to_string(),
            ));
        }
        validate_fraction(support, "support")
            .and_then(|_| validate_fraction(confidence, "confidence"))
            .map_err(|_| {
                MiningError::InvalidRule(format!(
                    "support {} and confidence {} must lie in (0, 1]",
                    support, confidence
                ))
            })?;
        Ok(Self {
            antecedent,
            consequent,
            support,
            confidence,
        })
    }

    pub fn antecedent(&self) -> &[String] {
        &self.antecedent
    }

    pub fn consequent(&self) -> &[String] {
        &self.consequent
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (support {:.3}, confidence {:.3})",
            self.antecedent.join(", "),
            self.consequent.join(", "),
            self.support,
            self.confidence
        )
    }
}
