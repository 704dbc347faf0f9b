//! Rule derivation from maximal-length frequent patterns.

use std::cmp::Ordering;

use log::warn;

use crate::errors::{MiningError, Result};
use crate::mining::combinations;
use crate::tree::FpTree;
use crate::types::{AssociationRule, ItemSet};

/// Split every maximal-length pattern into (antecedent, consequent) pairs and
/// attach support and confidence. Returns the rules sorted by descending
/// confidence.
///
/// A split whose antecedent has no stored count (or a count smaller than the
/// pattern's own, which the chain-budget accounting can produce for
/// non-maximal subsets) is reported and skipped rather than turned into a
/// rule with an out-of-range confidence.
pub(crate) fn derive(tree: &mut FpTree) -> Result<Vec<AssociationRule>> {
    let total = tree.transaction_count() as f64;
    if tree.max_pattern_len < 2 {
        // Only single-item patterns met support; no split has two non-empty
        // sides.
        return Ok(Vec::new());
    }
    let maximal: Vec<(ItemSet, usize)> = tree
        .patterns
        .entries()
        .filter(|(items, _)| items.len() == tree.max_pattern_len)
        .map(|(items, count)| (items.to_vec(), count))
        .collect();

    let mut rules = Vec::new();
    for (pattern, count) in maximal {
        for antecedent in combinations::non_empty_subsequences(&pattern) {
            if antecedent.len() == pattern.len() {
                continue; // the complement would be empty
            }
            let antecedent_count = match tree.patterns.count_of(&antecedent) {
                Some(found) if found >= count => found,
                Some(found) => {
                    let err = MiningError::IncompleteData(format!(
                        "stored count {} for antecedent {:?} is below pattern count {}",
                        found, antecedent, count
                    ));
                    warn!("skipping rule: {}", err);
                    tree.note_error(&err);
                    continue;
                }
                None => {
                    let err = MiningError::IncompleteData(format!(
                        "no stored count for antecedent {:?} of pattern {:?}",
                        antecedent, pattern
                    ));
                    warn!("skipping rule: {}", err);
                    tree.note_error(&err);
                    continue;
                }
            };
            let consequent: ItemSet = pattern
                .iter()
                .filter(|item| !antecedent.contains(item))
                .cloned()
                .collect();
            rules.push(AssociationRule::new(
                antecedent,
                consequent,
                count as f64 / total,
                count as f64 / antecedent_count as f64,
            )?);
        }
    }

    // Descending confidence; ties break on the item lists so the order is
    // reproducible run to run.
    rules.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.antecedent().cmp(b.antecedent()))
            .then_with(|| a.consequent().cmp(b.consequent()))
    });
    Ok(rules)
}
