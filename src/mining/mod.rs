//! FP-growth pattern extraction over the tree's header chains.

pub(crate) mod combinations;
pub(crate) mod rules;
pub mod stats;

use ahash::AHashMap;
use log::debug;

use crate::errors::{MiningError, Result};
use crate::tree::FpTree;
use crate::types::ItemSet;

/// Mined pattern store: canonical ranked key → (items, count).
///
/// Keys are the ranked item list rendered through `{:?}`, so label content
/// can never alias the separator.
#[derive(Debug, Default)]
pub(crate) struct PatternStore {
    entries: AHashMap<String, PatternEntry>,
}

#[derive(Debug)]
struct PatternEntry {
    items: ItemSet,
    count: usize,
}

impl PatternStore {
    fn key(items: &[String]) -> String {
        format!("{:?}", items)
    }

    /// Create the entry or add `count` into an existing one.
    fn add(&mut self, items: &[String], count: usize) {
        self.entries
            .entry(Self::key(items))
            .and_modify(|entry| entry.count += count)
            .or_insert_with(|| PatternEntry {
                items: items.to_vec(),
                count,
            });
    }

    /// Record the entry only when the key is absent. Existing counts (the
    /// seeded single-item aggregates in particular) are never clobbered.
    pub(crate) fn insert_if_absent(&mut self, items: ItemSet, count: usize) {
        self.entries
            .entry(Self::key(&items))
            .or_insert(PatternEntry { items, count });
    }

    pub(crate) fn count_of(&self, items: &[String]) -> Option<usize> {
        self.entries.get(&Self::key(items)).map(|entry| entry.count)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&[String], usize)> {
        self.entries
            .values()
            .map(|entry| (entry.items.as_slice(), entry.count))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Integer support threshold for the current transaction total.
fn support_count(total_transactions: usize, min_support: f64) -> usize {
    (total_transactions as f64 * min_support).ceil() as usize
}

/// Run FP-growth: repopulate the tree's pattern store with every pattern
/// meeting the configured minimum support.
pub(crate) fn fp_growth(tree: &mut FpTree) -> Result<()> {
    if tree.transaction_count() == 0 {
        return Err(MiningError::EmptyInput(
            "no transactions have been inserted".to_string(),
        ));
    }
    let support_count = support_count(tree.transaction_count(), tree.min_support());

    // Stale read-counts from a previous run would under-count conditional
    // pattern bases, so every run starts from a clean slate.
    tree.reset_read_counts();
    tree.patterns.clear();
    tree.max_pattern_len = 0;

    let frequent = tree.frequent_items(support_count);
    if frequent.is_empty() {
        return Err(MiningError::NoPatterns);
    }
    debug!(
        "mining {} frequent items at support count {}",
        frequent.len(),
        support_count
    );

    // Single-item patterns carry the full header aggregates.
    for (_, item, count) in &frequent {
        tree.patterns.insert_if_absent(vec![item.clone()], *count);
    }
    tree.max_pattern_len = 1;

    // Least frequent first: a rare item's conditional pattern base must be
    // gathered before walks for more frequent items consume the shared
    // ancestors' budgets.
    for (_, item, _) in frequent.iter().rev() {
        for (items, count) in conditional_patterns(tree, item)? {
            if count < support_count {
                continue;
            }
            if items.len() > tree.max_pattern_len {
                tree.max_pattern_len = items.len();
            }
            tree.patterns.insert_if_absent(items, count);
        }
    }
    if tree.patterns.is_empty() {
        return Err(MiningError::NoPatterns);
    }
    tree.stats.patterns_stored = tree.patterns.len();
    debug!(
        "stored {} patterns, longest has {} items",
        tree.patterns.len(),
        tree.max_pattern_len
    );
    Ok(())
}

/// Candidate conditional patterns for `item`, gathered by walking its header
/// chain. Each chain node contributes every subset of `item ++ prefix-path`
/// that starts with `item`, weighted by the node's adjusted count at walk
/// time.
fn conditional_patterns(tree: &mut FpTree, item: &str) -> Result<Vec<(ItemSet, usize)>> {
    let mut store = PatternStore::default();
    for id in tree.chain_nodes(item) {
        let (path, weight) = tree.prefix_path(id)?;
        let mut sequence = Vec::with_capacity(path.len() + 1);
        sequence.push(item.to_string());
        sequence.extend(path);
        store_combinations(tree, &mut store, weight, &sequence);
    }
    Ok(store
        .entries
        .into_iter()
        .map(|(_, entry)| (entry.items, entry.count))
        .collect())
}

/// Aggregate every subset of `sequence` that begins with its first element
/// (the item whose chain is being walked) into `store`, in canonical ranked
/// order. Subsets starting elsewhere belong to other items' chain walks.
fn store_combinations(tree: &FpTree, store: &mut PatternStore, weight: usize, sequence: &[String]) {
    for subset in combinations::non_empty_subsequences(sequence) {
        if subset.first() != sequence.first() {
            continue;
        }
        let mut canonical = subset;
        canonical.sort_by_key(|item| tree.rank_of(item).unwrap_or(usize::MAX));
        store.add(&canonical, weight);
    }
}
