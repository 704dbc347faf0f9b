//! FP-Tree: shared-prefix transaction tree with per-item header chains.
//!
//! Transactions are sorted by a-priori item rank before insertion so that
//! frequent prefixes coalesce into shared paths. Every node is threaded onto
//! a per-item sibling chain, which the miner walks to gather conditional
//! pattern bases without rescanning transactions.

mod header;
mod node;

use ahash::AHashSet;

use crate::config::{validate_fraction, MiningConfig};
use crate::errors::{MiningError, Result};
use crate::mining::{self, stats::MiningStats, PatternStore};
use crate::types::{AssociationRule, FrequentPattern};

pub(crate) use self::header::HeaderIndex;
pub(crate) use self::node::{Node, NodeId};

const ROOT: NodeId = 0;

/// Prefix tree over rank-sorted transactions, plus everything a mining run
/// needs: the header index, the mined pattern store, thresholds, and the last
/// human-readable error.
#[derive(Debug)]
pub struct FpTree {
    nodes: Vec<Node>,
    header: HeaderIndex,
    config: MiningConfig,
    total_transactions: usize,
    pub(crate) patterns: PatternStore,
    pub(crate) max_pattern_len: usize,
    pub(crate) stats: MiningStats,
    last_error: Option<String>,
}

impl FpTree {
    /// Build an empty tree over `ranking`, the full item vocabulary ordered
    /// most frequent first. Items outside the ranking are rejected at
    /// insertion time.
    pub fn new(ranking: Vec<String>) -> Result<Self> {
        Self::with_config(ranking, MiningConfig::default())
    }

    /// Build an empty tree with explicit thresholds.
    pub fn with_config(ranking: Vec<String>, config: MiningConfig) -> Result<Self> {
        if ranking.is_empty() {
            return Err(MiningError::EmptyInput(
                "item ranking has no items".to_string(),
            ));
        }
        config.validate()?;
        let mut header = HeaderIndex::default();
        for (position, item) in ranking.into_iter().enumerate() {
            // Ranks are dense and 1-based; smaller = more frequent.
            if !header.declare(item.clone(), position + 1) {
                return Err(MiningError::InvalidConfig(format!(
                    "duplicate item in ranking: {}",
                    item
                )));
            }
        }
        Ok(Self {
            nodes: vec![Node::root()],
            header,
            config,
            total_transactions: 0,
            patterns: PatternStore::default(),
            max_pattern_len: 0,
            stats: MiningStats::default(),
            last_error: None,
        })
    }

    /// Insert one transaction. Duplicate labels within the transaction are
    /// discarded; unknown labels reject the whole transaction.
    pub fn insert(&mut self, items: &[String]) -> Result<()> {
        match self.try_insert(items) {
            Ok(()) => Ok(()),
            Err(err) => Err(self.record(err)),
        }
    }

    fn try_insert(&mut self, items: &[String]) -> Result<()> {
        if items.is_empty() {
            return Err(MiningError::EmptyInput(
                "transaction has no items".to_string(),
            ));
        }
        let mut ranked: Vec<(usize, &String)> = Vec::with_capacity(items.len());
        let mut seen = AHashSet::with_capacity(items.len());
        for item in items {
            if !seen.insert(item.as_str()) {
                continue;
            }
            let rank = self
                .header
                .rank(item)
                .ok_or_else(|| MiningError::UnknownItem(item.clone()))?;
            ranked.push((rank, item));
        }
        // Ascending rank = most frequent first, so shared prefixes coalesce.
        ranked.sort_unstable_by_key(|(rank, _)| *rank);

        let mut cur = ROOT;
        for (_, item) in ranked {
            // Every step of the walk counts toward the item's header
            // aggregate, whether or not a fresh node is created.
            self.header.bump_count(item);
            cur = match self.nodes[cur].child(item) {
                Some(child) => {
                    self.nodes[child].increment();
                    child
                }
                None => self.add_child(cur, item)?,
            };
        }
        self.total_transactions += 1;
        self.stats.transactions_inserted = self.total_transactions;
        Ok(())
    }

    fn add_child(&mut self, parent: NodeId, item: &str) -> Result<NodeId> {
        let id = self.nodes.len();
        self.nodes.push(Node::new(item.to_string(), parent));
        self.nodes[parent].link_child(item.to_string(), id)?;
        self.append_to_chain(item, id);
        Ok(id)
    }

    /// Thread a fresh node onto the logical end of its item's sibling chain,
    /// preserving creation order.
    fn append_to_chain(&mut self, item: &str, id: NodeId) {
        if let Some(entry) = self.header.get_mut(item) {
            match entry.tail.replace(id) {
                Some(old_tail) => self.nodes[old_tail].set_next_same_item(id),
                None => entry.head = Some(id),
            }
        }
    }

    /// Mine the tree and derive association rules from the maximal-length
    /// frequent patterns, sorted by descending confidence.
    ///
    /// Mining repopulates the pattern store from scratch, so the call always
    /// reflects exactly the transactions inserted so far.
    pub fn association_rules(&mut self) -> Result<Vec<AssociationRule>> {
        match self.mine() {
            Ok(rules) => Ok(rules),
            Err(err) => Err(self.record(err)),
        }
    }

    fn mine(&mut self) -> Result<Vec<AssociationRule>> {
        mining::fp_growth(self)?;
        let rules = mining::rules::derive(self)?;
        self.stats.rules_generated = rules.len();
        Ok(rules)
    }

    /// Every pattern currently in the store, in a stable order.
    pub fn frequent_patterns(&self) -> Vec<FrequentPattern> {
        let total = self.total_transactions as f64;
        let mut patterns: Vec<FrequentPattern> = self
            .patterns
            .entries()
            .map(|(items, count)| FrequentPattern {
                items: items.to_vec(),
                count,
                support: count as f64 / total,
            })
            .collect();
        patterns.sort_by(|a, b| {
            a.items
                .len()
                .cmp(&b.items.len())
                .then_with(|| a.items.cmp(&b.items))
        });
        patterns
    }

    /// Clear mined patterns only. Tree structure and counts survive, so the
    /// same transactions can be re-mined at a different threshold.
    pub fn reset(&mut self) {
        self.patterns.clear();
        self.max_pattern_len = 0;
    }

    pub fn min_support(&self) -> f64 {
        self.config.min_support
    }

    pub fn set_min_support(&mut self, min_support: f64) -> Result<()> {
        match validate_fraction(min_support, "min_support") {
            Ok(()) => {
                self.config.min_support = min_support;
                Ok(())
            }
            Err(err) => Err(self.record(err)),
        }
    }

    pub fn min_confidence(&self) -> f64 {
        self.config.min_confidence
    }

    pub fn set_min_confidence(&mut self, min_confidence: f64) -> Result<()> {
        match validate_fraction(min_confidence, "min_confidence") {
            Ok(()) => {
                self.config.min_confidence = min_confidence;
                Ok(())
            }
            Err(err) => Err(self.record(err)),
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.total_transactions
    }

    /// Number of items in the declared ranking.
    pub fn item_count(&self) -> usize {
        self.header.len()
    }

    /// Rank of `item` in the declared ordering, if declared.
    pub fn rank_of(&self, item: &str) -> Option<usize> {
        self.header.rank(item)
    }

    /// Last human-readable error recorded by any operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn stats(&self) -> &MiningStats {
        &self.stats
    }

    fn record(&mut self, err: MiningError) -> MiningError {
        self.last_error = Some(err.to_string());
        err
    }

    pub(crate) fn note_error(&mut self, err: &MiningError) {
        self.last_error = Some(err.to_string());
    }

    /// Header entries meeting `support_count`, sorted by ascending rank
    /// (most frequent first).
    pub(crate) fn frequent_items(&self, support_count: usize) -> Vec<(usize, String, usize)> {
        let mut frequent: Vec<(usize, String, usize)> = self
            .header
            .iter()
            .filter(|(_, entry)| entry.count >= support_count)
            .map(|(item, entry)| (entry.rank, item.to_string(), entry.count))
            .collect();
        frequent.sort_unstable_by_key(|(rank, _, _)| *rank);
        frequent
    }

    /// The sibling chain for `item`, in node-creation order.
    pub(crate) fn chain_nodes(&self, item: &str) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut cur = self.header.get(item).and_then(|entry| entry.head);
        while let Some(id) = cur {
            ids.push(id);
            cur = self.nodes[id].next_same_item();
        }
        ids
    }

    /// Walk parent links from `id` up to the root, returning the ancestor
    /// labels in the order encountered (self and root excluded) together with
    /// the node's adjusted count at walk time.
    ///
    /// The walk consumes that adjusted count into the read-count of `id` and
    /// of every ancestor strictly between `id` and the root, so later walks
    /// over the same header chain do not attribute those transactions again.
    pub(crate) fn prefix_path(&mut self, id: NodeId) -> Result<(Vec<String>, usize)> {
        if self.nodes[id].is_root() {
            return Err(MiningError::AccountingViolation(
                "prefix path requested for the root node".to_string(),
            ));
        }
        let weight = self.nodes[id].adjusted_count();
        self.nodes[id].increment_read(weight)?;

        let mut path = Vec::new();
        let mut hops = 0;
        let mut cur = self.nodes[id].parent();
        while let Some(parent) = cur {
            if parent == ROOT {
                return Ok((path, weight));
            }
            hops += 1;
            if hops > self.nodes.len() {
                return Err(MiningError::AccountingViolation(
                    "parent chain does not terminate at the root".to_string(),
                ));
            }
            let node = &mut self.nodes[parent];
            node.increment_read(weight)?;
            if let Some(item) = node.item() {
                path.push(item.to_string());
            }
            cur = node.parent();
        }
        // A non-root node with no parent cannot be built through insert.
        Err(MiningError::AccountingViolation(
            "parent chain ended before reaching the root".to_string(),
        ))
    }

    /// Zero every node's read-count so a mining run starts fresh.
    pub(crate) fn reset_read_counts(&mut self) {
        for node in &mut self.nodes {
            node.reset_read();
        }
    }

    #[cfg(test)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn header_count(&self, item: &str) -> usize {
        self.header.get(item).map(|entry| entry.count).unwrap_or(0)
    }
}
