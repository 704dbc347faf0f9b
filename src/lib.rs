//! # fp-rule-miner
//!
//! Association rule mining over an FP-Tree (Han, Pei, Yin 2000). Transactions
//! are folded into a shared-prefix tree threaded with per-item header chains;
//! mining walks those chains to gather conditional pattern bases, keeps every
//! pattern meeting the minimum support, and splits the maximal-length
//! patterns into rules carrying support and confidence.
//!
//! The item vocabulary and its global frequency ranking are declared up
//! front; the tree accepts only declared items and orders every transaction
//! by that ranking before insertion.
//!
//! ## Quick Start
//!
//! ```rust
//! use fp_rule_miner::FpTree;
//!
//! // Declare the ranking (most frequent item first), then feed transactions.
//! let mut tree = FpTree::new(vec![
//!     "bread".to_string(),
//!     "milk".to_string(),
//!     "butter".to_string(),
//! ])
//! .unwrap();
//!
//! for _ in 0..3 {
//!     tree.insert(&["bread".to_string(), "milk".to_string()]).unwrap();
//! }
//! tree.insert(&["bread".to_string(), "butter".to_string()]).unwrap();
//! tree.insert(&["milk".to_string(), "butter".to_string()]).unwrap();
//!
//! tree.set_min_support(0.4).unwrap();
//! let rules = tree.association_rules().unwrap();
//!
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules[0].to_string(), "bread => milk (support 0.600, confidence 0.750)");
//! ```

pub mod config;
pub mod errors;
pub mod types;

// Tree structure
pub mod tree;

// Mining algorithms
pub mod mining;

// Export formats
pub mod export;

// Re-exports
pub use config::MiningConfig;
pub use errors::{MiningError, Result};
pub use export::JsonExporter;
pub use mining::stats::MiningStats;
pub use tree::FpTree;
pub use types::{AssociationRule, FrequentPattern, ItemSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let tree = FpTree::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(tree.transaction_count(), 0);
        assert!(tree.last_error().is_none());
    }
}
