use serde::{Deserialize, Serialize};

/// Mining statistics
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MiningStats {
    pub transactions_inserted: usize,
    pub patterns_stored: usize,
    pub rules_generated: usize,
}

impl MiningStats {
    pub fn new() -> Self {
        Self::default()
    }
}
