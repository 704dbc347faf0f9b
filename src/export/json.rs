use crate::errors::Result;
use crate::types::AssociationRule;

/// Export association rules to JSON
///
/// Rules serialize as an array of objects carrying antecedent, consequent,
/// support, and confidence. The output is an in-memory string; writing it
/// anywhere is the caller's business.
pub struct JsonExporter;

impl JsonExporter {
    /// Render rules as a compact JSON array.
    pub fn to_json(rules: &[AssociationRule]) -> Result<String> {
        Ok(serde_json::to_string(rules)?)
    }

    /// Render rules as a pretty-printed JSON array.
    pub fn to_json_pretty(rules: &[AssociationRule]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rules)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules() -> Vec<AssociationRule> {
        vec![
            AssociationRule::new(
                vec!["a".to_string()],
                vec!["b".to_string()],
                0.6,
                0.75,
            )
            .unwrap(),
            AssociationRule::new(
                vec!["b".to_string()],
                vec!["a".to_string()],
                0.6,
                0.75,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_compact_json() {
        let json = JsonExporter::to_json(&sample_rules()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"antecedent\":[\"a\"]"));
        assert!(json.contains("\"confidence\":0.75"));
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let rules = sample_rules();
        let json = JsonExporter::to_json_pretty(&rules).unwrap();
        assert!(json.contains('\n'));
        let parsed: Vec<AssociationRule> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rules);
    }
}
