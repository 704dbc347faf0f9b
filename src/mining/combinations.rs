use crate::types::ItemSet;

/// Every non-empty subsequence of `items`, in a fixed order.
///
/// For input of length n there are 2ⁿ − 1 results, each preserving the
/// relative order of `items`; the first is the leading singleton and the last
/// is the full sequence. Callers rely on the first element of a subsequence
/// identifying which input item it starts with.
pub(crate) fn non_empty_subsequences(items: &[String]) -> Vec<ItemSet> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    let mut subsets = Vec::with_capacity((1usize << n) - 1);
    for mask in 1..(1usize << n) {
        let mut subset = Vec::with_capacity(mask.count_ones() as usize);
        for (position, item) in items.iter().enumerate() {
            if mask & (1 << position) != 0 {
                subset.push(item.clone());
            }
        }
        subsets.push(subset);
    }
    subsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> ItemSet {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(non_empty_subsequences(&[]).is_empty());
    }

    #[test]
    fn test_counts_and_endpoints() {
        let input = items(&["a", "b", "c"]);
        let subsets = non_empty_subsequences(&input);
        assert_eq!(subsets.len(), 7);
        assert_eq!(subsets[0], items(&["a"]));
        assert_eq!(subsets[6], items(&["a", "b", "c"]));
    }

    #[test]
    fn test_subsequences_preserve_order() {
        let input = items(&["a", "b", "c", "d"]);
        for subset in non_empty_subsequences(&input) {
            let mut positions = subset
                .iter()
                .map(|item| input.iter().position(|i| i == item).unwrap());
            let mut prev = positions.next().unwrap();
            for next in positions {
                assert!(next > prev, "order not preserved in {:?}", subset);
                prev = next;
            }
        }
    }

    #[test]
    fn test_no_duplicate_subsequences() {
        let input = items(&["a", "b", "c", "d"]);
        let subsets = non_empty_subsequences(&input);
        assert_eq!(subsets.len(), 15);
        for (i, left) in subsets.iter().enumerate() {
            for right in &subsets[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn test_prefixed_subsequences_start_with_first_item() {
        let input = items(&["x", "y", "z"]);
        let starting_with_x: Vec<_> = non_empty_subsequences(&input)
            .into_iter()
            .filter(|subset| subset[0] == "x")
            .collect();
        // Exactly the subsets that contain x: x alone plus x with any
        // combination of the remainder.
        assert_eq!(starting_with_x.len(), 4);
    }
}
