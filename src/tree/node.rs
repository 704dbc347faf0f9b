use ahash::AHashMap;

use crate::errors::{MiningError, Result};

/// Index of a node in the tree's arena.
pub(crate) type NodeId = usize;

/// Arena slot for a single tree position.
///
/// A node takes part in two link structures at once: the parent/child prefix
/// tree, and the per-item sibling chain threaded through every position
/// bearing the same item. All links are arena indices, so the tree owns every
/// node and no reference cycles exist.
#[derive(Debug)]
pub(crate) struct Node {
    item: Option<String>,
    parent: Option<NodeId>,
    children: AHashMap<String, NodeId>,
    count: usize,
    read_count: usize,
    next_same_item: Option<NodeId>,
}

impl Node {
    /// The sentinel root: no item, no parent, count 0.
    pub(crate) fn root() -> Self {
        Self {
            item: None,
            parent: None,
            children: AHashMap::new(),
            count: 0,
            read_count: 0,
            next_same_item: None,
        }
    }

    /// A fresh internal node carrying one transaction's traversal.
    pub(crate) fn new(item: String, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            parent: Some(parent),
            children: AHashMap::new(),
            count: 1,
            read_count: 0,
            next_same_item: None,
        }
    }

    pub(crate) fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn child(&self, item: &str) -> Option<NodeId> {
        self.children.get(item).copied()
    }

    /// Register `id` as the child holding `item`.
    pub(crate) fn link_child(&mut self, item: String, id: NodeId) -> Result<()> {
        if self.children.contains_key(&item) {
            return Err(MiningError::AccountingViolation(format!(
                "child for item {:?} linked twice",
                item
            )));
        }
        self.children.insert(item, id);
        Ok(())
    }

    #[allow(dead_code)]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn increment(&mut self) {
        self.count += 1;
    }

    #[allow(dead_code)]
    pub(crate) fn read_count(&self) -> usize {
        self.read_count
    }

    /// The portion of this node's traversal weight not yet attributed to a
    /// conditional pattern base in the current mining pass.
    pub(crate) fn adjusted_count(&self) -> usize {
        self.count - self.read_count
    }

    /// Consume `by` units of this node's traversal weight. The read count may
    /// never pass the traversal count; going over means the node was walked
    /// twice for the same transactions.
    pub(crate) fn increment_read(&mut self, by: usize) -> Result<()> {
        let next = self.read_count + by;
        if next > self.count {
            return Err(MiningError::AccountingViolation(format!(
                "read count {} would exceed traversal count {} at item {:?}",
                next, self.count, self.item
            )));
        }
        self.read_count = next;
        Ok(())
    }

    pub(crate) fn reset_read(&mut self) {
        self.read_count = 0;
    }

    pub(crate) fn next_same_item(&self) -> Option<NodeId> {
        self.next_same_item
    }

    pub(crate) fn set_next_same_item(&mut self, id: NodeId) {
        self.next_same_item = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_shape() {
        let root = Node::root();
        assert!(root.is_root());
        assert_eq!(root.item(), None);
        assert_eq!(root.parent(), None);
        assert_eq!(root.count(), 0);
    }

    #[test]
    fn test_link_child_rejects_duplicates() {
        let mut node = Node::new("a".to_string(), 0);
        assert!(node.link_child("b".to_string(), 1).is_ok());
        assert!(node.link_child("b".to_string(), 2).is_err());
        assert_eq!(node.child("b"), Some(1));
        assert_eq!(node.child("c"), None);
    }

    #[test]
    fn test_read_count_accounting() {
        let mut node = Node::new("a".to_string(), 0);
        node.increment();
        node.increment();
        assert_eq!(node.count(), 3);
        assert_eq!(node.adjusted_count(), 3);

        node.increment_read(2).unwrap();
        assert_eq!(node.adjusted_count(), 1);
        assert!(node.increment_read(2).is_err());
        assert_eq!(node.read_count(), 2);

        node.reset_read();
        assert_eq!(node.adjusted_count(), 3);
    }
}
