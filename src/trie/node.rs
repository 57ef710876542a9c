use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::mem::take;

use crate::trie::iterators::Children;

/// A node of a [`Trie`](crate::trie::Trie). The only thing a node stores is
/// its outgoing edges, keyed by symbol and kept in symbol order.
pub struct TrieNode<T: Ord> {
    pub(crate) children: BTreeMap<T, TrieNode<T>>,
}

impl<T: Ord> Default for TrieNode<T> {
    fn default() -> Self {
        TrieNode { children: BTreeMap::new() }
    }
}

impl<T: Ord> TrieNode<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn child(&self, symbol: &T) -> Option<&TrieNode<T>> {
        self.children.get(symbol)
    }

    pub fn child_mut(&mut self, symbol: &T) -> Option<&mut TrieNode<T>> {
        self.children.get_mut(symbol)
    }

    /// Returns the child reached through `symbol`, creating an empty one the
    /// first time.
    pub fn ensure_child(&mut self, symbol: T) -> &mut TrieNode<T> {
        self.children.entry(symbol).or_default()
    }

    /// Removes the child reached through `symbol` along with its subtree.
    pub fn remove_child(&mut self, symbol: &T) -> bool {
        self.children.remove(symbol).is_some()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children(&self) -> Children<'_, T> {
        Children::new(self.children.iter())
    }
}

// Subtrees are torn down through an explicit stack so that dropping a very
// deep path does not recurse once per level.
impl<T: Ord> Drop for TrieNode<T> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending: Vec<TrieNode<T>> = take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(take(&mut node.children).into_values());
        }
    }
}

impl<T: Ord + Debug> Debug for TrieNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::node::TrieNode;

    #[test]
    fn ensure_child_is_idempotent() {
        let mut node = TrieNode::new();
        node.ensure_child('a').ensure_child('b');
        node.ensure_child('a');
        assert_eq!(node.child_count(), 1);
        assert!(node.child(&'a').unwrap().child(&'b').is_some());
    }

    #[test]
    fn remove_child_drops_subtree() {
        let mut node = TrieNode::new();
        node.ensure_child('x').ensure_child('y');
        assert!(node.remove_child(&'x'));
        assert!(!node.remove_child(&'x'));
        assert!(!node.has_children());
        assert!(node.child(&'x').is_none());
    }

    #[test]
    fn children_come_out_in_symbol_order() {
        let mut node = TrieNode::new();
        for c in ['m', 'c', 'x', 'a'] {
            node.ensure_child(c);
        }
        let symbols: Vec<char> = node.children().map(|(c, _)| *c).collect();
        assert_eq!(symbols, vec!['a', 'c', 'm', 'x']);
    }

    #[test]
    fn deep_paths_drop_without_overflow() {
        let mut root = TrieNode::new();
        let mut current = &mut root;
        for i in 0..100_000u32 {
            current = current.ensure_child(i % 7);
        }
        drop(root);
    }
}
