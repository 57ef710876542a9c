use std::fmt::{Debug, Formatter};

use delegate::delegate;

use crate::trie::iterators::Children;
use crate::trie::node::TrieNode;

/// An ordered prefix tree over symbols of type `T`. The root always exists,
/// even when nothing has been inserted.
pub struct Trie<T: Ord> {
    pub(crate) root: TrieNode<T>,
}

impl<T: Ord> Default for Trie<T> {
    fn default() -> Self {
        Trie { root: TrieNode::new() }
    }
}

impl<T: Ord> Trie<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }

    delegate! {
        to self.root {
            pub fn child(&self, symbol: &T) -> Option<&TrieNode<T>>;
            pub fn child_mut(&mut self, symbol: &T) -> Option<&mut TrieNode<T>>;
            pub fn ensure_child(&mut self, symbol: T) -> &mut TrieNode<T>;
            pub fn remove_child(&mut self, symbol: &T) -> bool;
            pub fn child_count(&self) -> usize;
            pub fn has_children(&self) -> bool;
            pub fn children(&self) -> Children<'_, T>;
        }
    }

    /// Walks `path` from the root, creating missing nodes, and returns the
    /// node at its end.
    pub fn insert_path<I>(&mut self, path: I) -> &mut TrieNode<T>
        where I: IntoIterator<Item=T> {
        let mut current = &mut self.root;
        for symbol in path {
            current = current.ensure_child(symbol);
        }
        current
    }

    /// Follows `path` from the root without creating anything.
    pub fn find_path<'p, I>(&self, path: I) -> Option<&TrieNode<T>>
        where I: IntoIterator<Item=&'p T>, T: 'p {
        let mut current = &self.root;
        for symbol in path {
            current = current.child(symbol)?;
        }
        Some(current)
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += node.child_count();
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }
}

impl<T: Ord + Debug> Debug for Trie<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![(None, &self.root)];
        while let Some((symbol, node)) = stack.pop() {
            l.entry(&(symbol, node));
            node.children().rev().for_each(|(c, child)| stack.push((Some(c), child)));
        }
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::trie::Trie;

    #[test]
    fn empty_trie_has_a_root() {
        let trie: Trie<char> = Trie::new();
        assert!(!trie.has_children());
        assert_eq!(trie.child_count(), 0);
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn finds_paths_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let mut trie = Trie::new();
        words.iter().for_each(|w| { trie.insert_path(w.chars()); });

        let chars: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();
        chars.iter().for_each(|w| assert!(trie.find_path(w).is_some()));
        assert_eq!(trie.child_count(), 2);
        assert_eq!(trie.node_count(), "HELLO".len() + 1 + "GOODBYE".len());
    }

    #[test]
    fn doesnt_find_paths_not_in_trie() {
        let mut trie = Trie::new();
        trie.insert_path("HELLO".chars());
        let bad: Vec<Vec<char>> = vec!["HELLOS", "LOL", "HEX"].iter()
            .map(|w| w.chars().collect()).collect();
        bad.iter().for_each(|w| assert!(trie.find_path(w).is_none()));
    }

    #[test]
    fn root_operations_forward_to_root_node() {
        let mut trie = Trie::new();
        trie.ensure_child(3u8).ensure_child(4);
        trie.ensure_child(1u8);
        assert_eq!(trie.children().map(|(s, _)| *s).collect::<Vec<_>>(), vec![1, 3]);
        assert!(trie.child(&3).unwrap().has_children());
        assert!(trie.remove_child(&3));
        assert_eq!(trie.node_count(), 1);
    }
}
