use std::collections::btree_map;

use crate::trie::node::TrieNode;

/// Iterator over the `(symbol, child)` edges of a node, in symbol order.
#[derive(Debug, Clone)]
pub struct Children<'a, T: Ord> {
    inner: btree_map::Iter<'a, T, TrieNode<T>>,
}

impl<'a, T: Ord> Children<'a, T> {
    pub(crate) fn new(inner: btree_map::Iter<'a, T, TrieNode<T>>) -> Self {
        Children { inner }
    }
}

impl<'a, T: Ord> Iterator for Children<'a, T> {
    type Item = (&'a T, &'a TrieNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Ord> DoubleEndedIterator for Children<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T: Ord> ExactSizeIterator for Children<'a, T> {}

impl<'a, T: Ord> IntoIterator for &'a TrieNode<T> {
    type Item = (&'a T, &'a TrieNode<T>);
    type IntoIter = Children<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}
