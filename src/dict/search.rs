use log::{debug, trace};
use metrics::{counter, increment_counter};

use crate::alphabet::{contains_marker, strip_marker, terminated, END_OF_STRING_MARKER};
use crate::dict::match_result::MatchResult;
use crate::trie::{Trie, TrieNode};

pub(crate) const EXACT_MATCH: &str = "exact-match";

impl Trie<char> {

    /// Stores `s` followed by the end-of-string marker. Strings containing
    /// the marker are refused and leave the tree untouched.
    pub fn add_string(&mut self, s: &str) -> bool {
        if contains_marker(s) {
            trace!("refusing {:?}: contains '{}'", s, END_OF_STRING_MARKER);
            increment_counter!("word_dict.strings_rejected");
            return false;
        }
        self.insert_path(terminated(s));
        increment_counter!("word_dict.strings_added");
        true
    }

    /// Follows `s` and its terminator one edge at a time, stopping at the
    /// first symbol that has no edge.
    pub fn match_string_exactly(&self, s: &str) -> MatchResult {
        debug!("{} on {:?}: starting", EXACT_MATCH, s);
        let symbols = terminated(s);
        let mut read = 0;
        let mut node = &self.root;
        while read < symbols.len() {
            match node.child(&symbols[read]) {
                Some(child) => {
                    node = child;
                    read += 1;
                }
                None => break,
            }
        }
        counter!("word_dict.exact.nodes_visited", read as u64);

        let success = read == symbols.len();
        debug!("{} on {:?}: read {}/{} symbols", EXACT_MATCH, s, read, symbols.len());

        let result = MatchResult::resolve(
            EXACT_MATCH,
            s,
            success,
            || format!("\"{}\" matched successfully", collect(&symbols)),
            || format!("\"{}\" failed to match at '{}' after reading \"{}\" successfully",
                       collect(&symbols), symbols[read], collect(&symbols[..read])),
        );
        if success { result.with_match(s, 0) } else { result }
    }

    /// Every stored string, in symbol order.
    pub fn fetch_tree_strings(&self) -> Vec<String> {
        let mut strings = vec![];
        self.for_each_tree_string(|s| strings.push(s.to_string()));
        strings
    }

    /// Calls `f` with every stored string, in symbol order.
    ///
    /// One buffer is shared by the whole walk: each pending edge remembers the
    /// depth it hangs from and the buffer is cut back to that depth before the
    /// edge's symbol is appended.
    pub fn for_each_tree_string<F>(&self, mut f: F)
        where F: FnMut(&str) {
        let mut buffer = String::new();
        let mut lengths: Vec<usize> = vec![];
        let mut stack: Vec<(usize, char, &TrieNode<char>)> = vec![];
        push_edges(&mut stack, 0, &self.root);

        while let Some((depth, symbol, node)) = stack.pop() {
            lengths.truncate(depth);
            buffer.truncate(lengths.last().copied().unwrap_or(0));
            buffer.push(symbol);
            lengths.push(buffer.len());

            if node.has_children() {
                push_edges(&mut stack, depth + 1, node);
            } else {
                f(strip_marker(&buffer));
            }
        }
    }
}

fn push_edges<'a>(stack: &mut Vec<(usize, char, &'a TrieNode<char>)>, depth: usize, node: &'a TrieNode<char>) {
    stack.extend(node.children().rev().map(|(c, child)| (depth, *c, child)));
}

pub(crate) fn collect(symbols: &[char]) -> String {
    symbols.iter().collect()
}
