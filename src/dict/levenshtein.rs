//! Bounded Levenshtein matching over a whole trie.
//!
//! The classic dynamic-programming matrix for `lev(word, query)` is filled one
//! row per symbol of `word`, and each row only depends on the previous one.
//! Every path from the root is such a `word`, so a row can be carried along
//! each edge of the trie and recomputed as the walk goes down. For instance,
//! `lev("tea", "meat")`:
//!
//! ```text
//!      m e a t
//!   |0|1|2|3|4|
//! t |1|1|2|3|3|
//! e |2|2|1|2|3|
//! a |3|3|2|1|2|   -> 2
//! ```
//!
//! Entries of a row never decrease from one row to the next, so once the
//! smallest entry exceeds the budget nothing below that edge can match.
//! Finding a match does not end the walk: the budget drops to one less than
//! the match's cost, so the reported match is a cheapest one.

use derive_new::new;
use log::{debug, trace};
use metrics::counter;

use crate::alphabet::{strip_marker, terminated, END_OF_STRING_MARKER};
use crate::dict::match_result::MatchResult;
use crate::dict::search::collect;
use crate::trie::{Trie, TrieNode};

#[derive(new)]
struct LevenshteinState<'a> {
    node: &'a TrieNode<char>,
    read: String,
    row: Vec<usize>,
}

/// Row of the matrix once `symbol` has been appended to the word whose row
/// is `previous`.
fn next_row(previous: &[usize], symbol: char, query: &[char]) -> Vec<usize> {
    let mut row = Vec::with_capacity(previous.len());
    row.push(previous[0] + 1);
    for i in 1..previous.len() {
        let substitution = if symbol == query[i - 1] { 0 } else { 1 };
        let cost = (row[i - 1] + 1)
            .min(previous[i] + 1)
            .min(previous[i - 1] + substitution);
        row.push(cost);
    }
    row
}

impl Trie<char> {

    /// Looks for a stored string within `edit_max` insertions, deletions and
    /// substitutions of `s`.
    pub fn match_string_levenshtein_distance(&self, s: &str, edit_max: usize) -> MatchResult {
        debug!("leven-match({}) on {:?}: starting", edit_max, s);
        let symbols = terminated(s);
        let mut found: Option<(String, usize)> = None;
        let mut visited: u64 = 0;
        let mut budget = edit_max;

        let first_row: Vec<usize> = (0..=symbols.len()).collect();
        let mut unvisited = vec![LevenshteinState::new(&self.root, String::new(), first_row)];

        'search: while let Some(state) = unvisited.pop() {
            if state.row.iter().copied().min().unwrap_or(usize::MAX) > budget {
                continue;
            }
            for (&symbol, child) in state.node {
                visited += 1;
                let row = next_row(&state.row, symbol, &symbols);
                let mut read = state.read.clone();
                read.push(symbol);

                let goal = row[row.len() - 1];
                if symbol == END_OF_STRING_MARKER && goal <= budget {
                    found = Some((read, goal));
                    match goal.checked_sub(1) {
                        Some(tighter) => budget = tighter,
                        None => break 'search,
                    }
                    continue;
                }

                let min = row.iter().copied().min().unwrap_or(usize::MAX);
                if min <= budget {
                    unvisited.push(LevenshteinState::new(child, read, row));
                } else {
                    trace!("pruned {:?}: row {:?}", read, row);
                }
            }
        }
        counter!("word_dict.leven.nodes_visited", visited);
        debug!("leven-match({}) on {:?}: {:?} after {} edges", edit_max, s, found, visited);

        let result = MatchResult::resolve(
            format!("leven-match({})", edit_max),
            s,
            found.is_some(),
            || {
                let (read, cost) = found.as_ref().map(|(r, c)| (r.as_str(), *c)).unwrap_or_default();
                format!("\"{}\" matched successfully with \"{}\" using {} edits", collect(&symbols), read, cost)
            },
            || format!("\"{}\" failed to match", collect(&symbols)),
        );
        match found {
            Some((read, cost)) => result.with_match(strip_marker(&read), cost),
            None => result,
        }
    }
}
