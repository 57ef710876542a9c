use derive_new::new;
use log::{debug, trace};
use metrics::counter;

use crate::alphabet::{strip_marker, terminated};
use crate::dict::match_result::MatchResult;
use crate::dict::search::collect;
use crate::trie::{Trie, TrieNode};

/// A partial path waiting to be extended.
#[derive(new)]
struct SubstitutionState<'a> {
    node: &'a TrieNode<char>,
    read: String,
    consumed: usize,
    cost: usize,
}

impl Trie<char> {

    /// Looks for a stored string of the same length as `s` that differs from
    /// it in at most `subst_max` positions.
    ///
    /// Pending paths live on an explicit stack, so memory grows with the
    /// frontier rather than with the depth of the tree. A path is dropped as
    /// soon as its substitutions exceed the budget, since the count can only
    /// grow further down. Each match found tightens the budget to one less
    /// than its cost, so the match reported is a cheapest one.
    pub fn match_string_allow_substitution(&self, s: &str, subst_max: usize) -> MatchResult {
        debug!("subst-match({}) on {:?}: starting", subst_max, s);
        let symbols = terminated(s);
        let mut found: Option<(String, usize)> = None;
        let mut visited: u64 = 0;
        let mut budget = subst_max;

        let mut unvisited = vec![SubstitutionState::new(&self.root, String::new(), 0, 0)];

        'search: while let Some(state) = unvisited.pop() {
            if state.cost > budget {
                continue;
            }
            let expected = symbols[state.consumed];
            let consumed = state.consumed + 1;
            let last = consumed == symbols.len();

            for (&symbol, child) in state.node {
                visited += 1;
                let cost = if symbol == expected { state.cost } else { state.cost + 1 };
                if cost > budget {
                    trace!("pruned {:?}{} at cost {}", state.read, symbol, cost);
                    continue;
                }

                let mut read = state.read.clone();
                read.push(symbol);

                if last {
                    // The terminator itself is never substituted.
                    if symbol == expected {
                        found = Some((read, cost));
                        match cost.checked_sub(1) {
                            Some(tighter) => budget = tighter,
                            None => break 'search,
                        }
                    }
                } else {
                    unvisited.push(SubstitutionState::new(child, read, consumed, cost));
                }
            }
        }
        counter!("word_dict.subst.nodes_visited", visited);
        debug!("subst-match({}) on {:?}: {:?} after {} edges", subst_max, s, found, visited);

        let result = MatchResult::resolve(
            format!("subst-match({})", subst_max),
            s,
            found.is_some(),
            || {
                let (read, cost) = found.as_ref().map(|(r, c)| (r.as_str(), *c)).unwrap_or_default();
                format!("\"{}\" matched successfully with \"{}\" using {} substs", collect(&symbols), read, cost)
            },
            || format!("\"{}\" failed to match", collect(&symbols)),
        );
        match found {
            Some((read, cost)) => result.with_match(strip_marker(&read), cost),
            None => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::Trie;

    fn trie_of(words: &[&str]) -> Trie<char> {
        let mut trie = Trie::new();
        words.iter().for_each(|w| assert!(trie.add_string(w)));
        trie
    }

    #[test]
    fn substitutes_last_character() {
        let trie = trie_of(&["aba"]);
        let result = trie.match_string_allow_substitution("abc", 1);
        assert!(result.success());
        assert_eq!(result.matched(), Some("aba"));
        assert_eq!(result.cost(), Some(1));
        assert_eq!(result.message(), "\"abc$\" matched successfully with \"aba$\" using 1 substs");

        let strict = trie.match_string_allow_substitution("abc", 0);
        assert!(!strict.success());
        assert_eq!(strict.message(), "\"abc$\" failed to match");
        assert_eq!(strict.algorithm(), "subst-match(0)");
    }

    #[test]
    fn never_matches_other_lengths() {
        let trie = trie_of(&["ab", "abcd"]);
        for budget in 0..6 {
            assert!(!trie.match_string_allow_substitution("abc", budget).success());
        }
        assert!(trie.match_string_allow_substitution("xy", 2).success());
        assert!(!trie.match_string_allow_substitution("xy", 1).success());
    }

    #[test]
    fn zero_budget_is_exact_match() {
        let trie = trie_of(&["", "a", "b", "aba", "abb", "aaaa"]);
        for word in ["", "a", "aba", "aaaa"] {
            let result = trie.match_string_allow_substitution(word, 0);
            assert!(result.success(), "{}", word);
            assert_eq!(result.matched(), Some(word));
        }
        assert!(!trie.match_string_allow_substitution("zzzz", 0).success());
        assert!(trie.match_string_allow_substitution("zzzz", 4).success());
    }

    #[test]
    fn reports_cheapest_word() {
        let trie = trie_of(&["abc", "abd"]);
        for budget in 0..4 {
            let result = trie.match_string_allow_substitution("abc", budget);
            assert_eq!(result.matched(), Some("abc"));
            assert_eq!(result.cost(), Some(0));
        }
        let result = trie.match_string_allow_substitution("xbe", 3);
        assert_eq!(result.cost(), Some(2));
    }

    #[test]
    fn empty_trie_never_matches() {
        let trie = Trie::new();
        assert!(!trie.match_string_allow_substitution("", 3).success());
    }

    #[test]
    fn reports_cost_of_word_found() {
        let trie = trie_of(&["cat", "cot"]);
        let result = trie.match_string_allow_substitution("cut", 2);
        assert!(result.success());
        assert_eq!(result.cost(), Some(1));
        assert!(matches!(result.matched(), Some("cat") | Some("cot")));
    }
}
