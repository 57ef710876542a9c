//! A word dictionary stored in a character trie, answering exact,
//! substitution-bounded and Levenshtein-bounded membership queries.

pub mod alphabet;
pub mod trie;
pub mod dict;
pub mod demo;

pub use crate::alphabet::END_OF_STRING_MARKER;
pub use crate::dict::{DictError, LoadReport, MatchResult, WordDict};
pub use crate::trie::{Trie, TrieNode};
