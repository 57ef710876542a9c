pub mod node;
pub mod iterators;
pub mod render;

mod trie;

pub use self::node::TrieNode;
pub use self::trie::Trie;
