//! Bracketed textual form of a trie.
//!
//! Each child of the root goes on its own line. A leaf is written as its bare
//! symbol and an inner node as its symbol followed by its children, comma
//! separated, between parentheses: the words `a` and `ab` (with the `$`
//! terminator) render as `a($, b($))`.

use std::fmt::{self, Display, Write};

use crate::trie::node::TrieNode;
use crate::trie::Trie;

enum Step<'a, T: Ord> {
    Node(&'a T, &'a TrieNode<T>),
    Text(&'static str),
}

fn push_children<'a, T: Ord>(stack: &mut Vec<Step<'a, T>>, node: &'a TrieNode<T>, separator: &'static str) {
    for (idx, (symbol, child)) in node.children().enumerate().rev() {
        stack.push(Step::Node(symbol, child));
        if idx != 0 {
            stack.push(Step::Text(separator));
        }
    }
}

pub fn write_bracketed<T, W>(trie: &Trie<T>, out: &mut W) -> fmt::Result
    where T: Ord + Display, W: Write {
    let mut stack = Vec::new();
    push_children(&mut stack, trie.root(), "\n");

    while let Some(step) = stack.pop() {
        match step {
            Step::Text(text) => out.write_str(text)?,
            Step::Node(symbol, node) => {
                write!(out, "{}", symbol)?;
                if node.has_children() {
                    out.write_char('(')?;
                    stack.push(Step::Text(")"));
                    push_children(&mut stack, node, ", ");
                }
            }
        }
    }
    Ok(())
}

pub fn bracketed<T: Ord + Display>(trie: &Trie<T>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_bracketed(trie, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use crate::trie::render::bracketed;
    use crate::trie::Trie;

    fn trie_of(words: &[&str]) -> Trie<char> {
        let mut trie = Trie::new();
        for w in words {
            trie.insert_path(w.chars().chain(Some('$')));
        }
        trie
    }

    #[test]
    fn empty_trie_renders_nothing() {
        assert_eq!(bracketed(&Trie::<char>::new()), "");
    }

    #[test]
    fn renders_nested_children() {
        assert_eq!(bracketed(&trie_of(&["a", "ab"])), "a($, b($))");
    }

    #[test]
    fn puts_root_children_on_separate_lines() {
        let rendered = bracketed(&trie_of(&["", "a", "b", "aba", "abb", "aaaa"]));
        assert_eq!(rendered, "$\na($, a(a(a($))), b(a($), b($)))\nb($)");
    }
}
