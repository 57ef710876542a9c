/// Symbol appended to every stored string. Any character will do as long as
/// callers never put it inside a word.
pub const END_OF_STRING_MARKER: char = '$';

pub fn contains_marker(s: &str) -> bool {
    s.contains(END_OF_STRING_MARKER)
}

/// The symbols of `s` followed by the end-of-string marker.
pub fn terminated(s: &str) -> Vec<char> {
    s.chars().chain(std::iter::once(END_OF_STRING_MARKER)).collect()
}

/// `s` with the marker appended, as shown in match messages.
pub fn terminated_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + END_OF_STRING_MARKER.len_utf8());
    out.push_str(s);
    out.push(END_OF_STRING_MARKER);
    out
}

pub fn strip_marker(s: &str) -> &str {
    s.strip_suffix(END_OF_STRING_MARKER).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use crate::alphabet::*;

    #[test]
    fn terminates_with_marker() {
        assert_eq!(terminated("ab"), vec!['a', 'b', '$']);
        assert_eq!(terminated(""), vec!['$']);
        assert_eq!(terminated_string("tea"), "tea$");
    }

    #[test]
    fn strips_only_trailing_marker() {
        assert_eq!(strip_marker("aba$"), "aba");
        assert_eq!(strip_marker("aba"), "aba");
        assert_eq!(strip_marker("$"), "");
    }

    #[test]
    fn detects_marker() {
        assert!(contains_marker("a$b"));
        assert!(!contains_marker("ab"));
    }
}
