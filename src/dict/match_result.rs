use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Outcome of one matching query.
///
/// The message is produced by whichever of the two message builders matches
/// `success`; the other one is never run, since a failure message may look
/// at parts of the query that a success never consumed (and vice versa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    algorithm: String,
    source: String,
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<usize>,
}

impl MatchResult {
    pub(crate) fn resolve<S, F>(algorithm: impl Into<String>,
                                source: &str,
                                success: bool,
                                on_success: S,
                                on_failure: F) -> MatchResult
        where S: FnOnce() -> String, F: FnOnce() -> String {
        let message = if success { on_success() } else { on_failure() };
        MatchResult {
            algorithm: algorithm.into(),
            source: source.to_string(),
            success,
            message,
            matched: None,
            cost: None,
        }
    }

    /// Records which stored word satisfied the query and at what cost. Only
    /// meaningful on a successful result.
    pub(crate) fn with_match(mut self, word: impl Into<String>, cost: usize) -> MatchResult {
        debug_assert!(self.success);
        self.matched = Some(word.into());
        self.cost = Some(cost);
        self
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stored word that matched, without its terminator.
    pub fn matched(&self) -> Option<&str> {
        self.matched.as_deref()
    }

    /// Substitutions or edits spent on the match; 0 for an exact match.
    pub fn cost(&self) -> Option<usize> {
        self.cost
    }

    pub fn short_str(&self) -> String {
        format!("running {} on \"{}\" {}",
                self.algorithm,
                self.source,
                if self.success { "succeeded" } else { "failed" })
    }

    pub fn full_str(&self) -> String {
        format!("{}: {}", self.short_str(), self.message)
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::dict::match_result::MatchResult;

    #[test]
    fn only_the_chosen_message_is_built() {
        let ok = MatchResult::resolve("exact-match", "ab", true,
                                      || "yes".to_string(),
                                      || panic!("failure message built on success"));
        assert_eq!(ok.message(), "yes");

        let ko = MatchResult::resolve("exact-match", "ab", false,
                                      || panic!("success message built on failure"),
                                      || "no".to_string());
        assert_eq!(ko.message(), "no");
    }

    #[test]
    fn renders_short_and_full_forms() {
        let result = MatchResult::resolve("subst-match(1)", "abc", true,
                                          || "\"abc$\" matched successfully with \"aba$\" using 1 substs".to_string(),
                                          String::new)
            .with_match("aba", 1);
        assert_eq!(result.short_str(), "running subst-match(1) on \"abc\" succeeded");
        assert_eq!(result.full_str(),
                   "running subst-match(1) on \"abc\" succeeded: \"abc$\" matched successfully with \"aba$\" using 1 substs");
        assert_eq!(result.to_string(), result.full_str());
        assert_eq!(result.matched(), Some("aba"));
        assert_eq!(result.cost(), Some(1));
    }

    #[test]
    fn serializes_to_json() {
        let result = MatchResult::resolve("exact-match", "x", false, String::new, || "nope".to_string());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithm"], "exact-match");
        assert_eq!(json["success"], false);
        assert!(json.get("matched").is_none());
    }
}
