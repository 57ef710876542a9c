//! Demonstration driver: seeds a dictionary and runs every matcher over a
//! set of queries for a range of tolerances.

use std::io::{self, Write};

use typed_builder::TypedBuilder;

use crate::dict::{MatchResult, WordDict};

/// Words seeded by default. `"$"` is refused since it holds the marker and
/// the second `"aaaa"` is accepted but not duplicated.
pub const SAMPLE_WORDS: &[&str] = &["", "a", "b", "$", "aba", "abb", "aaaa", "aaaa"];

pub const SAMPLE_QUERIES: &[&str] = &["", "$", "abc", "aaaa", "zzzz"];

/// Largest tolerance accepted from the command line.
pub const MAX_TOLERANCE: usize = 64;

const FIRST_TAG: &str = "[-] ";
const NEXT_TAG: &str = "    ";

#[derive(TypedBuilder, Debug, Clone)]
pub struct DemoConfig {
    /// Smallest substitution / edit budget tried.
    #[builder(default = 0)]
    pub min_tolerance: usize,
    /// Largest substitution / edit budget tried.
    #[builder(default = 4)]
    pub max_tolerance: usize,
    /// Emit one JSON object per result instead of text.
    #[builder(default = false)]
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig::builder().build()
    }
}

pub fn add_words<'a, I, W>(dict: &mut WordDict, words: I, out: &mut W) -> io::Result<()>
    where I: IntoIterator<Item=&'a str>, W: Write {
    for word in words {
        let status = if dict.add_word(word) { "succeeded" } else { "failed" };
        writeln!(out, "adding \"{}\" {}", word, status)?;
    }
    Ok(())
}

/// Every result the driver reports for `word`: the exact match, then each
/// substitution budget, then each edit budget.
pub fn match_results(dict: &WordDict, word: &str, config: &DemoConfig) -> Vec<MatchResult> {
    let budgets = config.min_tolerance..=config.max_tolerance;
    let mut results = vec![dict.match_word_exactly(word)];
    results.extend(budgets.clone().map(|k| dict.match_word_allow_substitution(word, k)));
    results.extend(budgets.map(|k| dict.match_word_levenshtein_distance(word, k)));
    results
}

pub fn match_words<'a, I, W>(dict: &WordDict, words: I, config: &DemoConfig, out: &mut W) -> io::Result<()>
    where I: IntoIterator<Item=&'a str>, W: Write {
    let budgets = || config.min_tolerance..=config.max_tolerance;
    let tag = |k: usize| if k == config.min_tolerance { FIRST_TAG } else { NEXT_TAG };

    for word in words {
        if !config.json {
            writeln!(out)?;
        }
        write_result(out, config.json, FIRST_TAG, &dict.match_word_exactly(word))?;
        for k in budgets() {
            write_result(out, config.json, tag(k), &dict.match_word_allow_substitution(word, k))?;
        }
        for k in budgets() {
            write_result(out, config.json, tag(k), &dict.match_word_levenshtein_distance(word, k))?;
        }
    }
    Ok(())
}

fn write_result<W: Write>(out: &mut W, json: bool, tag: &str, result: &MatchResult) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, result)?;
        writeln!(out)
    } else {
        writeln!(out, "{}{}", tag, result.full_str())
    }
}

/// Parses a tolerance given on the command line, refusing budgets above
/// [`MAX_TOLERANCE`].
pub fn parse_tolerance(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("invalid tolerance {:?}: {}", s, e))?;
    if value > MAX_TOLERANCE {
        return Err(format!("tolerance {} is above the limit of {}", value, MAX_TOLERANCE));
    }
    Ok(value)
}
