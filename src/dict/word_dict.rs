use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::alphabet::{contains_marker, END_OF_STRING_MARKER};
use crate::dict::error::DictError;
use crate::dict::match_result::MatchResult;
use crate::trie::render::bracketed;
use crate::trie::Trie;

/// Dictionary of words backed by a character trie.
#[derive(Debug, Default)]
pub struct WordDict {
    words: Trie<char>,
}

/// What happened while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added: usize,
    pub rejected: usize,
}

impl WordDict {
    pub fn new() -> WordDict {
        Default::default()
    }

    /// The character every word is terminated with inside the tree. Words
    /// containing it cannot be added.
    pub const fn end_of_word_marker() -> char {
        END_OF_STRING_MARKER
    }

    pub fn add_word(&mut self, word: &str) -> bool {
        self.words.add_string(word)
    }

    pub fn try_add_word(&mut self, word: &str) -> Result<(), DictError> {
        if contains_marker(word) {
            return Err(DictError::ReservedMarker {
                word: word.to_string(),
                marker: END_OF_STRING_MARKER,
            });
        }
        self.words.add_string(word);
        Ok(())
    }

    pub fn match_word_exactly(&self, word: &str) -> MatchResult {
        self.words.match_string_exactly(word)
    }

    pub fn match_word_allow_substitution(&self, word: &str, subst_max: usize) -> MatchResult {
        self.words.match_string_allow_substitution(word, subst_max)
    }

    pub fn match_word_levenshtein_distance(&self, word: &str, edit_max: usize) -> MatchResult {
        self.words.match_string_levenshtein_distance(word, edit_max)
    }

    pub fn fetch_words(&self) -> Vec<String> {
        self.words.fetch_tree_strings()
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        self.words.for_each_tree_string(|_| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        !self.words.has_children()
    }

    pub fn words_tree(&self) -> String {
        bracketed(&self.words)
    }

    pub fn print_words_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.words_tree())
    }

    pub fn print_words_values<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut status = Ok(());
        self.words.for_each_tree_string(|word| {
            if status.is_ok() {
                status = writeln!(out, "{}", word);
            }
        });
        status
    }

    /// Adds one word per line. Blank lines are skipped; lines holding the
    /// end-of-word marker are skipped and counted as rejected.
    pub fn load_words<R: Read>(&mut self, reader: R) -> Result<LoadReport, DictError> {
        let start = Instant::now();
        let mut report = LoadReport::default();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.strip_suffix('\r').unwrap_or(&line);
            if word.is_empty() {
                continue;
            }
            match self.try_add_word(word) {
                Ok(()) => report.added += 1,
                Err(e) => {
                    debug!("{}", e);
                    report.rejected += 1;
                }
            }
        }

        info!("Read {} words in {:.3}s ({} rejected)",
              report.added, start.elapsed().as_secs_f64(), report.rejected);
        Ok(report)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport, DictError> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        self.load_words(file)
    }
}
