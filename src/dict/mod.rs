pub mod error;
pub mod match_result;
pub mod word_dict;

mod search;
mod substitution;
mod levenshtein;

pub use self::error::DictError;
pub use self::match_result::MatchResult;
pub use self::word_dict::{LoadReport, WordDict};
