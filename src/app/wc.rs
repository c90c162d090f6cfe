//! Word count. The mapper tokenizes one line into lowercase words, the
//! reducer sums the per-occurrence counts of one word.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Maximal runs of word characters and apostrophes, Unicode-aware.
    static ref WORD: Regex = Regex::new(r"[\w']+").unwrap();
}

/// Emit `(lowercased_word, 1)` for every token of `line`, left to right.
/// The key (record offset or filename, assigned by the driver) is unused.
pub fn map<'a>(_key: &str, line: &'a str) -> impl Iterator<Item = (String, u64)> + 'a {
    WORD.find_iter(line).map(|m| (m.as_str().to_lowercase(), 1))
}

/// Sum all counts observed for `key` into a single `(word, total)` pair.
pub fn reduce<I>(key: &str, counts: I) -> (String, u64)
where
    I: IntoIterator<Item = u64>,
{
    (key.to_owned(), counts.into_iter().sum())
}
