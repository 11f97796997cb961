use itertools::Itertools;
use lazy_static::lazy_static;
use onig::{Captures, Regex};

use crate::types::ZWNJ;

pub mod parallelism;

/// Split a text at the points where the given function is true.
/// Keeps the separators. See https://stackoverflow.com/a/40296745.
pub fn split<F>(text: &str, split_func: F) -> Vec<&str>
where
    F: Fn(char) -> bool,
{
    let mut result = Vec::new();
    let mut last = 0;
    for (index, matched) in text.match_indices(split_func) {
        if last != index {
            result.push(&text[last..index]);
        }
        result.push(matched);
        last = index + matched.len();
    }
    if last < text.len() {
        result.push(&text[last..]);
    }

    result
}

#[inline]
pub fn splitting_chars() -> &'static str {
    r##"«»"()[].,:;!?،؛؟…"##
}

// remove duplicate whitespaces
pub fn normalize_whitespace(string: &str) -> String {
    lazy_static! {
        static ref REGEX: Regex = Regex::new(r"(\s)\s+").unwrap();
    }

    REGEX
        .replace_all(string, |caps: &Captures| {
            caps.at(1).unwrap_or(" ").to_string()
        })
        .trim()
        .to_string()
}

/// Collapses runs of identical consecutive words into one word.
pub fn dedup_words(string: &str) -> String {
    string.split_whitespace().dedup().join(" ")
}

/// Compares words regardless of zero-width non-joiners, e. g. "آن‌ها" and "آنها".
pub fn eq_ignoring_joiners(a: &str, b: &str) -> bool {
    a.chars()
        .filter(|c| *c != ZWNJ)
        .eq(b.chars().filter(|c| *c != ZWNJ))
}
