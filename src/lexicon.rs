//! Word lists consulted by the rules.
//!
//! The linking verbs and sentence-initial adverbs are loaded from line-delimited files once and are read-only
//! afterwards. The exception sets are fixed and built into the crate.

use fs_err::File;
use lazy_static::lazy_static;
use std::{
    collections::HashSet,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::Error;

lazy_static! {
    /// Singular nouns ending in "ان" which would otherwise be taken for plurals.
    static ref SINGULAR_EXCEPTIONS: HashSet<&'static str> = [
        "تهران",
        "ایران",
        "اصفهان",
        "کرمان",
        "زنجان",
        "گیلان",
        "خیابان",
        "باران",
        "زبان",
        "زمان",
        "جان",
        "نان",
        "دندان",
        "آسمان",
        "میزان",
        "استان",
        "داستان",
        "بیمارستان",
        "دبستان",
        "بوستان",
        "گلستان",
        "زمستان",
        "تابستان",
        "مهمان",
        "امکان",
        "ایمان",
        "پایان",
        "جریان",
        "قهرمان",
        "کاروان",
        "ساختمان",
        "سازمان",
        "درمان",
        "فرمان",
        "خاندان",
        "نردبان",
        "جوان",
        "آسان",
        "ارزان",
    ]
    .iter()
    .copied()
    .collect();

    /// Nouns forming compound verbs with "داشتن" which are not progressive.
    static ref NON_PROGRESSIVE_NOUNS: HashSet<&'static str> = [
        "دوست",
        "نیاز",
        "نگه",
        "وجود",
        "قرار",
        "اعتقاد",
        "انتظار",
        "اصرار",
        "ادامه",
        "دست",
        "خبر",
        "عادت",
        "حق",
        "امید",
        "باور",
        "شک",
        "تمایل",
        "علاقه",
        "احتیاج",
        "اطلاع",
    ]
    .iter()
    .copied()
    .collect();
}

/// Whether a noun ending in "ان" is a known singular.
pub fn is_singular_exception(noun: &str) -> bool {
    SINGULAR_EXCEPTIONS.contains(noun)
}

/// Whether a light-verb noun takes "داشتن" without a progressive reading.
pub fn is_non_progressive_noun(noun: &str) -> bool {
    NON_PROGRESSIVE_NOUNS.contains(noun)
}

/// Reads a line-delimited word list. Blank lines and lines starting with `#` are skipped.
pub fn read_word_set<R: Read>(reader: R) -> Result<HashSet<String>, Error> {
    let mut words = HashSet::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }

        words.insert(word.to_string());
    }

    Ok(words)
}

/// The linking verbs and sentence-initial adverbs.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    linking_verbs: HashSet<String>,
    starting_adverbs: HashSet<String>,
}

impl Lexicons {
    pub fn new<I, J, S, T>(linking_verbs: I, starting_adverbs: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Lexicons {
            linking_verbs: linking_verbs.into_iter().map(Into::into).collect(),
            starting_adverbs: starting_adverbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads both lists from line-delimited files.
    ///
    /// # Errors
    /// If either file can not be read. A missing file is a configuration error, not an empty list.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        linking_verbs: P,
        starting_adverbs: Q,
    ) -> Result<Self, Error> {
        let linking_verbs = read_word_set(File::open(linking_verbs.as_ref())?)?;
        let starting_adverbs = read_word_set(File::open(starting_adverbs.as_ref())?)?;

        log::debug!(
            "loaded {} linking verbs and {} starting adverbs",
            linking_verbs.len(),
            starting_adverbs.len()
        );

        Ok(Lexicons {
            linking_verbs,
            starting_adverbs,
        })
    }

    pub fn linking_verbs(&self) -> &HashSet<String> {
        &self.linking_verbs
    }

    pub fn starting_adverbs(&self) -> &HashSet<String> {
        &self.starting_adverbs
    }

    /// Whether `word` occurs inside one of the linking verb entries.
    pub fn matches_linking_verb(&self, word: &str) -> bool {
        !word.is_empty() && self.linking_verbs.iter().any(|entry| entry.contains(word))
    }

    pub fn is_starting_adverb(&self, adverb: &str) -> bool {
        self.starting_adverbs.contains(adverb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_word_sets() {
        let text = "# linking verbs\nاست\n\n  بودن \n";
        let words = read_word_set(text.as_bytes()).unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.contains("بودن"));
    }

    #[test]
    fn missing_lexicon_is_an_error() {
        let result = Lexicons::from_paths("does/not/exist.txt", "does/not/exist.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn linking_verbs_match_by_substring() {
        let lexicons = Lexicons::new(vec!["است", "بودن", "شدن"], Vec::<String>::new());

        assert!(lexicons.matches_linking_verb("بود"));
        assert!(lexicons.matches_linking_verb("است"));
        assert!(!lexicons.matches_linking_verb("رفت"));
        assert!(!lexicons.matches_linking_verb(""));
    }

    #[test]
    fn knows_exceptions() {
        assert!(is_singular_exception("تهران"));
        assert!(!is_singular_exception("دانشجویان"));
        assert!(is_non_progressive_noun("دوست"));
        assert!(!is_non_progressive_noun("درس"));
    }
}
