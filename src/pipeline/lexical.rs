//! A dictionary-driven [Pipeline].
//!
//! Tags are looked up in a word list, verbs are recognized by generating every inflected form of the known
//! stems. This is deliberately simple: words missing from the dictionary are tagged as nouns.

use fs_err::File;
use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use onig::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    convert::TryFrom,
    io::{BufRead, BufReader, Read, Write},
    path::Path,
};
use unicode_segmentation::UnicodeSegmentation;

use super::{
    conjugation::{self, Stems},
    Pipeline,
};
use crate::{
    morphology::VerbTense,
    types::{ConjugationTable, PosTag, Token, VERB_JOINER, ZWNJ},
    utils::{normalize_whitespace, split, splitting_chars},
    Error,
};

/// Past stems of the verbs which act as auxiliaries in periphrastic tenses.
const AUXILIARIES: [&str; 4] = ["بود", "داشت", "خواست", "شد"];

/// Suffixes removed by the stemmer, longest first.
const SUFFIXES: [&str; 6] = ["ترین", "های", "ها", "ان", "ات", "تر"];

fn read_dump<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<_> = line.split('\t').map(str::trim).collect();
        match parts.as_slice() {
            [first, second] if !first.is_empty() && !second.is_empty() => {
                entries.push((first.to_string(), second.to_string()))
            }
            _ => {
                return Err(Error::MalformedDump {
                    path: path.display().to_string(),
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(entries)
}

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct LexicalPipeline {
    tags: HashMap<String, PosTag>,
    /// Past and present stem of every known verb.
    verbs: Vec<(String, String)>,
    /// Maps every single-word verb form to the index of its verb.
    #[serde(skip)]
    forms: OnceCell<HashMap<String, usize>>,
}

impl LexicalPipeline {
    pub fn from_entries<I, J, S, T>(tags: I, verbs: J) -> Self
    where
        I: IntoIterator<Item = (S, PosTag)>,
        J: IntoIterator<Item = (T, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        LexicalPipeline {
            tags: tags
                .into_iter()
                .map(|(word, tag)| (word.into(), tag))
                .collect(),
            verbs: verbs
                .into_iter()
                .map(|(past, present)| (past.into(), present.into()))
                .collect(),
            forms: OnceCell::new(),
        }
    }

    /// Builds the pipeline from a word dump (`word<TAB>TAG` per line) and a verb dump (`past<TAB>present` per line).
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_dumps<P: AsRef<Path>, Q: AsRef<Path>>(words: P, verbs: Q) -> Result<Self, Error> {
        let tags = read_dump(words)?
            .into_iter()
            .map(|(word, tag)| (word, PosTag::from(tag)));
        let verbs = read_dump(verbs)?;

        let pipeline = LexicalPipeline::from_entries(tags, verbs);
        log::debug!(
            "built lexical pipeline with {} words and {} verbs",
            pipeline.tags.len(),
            pipeline.verbs.len()
        );

        Ok(pipeline)
    }

    /// Creates a new pipeline from a path to a binary.
    ///
    /// # Errors
    /// - If the file can not be opened.
    /// - If the file content can not be deserialized to a pipeline.
    pub fn new<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(p.as_ref())?);
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }

    fn forms(&self) -> &HashMap<String, usize> {
        self.forms.get_or_init(|| {
            let mut forms = HashMap::new();

            for (i, (past, present)) in self.verbs.iter().enumerate() {
                let stems = Stems { past, present };

                let inflected = VerbTense::ALL
                    .iter()
                    .flat_map(|tense| conjugation::conjugate(&stems, *tense))
                    .chain(conjugation::participles(&stems));

                for form in inflected.filter(|form| !form.contains(' ')) {
                    forms.entry(form).or_insert(i);
                }
            }

            forms
        })
    }

    fn verb_of(&self, word: &str) -> Option<&(String, String)> {
        self.forms().get(word).map(|i| &self.verbs[*i])
    }

    fn tag_word(&self, word: &str) -> PosTag {
        if word.chars().all(|c| splitting_chars().contains(c)) {
            PosTag::Punct
        } else if let Some(tag) = self.tags.get(word) {
            *tag
        } else if self.forms().contains_key(word) {
            PosTag::Verb
        } else if word.chars().all(char::is_numeric) {
            PosTag::Other
        } else {
            PosTag::Noun
        }
    }
}

impl Pipeline for LexicalPipeline {
    fn normalize(&self, text: &str) -> String {
        lazy_static! {
            static ref VERB_PREFIX: Regex = Regex::new(r"(^|\s)(ن?می)\s+(?=\S)").unwrap();
            static ref SPACE_AROUND_JOINER: Regex =
                Regex::new("\\s*\u{200c}[\\s\u{200c}]*").unwrap();
            static ref SPACE_BEFORE_PUNCTUATION: Regex =
                Regex::new(r"\s+([.,:;!?،؛؟…])").unwrap();
        }

        let text: String = text
            .chars()
            .map(|c| match c {
                'ي' | 'ى' => 'ی',
                'ك' => 'ک',
                c => c,
            })
            .collect();

        let text = normalize_whitespace(&text);
        let text = VERB_PREFIX.replace_all(&text, |caps: &Captures| {
            format!(
                "{}{}{}",
                caps.at(1).unwrap_or(""),
                caps.at(2).unwrap_or(""),
                ZWNJ
            )
        });
        let text = SPACE_AROUND_JOINER.replace_all(&text, |_: &Captures| ZWNJ.to_string());
        let text = SPACE_BEFORE_PUNCTUATION.replace_all(&text, |caps: &Captures| {
            caps.at(1).unwrap_or("").to_string()
        });

        text.trim().to_string()
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        split(text, |c| c.is_whitespace() || splitting_chars().contains(c))
            .into_iter()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }

    fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(String::from)
            .collect()
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, Error> {
        Ok(tokens
            .iter()
            .map(|token| Token::new(token.as_str(), self.tag_word(token)))
            .collect())
    }

    /// Verb groups like "رفته بودم" resolve to their last non-auxiliary verb.
    fn lemmatize(&self, word: &str) -> Result<String, Error> {
        let verbs: Vec<_> = word
            .split(|c: char| c.is_whitespace() || c == VERB_JOINER)
            .filter_map(|part| self.verb_of(part))
            .collect();

        let lemma = verbs
            .iter()
            .rev()
            .find(|(past, _)| !AUXILIARIES.contains(&past.as_str()))
            .or_else(|| verbs.first())
            .map(|(past, present)| format!("{}#{}", past, present))
            .unwrap_or_else(|| word.to_string());

        Ok(lemma)
    }

    fn stem(&self, word: &str) -> Result<String, Error> {
        let word = word.trim_matches(ZWNJ);

        for suffix in SUFFIXES.iter() {
            if let Some(stem) = word.strip_suffix(suffix) {
                let stem = stem.trim_end_matches(ZWNJ);
                if stem.chars().count() >= 2 {
                    return Ok(stem.to_string());
                }
            }
        }

        Ok(word.to_string())
    }

    fn conjugate(&self, stem: &str, tense: VerbTense) -> Result<Option<ConjugationTable>, Error> {
        if stem.is_empty() {
            return Ok(None);
        }

        let (past, present) = self
            .verbs
            .iter()
            .find(|(past, present)| past == stem || present == stem)
            .map(|(past, present)| (past.as_str(), present.as_str()))
            .unwrap_or((stem, stem));

        let forms = conjugation::conjugate(&Stems { past, present }, tense);
        Ok(Some(ConjugationTable::try_from(forms)?))
    }
}
