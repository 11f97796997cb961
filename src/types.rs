//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::Error;

/// Marker joining the parts of a compound verb inside [SentenceComponents::verb].
pub const VERB_JOINER: char = '_';

/// Zero-width non-joiner, glues the parts of a compound verb in the output.
pub const ZWNJ: char = '\u{200c}';

/// The object marker postposition.
pub const OBJECT_MARKER: &str = "را";

/// Part-of-speech tag as assigned by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PosTag {
    Pron,
    Noun,
    NounEz,
    Verb,
    Adj,
    AdjEz,
    Adp,
    AdpEz,
    Det,
    Cconj,
    Sconj,
    Adv,
    Punct,
    Other,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Pron => "PRON",
            PosTag::Noun => "NOUN",
            PosTag::NounEz => "NOUN,EZ",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::AdjEz => "ADJ,EZ",
            PosTag::Adp => "ADP",
            PosTag::AdpEz => "ADP,EZ",
            PosTag::Det => "DET",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Adv => "ADV",
            PosTag::Punct => "PUNCT",
            PosTag::Other => "OTHER",
        }
    }

    /// Nouns and pronouns, i. e. tokens which can head a phrase.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Pron | PosTag::Noun | PosTag::NounEz)
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::NounEz)
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Adj | PosTag::AdjEz)
    }

    pub fn is_adposition(&self) -> bool {
        matches!(self, PosTag::Adp | PosTag::AdpEz)
    }
}

impl<'a> From<&'a str> for PosTag {
    fn from(label: &'a str) -> Self {
        match label.trim() {
            "PRON" => PosTag::Pron,
            "NOUN" => PosTag::Noun,
            "NOUN,EZ" => PosTag::NounEz,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adj,
            "ADJ,EZ" => PosTag::AdjEz,
            "ADP" => PosTag::Adp,
            "ADP,EZ" => PosTag::AdpEz,
            "DET" => PosTag::Det,
            "CCONJ" => PosTag::Cconj,
            "SCONJ" => PosTag::Sconj,
            "ADV" => PosTag::Adv,
            "PUNCT" | "PUNC" => PosTag::Punct,
            _ => PosTag::Other,
        }
    }
}

impl From<String> for PosTag {
    fn from(label: String) -> Self {
        PosTag::from(label.as_str())
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word together with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub tag: PosTag,
}

impl Token {
    pub fn new<S: Into<String>>(surface: S, tag: PosTag) -> Self {
        Token {
            surface: surface.into(),
            tag,
        }
    }
}

/// The grammatical role a token has been claimed by during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Subject,
    Object,
    ObjectMarker,
    Complement,
    Adposition,
    NounComplement,
    NounClause,
    Verb,
    LightVerbNoun,
    Adverb,
    FinalPunctuation,
    Punctuation,
}

/// The grammatical roles of a sentence.
/// Empty strings denote absent roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceComponents {
    pub subject: String,
    /// The complete predicate, parts joined with [VERB_JOINER].
    pub verb: String,
    /// The non-verbal part of a compound predicate.
    pub light_verb_noun: String,
    pub object: String,
    pub complement: String,
    pub adposition: String,
    pub noun_complement: String,
    /// A vocative, e. g. "علی" in "علی! بیا".
    pub noun_clause: String,
    pub adverbs: Vec<String>,
    pub starting_adverb: String,
    pub verb_adverb: String,
    pub untagged_words: Vec<String>,
    pub final_punctuation: String,
    /// The role each input token was claimed by, `None` for untagged tokens.
    pub claims: Vec<Option<Role>>,
}

impl SentenceComponents {
    /// The verb without its light-verb noun, parts separated by spaces.
    pub fn verb_surface(&self) -> String {
        let verb = if self.light_verb_noun.is_empty() {
            self.verb.as_str()
        } else {
            self.verb
                .strip_prefix(self.light_verb_noun.as_str())
                .map(|rest| rest.trim_start_matches(VERB_JOINER))
                .unwrap_or(&self.verb)
        };

        verb.split(VERB_JOINER)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Boolean properties of a sentence, derived during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceFlags {
    pub subject_found: bool,
    pub subject_is_plural: bool,
    pub verb_found: bool,
    pub object_found: bool,
    pub complement_found: bool,
    pub noun_complement_found: bool,
    pub noun_clause_found: bool,
    /// Whether the verb is a compound (light-verb noun or several verb tokens).
    pub verb_part_found: bool,
    pub linking_verb: bool,
    pub starting_adverb_found: bool,
    pub verb_adverb_found: bool,
}

/// A lemma as returned by a lemmatizer: `past` or `past#present`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lemma {
    pub past: String,
    pub present: Option<String>,
}

impl Lemma {
    /// Parses the lemmatizer output for `surface`.
    ///
    /// # Errors
    /// If the past stem is empty.
    pub fn parse(surface: &str, raw: &str) -> Result<Self, Error> {
        let mut parts = raw.splitn(2, '#');
        let past = parts.next().unwrap_or("").trim();
        let present = parts
            .next()
            .map(str::trim)
            .filter(|present| !present.is_empty());

        if past.is_empty() {
            return Err(Error::MalformedLemma {
                surface: surface.to_string(),
                lemma: raw.to_string(),
            });
        }

        Ok(Lemma {
            past: past.to_string(),
            present: present.map(str::to_string),
        })
    }
}

/// Exactly six inflected forms, ordered 1sg, 2sg, 3sg, 1pl, 2pl, 3pl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct ConjugationTable(Vec<String>);

impl ConjugationTable {
    pub const LEN: usize = 6;

    pub fn forms(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for ConjugationTable {
    type Error = Error;

    fn try_from(forms: Vec<String>) -> Result<Self, Error> {
        if forms.len() != ConjugationTable::LEN {
            return Err(Error::MalformedConjugation {
                stem: forms.first().cloned().unwrap_or_default(),
                tense: String::new(),
                found: forms.len(),
            });
        }

        Ok(ConjugationTable(forms))
    }
}

/// An original sentence and its correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}
