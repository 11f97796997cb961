//! Rule-based grammatical error correction for Persian.
//! # Overview
//!
//! farsirule has the following core abstractions:
//! - A [Pipeline][pipeline::Pipeline] providing normalization, tokenization, part-of-speech tagging, lemmatization,
//!   stemming and conjugation. The engine treats it as a black box; [LexicalPipeline][pipeline::lexical::LexicalPipeline]
//!   is a dictionary-driven implementation.
//! - [Lexicons][lexicon::Lexicons] holding the linking verbs and sentence-initial adverbs.
//! - A [Correcter][correcter::Correcter] which splits a sentence into its grammatical roles, classifies the tense of the
//!   main verb, selects the inflection agreeing with the subject and reassembles the sentence in canonical order.
//!
//! # Examples
//!
//! Correct a sentence:
//!
//! ```no_run
//! use farsirule::{correcter::Correcter, lexicon::Lexicons, pipeline::lexical::LexicalPipeline};
//!
//! let pipeline = LexicalPipeline::from_dumps("resources/words.tsv", "resources/verbs.tsv")?;
//! let lexicons = Lexicons::from_paths("resources/linking_verbs.txt", "resources/adverbs.txt")?;
//! let correcter = Correcter::new(pipeline, lexicons);
//!
//! assert_eq!(correcter.correct("من به مدرسه رفت"), "من به مدرسه رفتم.");
//! // sentences without a verb are returned unchanged
//! assert_eq!(correcter.correct("سلام"), "سلام");
//! # Ok::<(), farsirule::Error>(())
//! ```
//!
//! Inspect the grammatical roles of a sentence:
//!
//! ```no_run
//! use farsirule::{correcter::Correcter, lexicon::Lexicons, pipeline::lexical::LexicalPipeline};
//!
//! let pipeline = LexicalPipeline::from_dumps("resources/words.tsv", "resources/verbs.tsv")?;
//! let lexicons = Lexicons::from_paths("resources/linking_verbs.txt", "resources/adverbs.txt")?;
//! let correcter = Correcter::new(pipeline, lexicons);
//!
//! let (components, flags) = correcter.extract("من و رضا کتاب را خواندیم")?;
//! assert_eq!(components.subject, "من و رضا");
//! assert_eq!(components.object, "کتاب");
//! assert!(flags.subject_is_plural);
//! # Ok::<(), farsirule::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod agreement;
pub mod correcter;
pub mod extract;
pub mod journal;
pub mod lexicon;
pub mod morphology;
pub mod pipeline;
pub mod reconstruct;
pub mod types;
pub(crate) mod utils;

pub use correcter::{Correcter, CorrecterOptions, Outcome};
pub use lexicon::Lexicons;
pub use pipeline::Pipeline;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error of a compiled binary.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("malformed lemma {lemma:?} for verb `{surface}`")]
    MalformedLemma { surface: String, lemma: String },
    #[error("conjugation table for `{stem}` ({tense}) has {found} forms, expected 6")]
    MalformedConjugation {
        stem: String,
        tense: String,
        found: usize,
    },
    #[error("form index {index} is out of range for a conjugation table of {len} forms")]
    FormIndex { index: usize, len: usize },
    #[error("malformed line in dump `{path}`: {line:?}")]
    MalformedDump { path: String, line: String },
    #[error("pipeline failure: {0}")]
    Pipeline(String),
}
