//! The natural language pipeline the rules build upon.
//!
//! Normalization, tokenization, tagging, lemmatization, stemming and conjugation are not part of the rule
//! engine. They are requested through the [Pipeline] trait. [LexicalPipeline][lexical::LexicalPipeline] is a
//! dictionary-driven implementation.

use crate::{
    morphology::VerbTense,
    types::{ConjugationTable, Token},
    Error,
};

pub mod conjugation;
pub mod lexical;

pub trait Pipeline {
    /// Normalizes characters and spacing of a text.
    fn normalize(&self, text: &str) -> String;

    fn tokenize_words(&self, text: &str) -> Vec<String>;

    fn tokenize_sentences(&self, text: &str) -> Vec<String>;

    /// Assigns a part-of-speech tag to every token.
    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, Error>;

    /// Returns the lemma of a word formatted as `past_stem` or `past_stem#present_stem`.
    fn lemmatize(&self, word: &str) -> Result<String, Error>;

    fn stem(&self, word: &str) -> Result<String, Error>;

    /// Conjugates a stem in the given tense. `None` if there is no table for the combination.
    fn conjugate(&self, stem: &str, tense: VerbTense) -> Result<Option<ConjugationTable>, Error>;
}

impl<'a, T> Pipeline for &'a T
where
    T: Pipeline + ?Sized,
{
    fn normalize(&self, text: &str) -> String {
        (*self).normalize(text)
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        (*self).tokenize_words(text)
    }

    fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        (*self).tokenize_sentences(text)
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, Error> {
        (*self).tag(tokens)
    }

    fn lemmatize(&self, word: &str) -> Result<String, Error> {
        (*self).lemmatize(word)
    }

    fn stem(&self, word: &str) -> Result<String, Error> {
        (*self).stem(word)
    }

    fn conjugate(&self, stem: &str, tense: VerbTense) -> Result<Option<ConjugationTable>, Error> {
        (*self).conjugate(stem, tense)
    }
}
