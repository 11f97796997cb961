//! The [Correcter] sequencing extraction, verb analysis, agreement and reconstruction for each sentence.

use fs_err::File;
use serde::{Deserialize, Serialize};
use std::{
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{
    agreement::select_form,
    extract::extract,
    lexicon::Lexicons,
    morphology::{analyze, VerbInput, VerbProperties, VerbTense},
    pipeline::Pipeline,
    reconstruct::{classify_adverbs, reconstruct},
    types::{Correction, Lemma, SentenceComponents, SentenceFlags, Token, ZWNJ},
    utils::parallelism::prelude::*,
    Error,
};

/// Options to construct a [Correcter].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrecterOptions {
    /// Path to the list of linking verbs.
    pub linking_verbs: PathBuf,
    /// Path to the list of adverbs which start a sentence.
    pub starting_adverbs: PathBuf,
    /// Appended to sentences without final punctuation.
    pub default_punctuation: String,
}

impl Default for CorrecterOptions {
    fn default() -> Self {
        CorrecterOptions {
            linking_verbs: PathBuf::from("resources/linking_verbs.txt"),
            starting_adverbs: PathBuf::from("resources/adverbs.txt"),
            default_punctuation: ".".into(),
        }
    }
}

impl CorrecterOptions {
    /// Reads options from JSON. Missing fields take their default value.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path.as_ref())?))
    }
}

/// How the correction of a sentence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Corrected(String),
    /// The sentence has no verb and is left as is.
    NoVerb,
    /// The features of the verb do not describe a known tense.
    UnknownTense(VerbProperties),
    /// The pipeline has no conjugation table for the verb.
    NoConjugation(VerbTense),
}

/// Corrects the agreement of verbs with their subject and the order of the sentence.
pub struct Correcter<P> {
    pipeline: P,
    lexicons: Lexicons,
    default_punctuation: String,
}

impl<P: Pipeline> Correcter<P> {
    pub fn new(pipeline: P, lexicons: Lexicons) -> Self {
        Correcter {
            pipeline,
            lexicons,
            default_punctuation: CorrecterOptions::default().default_punctuation,
        }
    }

    /// Creates a correcter loading the lexicons from the paths in `options`.
    ///
    /// # Errors
    /// If a lexicon can not be read.
    pub fn from_options(pipeline: P, options: &CorrecterOptions) -> Result<Self, Error> {
        let lexicons = Lexicons::from_paths(&options.linking_verbs, &options.starting_adverbs)?;

        Ok(Correcter {
            pipeline,
            lexicons,
            default_punctuation: options.default_punctuation.clone(),
        })
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Tokenizes and tags a sentence.
    pub fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        let words = self.pipeline.tokenize_words(sentence);
        self.pipeline.tag(&words)
    }

    /// Splits a sentence into its grammatical roles.
    pub fn extract(&self, sentence: &str) -> Result<(SentenceComponents, SentenceFlags), Error> {
        let tokens = self.tag(sentence)?;
        extract(&tokens, &self.lexicons, &self.pipeline)
    }

    /// Corrects a single sentence, reporting why a sentence was not corrected.
    ///
    /// # Errors
    /// If the pipeline fails or returns malformed data.
    pub fn try_correct(&self, sentence: &str) -> Result<Outcome, Error> {
        let (mut components, mut flags) = self.extract(sentence)?;

        if !flags.verb_found {
            return Ok(Outcome::NoVerb);
        }

        classify_adverbs(&mut components, &mut flags, &self.lexicons);

        let surface = components.verb_surface();
        let lemma = Lemma::parse(&surface, &self.pipeline.lemmatize(&surface)?)?;

        let (properties, stem) = analyze(&VerbInput {
            surface: &surface,
            lemma: &lemma,
            is_linking: flags.linking_verb,
            is_compound: flags.verb_part_found,
            light_verb_noun: &components.light_verb_noun,
        });

        let tense = match properties.tense() {
            Some(tense) => tense,
            None => return Ok(Outcome::UnknownTense(properties)),
        };

        let table = match self.pipeline.conjugate(stem, tense)? {
            Some(table) => table,
            None => return Ok(Outcome::NoConjugation(tense)),
        };

        let form = select_form(&components.subject, flags.subject_is_plural, &table)?;
        let verb = if components.light_verb_noun.is_empty() {
            form.to_string()
        } else {
            format!("{}{}{}", components.light_verb_noun, ZWNJ, form)
        };

        Ok(Outcome::Corrected(reconstruct(
            &components,
            &flags,
            &verb,
            &self.default_punctuation,
            &self.pipeline,
        )))
    }

    /// Corrects a single sentence. Returns the sentence unchanged if it can not be corrected.
    pub fn correct(&self, sentence: &str) -> String {
        match self.try_correct(sentence) {
            Ok(Outcome::Corrected(corrected)) => corrected,
            Ok(outcome) => {
                log::debug!("left `{}` unchanged: {:?}", sentence, outcome);
                sentence.to_string()
            }
            Err(error) => {
                log::warn!("failed to correct `{}`: {}", sentence, error);
                sentence.to_string()
            }
        }
    }

    /// Corrects each sentence, in parallel if the `parallel` feature is enabled.
    /// The results are in the order of the input.
    pub fn correct_many<S: AsRef<str> + Sync>(&self, sentences: &[S]) -> Vec<String>
    where
        P: Sync,
    {
        sentences
            .maybe_par_iter()
            .map(|sentence| self.correct(sentence.as_ref()))
            .collect()
    }

    /// Corrects a text line by line and sentence by sentence.
    /// Returns the corrected text and a [Correction] for each sentence.
    pub fn correct_text(&self, text: &str) -> (String, Vec<Correction>) {
        let mut corrections = Vec::new();

        for line in text.lines() {
            let line = self.pipeline.normalize(line);

            for sentence in self.pipeline.tokenize_sentences(&line) {
                let corrected = self.correct(&sentence);
                corrections.push(Correction {
                    original: sentence,
                    corrected,
                });
            }
        }

        let text = corrections
            .iter()
            .map(|correction| correction.corrected.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        (text, corrections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pipeline::lexical::LexicalPipeline, types::PosTag};

    fn correcter() -> Correcter<LexicalPipeline> {
        let pipeline = LexicalPipeline::from_entries(
            vec![
                ("من", PosTag::Pron),
                ("او", PosTag::Pron),
                ("به", PosTag::Adp),
                ("خانه", PosTag::Noun),
            ],
            vec![("رفت", "رو"), ("داشت", "دار"), ("هست", "هست")],
        );
        let lexicons = Lexicons::new(vec!["است", "هست"], Vec::<String>::new());

        Correcter::new(pipeline, lexicons)
    }

    #[test]
    fn corrects_agreement() {
        let correcter = correcter();

        assert_eq!(
            correcter.try_correct("من به خانه رفت").unwrap(),
            Outcome::Corrected("من به خانه رفتم.".into())
        );
    }

    #[test]
    fn reports_sentences_without_verb() {
        let correcter = correcter();

        assert_eq!(correcter.try_correct("من به خانه").unwrap(), Outcome::NoVerb);
        assert_eq!(correcter.correct("من به خانه"), "من به خانه");
    }

    #[test]
    fn reports_unknown_tenses() {
        let correcter = correcter();

        let outcome = correcter.try_correct("من نداشتم می\u{200c}رفتم").unwrap();
        assert!(matches!(outcome, Outcome::UnknownTense(_)));
        assert_eq!(
            correcter.correct("من نداشتم می\u{200c}رفتم"),
            "من نداشتم می\u{200c}رفتم"
        );
    }

    #[test]
    fn options_default_missing_fields() {
        let options = CorrecterOptions::from_reader(r#"{"default_punctuation": "!"}"#.as_bytes())
            .unwrap();

        assert_eq!(options.default_punctuation, "!");
        assert_eq!(
            options.linking_verbs,
            CorrecterOptions::default().linking_verbs
        );
    }

    #[test]
    fn missing_lexicons_fail_construction() {
        let options = CorrecterOptions {
            linking_verbs: "does/not/exist.txt".into(),
            ..Default::default()
        };
        let pipeline = LexicalPipeline::default();

        assert!(Correcter::from_options(pipeline, &options).is_err());
    }

    #[test]
    fn corrects_texts_sentence_by_sentence() {
        let correcter = correcter();
        let (text, corrections) = correcter.correct_text("من به خانه رفت. او به خانه رفتم\nسلام");

        assert_eq!(text, "من به خانه رفتم. او به خانه رفت. سلام");
        assert_eq!(corrections.len(), 3);
        assert_eq!(corrections[1].original, "او به خانه رفتم");
        assert_eq!(corrections[1].corrected, "او به خانه رفت.");
    }
}
