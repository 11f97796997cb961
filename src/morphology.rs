//! Classification of the main verb into tense, mood, voice and aspect.
//!
//! Each feature is detected by its own predicate over the surface form of the verb and its lemma. The features
//! are combined into [VerbProperties] which resolve to a [VerbTense] by exact lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{lexicon::is_non_progressive_noun, types::Lemma};

/// The tenses the engine can correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbTense {
    NegativeImperfectivePast,
    ImperfectivePast,
    NegativePerfectivePast,
    PassivePerfectivePast,
    NegativePassivePerfectivePast,
    PerfectivePast,
    ProgressivePast,
    PastPrecedent,
    NegativePastPrecedent,
    PerfectiveFuture,
    NegativePerfectiveFuture,
    NegativeImperfectivePresent,
    ImperfectivePresent,
    SubjunctivePerfectivePresent,
    PassivePerfectivePresent,
    NegativePassivePerfectivePresent,
    NegativePerfectivePresent,
    PerfectivePresent,
    ProgressivePresent,
}

impl VerbTense {
    pub const ALL: [VerbTense; 19] = [
        VerbTense::NegativeImperfectivePast,
        VerbTense::ImperfectivePast,
        VerbTense::NegativePerfectivePast,
        VerbTense::PassivePerfectivePast,
        VerbTense::NegativePassivePerfectivePast,
        VerbTense::PerfectivePast,
        VerbTense::ProgressivePast,
        VerbTense::PastPrecedent,
        VerbTense::NegativePastPrecedent,
        VerbTense::PerfectiveFuture,
        VerbTense::NegativePerfectiveFuture,
        VerbTense::NegativeImperfectivePresent,
        VerbTense::ImperfectivePresent,
        VerbTense::SubjunctivePerfectivePresent,
        VerbTense::PassivePerfectivePresent,
        VerbTense::NegativePassivePerfectivePresent,
        VerbTense::NegativePerfectivePresent,
        VerbTense::PerfectivePresent,
        VerbTense::ProgressivePresent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerbTense::NegativeImperfectivePast => "negative_imperfective_past",
            VerbTense::ImperfectivePast => "imperfective_past",
            VerbTense::NegativePerfectivePast => "negative_perfective_past",
            VerbTense::PassivePerfectivePast => "passive_perfective_past",
            VerbTense::NegativePassivePerfectivePast => "negative_passive_perfective_past",
            VerbTense::PerfectivePast => "perfective_past",
            VerbTense::ProgressivePast => "progressive_past",
            VerbTense::PastPrecedent => "past_precedent",
            VerbTense::NegativePastPrecedent => "negative_past_precedent",
            VerbTense::PerfectiveFuture => "perfective_future",
            VerbTense::NegativePerfectiveFuture => "negative_perfective_future",
            VerbTense::NegativeImperfectivePresent => "negative_imperfective_present",
            VerbTense::ImperfectivePresent => "imperfective_present",
            VerbTense::SubjunctivePerfectivePresent => "subjunctive_perfective_present",
            VerbTense::PassivePerfectivePresent => "passive_perfective_present",
            VerbTense::NegativePassivePerfectivePresent => "negative_passive_perfective_present",
            VerbTense::NegativePerfectivePresent => "negative_perfective_present",
            VerbTense::PerfectivePresent => "perfective_present",
            VerbTense::ProgressivePresent => "progressive_present",
        }
    }

    /// Resolves a feature vector to a tense. Vectors without an entry yield `None`.
    pub fn from_properties(properties: &VerbProperties) -> Option<Self> {
        use VerbTense::*;

        match properties.key() {
            (Some(false), true, true, false, false, false, false, false) => {
                Some(NegativeImperfectivePast)
            }
            (Some(false), false, true, false, false, false, false, false) => Some(ImperfectivePast),
            (Some(false), true, false, false, false, false, false, false) => {
                Some(NegativePerfectivePast)
            }
            (Some(false), false, false, false, true, false, false, false) => {
                Some(PassivePerfectivePast)
            }
            (Some(false), true, false, false, true, false, false, false) => {
                Some(NegativePassivePerfectivePast)
            }
            (Some(false), false, false, false, false, false, false, false) => Some(PerfectivePast),
            (Some(false), false, false, false, false, false, false, true) => Some(ProgressivePast),
            (Some(false), false, false, false, false, false, true, false) => Some(PastPrecedent),
            (Some(false), true, false, false, false, false, true, false) => {
                Some(NegativePastPrecedent)
            }
            (None, false, false, false, false, true, false, false) => Some(PerfectiveFuture),
            (None, true, false, false, false, true, false, false) => {
                Some(NegativePerfectiveFuture)
            }
            (Some(true), true, true, false, false, false, false, false) => {
                Some(NegativeImperfectivePresent)
            }
            (Some(true), false, true, false, false, false, false, false) => {
                Some(ImperfectivePresent)
            }
            (Some(true), false, false, true, false, false, false, false) => {
                Some(SubjunctivePerfectivePresent)
            }
            (Some(true), false, false, false, true, false, false, false) => {
                Some(PassivePerfectivePresent)
            }
            (Some(true), true, false, false, true, false, false, false) => {
                Some(NegativePassivePerfectivePresent)
            }
            (Some(true), true, false, false, false, false, false, false) => {
                Some(NegativePerfectivePresent)
            }
            (Some(true), false, false, false, false, false, false, false) => Some(PerfectivePresent),
            (Some(true), false, false, false, false, false, false, true) => {
                Some(ProgressivePresent)
            }
            _ => None,
        }
    }

    /// The canonical feature vector of this tense.
    pub fn properties(&self) -> VerbProperties {
        use VerbTense::*;

        let present = matches!(
            self,
            NegativeImperfectivePresent
                | ImperfectivePresent
                | SubjunctivePerfectivePresent
                | PassivePerfectivePresent
                | NegativePassivePerfectivePresent
                | NegativePerfectivePresent
                | PerfectivePresent
                | ProgressivePresent
        );

        VerbProperties {
            is_present: present,
            is_negative: matches!(
                self,
                NegativeImperfectivePast
                    | NegativePerfectivePast
                    | NegativePassivePerfectivePast
                    | NegativePastPrecedent
                    | NegativePerfectiveFuture
                    | NegativeImperfectivePresent
                    | NegativePassivePerfectivePresent
                    | NegativePerfectivePresent
            ),
            is_imperfective: matches!(
                self,
                NegativeImperfectivePast
                    | ImperfectivePast
                    | NegativeImperfectivePresent
                    | ImperfectivePresent
            ),
            is_subjunctive: matches!(self, SubjunctivePerfectivePresent),
            is_future: matches!(self, PerfectiveFuture | NegativePerfectiveFuture),
            is_passive: matches!(
                self,
                PassivePerfectivePast
                    | NegativePassivePerfectivePast
                    | PassivePerfectivePresent
                    | NegativePassivePerfectivePresent
            ),
            is_precedent: matches!(self, PastPrecedent | NegativePastPrecedent),
            is_progressive: matches!(self, ProgressivePast | ProgressivePresent),
        }
    }
}

impl fmt::Display for VerbTense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orthogonal features of a verb form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbProperties {
    pub is_present: bool,
    pub is_negative: bool,
    pub is_imperfective: bool,
    pub is_subjunctive: bool,
    pub is_future: bool,
    pub is_passive: bool,
    pub is_precedent: bool,
    pub is_progressive: bool,
}

type PropertiesKey = (Option<bool>, bool, bool, bool, bool, bool, bool, bool);

impl VerbProperties {
    /// The lookup key. Present-ness is meaningless for the future and is left out.
    fn key(&self) -> PropertiesKey {
        (
            if self.is_future {
                None
            } else {
                Some(self.is_present)
            },
            self.is_negative,
            self.is_imperfective,
            self.is_subjunctive,
            self.is_passive,
            self.is_future,
            self.is_precedent,
            self.is_progressive,
        )
    }

    pub fn tense(&self) -> Option<VerbTense> {
        VerbTense::from_properties(self)
    }
}

/// Everything the analyzer knows about the main verb of a sentence.
#[derive(Debug, Clone, Copy)]
pub struct VerbInput<'a> {
    /// The verb without its light-verb noun.
    pub surface: &'a str,
    pub lemma: &'a Lemma,
    pub is_linking: bool,
    pub is_compound: bool,
    pub light_verb_noun: &'a str,
}

/// Finds the stem occurring in the surface. The past stem is checked first as it usually extends the present
/// stem (e.g. "خواند" / "خوان"). Returns the stem and whether it is the present stem.
pub fn find_stem<'a>(surface: &str, lemma: &'a Lemma) -> (&'a str, bool) {
    if surface.contains(lemma.past.as_str()) {
        return (&lemma.past, false);
    }

    match &lemma.present {
        Some(present) if surface.contains(present.as_str()) => (present, true),
        _ => (&lemma.past, false),
    }
}

/// Whether the first letter of the surface is a prefix and not the first letter of the stem.
fn has_prefix(surface: &str, prefix: &str, stem: &str) -> bool {
    surface.starts_with(prefix) && !surface.starts_with(stem)
}

pub fn is_negative(surface: &str, stem: &str) -> bool {
    has_prefix(surface, "ن", stem)
}

pub fn is_imperfective(surface: &str) -> bool {
    surface.starts_with("می") || surface.starts_with("نمی")
}

pub fn is_future(surface: &str) -> bool {
    surface.contains("خواه")
}

pub fn is_subjunctive(surface: &str, stem: &str) -> bool {
    has_prefix(surface, "ب", stem) && !is_imperfective(surface)
}

pub fn is_progressive(surface: &str, is_compound: bool, light_verb_noun: &str) -> bool {
    (surface.contains("داشت") || surface.contains("دار"))
        && is_compound
        && !is_non_progressive_noun(light_verb_noun)
}

/// "شد" marks the passive unless the verb itself is built on "شدن".
pub fn is_passive(surface: &str, is_linking: bool, is_future: bool, lemma: &Lemma) -> bool {
    surface.contains("شد") && !is_linking && !is_future && !lemma.past.contains("شد")
}

pub fn is_precedent(surface: &str, is_linking: bool, lemma: &Lemma) -> bool {
    if !surface.contains("بود") || is_linking {
        return false;
    }

    if lemma.past == "بود" {
        surface.contains('ه')
    } else {
        true
    }
}

/// Computes the features of a verb. Also returns the stem to conjugate.
pub fn analyze<'a>(input: &VerbInput<'a>) -> (VerbProperties, &'a str) {
    let surface = input.surface;
    let (stem, is_present) = find_stem(surface, input.lemma);

    let is_future = is_future(surface);
    let is_imperfective = is_imperfective(surface);

    let properties = VerbProperties {
        is_present: is_present && !is_future,
        is_negative: is_negative(surface, stem),
        is_imperfective,
        is_subjunctive: is_subjunctive(surface, stem),
        is_future,
        is_passive: is_passive(surface, input.is_linking, is_future, input.lemma),
        is_precedent: is_precedent(surface, input.is_linking, input.lemma),
        is_progressive: is_progressive(surface, input.is_compound, input.light_verb_noun),
    };

    log::debug!("verb `{}` (stem `{}`): {:?}", surface, stem, properties);

    (properties, stem)
}
