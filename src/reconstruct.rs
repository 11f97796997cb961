//! Reassembly of a corrected sentence from its grammatical roles.

use crate::{
    lexicon::Lexicons,
    pipeline::Pipeline,
    types::{SentenceComponents, SentenceFlags, OBJECT_MARKER},
    utils::{dedup_words, normalize_whitespace},
};

/// Splits the adverbs of a sentence into the adverb starting the sentence and the adverb before the verb.
/// If several adverbs of a kind occur, the last one is kept.
pub fn classify_adverbs(
    components: &mut SentenceComponents,
    flags: &mut SentenceFlags,
    lexicons: &Lexicons,
) {
    for adverb in &components.adverbs {
        if lexicons.is_starting_adverb(adverb) {
            components.starting_adverb = adverb.clone();
            flags.starting_adverb_found = true;
        } else {
            components.verb_adverb = adverb.clone();
            flags.verb_adverb_found = true;
        }
    }
}

/// Emits the roles in canonical order: vocative, starting adverb, subject, untagged words, object, adpositional
/// complement, verb adverb, noun complement and finally the `verb`.
///
/// The sentence ends in its own final punctuation or in `default_punctuation` if it has none.
pub fn reconstruct<P: Pipeline + ?Sized>(
    components: &SentenceComponents,
    flags: &SentenceFlags,
    verb: &str,
    default_punctuation: &str,
    pipeline: &P,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if flags.noun_clause_found {
        parts.push(format!("{}!", components.noun_clause));
    }
    if flags.starting_adverb_found {
        parts.push(components.starting_adverb.clone());
    }
    parts.push(components.subject.clone());
    parts.extend(components.untagged_words.iter().cloned());
    if flags.object_found {
        parts.push(format!("{} {}", components.object, OBJECT_MARKER));
    }
    if flags.complement_found {
        parts.push(format!("{} {}", components.adposition, components.complement));
    }
    if flags.verb_adverb_found {
        parts.push(components.verb_adverb.clone());
    }
    parts.push(components.noun_complement.clone());
    parts.push(verb.to_string());

    let punctuation = if components.final_punctuation.is_empty() {
        default_punctuation
    } else {
        components.final_punctuation.as_str()
    };

    let mut sentence = parts.join(" ");
    sentence.push_str(punctuation);

    let sentence = normalize_whitespace(&dedup_words(&sentence));
    normalize_whitespace(&pipeline.normalize(&sentence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lexical::LexicalPipeline;

    fn pipeline() -> LexicalPipeline {
        LexicalPipeline::from_entries(
            Vec::<(String, crate::types::PosTag)>::new(),
            Vec::<(String, String)>::new(),
        )
    }

    #[test]
    fn classifies_adverbs() {
        let lexicons = Lexicons::new(Vec::<String>::new(), vec!["امروز", "دیروز"]);
        let mut components = SentenceComponents {
            adverbs: vec!["امروز".into(), "سریع".into(), "دیروز".into()],
            ..Default::default()
        };
        let mut flags = SentenceFlags::default();

        classify_adverbs(&mut components, &mut flags, &lexicons);

        assert_eq!(components.starting_adverb, "دیروز");
        assert_eq!(components.verb_adverb, "سریع");
        assert!(flags.starting_adverb_found && flags.verb_adverb_found);
    }

    #[test]
    fn emits_roles_in_canonical_order() {
        let components = SentenceComponents {
            subject: "من".into(),
            object: "کتاب".into(),
            adposition: "به".into(),
            complement: "مدرسه".into(),
            starting_adverb: "امروز".into(),
            verb_adverb: "سریع".into(),
            untagged_words: vec!["هم".into()],
            ..Default::default()
        };
        let flags = SentenceFlags {
            subject_found: true,
            object_found: true,
            complement_found: true,
            starting_adverb_found: true,
            verb_adverb_found: true,
            ..Default::default()
        };

        assert_eq!(
            reconstruct(&components, &flags, "بردم", ".", &pipeline()),
            "امروز من هم کتاب را به مدرسه سریع بردم."
        );
    }

    #[test]
    fn keeps_vocative_and_final_punctuation() {
        let components = SentenceComponents {
            noun_clause: "علی".into(),
            final_punctuation: "؟".into(),
            ..Default::default()
        };
        let flags = SentenceFlags {
            noun_clause_found: true,
            ..Default::default()
        };

        assert_eq!(
            reconstruct(&components, &flags, "رفتی", ".", &pipeline()),
            "علی! رفتی؟"
        );
    }

    #[test]
    fn collapses_repeated_words() {
        let components = SentenceComponents {
            subject: "من".into(),
            untagged_words: vec!["من".into()],
            ..Default::default()
        };
        let flags = SentenceFlags::default();

        assert_eq!(
            reconstruct(&components, &flags, "رفتم", "!", &pipeline()),
            "من رفتم!"
        );
    }
}
