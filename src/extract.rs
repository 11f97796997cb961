//! Decomposition of a tagged sentence into its grammatical roles.
//!
//! The tokens are visited once from left to right. Each rule looks at most one token ahead or behind and claims
//! the tokens it consumes for a [Role]. A token is claimed at most once, so every token ends up in exactly one
//! role, in the adverb list or in the untagged words.

use crate::{
    lexicon::{is_singular_exception, Lexicons},
    pipeline::Pipeline,
    types::*,
    Error,
};

/// Punctuation which can end a sentence.
pub const FINAL_PUNCTUATION: [&str; 6] = ["?", "!", ".", ";", "؟", "؛"];

/// Whether a verb is a linking verb: either the verb or its past stem occurs in a linking verb entry.
pub fn is_linking_verb<P: Pipeline + ?Sized>(
    verb: &str,
    lexicons: &Lexicons,
    pipeline: &P,
) -> Result<bool, Error> {
    if lexicons.matches_linking_verb(verb) {
        return Ok(true);
    }

    let lemma = pipeline.lemmatize(verb)?;
    let past = lemma.split('#').next().unwrap_or("");

    Ok(lexicons.matches_linking_verb(past))
}

/// Whether a noun is plural: it ends in "ها" or in "ان" as a suffix.
pub fn is_plural_noun<P: Pipeline + ?Sized>(noun: &str, pipeline: &P) -> Result<bool, Error> {
    if noun.ends_with("ها") || noun.ends_with("های") {
        return Ok(true);
    }

    if noun.ends_with("ان") && !is_singular_exception(noun) {
        return Ok(pipeline.stem(noun)? != noun);
    }

    Ok(false)
}

struct Extraction<'a, P: ?Sized> {
    tokens: &'a [Token],
    lexicons: &'a Lexicons,
    pipeline: &'a P,
    claims: Vec<Option<Role>>,
    components: SentenceComponents,
    flags: SentenceFlags,
    verb_anchor: Option<usize>,
}

impl<'a, P: Pipeline + ?Sized> Extraction<'a, P> {
    fn surface(&self, i: usize) -> &'a str {
        &self.tokens[i].surface
    }

    fn tag(&self, i: usize) -> Option<PosTag> {
        self.tokens.get(i).map(|token| token.tag)
    }

    fn is_unclaimed(&self, i: usize) -> bool {
        i < self.tokens.len() && self.claims[i].is_none()
    }

    fn role_of(&self, i: usize) -> Option<Role> {
        self.claims.get(i).copied().flatten()
    }

    fn claim(&mut self, i: usize, role: Role) {
        debug_assert!(self.claims[i].is_none(), "token {} claimed twice", i);
        self.claims[i] = Some(role);
    }

    fn phrase_mut(&mut self, role: Role) -> Option<&mut String> {
        match role {
            Role::Subject => Some(&mut self.components.subject),
            Role::Object => Some(&mut self.components.object),
            Role::Complement => Some(&mut self.components.complement),
            Role::NounComplement => Some(&mut self.components.noun_complement),
            Role::NounClause => Some(&mut self.components.noun_clause),
            _ => None,
        }
    }

    /// Appends `text` to the phrase of `role`, separated by a space.
    fn extend(&mut self, role: Role, text: &str) {
        if let Some(phrase) = self.phrase_mut(role) {
            if !phrase.is_empty() {
                phrase.push(' ');
            }
            phrase.push_str(text);
        }
    }

    /// Claims the token at `i` for `role` together with an unclaimed determiner right before it.
    /// Returns the text of the claimed tokens.
    fn start_phrase(&mut self, i: usize, role: Role) -> String {
        let mut text = String::new();

        if i > 0 && self.tag(i - 1) == Some(PosTag::Det) && self.is_unclaimed(i - 1) {
            self.claim(i - 1, role);
            text.push_str(self.surface(i - 1));
            text.push(' ');
        }

        self.claim(i, role);
        text.push_str(self.surface(i));
        text
    }

    fn punctuation(&mut self, i: usize) {
        let surface = self.surface(i);

        if FINAL_PUNCTUATION.contains(&surface) {
            self.components.final_punctuation = surface.to_string();
            self.claim(i, Role::FinalPunctuation);
        } else {
            self.claim(i, Role::Punctuation);
        }
    }

    fn adposition(&mut self, i: usize) {
        let adposition = self.surface(i);
        if adposition == OBJECT_MARKER {
            return;
        }

        let next = i + 1;
        let head_tag = match self.tag(next) {
            Some(tag) if self.is_unclaimed(next) => tag,
            _ => return,
        };
        if !(head_tag.is_nominal() || head_tag.is_adjective() || head_tag == PosTag::Det) {
            return;
        }

        self.claim(next, Role::Complement);
        let mut head = self.surface(next).to_string();

        // a determiner takes the noun it belongs to along
        let after = next + 1;
        if head_tag == PosTag::Det
            && self.is_unclaimed(after)
            && self
                .tag(after)
                .map_or(false, |tag| tag.is_nominal() || tag.is_adjective())
        {
            self.claim(after, Role::Complement);
            head.push(' ');
            head.push_str(self.surface(after));
        }

        if self.flags.complement_found {
            self.claim(i, Role::Complement);
            self.extend(Role::Complement, &format!("{} {}", adposition, head));
        } else {
            self.claim(i, Role::Adposition);
            self.components.adposition = adposition.to_string();
            self.components.complement = head;
            self.flags.complement_found = true;
        }
    }

    fn nominal(&mut self, i: usize) -> Result<(), Error> {
        let next = i + 1;
        let next_surface = self.tokens.get(next).map(|token| token.surface.as_str());

        if next_surface == Some("!") && self.is_unclaimed(next) {
            let text = self.start_phrase(i, Role::NounClause);
            self.claim(next, Role::NounClause);
            self.extend(Role::NounClause, &text);
            self.flags.noun_clause_found = true;
        } else if next_surface == Some(OBJECT_MARKER) && self.is_unclaimed(next) {
            let text = self.start_phrase(i, Role::Object);
            self.claim(next, Role::ObjectMarker);
            self.extend(Role::Object, &text);
            self.flags.object_found = true;
        } else if !self.flags.subject_found {
            let text = self.start_phrase(i, Role::Subject);
            self.components.subject = text;
            self.flags.subject_found = true;
            self.flags.subject_is_plural = is_plural_noun(self.surface(i), self.pipeline)?;
        }

        Ok(())
    }

    fn coordination(&mut self, i: usize) {
        let next = i + 1;
        if !(self.is_unclaimed(next) && self.tag(next).map_or(false, |tag| tag.is_nominal())) {
            return;
        }

        let role = match i.checked_sub(1).and_then(|prev| self.role_of(prev)) {
            Some(role @ Role::Subject) | Some(role @ Role::Complement) | Some(role @ Role::Object) => {
                role
            }
            _ => return,
        };

        self.claim(i, role);
        self.claim(next, role);
        let text = format!("{} {}", self.surface(i), self.surface(next));
        self.extend(role, &text);

        if role == Role::Subject {
            self.flags.subject_is_plural = true;
        }
    }

    fn adverb(&mut self, i: usize) {
        self.components.adverbs.push(self.surface(i).to_string());
        self.claim(i, Role::Adverb);
    }

    fn adjective(&mut self, i: usize) {
        match i.checked_sub(1).and_then(|prev| self.role_of(prev)) {
            Some(role @ Role::Subject) | Some(role @ Role::Object) | Some(role @ Role::Complement) => {
                self.claim(i, role);
                self.extend(role, self.surface(i));
            }
            _ if self.flags.linking_verb => {
                self.claim(i, Role::NounComplement);
                self.extend(Role::NounComplement, self.surface(i));
                self.flags.noun_complement_found = true;
            }
            _ => {}
        }
    }

    fn verb(&mut self, i: usize) {
        // only the first verb is the predicate, later ones stay untagged
        if self.flags.verb_found {
            return;
        }

        self.flags.verb_found = true;
        self.verb_anchor = Some(i);
        self.claim(i, Role::Verb);

        let mut parts = vec![self.surface(i)];
        let mut next = i + 1;
        while self.tag(next) == Some(PosTag::Verb) && self.is_unclaimed(next) {
            self.claim(next, Role::Verb);
            parts.push(self.surface(next));
            self.flags.verb_part_found = true;
            next += 1;
        }
        let joiner = VERB_JOINER.to_string();
        self.components.verb = parts.join(joiner.as_str());

        if let Some(prev) = i.checked_sub(1) {
            let nominal = self
                .tag(prev)
                .map_or(false, |tag| tag.is_noun() || tag.is_adjective());

            if nominal && self.is_unclaimed(prev) {
                self.attach_to_verb(prev);
            }
        }
    }

    /// A word right before the verb is its noun complement if the verb is a linking verb,
    /// otherwise the non-verbal part of a compound verb.
    fn attach_to_verb(&mut self, i: usize) {
        let word = self.surface(i);

        if self.flags.linking_verb {
            self.claim(i, Role::NounComplement);
            self.extend(Role::NounComplement, word);
            self.flags.noun_complement_found = true;
        } else {
            self.claim(i, Role::LightVerbNoun);
            self.components.light_verb_noun = word.to_string();
            self.components.verb = format!("{}{}{}", word, VERB_JOINER, self.components.verb);
            self.flags.verb_part_found = true;
        }
    }

    fn subordination(&mut self, i: usize) {
        if let Some(role @ Role::Subject) | Some(role @ Role::Complement) =
            i.checked_sub(1).and_then(|prev| self.role_of(prev))
        {
            self.claim(i, role);
            self.extend(role, self.surface(i));
        }
    }

    /// Repairs tagger gaps: an unclaimed word right before a simple, non-linking verb is taken as the
    /// non-verbal part of a compound verb.
    fn repair_compound(&mut self) {
        let anchor = match self.verb_anchor {
            Some(anchor) => anchor,
            None => return,
        };

        if self.flags.verb_part_found || self.flags.noun_complement_found || self.flags.linking_verb {
            return;
        }

        if let Some(prev) = anchor.checked_sub(1) {
            let attachable = !matches!(
                self.tag(prev),
                Some(PosTag::Pron)
                    | Some(PosTag::Det)
                    | Some(PosTag::Adp)
                    | Some(PosTag::AdpEz)
                    | Some(PosTag::Cconj)
                    | Some(PosTag::Sconj)
                    | Some(PosTag::Punct)
                    | None
            );

            if attachable && self.is_unclaimed(prev) {
                self.attach_to_verb(prev);
            }
        }
    }

    fn run(mut self) -> Result<(SentenceComponents, SentenceFlags), Error> {
        // the linking status of the sentence is fixed by its first verb
        if let Some(verb) = self.tokens.iter().find(|token| token.tag == PosTag::Verb) {
            self.flags.linking_verb = is_linking_verb(&verb.surface, self.lexicons, self.pipeline)?;
        }

        for i in 0..self.tokens.len() {
            if self.claims[i].is_some() {
                continue;
            }

            match self.tokens[i].tag {
                PosTag::Punct => self.punctuation(i),
                PosTag::Adp | PosTag::AdpEz => self.adposition(i),
                PosTag::Pron | PosTag::Noun | PosTag::NounEz => self.nominal(i)?,
                PosTag::Cconj => self.coordination(i),
                PosTag::Adv => self.adverb(i),
                PosTag::Adj | PosTag::AdjEz => self.adjective(i),
                PosTag::Verb => self.verb(i),
                PosTag::Sconj => self.subordination(i),
                // determiners are taken along by the word they modify
                PosTag::Det | PosTag::Other => {}
            }
        }

        self.repair_compound();

        self.components.untagged_words = self
            .tokens
            .iter()
            .zip(self.claims.iter())
            .filter(|(_, claim)| claim.is_none())
            .map(|(token, _)| token.surface.clone())
            .collect();
        self.components.claims = self.claims;

        Ok((self.components, self.flags))
    }
}

/// Splits a tagged sentence into its grammatical roles.
///
/// # Errors
/// If the pipeline fails to lemmatize the verb or to stem the subject.
pub fn extract<P: Pipeline + ?Sized>(
    tokens: &[Token],
    lexicons: &Lexicons,
    pipeline: &P,
) -> Result<(SentenceComponents, SentenceFlags), Error> {
    Extraction {
        tokens,
        lexicons,
        pipeline,
        claims: vec![None; tokens.len()],
        components: SentenceComponents::default(),
        flags: SentenceFlags::default(),
        verb_anchor: None,
    }
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lexical::LexicalPipeline;
    use PosTag::*;

    fn pipeline() -> LexicalPipeline {
        LexicalPipeline::from_entries(
            Vec::<(String, PosTag)>::new(),
            vec![
                ("رفت", "رو"),
                ("خواند", "خوان"),
                ("کرد", "کن"),
                ("بود", "باش"),
                ("شد", "شو"),
                ("هست", "هست"),
            ],
        )
    }

    fn lexicons() -> Lexicons {
        Lexicons::new(vec!["است", "هست", "بودن", "شدن"], vec!["امروز"])
    }

    fn run(tokens: &[(&str, PosTag)]) -> (SentenceComponents, SentenceFlags) {
        let tokens: Vec<_> = tokens
            .iter()
            .map(|(surface, tag)| Token::new(*surface, *tag))
            .collect();
        let (components, flags) = extract(&tokens, &lexicons(), &pipeline()).unwrap();

        // every token is claimed exactly once or left untagged
        assert_eq!(components.claims.len(), tokens.len());
        let untagged: Vec<_> = tokens
            .iter()
            .zip(components.claims.iter())
            .filter(|(_, claim)| claim.is_none())
            .map(|(token, _)| token.surface.clone())
            .collect();
        assert_eq!(untagged, components.untagged_words);
        let adverbs = components
            .claims
            .iter()
            .filter(|claim| **claim == Some(Role::Adverb))
            .count();
        assert_eq!(adverbs, components.adverbs.len());

        (components, flags)
    }

    #[test]
    fn finds_subject_complement_and_verb() {
        let (components, flags) = run(&[
            ("من", Pron),
            ("به", Adp),
            ("مدرسه", Noun),
            ("رفتم", Verb),
            (".", Punct),
        ]);

        assert_eq!(components.subject, "من");
        assert_eq!(components.adposition, "به");
        assert_eq!(components.complement, "مدرسه");
        assert_eq!(components.verb, "رفتم");
        assert_eq!(components.final_punctuation, ".");
        assert!(components.untagged_words.is_empty());
        assert!(flags.subject_found && flags.complement_found && flags.verb_found);
        assert!(!flags.subject_is_plural && !flags.linking_verb && !flags.verb_part_found);
    }

    #[test]
    fn object_takes_determiner_and_marker() {
        let (components, flags) = run(&[
            ("این", Det),
            ("کتاب", Noun),
            ("را", Adp),
            ("خواندم", Verb),
        ]);

        assert_eq!(components.object, "این کتاب");
        assert!(flags.object_found);
        assert!(!flags.subject_found);
        assert_eq!(
            components.claims,
            vec![
                Some(Role::Object),
                Some(Role::Object),
                Some(Role::ObjectMarker),
                Some(Role::Verb)
            ]
        );
    }

    #[test]
    fn coordinated_subject_is_plural() {
        let (components, flags) = run(&[
            ("من", Pron),
            ("و", Cconj),
            ("رضا", Noun),
            ("کتاب", Noun),
            ("را", Adp),
            ("خواندم", Verb),
        ]);

        assert_eq!(components.subject, "من و رضا");
        assert_eq!(components.object, "کتاب");
        assert!(flags.subject_is_plural);
    }

    #[test]
    fn noun_before_verb_forms_compound() {
        let (components, flags) = run(&[("من", Pron), ("درس", Noun), ("می‌خوانم", Verb)]);

        assert_eq!(components.verb, "درس_می‌خوانم");
        assert_eq!(components.light_verb_noun, "درس");
        assert_eq!(components.verb_surface(), "می‌خوانم");
        assert!(flags.verb_part_found);
    }

    #[test]
    fn noun_before_linking_verb_is_complement() {
        let (components, flags) = run(&[("او", Pron), ("معلم", Noun), ("است", Verb)]);

        assert!(flags.linking_verb);
        assert_eq!(components.noun_complement, "معلم");
        assert!(flags.noun_complement_found);
        assert!(!flags.verb_part_found);
        assert_eq!(components.verb, "است");
    }

    #[test]
    fn adjective_becomes_noun_complement_of_linking_verb() {
        let (components, flags) = run(&[
            ("هوا", Noun),
            ("امروز", Adv),
            ("سرد", Adj),
            ("است", Verb),
        ]);

        assert_eq!(components.subject, "هوا");
        assert_eq!(components.adverbs, vec!["امروز"]);
        assert_eq!(components.noun_complement, "سرد");
        assert!(flags.noun_complement_found);
    }

    #[test]
    fn adjective_joins_preceding_phrase() {
        let (components, _) = run(&[("هوا", Noun), ("سرد", Adj), ("بود", Verb)]);
        assert_eq!(components.subject, "هوا سرد");
    }

    #[test]
    fn vocative_claims_exclamation_mark() {
        let (components, flags) = run(&[
            ("علی", Noun),
            ("!", Punct),
            ("به", Adp),
            ("خانه", Noun),
            ("رفت", Verb),
        ]);

        assert_eq!(components.noun_clause, "علی");
        assert!(flags.noun_clause_found);
        assert_eq!(components.final_punctuation, "");
        assert!(!flags.subject_found);
    }

    #[test]
    fn adposition_takes_determiner_phrase() {
        let (components, _) = run(&[
            ("او", Pron),
            ("به", Adp),
            ("این", Det),
            ("خانه", Noun),
            ("رفت", Verb),
        ]);

        assert_eq!(components.complement, "این خانه");
        assert!(components.untagged_words.is_empty());
    }

    #[test]
    fn further_adpositional_phrases_extend_complement() {
        let (components, _) = run(&[
            ("او", Pron),
            ("از", Adp),
            ("تهران", Noun),
            ("به", Adp),
            ("شیراز", Noun),
            ("رفت", Verb),
        ]);

        assert_eq!(components.adposition, "از");
        assert_eq!(components.complement, "تهران به شیراز");
    }

    #[test]
    fn detects_plural_subjects() {
        let (_, flags) = run(&[("تهران", Noun), ("بزرگ", Adj), ("است", Verb)]);
        assert!(!flags.subject_is_plural);

        let (_, flags) = run(&[("دانشجویان", Noun), ("رفتند", Verb)]);
        assert!(flags.subject_is_plural);

        let (_, flags) = run(&[("بچه‌ها", Noun), ("رفتند", Verb)]);
        assert!(flags.subject_is_plural);
    }

    #[test]
    fn merges_contiguous_verbs() {
        let (components, flags) = run(&[("آنها", Pron), ("رفته", Verb), ("بودند", Verb)]);

        assert_eq!(components.verb, "رفته_بودند");
        assert_eq!(components.verb_surface(), "رفته بودند");
        assert!(flags.verb_part_found);
        assert!(components.light_verb_noun.is_empty());
    }

    #[test]
    fn later_verbs_stay_untagged() {
        let (components, _) = run(&[
            ("او", Pron),
            ("رفت", Verb),
            ("و", Cconj),
            ("خواند", Verb),
        ]);

        assert_eq!(components.verb, "رفت");
        assert_eq!(components.untagged_words, vec!["و", "خواند"]);
    }

    #[test]
    fn untagged_word_before_verb_is_repaired_into_compound() {
        let (components, flags) = run(&[("من", Pron), ("۱۰", Other), ("کردم", Verb)]);

        assert_eq!(components.light_verb_noun, "۱۰");
        assert!(flags.verb_part_found);
        assert!(components.untagged_words.is_empty());
    }

    #[test]
    fn subordinating_conjunction_joins_subject() {
        let (components, _) = run(&[("مردی", Noun), ("که", Sconj), ("رفت", Verb)]);
        assert_eq!(components.subject, "مردی که");
    }

    #[test]
    fn sentence_without_verb() {
        let (components, flags) = run(&[("سلام", Noun)]);

        assert!(!flags.verb_found);
        assert_eq!(components.subject, "سلام");
    }
}
