//! Selection of the verb form agreeing with the subject in person and number.

use crate::{
    types::{ConjugationTable, ZWNJ},
    utils::eq_ignoring_joiners,
    Error,
};

/// Personal pronouns in the order of the forms of a [ConjugationTable].
pub const PRONOUNS: [&str; 6] = ["من", "تو", "او", "ما", "شما", "آنها"];

const THIRD_PERSON_SINGULAR: usize = 2;
const THIRD_PERSON_PLURAL: usize = 5;

fn contains_word(phrase: &str, word: &str) -> bool {
    eq_ignoring_joiners(phrase, word)
        || phrase
            .split(|c: char| c.is_whitespace())
            .any(|part| eq_ignoring_joiners(part, word))
}

/// The index of the person/number form for a subject.
///
/// The first pronoun occurring as a word of the subject decides the person. A plural subject shifts a singular
/// person to its plural, e.g. "من و رضا" is first person plural. Subjects without a pronoun are third person.
pub fn form_index(subject: &str, is_plural: bool) -> usize {
    let pronoun = PRONOUNS
        .iter()
        .position(|pronoun| contains_word(subject, pronoun));

    match pronoun {
        Some(i) if is_plural && i < 3 => i + 3,
        Some(i) => i,
        None if is_plural => THIRD_PERSON_PLURAL,
        None => THIRD_PERSON_SINGULAR,
    }
}

/// Selects the form of `table` agreeing with the subject.
///
/// # Errors
/// If the table has no form at the selected index.
pub fn select_form<'t>(
    subject: &str,
    is_plural: bool,
    table: &'t ConjugationTable,
) -> Result<&'t str, Error> {
    let index = form_index(subject.trim_matches(ZWNJ), is_plural);
    let forms = table.forms();

    forms
        .get(index)
        .map(String::as_str)
        .ok_or(Error::FormIndex {
            index,
            len: forms.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::convert::TryFrom;

    fn table() -> ConjugationTable {
        ConjugationTable::try_from(
            vec!["a", "b", "c", "d", "e", "f"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn pronouns_select_their_form() {
        let table = table();

        assert_eq!(select_form("من", false, &table).unwrap(), "a");
        assert_eq!(select_form("تو", false, &table).unwrap(), "b");
        assert_eq!(select_form("شما", true, &table).unwrap(), "e");
        assert_eq!(select_form("آنها", true, &table).unwrap(), "f");
        assert_eq!(select_form("آن\u{200c}ها", false, &table).unwrap(), "f");
    }

    #[test]
    fn plural_subjects_shift_person() {
        let table = table();

        assert_eq!(select_form("من و رضا", true, &table).unwrap(), "d");
        assert_eq!(select_form("تو و مریم", true, &table).unwrap(), "e");
        assert_eq!(select_form("رضا و مریم", true, &table).unwrap(), "f");
    }

    #[test]
    fn pronouns_only_match_whole_words() {
        let table = table();

        assert_eq!(select_form("منصور", false, &table).unwrap(), "c");
        assert_eq!(select_form("ماشین", false, &table).unwrap(), "c");
        assert_eq!(select_form("", false, &table).unwrap(), "c");
    }

    #[test]
    fn pronouns_are_matched_in_list_order() {
        assert_eq!(form_index("او و من", true), 3);
    }

    #[quickcheck]
    fn index_is_always_in_range(subject: String, is_plural: bool) -> bool {
        form_index(&subject, is_plural) < ConjugationTable::LEN
    }
}
