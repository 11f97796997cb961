//! Paradigms generating the six person/number forms of a verb in a tense.

use crate::{morphology::VerbTense, types::ZWNJ};

const PAST_ENDINGS: [&str; 6] = ["م", "ی", "", "یم", "ید", "ند"];
const PRESENT_ENDINGS: [&str; 6] = ["م", "ی", "د", "یم", "ید", "ند"];

const COPULA_STEM: &str = "هست";
const COPULA: [&str; 6] = ["هستم", "هستی", "است", "هستیم", "هستید", "هستند"];
const NEGATIVE_COPULA: [&str; 6] = ["نیستم", "نیستی", "نیست", "نیستیم", "نیستید", "نیستند"];

/// Past and present stem of a verb, e. g. "رفت" and "رو".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stems<'a> {
    pub past: &'a str,
    pub present: &'a str,
}

fn imperfective(stem: &str) -> String {
    format!("می{}{}", ZWNJ, stem)
}

fn negative_imperfective(stem: &str) -> String {
    format!("نمی{}{}", ZWNJ, stem)
}

/// The forms of the copula "است", which has no regular paradigm.
pub fn copula(negative: bool) -> [&'static str; 6] {
    if negative {
        NEGATIVE_COPULA
    } else {
        COPULA
    }
}

pub fn is_copula(stems: &Stems) -> bool {
    stems.past == COPULA_STEM
}

/// Conjugates a verb in the given tense.
pub fn conjugate(stems: &Stems, tense: VerbTense) -> Vec<String> {
    use VerbTense::*;

    if is_copula(stems) {
        let negative = tense.properties().is_negative;
        return copula(negative).iter().map(|x| x.to_string()).collect();
    }

    let past = stems.past;
    let present = stems.present;

    (0..6)
        .map(|i| {
            let past_end = PAST_ENDINGS[i];
            let present_end = PRESENT_ENDINGS[i];

            match tense {
                PerfectivePast => format!("{}{}", past, past_end),
                NegativePerfectivePast => format!("ن{}{}", past, past_end),
                ImperfectivePast => format!("{}{}", imperfective(past), past_end),
                NegativeImperfectivePast => format!("{}{}", negative_imperfective(past), past_end),
                PassivePerfectivePast => format!("{}ه شد{}", past, past_end),
                NegativePassivePerfectivePast => format!("{}ه نشد{}", past, past_end),
                ProgressivePast => format!(
                    "داشت{} {}{}",
                    past_end,
                    imperfective(past),
                    past_end
                ),
                PastPrecedent => format!("{}ه بود{}", past, past_end),
                NegativePastPrecedent => format!("ن{}ه بود{}", past, past_end),
                PerfectiveFuture => format!("خواه{} {}", present_end, past),
                NegativePerfectiveFuture => format!("نخواه{} {}", present_end, past),
                PerfectivePresent => format!("{}{}", present, present_end),
                NegativePerfectivePresent => format!("ن{}{}", present, present_end),
                SubjunctivePerfectivePresent => format!("ب{}{}", present, present_end),
                ImperfectivePresent => format!("{}{}", imperfective(present), present_end),
                NegativeImperfectivePresent => {
                    format!("{}{}", negative_imperfective(present), present_end)
                }
                PassivePerfectivePresent => format!("{}ه شو{}", past, present_end),
                NegativePassivePerfectivePresent => format!("{}ه نشو{}", past, present_end),
                ProgressivePresent => format!(
                    "دار{} {}{}",
                    present_end,
                    imperfective(present),
                    present_end
                ),
            }
        })
        .collect()
}

/// Single word forms which are not tense forms but occur inside them, e. g. "رفته" in "رفته بودم".
pub fn participles(stems: &Stems) -> Vec<String> {
    if is_copula(stems) {
        return Vec::new();
    }

    vec![
        format!("{}ه", stems.past),
        format!("ن{}ه", stems.past),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO: Stems = Stems {
        past: "رفت",
        present: "رو",
    };

    #[test]
    fn conjugates_simple_tenses() {
        assert_eq!(
            conjugate(&GO, VerbTense::PerfectivePast),
            vec!["رفتم", "رفتی", "رفت", "رفتیم", "رفتید", "رفتند"]
        );
        assert_eq!(
            conjugate(&GO, VerbTense::ImperfectivePresent)[0],
            "می\u{200c}روم"
        );
        assert_eq!(conjugate(&GO, VerbTense::SubjunctivePerfectivePresent)[3], "برویم");
    }

    #[test]
    fn conjugates_periphrastic_tenses() {
        assert_eq!(conjugate(&GO, VerbTense::PerfectiveFuture)[0], "خواهم رفت");
        assert_eq!(conjugate(&GO, VerbTense::PastPrecedent)[5], "رفته بودند");
        assert_eq!(
            conjugate(&GO, VerbTense::ProgressivePresent)[2],
            "دارد می\u{200c}رود"
        );
        assert_eq!(
            conjugate(&GO, VerbTense::ProgressivePast)[2],
            "داشت می\u{200c}رفت"
        );
    }

    #[test]
    fn copula_is_irregular() {
        let copula = Stems {
            past: "هست",
            present: "هست",
        };

        assert_eq!(conjugate(&copula, VerbTense::PerfectivePast)[2], "است");
        assert_eq!(conjugate(&copula, VerbTense::NegativePerfectivePast)[0], "نیستم");
        assert!(participles(&copula).is_empty());
    }
}
