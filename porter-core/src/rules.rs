//! Suffix rule tables
//!
//! Every step is a static table of `(suffix, condition, replacement)`
//! rules grouped by the suffix's last letter. Within a group rules are
//! ordered longest suffix first, so the first rule whose suffix matches
//! the word is the longest match. The engine applies the selected rule only
//! if its condition holds on the stem left after removing the suffix.

use crate::classifier::{ends_with_cvc, has_vowel, measure};
use std::fmt;

/// Identifies one step of the pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepId {
    /// Plural `s` endings
    #[cfg_attr(feature = "serde", serde(rename = "1a"))]
    Step1a,
    /// `eed`, `ed` and `ing` endings
    #[cfg_attr(feature = "serde", serde(rename = "1b"))]
    Step1b,
    /// Stem repair after `ed`/`ing` removal
    #[cfg_attr(feature = "serde", serde(rename = "1b-ext"))]
    Step1bRepair,
    /// Terminal `y` to `i`
    #[cfg_attr(feature = "serde", serde(rename = "1c"))]
    Step1c,
    /// Double suffixes to single ones
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Step2,
    /// `-ic-`, `-full`, `-ness` and friends
    #[cfg_attr(feature = "serde", serde(rename = "3"))]
    Step3,
    /// Remaining derivational suffixes on long stems
    #[cfg_attr(feature = "serde", serde(rename = "4"))]
    Step4,
    /// Final `e`
    #[cfg_attr(feature = "serde", serde(rename = "5a"))]
    Step5a,
    /// Final `ll`
    #[cfg_attr(feature = "serde", serde(rename = "5b"))]
    Step5b,
}

impl StepId {
    /// Short name used in the published algorithm
    pub fn name(self) -> &'static str {
        match self {
            StepId::Step1a => "1a",
            StepId::Step1b => "1b",
            StepId::Step1bRepair => "1b-ext",
            StepId::Step1c => "1c",
            StepId::Step2 => "2",
            StepId::Step3 => "3",
            StepId::Step4 => "4",
            StepId::Step5a => "5a",
            StepId::Step5b => "5b",
        }
    }

    /// The rule table for this step
    pub fn table(self) -> &'static Step {
        match self {
            StepId::Step1a => &STEP_1A,
            StepId::Step1b => &STEP_1B,
            StepId::Step1bRepair => &STEP_1B_REPAIR,
            StepId::Step1c => &STEP_1C,
            StepId::Step2 => &STEP_2,
            StepId::Step3 => &STEP_3,
            StepId::Step4 => &STEP_4,
            StepId::Step5a => &STEP_5A,
            StepId::Step5b => &STEP_5B,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicate over the stem that would remain after removing a suffix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// No condition
    Always,
    /// `m > n`
    MeasureAbove(usize),
    /// The stem contains a vowel
    VowelInStem,
    /// `m > n` and the stem ends in one of the given letters
    MeasureAboveEndingIn(usize, &'static [u8]),
    /// `m > 1`, or `m == 1` and the stem does not end consonant-vowel-consonant
    FinalE,
    /// The stem ends in `l` (so the word ends in `ll`) and `m > 1`
    DoubledL,
}

impl Condition {
    /// Evaluate the condition against `stem`
    pub fn holds(&self, stem: &[u8]) -> bool {
        match *self {
            Condition::Always => true,
            Condition::MeasureAbove(n) => measure(stem) > n,
            Condition::VowelInStem => has_vowel(stem),
            Condition::MeasureAboveEndingIn(n, letters) => {
                stem.last().is_some_and(|b| letters.contains(b)) && measure(stem) > n
            }
            Condition::FinalE => {
                let m = measure(stem);
                m > 1 || (m == 1 && !ends_with_cvc(stem))
            }
            Condition::DoubledL => stem.last() == Some(&b'l') && measure(stem) > 1,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("always"),
            Condition::MeasureAbove(n) => write!(f, "m>{n}"),
            Condition::VowelInStem => f.write_str("*v*"),
            Condition::MeasureAboveEndingIn(n, letters) => {
                write!(f, "m>{n} and stem ends in ")?;
                for (i, &b) in letters.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", b as char)?;
                }
                Ok(())
            }
            Condition::FinalE => f.write_str("m>1 or (m=1 and not *o)"),
            Condition::DoubledL => f.write_str("*ll and m>1"),
        }
    }
}

/// One `(suffix, condition, replacement)` entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix matched against the end of the word
    pub suffix: &'static str,
    /// Text written in place of the suffix
    pub replacement: &'static str,
    /// Gate evaluated on the stem
    pub condition: Condition,
}

impl SuffixRule {
    /// Check if `word` ends with this rule's suffix
    #[inline]
    pub fn matches(&self, word: &[u8]) -> bool {
        word.ends_with(self.suffix.as_bytes())
    }
}

const fn rule(suffix: &'static str, replacement: &'static str, condition: Condition) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        condition,
    }
}

/// Rules of one step, grouped by last letter
#[derive(Debug)]
pub struct Step {
    /// Which step this is
    pub id: StepId,
    groups: &'static [(u8, &'static [SuffixRule])],
}

impl Step {
    /// Rules whose suffix ends in `last`, longest first
    pub fn candidates(&self, last: u8) -> &'static [SuffixRule] {
        match self.groups.iter().find(|(letter, _)| *letter == last) {
            Some(&(_, rules)) => rules,
            None => &[],
        }
    }

    /// The longest-suffix rule matching the end of `word`
    pub fn select(&self, word: &[u8]) -> Option<&'static SuffixRule> {
        let &last = word.last()?;
        self.candidates(last).iter().find(|rule| rule.matches(word))
    }

    /// All rules of the step, grouped by last letter
    pub fn rules(&self) -> impl Iterator<Item = &'static SuffixRule> {
        self.groups.iter().flat_map(|(_, rules)| rules.iter())
    }
}

use Condition::{Always, DoubledL, FinalE, MeasureAbove, MeasureAboveEndingIn, VowelInStem};

const M0: Condition = MeasureAbove(0);
const M1: Condition = MeasureAbove(1);

/// Step 1a
pub static STEP_1A: Step = Step {
    id: StepId::Step1a,
    groups: &[(
        b's',
        &[
            rule("sses", "ss", Always),
            rule("ies", "i", Always),
            rule("ss", "ss", Always),
            rule("s", "", Always),
        ],
    )],
};

/// Step 1b; firing `ed` or `ing` hands over to [`STEP_1B_REPAIR`]
pub static STEP_1B: Step = Step {
    id: StepId::Step1b,
    groups: &[
        (b'd', &[rule("eed", "ee", M0), rule("ed", "", VowelInStem)]),
        (b'g', &[rule("ing", "", VowelInStem)]),
    ],
};

/// Table part of the 1b repair; the double consonant and cvc cases are
/// handled by the engine when none of these match
pub static STEP_1B_REPAIR: Step = Step {
    id: StepId::Step1bRepair,
    groups: &[
        (b't', &[rule("at", "ate", Always)]),
        (b'l', &[rule("bl", "ble", Always)]),
        (b'z', &[rule("iz", "ize", Always)]),
    ],
};

/// Step 1c
pub static STEP_1C: Step = Step {
    id: StepId::Step1c,
    groups: &[(b'y', &[rule("y", "i", VowelInStem)])],
};

/// Step 2, including the `bli` and `logi` departures
pub static STEP_2: Step = Step {
    id: StepId::Step2,
    groups: &[
        (
            b'l',
            &[rule("ational", "ate", M0), rule("tional", "tion", M0)],
        ),
        (
            b'i',
            &[
                rule("biliti", "ble", M0),
                rule("entli", "ent", M0),
                rule("ousli", "ous", M0),
                rule("aliti", "al", M0),
                rule("iviti", "ive", M0),
                rule("enci", "ence", M0),
                rule("anci", "ance", M0),
                rule("alli", "al", M0),
                rule("logi", "log", M0),
                rule("bli", "ble", M0),
                rule("eli", "e", M0),
            ],
        ),
        (b'r', &[rule("izer", "ize", M0), rule("ator", "ate", M0)]),
        (
            b'n',
            &[rule("ization", "ize", M0), rule("ation", "ate", M0)],
        ),
        (b'm', &[rule("alism", "al", M0)]),
        (
            b's',
            &[
                rule("iveness", "ive", M0),
                rule("fulness", "ful", M0),
                rule("ousness", "ous", M0),
            ],
        ),
    ],
};

/// Step 3
pub static STEP_3: Step = Step {
    id: StepId::Step3,
    groups: &[
        (
            b'e',
            &[
                rule("icate", "ic", M0),
                rule("ative", "", M0),
                rule("alize", "al", M0),
            ],
        ),
        (b'i', &[rule("iciti", "ic", M0)]),
        (b'l', &[rule("ical", "ic", M0), rule("ful", "", M0)]),
        (b's', &[rule("ness", "", M0)]),
    ],
};

/// Step 4
pub static STEP_4: Step = Step {
    id: StepId::Step4,
    groups: &[
        (b'l', &[rule("al", "", M1)]),
        (
            b'e',
            &[
                rule("ance", "", M1),
                rule("ence", "", M1),
                rule("able", "", M1),
                rule("ible", "", M1),
                rule("ate", "", M1),
                rule("ive", "", M1),
                rule("ize", "", M1),
            ],
        ),
        (b'r', &[rule("er", "", M1)]),
        (b'c', &[rule("ic", "", M1)]),
        (
            b't',
            &[
                rule("ement", "", M1),
                rule("ment", "", M1),
                rule("ant", "", M1),
                rule("ent", "", M1),
            ],
        ),
        (b'n', &[rule("ion", "", MeasureAboveEndingIn(1, b"st"))]),
        (b'u', &[rule("ou", "", M1)]),
        (b'm', &[rule("ism", "", M1)]),
        (b'i', &[rule("iti", "", M1)]),
        (b's', &[rule("ous", "", M1)]),
    ],
};

/// Step 5a
pub static STEP_5A: Step = Step {
    id: StepId::Step5a,
    groups: &[(b'e', &[rule("e", "", FinalE)])],
};

/// Step 5b; drops the second `l` of a final `ll`
pub static STEP_5B: Step = Step {
    id: StepId::Step5b,
    groups: &[(b'l', &[rule("l", "", DoubledL)])],
};

/// Every step in pipeline order
pub static STEPS: [&Step; 9] = [
    &STEP_1A,
    &STEP_1B,
    &STEP_1B_REPAIR,
    &STEP_1C,
    &STEP_2,
    &STEP_3,
    &STEP_4,
    &STEP_5A,
    &STEP_5B,
];
