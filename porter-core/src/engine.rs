//! Step pipeline over a word buffer
//!
//! Steps run strictly in order and each one sees the word as the previous
//! step left it. A step rewrites the word at most once.

use crate::buffer::WordBuffer;
use crate::classifier::{ends_with_cvc, ends_with_double_consonant, measure};
use crate::error::Result;
use crate::rules::{
    Step, StepId, SuffixRule, STEP_1A, STEP_1B, STEP_1B_REPAIR, STEP_1C, STEP_2, STEP_3, STEP_4,
    STEP_5A, STEP_5B,
};

/// Words shorter than this are returned unchanged
pub const MIN_STEMMABLE_LEN: usize = 3;

/// Result of applying one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No suffix of the step matched
    Unmatched,
    /// The longest matching rule's condition failed; the word is unchanged
    Blocked(&'static SuffixRule),
    /// The rule rewrote the word
    Fired(&'static SuffixRule),
}

impl Outcome {
    /// Check if the word was rewritten
    pub fn fired(&self) -> bool {
        matches!(self, Outcome::Fired(_))
    }
}

/// Apply the longest matching rule of `step`, if its condition holds
pub fn apply_step(step: &Step, buffer: &mut WordBuffer) -> Result<Outcome> {
    let Some(rule) = step.select(buffer.as_bytes()) else {
        return Ok(Outcome::Unmatched);
    };

    let stem_len = buffer.len() - rule.suffix.len();
    if !rule.condition.holds(&buffer.as_bytes()[..stem_len]) {
        return Ok(Outcome::Blocked(rule));
    }

    buffer.replace_tail(stem_len, rule.replacement.as_bytes())?;
    tracing::trace!(
        step = %step.id,
        suffix = rule.suffix,
        replacement = rule.replacement,
        "rule fired"
    );
    Ok(Outcome::Fired(rule))
}

/// Tidy the stem left after removing `ed` or `ing`
///
/// `at`, `bl` and `iz` get their `e` back; otherwise a double consonant
/// other than `l`, `s` or `z` is undoubled, and a short cvc stem gets an
/// `e` appended.
fn repair_stem(buffer: &mut WordBuffer) -> Result<()> {
    if apply_step(&STEP_1B_REPAIR, buffer)?.fired() {
        return Ok(());
    }

    let word = buffer.as_bytes();
    if ends_with_double_consonant(word) {
        if !matches!(buffer.last(), Some(b'l' | b's' | b'z')) {
            buffer.truncate(buffer.len() - 1);
        }
    } else if measure(word) == 1 && ends_with_cvc(word) {
        buffer.push(b'e')?;
    }
    Ok(())
}

/// Run the full pipeline, reporting the word after each step that ran
pub fn run_with<F>(buffer: &mut WordBuffer, mut observe: F) -> Result<()>
where
    F: FnMut(StepId, &[u8]),
{
    if buffer.len() < MIN_STEMMABLE_LEN {
        return Ok(());
    }

    apply_step(&STEP_1A, buffer)?;
    observe(StepId::Step1a, buffer.as_bytes());

    if let Outcome::Fired(rule) = apply_step(&STEP_1B, buffer)? {
        observe(StepId::Step1b, buffer.as_bytes());
        if matches!(rule.suffix, "ed" | "ing") {
            repair_stem(buffer)?;
            observe(StepId::Step1bRepair, buffer.as_bytes());
        }
    } else {
        observe(StepId::Step1b, buffer.as_bytes());
    }

    // 1c onwards look one letter back from the end
    if buffer.len() < 2 {
        return Ok(());
    }

    for step in [&STEP_1C, &STEP_2, &STEP_3, &STEP_4, &STEP_5A, &STEP_5B] {
        apply_step(step, buffer)?;
        observe(step.id, buffer.as_bytes());
    }

    Ok(())
}

/// Run the full pipeline in place
pub fn run(buffer: &mut WordBuffer) -> Result<()> {
    run_with(buffer, |_, _| {})
}
