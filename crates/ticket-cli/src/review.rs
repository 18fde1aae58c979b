//! Interactive review of pending suggestions.
//!
//! Generic over the input and output streams so the prompt loop can be
//! driven from tests.

use std::io::{self, BufRead, Write};

use ticket_model::EntityClass;
use ticket_normalize::{Normalizer, NormalizerSet, ReviewDecision, ReviewOutcome, SimilarityScorer};

const RULE: &str = "------------------------------------------------------------";

/// Counts of decisions taken in one review session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewTally {
    pub approved: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl ReviewTally {
    pub fn add(&mut self, other: ReviewTally) {
        self.approved += other.approved;
        self.rejected += other.rejected;
        self.skipped += other.skipped;
    }

    pub fn decided(&self) -> usize {
        self.approved + self.rejected
    }
}

/// Walk every pending entry of `normalizer` and ask for a decision.
///
/// End of input skips the remaining entries.
pub fn review_pending<S, R, W>(
    normalizer: &mut Normalizer<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<ReviewTally>
where
    S: SimilarityScorer,
    R: BufRead,
    W: Write,
{
    let label = normalizer.class().label();
    let pending: Vec<(String, String, f64)> = normalizer
        .pending_reviews()
        .iter()
        .map(|(variant, entry)| (variant.clone(), entry.suggested.clone(), entry.score))
        .collect();

    let mut tally = ReviewTally::default();
    if pending.is_empty() {
        writeln!(output, "No pending {label} mappings to review.")?;
        return Ok(tally);
    }

    writeln!(output, "\nReviewing {} pending {label} mappings:", pending.len())?;
    writeln!(output, "{RULE}")?;

    let total = pending.len();
    for (index, (variant, suggested, score)) in pending.into_iter().enumerate() {
        writeln!(output, "Entity: {variant}")?;
        writeln!(output, "Suggested mapping: {suggested} (confidence: {score:.2})")?;

        let Some(decision) = prompt_decision(&variant, input, output)? else {
            tally.skipped += total - index;
            writeln!(output, "End of input, remaining entries skipped.")?;
            break;
        };
        match normalizer.decide(&variant, decision) {
            ReviewOutcome::Approved { variant, canonical } => {
                tally.approved += 1;
                writeln!(output, "Approved mapping: {variant} -> {canonical}")?;
            }
            ReviewOutcome::Rejected { variant } => {
                tally.rejected += 1;
                writeln!(
                    output,
                    "Rejected mapping. Added {variant} as a new standardized entity."
                )?;
            }
            ReviewOutcome::Skipped | ReviewOutcome::NotPending | ReviewOutcome::EmptyCustom => {
                tally.skipped += 1;
                writeln!(output, "Skipped.")?;
            }
        }
        writeln!(output, "{RULE}")?;
    }
    Ok(tally)
}

/// Review every class of `set` in storage order.
pub fn review_set<R: BufRead, W: Write>(
    set: &mut NormalizerSet,
    input: &mut R,
    output: &mut W,
) -> io::Result<ReviewTally> {
    let mut tally = ReviewTally::default();
    for class in EntityClass::ALL {
        tally.add(review_pending(set.get_mut(class), input, output)?);
    }
    Ok(tally)
}

/// Ask until a valid decision is given. `None` on end of input.
fn prompt_decision<R: BufRead, W: Write>(
    variant: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<ReviewDecision>> {
    loop {
        write!(output, "Options: (a)ccept, (r)eject, (c)ustom mapping, (s)kip: ")?;
        output.flush()?;
        let Some(choice) = read_line(input)? else {
            return Ok(None);
        };
        match choice.to_lowercase().as_str() {
            "a" => return Ok(Some(ReviewDecision::Accept)),
            "r" => return Ok(Some(ReviewDecision::Reject)),
            "s" => return Ok(Some(ReviewDecision::Skip)),
            "c" => {
                write!(output, "Enter custom mapping for {variant}: ")?;
                output.flush()?;
                let Some(custom) = read_line(input)? else {
                    return Ok(None);
                };
                if custom.is_empty() {
                    writeln!(output, "Custom mapping cannot be empty.")?;
                } else {
                    return Ok(Some(ReviewDecision::Custom(custom)));
                }
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
