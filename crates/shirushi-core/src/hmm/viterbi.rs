//! # Viterbi Decoding
//!
//! Finds the single most probable tag sequence for an observation sequence
//! under a trained [`Model`], using the standard dynamic program over a
//! trellis of |tags| states per observation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShirushiError};
use crate::tokenizer::normalize;

use super::model::{Model, SENTENCE_END, SENTENCE_START};

/// How path scores are accumulated during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scoring {
    /// Sum log-probabilities. Safe for arbitrarily long sequences; the
    /// resulting score is the joint log-probability of the path.
    #[default]
    Log,

    /// Multiply probabilities directly, matching the classic textbook
    /// formulation. Scores silently underflow to zero once a sequence grows
    /// past a few hundred observations; use it only when raw probability
    /// scores for short sequences are required.
    Direct,
}

/// The decoded tag sequence for one observation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// One `(observation, tag)` pair per input observation, in input order.
    /// Observations are echoed as the caller passed them.
    pub pairs: Vec<(String, String)>,

    /// Joint score of the decoded path: a log-probability under
    /// [`Scoring::Log`], a raw probability product under [`Scoring::Direct`].
    pub score: f64,

    /// The scoring mode that produced `score`.
    pub scoring: Scoring,
}

/// Path score and backpointer for one trellis cell.
#[derive(Debug, Clone, Copy)]
struct Cell {
    score: f64,
    prev: Option<usize>,
}

/// Decodes the most probable tag sequence with log-space scoring.
///
/// # Errors
///
/// Returns [`ShirushiError::EmptySequence`] if `observations` is empty.
pub fn decode<S: AsRef<str>>(model: &Model, observations: &[S]) -> Result<DecodeResult> {
    decode_with(model, observations, Scoring::Log)
}

/// Decodes the most probable tag sequence with an explicit scoring mode.
///
/// Observations are case-normalized for table lookups; symbols never seen
/// in training resolve to the model's floor probability, so unknown words
/// degrade the score but never fail the call.
///
/// Ties in the argmax are broken deterministically: tags are iterated in
/// lexical order and only a strictly greater score replaces the incumbent,
/// so equal scores resolve to the lexically smallest tag. Repeated calls
/// with the same model and input produce identical output.
///
/// # Errors
///
/// Returns [`ShirushiError::EmptySequence`] if `observations` is empty.
pub fn decode_with<S: AsRef<str>>(
    model: &Model,
    observations: &[S],
    scoring: Scoring,
) -> Result<DecodeResult> {
    if observations.is_empty() {
        return Err(ShirushiError::EmptySequence);
    }

    let tags = model.tags();
    let n = observations.len();

    let weight = |p: f64| match scoring {
        Scoring::Log => p.ln(),
        Scoring::Direct => p,
    };
    let combine = |a: f64, b: f64| match scoring {
        Scoring::Log => a + b,
        Scoring::Direct => a * b,
    };

    let symbols: Vec<String> = observations
        .iter()
        .map(|obs| normalize(obs.as_ref()))
        .collect();

    // Trellis of one column per observation; each call owns its own tables.
    let mut trellis: Vec<Vec<Cell>> = Vec::with_capacity(n);

    trellis.push(
        tags.iter()
            .map(|tag| Cell {
                score: combine(
                    weight(model.transition(SENTENCE_START, tag)),
                    weight(model.emission(tag, &symbols[0])),
                ),
                prev: None,
            })
            .collect(),
    );

    for t in 1..n {
        let mut column = Vec::with_capacity(tags.len());
        for tag in tags {
            let emit = weight(model.emission(tag, &symbols[t]));
            let mut best = Cell {
                score: f64::NEG_INFINITY,
                prev: None,
            };
            for (p, prior) in tags.iter().enumerate() {
                let score = combine(
                    combine(trellis[t - 1][p].score, weight(model.transition(prior, tag))),
                    emit,
                );
                if score > best.score {
                    best = Cell {
                        score,
                        prev: Some(p),
                    };
                }
            }
            column.push(best);
        }
        trellis.push(column);
    }

    // Fold the final transition to the end marker into each candidate.
    let mut final_score = f64::NEG_INFINITY;
    let mut final_tag = 0;
    for (s, tag) in tags.iter().enumerate() {
        let score = combine(
            trellis[n - 1][s].score,
            weight(model.transition(tag, SENTENCE_END)),
        );
        if score > final_score {
            final_score = score;
            final_tag = s;
        }
    }

    // Walk the backpointers from the final state to the front.
    let mut path = Vec::with_capacity(n);
    path.push(final_tag);
    let mut current = final_tag;
    for t in (1..n).rev() {
        current = trellis[t][current].prev.unwrap_or(0);
        path.push(current);
    }
    path.reverse();

    let pairs = observations
        .iter()
        .zip(&path)
        .map(|(obs, &s)| (obs.as_ref().to_string(), tags[s].clone()))
        .collect();

    Ok(DecodeResult {
        pairs,
        score: final_score,
        scoring,
    })
}
