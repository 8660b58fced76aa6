//! # Trained Model
//!
//! The immutable output of estimation: the derived tag set plus transition
//! and emission probability tables. A `Model` is never mutated after
//! construction and can be shared read-only across any number of concurrent
//! decode calls.

use serde::{Deserialize, Serialize};

use super::table::ProbTable;

/// Boundary marker for the implicit state before the first token of a
/// sequence. Participates in transition rows but is never a member of the
/// tag set.
pub const SENTENCE_START: &str = "<s>";

/// Boundary marker for the implicit state after the last token of a
/// sequence. Participates in transition columns but is never a member of
/// the tag set.
pub const SENTENCE_END: &str = "</s>";

/// Default floor probability for transition and emission cells never seen
/// in training.
pub const DEFAULT_FLOOR: f64 = 1e-6;

/// A trained first-order hidden Markov model.
///
/// Holds the tag set observed in training (lexically sorted, which fixes
/// the decoder's tie-break order) and the two conditional probability
/// tables:
///
/// - transitions: `P(next | prior)` where the prior may be
///   [`SENTENCE_START`] and the next may be [`SENTENCE_END`];
/// - emissions: `P(observation | tag)` over case-normalized observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    tags: Vec<String>,
    transitions: ProbTable,
    emissions: ProbTable,
}

impl Model {
    pub(crate) fn new(tags: Vec<String>, transitions: ProbTable, emissions: ProbTable) -> Self {
        Self {
            tags,
            transitions,
            emissions,
        }
    }

    /// The tags this model can assign, in lexical order.
    ///
    /// Tags that never occurred in training are not represented and can
    /// never appear in decoder output.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Looks up `P(next | prior)`.
    ///
    /// `prior` may be [`SENTENCE_START`] and `next` may be [`SENTENCE_END`];
    /// pairs never observed in training resolve to [`Self::floor`].
    pub fn transition(&self, prior: &str, next: &str) -> f64 {
        self.transitions.get(prior, next)
    }

    /// Looks up `P(observation | tag)` for a case-normalized observation.
    ///
    /// Observations are stored in the form produced by
    /// [`crate::tokenizer::normalize`]; pairs never observed in training
    /// resolve to [`Self::floor`].
    pub fn emission(&self, tag: &str, observation: &str) -> f64 {
        self.emissions.get(tag, observation)
    }

    /// The floor probability substituted for absent table cells.
    pub fn floor(&self) -> f64 {
        self.transitions.floor()
    }

    /// The transition table, for inspection.
    pub fn transitions(&self) -> &ProbTable {
        &self.transitions
    }

    /// The emission table, for inspection.
    pub fn emissions(&self) -> &ProbTable {
        &self.emissions
    }
}
