//! # Model Estimation
//!
//! Builds a [`Model`] from a tagged corpus. Counting and normalization are
//! separate steps: raw counts accumulate in a local [`Counts`] value (which
//! partitioned training jobs can merge elementwise), and each probability
//! row is normalized exactly once by its grouped total.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, ShirushiError};
use crate::tokenizer::normalize;

use super::model::{DEFAULT_FLOOR, Model, SENTENCE_END, SENTENCE_START};
use super::table::ProbTable;

/// Raw transition and emission counts over tagged training sentences.
#[derive(Debug, Clone, Default)]
pub struct Counts {
    transitions: HashMap<String, HashMap<String, u64>>,
    emissions: HashMap<String, HashMap<String, u64>>,
    tag_totals: HashMap<String, u64>,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one tagged sentence into the accumulator.
    ///
    /// Records the boundary transition from [`SENTENCE_START`] to the first
    /// tag, every adjacent tag pair, the final transition to
    /// [`SENTENCE_END`], and one emission per (tag, normalized token)
    /// occurrence. Observations are case-normalized here with the same
    /// [`normalize`] rule the decoder applies to its input.
    pub fn observe(&mut self, sentence: &[(String, String)]) {
        let mut prior: &str = SENTENCE_START;
        for (token, tag) in sentence {
            let obs = normalize(token);
            *self.tag_totals.entry(tag.clone()).or_insert(0) += 1;
            *self
                .emissions
                .entry(tag.clone())
                .or_default()
                .entry(obs)
                .or_insert(0) += 1;
            *self
                .transitions
                .entry(prior.to_string())
                .or_default()
                .entry(tag.clone())
                .or_insert(0) += 1;
            prior = tag;
        }
        *self
            .transitions
            .entry(prior.to_string())
            .or_default()
            .entry(SENTENCE_END.to_string())
            .or_insert(0) += 1;
    }

    /// Sums another accumulator into this one elementwise.
    ///
    /// Merging partial counts from corpus partitions before calling
    /// [`Counts::into_model`] yields the same model as a single counting
    /// pass over the whole corpus.
    pub fn merge(&mut self, other: Counts) {
        for (row, cols) in other.transitions {
            let dst = self.transitions.entry(row).or_default();
            for (col, n) in cols {
                *dst.entry(col).or_insert(0) += n;
            }
        }
        for (row, cols) in other.emissions {
            let dst = self.emissions.entry(row).or_default();
            for (col, n) in cols {
                *dst.entry(col).or_insert(0) += n;
            }
        }
        for (tag, n) in other.tag_totals {
            *self.tag_totals.entry(tag).or_insert(0) += n;
        }
    }

    /// True if no tagged token has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.tag_totals.is_empty()
    }

    /// Normalizes the counts into an immutable [`Model`] with the default
    /// floor probability.
    pub fn into_model(self) -> Result<Model> {
        self.into_model_with_floor(DEFAULT_FLOOR)
    }

    /// Normalizes the counts into an immutable [`Model`].
    ///
    /// Each transition row divides by its own total and each emission row
    /// divides by the tag's occurrence count, in one grouped pass per row.
    ///
    /// # Errors
    ///
    /// Returns [`ShirushiError::InsufficientData`] if no tagged token was
    /// ever observed.
    pub fn into_model_with_floor(self, floor: f64) -> Result<Model> {
        if self.is_empty() {
            return Err(ShirushiError::InsufficientData);
        }

        let mut tags: Vec<String> = self.tag_totals.keys().cloned().collect();
        tags.sort();

        let mut transitions = ProbTable::new(floor);
        for (prior, cols) in &self.transitions {
            let total: u64 = cols.values().sum();
            for (next, &n) in cols {
                transitions.insert(prior.clone(), next.clone(), n as f64 / total as f64);
            }
        }

        let mut emissions = ProbTable::new(floor);
        for (tag, &total) in &self.tag_totals {
            if let Some(cols) = self.emissions.get(tag) {
                for (obs, &n) in cols {
                    emissions.insert(tag.clone(), obs.clone(), n as f64 / total as f64);
                }
            }
        }

        debug!(
            "estimated model: {} tags, {} transition rows, {} emission rows",
            tags.len(),
            transitions.num_rows(),
            emissions.num_rows()
        );

        Ok(Model::new(tags, transitions, emissions))
    }
}

/// Estimates a model from a tagged corpus with the default floor.
///
/// Each sentence is an ordered list of `(token, tag)` pairs.
///
/// # Errors
///
/// Returns [`ShirushiError::InsufficientData`] if the corpus contains no
/// tagged tokens.
///
/// # Examples
///
/// ```
/// use shirushi_core::hmm::estimate;
///
/// let corpus = vec![vec![
///     ("time".to_string(), "NOUN".to_string()),
///     ("flies".to_string(), "VERB".to_string()),
/// ]];
/// let model = estimate(&corpus).unwrap();
/// assert_eq!(model.tags(), ["NOUN", "VERB"]);
/// ```
pub fn estimate(corpus: &[Vec<(String, String)>]) -> Result<Model> {
    estimate_with_floor(corpus, DEFAULT_FLOOR)
}

/// Estimates a model with an explicit floor probability for unseen
/// transition and emission pairs.
pub fn estimate_with_floor(corpus: &[Vec<(String, String)>], floor: f64) -> Result<Model> {
    let mut counts = Counts::new();
    for sentence in corpus {
        counts.observe(sentence);
    }
    counts.into_model_with_floor(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::model::{SENTENCE_END, SENTENCE_START};

    fn sentence(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect()
    }

    fn toy_corpus() -> Vec<Vec<(String, String)>> {
        vec![
            sentence(&[("the", "DET"), ("dog", "NOUN"), ("runs", "VERB")]),
            sentence(&[("a", "DET"), ("cat", "NOUN"), ("sleeps", "VERB")]),
        ]
    }

    fn branching_corpus() -> Vec<Vec<(String, String)>> {
        vec![
            sentence(&[("the", "DET"), ("dog", "NOUN"), ("barks", "VERB")]),
            sentence(&[
                ("the", "DET"),
                ("dog", "NOUN"),
                ("sleeps", "VERB"),
                ("soundly", "ADV"),
            ]),
            sentence(&[("dogs", "NOUN"), ("bark", "VERB")]),
        ]
    }

    #[test]
    fn concrete_chain_has_unit_transitions() {
        let model = estimate(&toy_corpus()).unwrap();

        assert_eq!(model.transition(SENTENCE_START, "DET"), 1.0);
        assert_eq!(model.transition("DET", "NOUN"), 1.0);
        assert_eq!(model.transition("NOUN", "VERB"), 1.0);
        assert_eq!(model.transition("VERB", SENTENCE_END), 1.0);
    }

    #[test]
    fn transition_rows_sum_to_one() {
        let model = estimate(&branching_corpus()).unwrap();
        let table = model.transitions();

        for row in table.row_keys() {
            assert!(
                (table.row_sum(row) - 1.0).abs() < 1e-9,
                "transition row {row:?} sums to {}",
                table.row_sum(row)
            );
        }
    }

    #[test]
    fn emission_rows_sum_to_one() {
        let model = estimate(&branching_corpus()).unwrap();
        let table = model.emissions();

        for row in table.row_keys() {
            assert!(
                (table.row_sum(row) - 1.0).abs() < 1e-9,
                "emission row {row:?} sums to {}",
                table.row_sum(row)
            );
        }
    }

    #[test]
    fn emission_uses_tag_total_as_denominator() {
        let model = estimate(&branching_corpus()).unwrap();

        // NOUN occurs three times, emitting "dog" twice and "dogs" once.
        assert!((model.emission("NOUN", "dog") - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.emission("NOUN", "dogs") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_is_insufficient() {
        let err = estimate(&[]).unwrap_err();
        assert!(matches!(err, ShirushiError::InsufficientData));
    }

    #[test]
    fn corpus_of_empty_sentences_is_insufficient() {
        let corpus = vec![Vec::new(), Vec::new()];
        let err = estimate(&corpus).unwrap_err();
        assert!(matches!(err, ShirushiError::InsufficientData));
    }

    #[test]
    fn merged_partitions_match_single_pass() {
        let corpus = branching_corpus();
        let (left, right) = corpus.split_at(1);

        let mut partial_a = Counts::new();
        for s in left {
            partial_a.observe(s);
        }
        let mut partial_b = Counts::new();
        for s in right {
            partial_b.observe(s);
        }
        partial_a.merge(partial_b);

        let merged = partial_a.into_model().unwrap();
        let single = estimate(&corpus).unwrap();
        assert_eq!(merged, single);
    }

    #[test]
    fn observations_are_case_folded() {
        let corpus = vec![
            sentence(&[("The", "DET")]),
            sentence(&[("the", "DET")]),
        ];
        let model = estimate(&corpus).unwrap();

        assert_eq!(model.emission("DET", "the"), 1.0);
        assert_eq!(model.emission("DET", "The"), model.floor());
    }

    #[test]
    fn unseen_pairs_resolve_to_configured_floor() {
        let model = estimate_with_floor(&toy_corpus(), 1e-9).unwrap();

        assert_eq!(model.floor(), 1e-9);
        assert_eq!(model.transition("VERB", "DET"), 1e-9);
        assert_eq!(model.emission("DET", "zebra"), 1e-9);
    }
}
