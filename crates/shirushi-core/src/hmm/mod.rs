//! # Hidden Markov Model
//!
//! First-order HMM estimation and Viterbi decoding. [`estimate`] builds an
//! immutable [`Model`] from tagged sentences; [`decode`] finds the most
//! probable tag path for a new observation sequence.

pub mod estimate;
pub mod model;
pub mod table;
pub mod viterbi;

pub use estimate::{Counts, estimate, estimate_with_floor};
pub use model::{DEFAULT_FLOOR, Model, SENTENCE_END, SENTENCE_START};
pub use table::ProbTable;
pub use viterbi::{DecodeResult, Scoring, decode, decode_with};
