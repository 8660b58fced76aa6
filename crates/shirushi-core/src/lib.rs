//! # Shirushi Core
//!
//! First-order hidden Markov model estimation and Viterbi decoding for
//! part-of-speech tagging and other sequence-labeling tasks. Transition and
//! emission probabilities are estimated from a tagged corpus; decoding finds
//! the single most likely tag path for a new sentence, falling back to a
//! floor probability for anything never seen in training.
//!
//! ## Quick Start
//!
//! ```rust
//! use shirushi_core::hmm::{decode, estimate};
//!
//! let corpus = vec![vec![
//!     ("the".to_string(), "DET".to_string()),
//!     ("dog".to_string(), "NOUN".to_string()),
//!     ("runs".to_string(), "VERB".to_string()),
//! ]];
//!
//! let model = estimate(&corpus).unwrap();
//! let result = decode(&model, &["the", "dog", "runs"]).unwrap();
//!
//! assert_eq!(result.pairs[1], ("dog".to_string(), "NOUN".to_string()));
//! ```
pub mod error;
pub mod hmm;
pub mod tokenizer;

// Re-export primary API
pub use error::{Result, ShirushiError};
pub use hmm::{
    Counts, DEFAULT_FLOOR, DecodeResult, Model, ProbTable, SENTENCE_END, SENTENCE_START, Scoring,
    decode, decode_with, estimate, estimate_with_floor,
};
pub use tokenizer::{Token, Tokenizer, normalize};
