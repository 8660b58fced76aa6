//! # Shirushi Trainer
//!
//! Corpus loading and held-out evaluation for Shirushi tagging models,
//! plus the `train` and `tag` command-line tools.

pub mod data;
pub mod eval;
