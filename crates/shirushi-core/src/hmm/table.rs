//! # Sparse Probability Tables
//!
//! Row-grouped storage for conditional probability distributions with an
//! explicit floor value for cells never observed in training.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A two-dimensional sparse probability table.
///
/// Rows are conditioning keys (a prior tag for transitions, a tag for
/// emissions) and columns are outcomes. Only probabilities observed in
/// training are stored; looking up an absent cell yields the configured
/// floor probability instead of zero, so a single unseen pair never
/// collapses a whole path score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbTable {
    rows: HashMap<String, HashMap<String, f64>>,
    floor: f64,
}

impl ProbTable {
    /// Creates an empty table with the given floor probability.
    pub fn new(floor: f64) -> Self {
        Self {
            rows: HashMap::new(),
            floor,
        }
    }

    /// Looks up `P(col | row)`, falling back to the floor for absent cells.
    pub fn get(&self, row: &str, col: &str) -> f64 {
        self.rows
            .get(row)
            .and_then(|cols| cols.get(col))
            .copied()
            .unwrap_or(self.floor)
    }

    /// The floor probability returned for cells never seen in training.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Number of rows with at least one stored cell.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Iterates over the row keys in unspecified order.
    pub fn row_keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Sum of the stored probabilities in one row.
    ///
    /// For a properly normalized table this is `1.0` (within floating-point
    /// tolerance) for every row; absent rows sum to `0.0`.
    pub fn row_sum(&self, row: &str) -> f64 {
        self.rows
            .get(row)
            .map(|cols| cols.values().sum())
            .unwrap_or(0.0)
    }

    pub(crate) fn insert(&mut self, row: String, col: String, prob: f64) {
        self.rows.entry(row).or_default().insert(col, prob);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cells_resolve_to_floor() {
        let mut table = ProbTable::new(1e-6);
        table.insert("DET".into(), "the".into(), 0.75);

        assert_eq!(table.get("DET", "the"), 0.75);
        assert_eq!(table.get("DET", "unseen"), 1e-6);
        assert_eq!(table.get("NOUN", "the"), 1e-6);
    }

    #[test]
    fn row_sum_covers_stored_cells_only() {
        let mut table = ProbTable::new(1e-6);
        table.insert("DET".into(), "the".into(), 0.75);
        table.insert("DET".into(), "a".into(), 0.25);

        assert!((table.row_sum("DET") - 1.0).abs() < 1e-12);
        assert_eq!(table.row_sum("VERB"), 0.0);
        assert_eq!(table.num_rows(), 1);
    }
}
