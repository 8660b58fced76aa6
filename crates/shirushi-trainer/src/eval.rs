//! Held-out evaluation for trained models.

use shirushi_core::Result;
use shirushi_core::hmm::{Model, decode};

/// Token-level accuracy of a model against gold-tagged sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluation {
    /// Number of tokens scored.
    pub tokens: usize,
    /// Number of tokens whose predicted tag matched the gold tag.
    pub correct: usize,
}

impl Evaluation {
    /// Fraction of tokens tagged correctly, `0.0` if nothing was scored.
    pub fn accuracy(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.correct as f64 / self.tokens as f64
        }
    }
}

/// Decodes each sentence and scores predicted tags against the gold tags.
///
/// Empty sentences are skipped.
pub fn evaluate(model: &Model, corpus: &[Vec<(String, String)>]) -> Result<Evaluation> {
    let mut eval = Evaluation::default();

    for sentence in corpus {
        if sentence.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = sentence.iter().map(|(token, _)| token.as_str()).collect();
        let result = decode(model, &tokens)?;

        for ((_, gold), (_, predicted)) in sentence.iter().zip(&result.pairs) {
            eval.tokens += 1;
            if gold == predicted {
                eval.correct += 1;
            }
        }
    }

    Ok(eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shirushi_core::hmm::estimate;

    fn toy_corpus() -> Vec<Vec<(String, String)>> {
        vec![
            vec![
                ("the".to_string(), "DET".to_string()),
                ("dog".to_string(), "NOUN".to_string()),
                ("runs".to_string(), "VERB".to_string()),
            ],
            vec![
                ("a".to_string(), "DET".to_string()),
                ("cat".to_string(), "NOUN".to_string()),
                ("sleeps".to_string(), "VERB".to_string()),
            ],
        ]
    }

    #[test]
    fn self_consistent_corpus_scores_full_accuracy() {
        let corpus = toy_corpus();
        let model = estimate(&corpus).unwrap();
        let eval = evaluate(&model, &corpus).unwrap();

        assert_eq!(eval.tokens, 6);
        assert_eq!(eval.correct, 6);
        assert_eq!(eval.accuracy(), 1.0);
    }

    #[test]
    fn empty_corpus_scores_zero_tokens() {
        let model = estimate(&toy_corpus()).unwrap();
        let eval = evaluate(&model, &[]).unwrap();

        assert_eq!(eval.tokens, 0);
        assert_eq!(eval.accuracy(), 0.0);
    }
}
