//! Corpus loading for tagged training data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a tagged corpus from a file.
///
/// Expects one `token<TAB>tag` pair per line, with a blank line between
/// sentences. Lines starting with `#` and lines without exactly two fields
/// are skipped. Tokens and tags are returned raw; case-normalization of
/// observations happens inside the estimator.
pub fn load_tagged_corpus<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<Vec<(String, String)>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut sentences = Vec::new();
    let mut current: Vec<(String, String)> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            current.push((parts[0].to_string(), parts[1].to_string()));
        }
    }

    // Don't forget the last sentence
    if !current.is_empty() {
        sentences.push(current);
    }

    Ok(sentences)
}
