//! Majority-vote ensembling over label files.
//!
//! Combines several line-aligned label sequences (typically the outputs of
//! classifiers trained with different configurations) into one sequence by
//! taking the most frequent label per line. Ties break toward the
//! lexicographically smallest label, the same deterministic policy the
//! classifier's arg-min uses.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, VerbenaError};

/// Majority vote across line-aligned label sequences.
///
/// Fails if no sequences are given or if the sequences disagree on length.
pub fn majority_vote(label_sets: &[Vec<String>]) -> Result<Vec<String>> {
    let first = label_sets
        .first()
        .ok_or_else(|| VerbenaError::ensemble("no label sequences to vote over"))?;

    for (index, labels) in label_sets.iter().enumerate() {
        if labels.len() != first.len() {
            return Err(VerbenaError::ensemble(format!(
                "label sequence {} has {} lines, expected {}",
                index,
                labels.len(),
                first.len()
            )));
        }
    }

    let mut result = Vec::with_capacity(first.len());
    for line in 0..first.len() {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for labels in label_sets {
            *counts.entry(labels[line].as_str()).or_insert(0) += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for (&label, &count) in &counts {
            best = match best {
                Some((best_label, best_count))
                    if count < best_count || (count == best_count && label >= best_label) =>
                {
                    Some((best_label, best_count))
                }
                _ => Some((label, count)),
            };
        }

        let (label, _) = best.expect("at least one sequence votes on every line");
        result.push(label.to_string());
    }

    Ok(result)
}

/// Read a label file, one label per line.
pub fn read_labels_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut labels = Vec::new();
    for line in reader.lines() {
        labels.push(line?.trim().to_string());
    }
    Ok(labels)
}

/// Majority vote across several label files.
pub fn majority_vote_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let label_sets: Vec<Vec<String>> = paths
        .iter()
        .map(read_labels_file)
        .collect::<Result<Vec<_>>>()?;
    majority_vote(&label_sets)
}
