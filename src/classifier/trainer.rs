//! Complement Naive Bayes weight estimation.
//!
//! Training is all-or-nothing over a transformed corpus:
//!
//! 1. For every class `c` and surviving vocabulary term `t`, sum the
//!    weighted counts of `t` over the *complement* of `c` (every training
//!    document not labeled `c`).
//! 2. Smooth and normalize into `theta(c, t)`, the estimated probability of
//!    `t` under the complement of `c`.
//! 3. Take logs and normalize each class's log-weights by the sum of their
//!    magnitudes, countering the magnitude bias from rare classes having
//!    large complements. The normalized weights stay negative, which is what
//!    makes the arg-min decision rule in
//!    [`ClassifierModel::classify`](crate::classifier::model::ClassifierModel::classify)
//!    pick the best-fitting class.
//!
//! Per-class estimation is independent and runs in parallel. All
//! intermediate statistics are scoped to the call; the returned weight table
//! is the only surviving state.

use std::collections::{BTreeMap, HashSet};

use ahash::AHashMap;
use log::info;
use rayon::prelude::*;

use crate::classifier::model::ClassifierModel;
use crate::classifier::TrainerConfig;
use crate::corpus::{surviving_vocabulary, Corpus};
use crate::error::{Result, VerbenaError};

/// Train a Complement Naive Bayes model on a transformed, labeled corpus.
///
/// Fails fast on an empty corpus, unlabeled documents, an untransformed
/// corpus, an empty post-pruning vocabulary, a non-positive smoothing
/// constant, or a degenerate log-weight sum. Reads only the documents'
/// weighted counts; never mutates the corpus.
pub fn train(corpus: &Corpus, config: &TrainerConfig) -> Result<ClassifierModel> {
    if corpus.is_empty() {
        return Err(VerbenaError::training("cannot train on an empty corpus"));
    }
    if config.alpha <= 0.0 || !config.alpha.is_finite() {
        return Err(VerbenaError::training(format!(
            "smoothing constant must be a positive finite number, got {}",
            config.alpha
        )));
    }
    if !corpus.is_transformed() {
        return Err(VerbenaError::training(
            "corpus must be transformed before training",
        ));
    }
    if corpus.documents().iter().any(|doc| doc.label().is_none()) {
        return Err(VerbenaError::training(
            "every training document must carry a label",
        ));
    }

    let labels: Vec<String> = corpus.labels().into_iter().collect();
    let vocabulary = surviving_vocabulary(corpus, config.prune_fraction)?;
    if vocabulary.is_empty() {
        return Err(VerbenaError::training(
            "vocabulary is empty after filtering and pruning",
        ));
    }

    info!(
        "training on {} documents, {} classes, {} vocabulary terms",
        corpus.len(),
        labels.len(),
        vocabulary.len()
    );

    let thetas = estimate_thetas(corpus, &labels, &vocabulary, config.alpha);
    let weights = normalize_weights(thetas)?;

    Ok(ClassifierModel::new(weights, vocabulary.len()))
}

/// Estimate `theta(c, t)` for every (class, term) pair.
///
/// `theta(c, t) = (complement_count(c, t) + alpha) /
/// (sum over vocabulary of complement counts + alpha * |V|)`, where the
/// complement counts sum weighted counts over documents not labeled `c`.
/// Smoothing keeps every theta strictly positive.
fn estimate_thetas(
    corpus: &Corpus,
    labels: &[String],
    vocabulary: &[String],
    alpha: f64,
) -> BTreeMap<String, Vec<(String, f64)>> {
    let vocab_set: HashSet<&str> = vocabulary.iter().map(String::as_str).collect();

    // One pass over the corpus: per-term totals and per-class, per-term sums
    // over the surviving vocabulary. Each per-term accumulator is fed in
    // document order, so the totals do not depend on map iteration order.
    let mut term_totals: AHashMap<&str, f64> = AHashMap::new();
    let mut class_term_sums: AHashMap<&str, AHashMap<&str, f64>> = AHashMap::new();

    for document in corpus.documents() {
        let label = document.label().unwrap_or_default();
        let class_sums = class_term_sums.entry(label).or_default();
        if let Some(weighted) = document.weighted_counts() {
            for (term, &value) in weighted {
                if !vocab_set.contains(term.as_str()) {
                    continue;
                }
                *term_totals.entry(term.as_str()).or_insert(0.0) += value;
                *class_sums.entry(term.as_str()).or_insert(0.0) += value;
            }
        }
    }

    let smoothing_total = alpha * vocabulary.len() as f64;

    labels
        .par_iter()
        .map(|label| {
            let own_terms = class_term_sums.get(label.as_str());

            // Complement counts per term, in sorted vocabulary order. The
            // denominator sums them in the same order, keeping repeated
            // trainings bit-identical: float addition is not associative.
            let complement_counts: Vec<(String, f64)> = vocabulary
                .iter()
                .map(|term| {
                    let total = term_totals.get(term.as_str()).copied().unwrap_or(0.0);
                    let own = own_terms
                        .and_then(|sums| sums.get(term.as_str()))
                        .copied()
                        .unwrap_or(0.0);
                    (term.clone(), (total - own).max(0.0))
                })
                .collect();
            let complement_total: f64 =
                complement_counts.iter().map(|(_, count)| count).sum();
            let denominator = complement_total + smoothing_total;

            let thetas: Vec<(String, f64)> = complement_counts
                .into_iter()
                .map(|(term, count)| (term, (count + alpha) / denominator))
                .collect();

            (label.clone(), thetas)
        })
        .collect()
}

/// Turn theta tables into normalized log-weights.
///
/// `weight(c, t) = ln(theta(c, t)) / sum over t' of |ln(theta(c, t'))|`.
/// Dividing by the magnitude sum (not the signed sum, which would flip every
/// weight positive and invert the arg-min ordering) keeps weights negative
/// while countering the magnitude bias of rare classes, whose complements
/// are naturally larger.
fn normalize_weights(
    thetas: BTreeMap<String, Vec<(String, f64)>>,
) -> Result<BTreeMap<String, AHashMap<String, f64>>> {
    thetas
        .into_iter()
        .map(|(label, class_thetas)| {
            // Thetas arrive in sorted vocabulary order; summing magnitudes in
            // that order keeps the normalizer stable across runs.
            let log_weights: Vec<(String, f64)> = class_thetas
                .into_iter()
                .map(|(term, theta)| (term, theta.ln()))
                .collect();

            let magnitude_sum: f64 = log_weights.iter().map(|(_, w)| w.abs()).sum();
            if magnitude_sum == 0.0 || !magnitude_sum.is_finite() {
                return Err(VerbenaError::training(format!(
                    "degenerate weight normalization for class {label:?}: \
                     log-weight magnitude sum is {magnitude_sum}"
                )));
            }

            let normalized: AHashMap<String, f64> = log_weights
                .into_iter()
                .map(|(term, weight)| (term, weight / magnitude_sum))
                .collect();

            Ok((label, normalized))
        })
        .collect()
}
