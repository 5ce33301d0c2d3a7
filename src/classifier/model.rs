//! Trained weight table and decision rule.
//!
//! A [`ClassifierModel`] is the immutable product of training: one
//! normalized log-weight per (class, term) pair, complete over every class
//! and every surviving vocabulary term. Classification is a pure function of
//! the model and a transformed document.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::document::Document;
use crate::error::{Result, VerbenaError};

/// The trained Complement Naive Bayes weight table.
///
/// Classes are kept in a sorted map so every iteration order, and therefore
/// the arg-min tie-break, is deterministic.
#[derive(Debug, Clone)]
pub struct ClassifierModel {
    weights: BTreeMap<String, AHashMap<String, f64>>,
    vocabulary_size: usize,
}

impl ClassifierModel {
    pub(crate) fn new(
        weights: BTreeMap<String, AHashMap<String, f64>>,
        vocabulary_size: usize,
    ) -> Self {
        ClassifierModel {
            weights,
            vocabulary_size,
        }
    }

    /// The class labels, in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.weights.len()
    }

    /// Size of the surviving vocabulary the table was trained on.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// The weight for a (class, term) pair.
    ///
    /// `None` means the term was not in the trained vocabulary (or the class
    /// is unknown); at scoring time that is an explicit zero contribution,
    /// not an error.
    pub fn weight(&self, class: &str, term: &str) -> Option<f64> {
        self.weights.get(class)?.get(term).copied()
    }

    /// Score every class against a transformed document, in sorted class
    /// order.
    ///
    /// `S(c) = Σ_t weighted_count(t) · weight(c, t)`, with terms absent from
    /// the table contributing zero.
    pub fn score(&self, document: &Document) -> Result<Vec<(String, f64)>> {
        let weighted = document.weighted_counts().ok_or_else(|| {
            VerbenaError::classification("document must be transformed before classification")
        })?;

        // Visit terms in sorted order so the float sum is reproducible
        // regardless of map iteration order.
        let mut terms: Vec<(&str, f64)> = weighted
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
            .collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(b.0));

        Ok(self
            .weights
            .iter()
            .map(|(class, class_weights)| {
                let score: f64 = terms
                    .iter()
                    .map(|(term, count)| {
                        count * class_weights.get(*term).copied().unwrap_or(0.0)
                    })
                    .sum();
                (class.clone(), score)
            })
            .collect())
    }

    /// Classify a transformed document: the class with the minimum score.
    ///
    /// The weights are negative normalized log-probabilities of the
    /// complement class, so the best-fitting class has the smallest sum.
    /// Ties break toward the lexicographically smallest label.
    pub fn classify(&self, document: &Document) -> Result<&str> {
        if self.weights.is_empty() {
            return Err(VerbenaError::classification(
                "model has no classes; nothing to classify against",
            ));
        }

        let scores = self.score(document)?;
        let mut best: Option<(&str, f64)> = None;
        for (class, score) in &scores {
            match best {
                // Strict < keeps the first (lexicographically smallest) label
                // on ties.
                Some((_, best_score)) if *score >= best_score => {}
                _ => best = Some((class.as_str(), *score)),
            }
        }

        let (label, _) = best.expect("non-empty model yields at least one score");
        // Borrow from self, not from the local score vector.
        Ok(self
            .weights
            .keys()
            .find(|c| c.as_str() == label)
            .expect("winning label exists in the table")
            .as_str())
    }
}
