//! Complement Naive Bayes classification.
//!
//! This module implements the weight estimation and decision rule of the
//! Transformed Weight-normalized Complement Naive Bayes classifier (Rennie et
//! al., "Tackling the Poor Assumptions of Naive Bayes Text Classifiers"):
//!
//! - [`trainer::train`] estimates, for every class, a normalized log-weight
//!   per vocabulary term from the *complement* of the class (all training
//!   documents not labeled with it), which is far more stable under skewed
//!   class sizes than standard Naive Bayes.
//! - [`model::ClassifierModel`] holds the finished weight table and maps a
//!   transformed document to the label with the minimum score (arg-min: the
//!   weights are normalized negative log-probabilities, so the best-fitting
//!   class is the smallest sum).
//! - [`Classifier`] is the convenience facade bundling analyzer, transform
//!   pipeline and model for end-to-end use.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::PipelineAnalyzer;
//! use verbena::classifier::{Classifier, TrainerConfig};
//! use verbena::corpus::Corpus;
//! use verbena::document::Document;
//! use verbena::transform::TransformConfig;
//!
//! let analyzer = PipelineAnalyzer::standard();
//! let corpus = Corpus::from_documents(vec![
//!     Document::labeled("buy now buy now", "spam", &analyzer).unwrap(),
//!     Document::labeled("meeting notes", "ham", &analyzer).unwrap(),
//!     Document::labeled("buy cheap now", "spam", &analyzer).unwrap(),
//! ]);
//!
//! let config = TrainerConfig {
//!     prune_fraction: None, // tiny corpus: keep the whole vocabulary
//!     ..TrainerConfig::default()
//! };
//! let classifier = Classifier::train(
//!     corpus,
//!     analyzer,
//!     TransformConfig::default(),
//!     config,
//! )
//! .unwrap();
//!
//! assert_eq!(classifier.classify_text("buy now").unwrap(), "spam");
//! ```

pub mod model;
pub mod trainer;

pub use model::ClassifierModel;

use serde::{Deserialize, Serialize};

use crate::analysis::PipelineAnalyzer;
use crate::corpus::Corpus;
use crate::document::Document;
use crate::error::Result;
use crate::transform::{TransformConfig, TransformPipeline};

/// Configuration for Complement Naive Bayes training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Additive (Laplace) smoothing constant. Must be positive.
    pub alpha: f64,
    /// Vocabulary pruning threshold as a fraction of the largest aggregate
    /// term weight; `None` disables pruning.
    pub prune_fraction: Option<f64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            alpha: 1.0,
            prune_fraction: Some(0.1),
        }
    }
}

/// End-to-end classifier: analyzer, frozen transform pipeline and trained
/// weight table.
///
/// Training consumes the corpus; the intermediate statistics live only for
/// the duration of the call and the weight table (plus the frozen transform
/// statistics needed to weigh query documents) is the only surviving state.
#[derive(Debug)]
pub struct Classifier {
    analyzer: PipelineAnalyzer,
    pipeline: TransformPipeline,
    model: ClassifierModel,
}

impl Classifier {
    /// Train a classifier on a fully assembled labeled corpus.
    pub fn train(
        mut corpus: Corpus,
        analyzer: PipelineAnalyzer,
        transform: TransformConfig,
        config: TrainerConfig,
    ) -> Result<Self> {
        let pipeline = TransformPipeline::fit(&corpus, transform)?;
        pipeline.apply(&mut corpus)?;
        let model = trainer::train(&corpus, &config)?;

        Ok(Classifier {
            analyzer,
            pipeline,
            model,
        })
    }

    /// The trained weight table.
    pub fn model(&self) -> &ClassifierModel {
        &self.model
    }

    /// The frozen transform pipeline.
    pub fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    /// Classify raw text, returning the predicted label.
    pub fn classify_text(&self, text: &str) -> Result<String> {
        let mut document = Document::unlabeled(text, &self.analyzer)?;
        self.pipeline.transform_document(&mut document);
        Ok(self.model.classify(&document)?.to_string())
    }

    /// Classify an already-built document.
    ///
    /// The document is weighed against the training statistics first, so any
    /// previous weighted counts are recomputed.
    pub fn classify_document(&self, document: &Document) -> Result<String> {
        let mut document = document.clone();
        self.pipeline.transform_document(&mut document);
        Ok(self.model.classify(&document)?.to_string())
    }
}
