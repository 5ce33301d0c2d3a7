//! # Verbena
//!
//! A Complement Naive Bayes text classifier for Rust, implementing the
//! transformed weight-normalized variant (TWCNB) of Rennie et al.,
//! "Tackling the Poor Assumptions of Naive Bayes Text Classifiers".
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable tokenizer/filter analysis pipeline
//! - TF, IDF and length-normalization term-weight transforms
//! - Complement-class estimation, stable under skewed class sizes
//! - Frequency-based vocabulary pruning
//! - Dataset loading, train/test splitting and majority-vote ensembling

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod dataset;
pub mod document;
pub mod ensemble;
pub mod error;
pub mod transform;

pub mod prelude {
    pub use crate::analysis::PipelineAnalyzer;
    pub use crate::classifier::{Classifier, ClassifierModel, TrainerConfig};
    pub use crate::corpus::Corpus;
    pub use crate::document::Document;
    pub use crate::error::{Result, VerbenaError};
    pub use crate::transform::{TransformConfig, TransformPipeline};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
