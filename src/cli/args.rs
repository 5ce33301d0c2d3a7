//! Command line argument parsing for the Verbena CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::classifier::TrainerConfig;
use crate::transform::TransformConfig;

/// Verbena - a Complement Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "verbena")]
#[command(about = "A Complement Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VerbenaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VerbenaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a labeled file, evaluate on a held-out split
    #[command(name = "train-eval")]
    TrainEval(TrainEvalArgs),

    /// Train on a labeled file and classify a plain-text file
    Classify(ClassifyArgs),

    /// Majority vote over several line-aligned label files
    Vote(VoteArgs),
}

/// Options shared by every training invocation.
#[derive(Args, Debug, Clone)]
pub struct TrainingOptions {
    /// Disable the log term-frequency transform
    #[arg(long)]
    pub no_tf: bool,

    /// Disable the inverse document-frequency transform
    #[arg(long)]
    pub no_idf: bool,

    /// Disable length normalization
    #[arg(long)]
    pub no_length_norm: bool,

    /// Additive smoothing constant
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Vocabulary pruning threshold (fraction of the largest aggregate)
    #[arg(long, default_value_t = 0.1)]
    pub prune_fraction: f64,

    /// Disable vocabulary pruning
    #[arg(long)]
    pub no_prune: bool,

    /// Skip malformed training records instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl TrainingOptions {
    /// Transform stage toggles derived from the flags.
    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig {
            tf: !self.no_tf,
            idf: !self.no_idf,
            length_norm: !self.no_length_norm,
        }
    }

    /// Trainer configuration derived from the flags.
    pub fn trainer_config(&self) -> TrainerConfig {
        TrainerConfig {
            alpha: self.alpha,
            prune_fraction: (!self.no_prune).then_some(self.prune_fraction),
        }
    }
}

/// Arguments for train-eval
#[derive(Args, Debug, Clone)]
pub struct TrainEvalArgs {
    /// Labeled input file (label<TAB>text per line)
    pub input: PathBuf,

    /// Fraction of records assigned to the training split
    #[arg(long, default_value_t = crate::dataset::DEFAULT_TRAIN_FRACTION)]
    pub train_fraction: f64,

    /// Seed for the random split (omit for a different split every run)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Arguments for classify
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Labeled training file (label<TAB>text per line)
    pub train_file: PathBuf,

    /// Plain-text file to classify, one document per line
    pub input: PathBuf,

    /// Output file, one label per line
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Arguments for vote
#[derive(Args, Debug, Clone)]
pub struct VoteArgs {
    /// Label files to vote over (line-aligned)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output file, one label per line
    #[arg(short, long)]
    pub output: PathBuf,
}
