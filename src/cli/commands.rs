//! Command implementations for the Verbena CLI.

use std::time::Instant;

use log::info;

use crate::analysis::PipelineAnalyzer;
use crate::classifier::Classifier;
use crate::cli::args::*;
use crate::corpus::Corpus;
use crate::dataset::{self, DatasetReader};
use crate::ensemble;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: VerbenaArgs) -> Result<()> {
    match &args.command {
        Command::TrainEval(train_args) => train_eval(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Vote(vote_args) => vote(vote_args.clone(), &args),
    }
}

fn build_reader(options: &TrainingOptions) -> DatasetReader {
    let reader = DatasetReader::new(PipelineAnalyzer::standard());
    if options.lenient { reader.lenient() } else { reader }
}

fn train_classifier(corpus: Corpus, options: &TrainingOptions) -> Result<Classifier> {
    let start = Instant::now();
    let classifier = Classifier::train(
        corpus,
        PipelineAnalyzer::standard(),
        options.transform_config(),
        options.trainer_config(),
    )?;
    info!("training took {:.2?}", start.elapsed());
    Ok(classifier)
}

/// Train on a random split of a labeled file and report held-out accuracy.
fn train_eval(args: TrainEvalArgs, cli_args: &VerbenaArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Reading documents from {}", args.input.display());
    }

    let documents = build_reader(&args.training).read_labeled_file(&args.input)?;
    let (train_docs, eval_docs) = dataset::split(documents, args.train_fraction, args.seed);

    if cli_args.verbosity() > 0 {
        println!(
            "Got {} training documents and {} evaluation documents",
            train_docs.len(),
            eval_docs.len()
        );
    }

    let classifier = train_classifier(Corpus::from_documents(train_docs), &args.training)?;

    let start = Instant::now();
    let mut correct = 0usize;
    for document in &eval_docs {
        let predicted = classifier.classify_document(document)?;
        if Some(predicted.as_str()) == document.label() {
            correct += 1;
        }
    }
    info!("evaluation took {:.2?}", start.elapsed());

    let accuracy = if eval_docs.is_empty() {
        0.0
    } else {
        correct as f64 / eval_docs.len() as f64
    };
    println!(
        "{correct}/{} correctly labeled documents (accuracy {accuracy:.4})",
        eval_docs.len()
    );

    Ok(())
}

/// Train on a labeled file and write one label per line for a plain-text file.
fn classify(args: ClassifyArgs, cli_args: &VerbenaArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Training from {}", args.train_file.display());
    }

    let reader = build_reader(&args.training);
    let train_docs = reader.read_labeled_file(&args.train_file)?;
    let classifier = train_classifier(Corpus::from_documents(train_docs), &args.training)?;

    if cli_args.verbosity() > 0 {
        println!("Classifying {}", args.input.display());
    }

    let documents = reader.read_unlabeled_file(&args.input)?;
    let labels = documents
        .iter()
        .map(|document| classifier.classify_document(document))
        .collect::<Result<Vec<String>>>()?;

    dataset::write_labels_file(&labels, &args.output)?;

    if cli_args.verbosity() > 0 {
        println!("Wrote {} labels to {}", labels.len(), args.output.display());
    }

    Ok(())
}

/// Majority vote over line-aligned label files.
fn vote(args: VoteArgs, cli_args: &VerbenaArgs) -> Result<()> {
    let labels = ensemble::majority_vote_files(&args.inputs)?;
    dataset::write_labels_file(&labels, &args.output)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Voted over {} files, wrote {} labels to {}",
            args.inputs.len(),
            labels.len(),
            args.output.display()
        );
    }

    Ok(())
}
