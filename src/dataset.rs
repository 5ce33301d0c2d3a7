//! Dataset loading, splitting, and label output.
//!
//! Training data is line-delimited `label<TAB>text`; inference data is plain
//! text, one document per line. Double quotes in the text column are replaced
//! with spaces before analysis, matching the source data's quoting.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::PipelineAnalyzer;
//! use verbena::dataset::DatasetReader;
//!
//! let reader = DatasetReader::new(PipelineAnalyzer::standard());
//! let docs = reader
//!     .read_labeled("spam\tbuy now\nham\tmeeting notes\n".as_bytes())
//!     .unwrap();
//!
//! assert_eq!(docs.len(), 2);
//! assert_eq!(docs[0].label(), Some("spam"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::PipelineAnalyzer;
use crate::document::Document;
use crate::error::{Result, VerbenaError};

/// Default fraction of records assigned to the training split.
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.86;

/// Reader for tab-separated labeled records and plain-text inference lines.
#[derive(Debug, Clone)]
pub struct DatasetReader {
    analyzer: PipelineAnalyzer,
    lenient: bool,
}

impl DatasetReader {
    /// Create a reader that treats malformed records as fatal.
    pub fn new(analyzer: PipelineAnalyzer) -> Self {
        DatasetReader {
            analyzer,
            lenient: false,
        }
    }

    /// Skip malformed records with a warning instead of failing.
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Read labeled documents from `label<TAB>text` lines.
    ///
    /// A record that does not split into exactly two fields, or whose label
    /// is empty, is malformed: fatal by default, skipped in lenient mode.
    pub fn read_labeled<R: BufRead>(&self, reader: R) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            match self.parse_record(&line, line_number) {
                Ok((label, text)) => {
                    documents.push(Document::labeled(&text, label, &self.analyzer)?);
                }
                Err(error) if self.lenient => {
                    warn!("skipping record: {error}");
                }
                Err(error) => return Err(error),
            }
        }

        Ok(documents)
    }

    /// Read labeled documents from a file.
    pub fn read_labeled_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        self.read_labeled(BufReader::new(File::open(path)?))
    }

    /// Read unlabeled documents, one per line.
    ///
    /// Every line produces a document, including empty lines, so output
    /// labels stay line-aligned with the input.
    pub fn read_unlabeled<R: BufRead>(&self, reader: R) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for line in reader.lines() {
            let text = clean_text(&line?);
            documents.push(Document::unlabeled(&text, &self.analyzer)?);
        }
        Ok(documents)
    }

    /// Read unlabeled documents from a file.
    pub fn read_unlabeled_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        self.read_unlabeled(BufReader::new(File::open(path)?))
    }

    fn parse_record(&self, line: &str, line_number: usize) -> Result<(String, String)> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(VerbenaError::malformed_input(
                line_number,
                format!("expected 2 tab-separated fields, got {}", fields.len()),
            ));
        }

        let label = fields[0].trim();
        if label.is_empty() {
            return Err(VerbenaError::malformed_input(line_number, "empty label"));
        }

        Ok((label.to_string(), clean_text(fields[1])))
    }
}

/// Replace double quotes with spaces and trim.
fn clean_text(text: &str) -> String {
    text.replace('"', " ").trim().to_string()
}

/// Randomly split documents into training and held-out sets.
///
/// Each document lands in the training set with probability
/// `train_fraction`. A seed makes the split reproducible; without one the
/// split differs between runs.
pub fn split(
    documents: Vec<Document>,
    train_fraction: f64,
    seed: Option<u64>,
) -> (Vec<Document>, Vec<Document>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut train = Vec::new();
    let mut held_out = Vec::new();
    for document in documents {
        if rng.random::<f64>() < train_fraction {
            train.push(document);
        } else {
            held_out.push(document);
        }
    }
    (train, held_out)
}

/// Write one label per line.
pub fn write_labels<W: Write>(labels: &[String], writer: &mut W) -> Result<()> {
    for label in labels {
        writeln!(writer, "{label}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one label per line to a file.
pub fn write_labels_file<P: AsRef<Path>>(labels: &[String], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_labels(labels, &mut writer)
}
