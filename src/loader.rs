//! Balanced sample loader for downstream modeling.
//!
//! Reads up to a fixed number of lines from each sink, labels them by class,
//! and returns a deterministic seeded permutation of the combined rows.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::constants::loader::{DEFAULT_ROWS_PER_CLASS, DEFAULT_SHUFFLE_SEED};
use crate::errors::CorpusError;
use crate::record::Sentiment;
use crate::sink::SinkPaths;
use crate::types::NormalizedText;

/// One labeled row of the combined sample table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// Normalized review text read back from a sink.
    pub text: NormalizedText,
    /// Class of the sink the row came from (never neutral).
    pub sentiment: Sentiment,
}

/// Configuration for `load_balanced_sample`.
#[derive(Clone, Debug)]
pub struct BalancedSampleSpec {
    /// Negative sink to read label-0 rows from.
    pub negative_path: PathBuf,
    /// Positive sink to read label-1 rows from.
    pub positive_path: PathBuf,
    /// Cap on rows read from the negative sink.
    pub negative_rows: usize,
    /// Cap on rows read from the positive sink.
    pub positive_rows: usize,
    /// Seed controlling the deterministic permutation.
    pub seed: u64,
}

impl BalancedSampleSpec {
    /// Build a spec over `paths` with the default per-class caps and seed.
    pub fn new(paths: &SinkPaths) -> Self {
        Self {
            negative_path: paths.negative.clone(),
            positive_path: paths.positive.clone(),
            negative_rows: DEFAULT_ROWS_PER_CLASS,
            positive_rows: DEFAULT_ROWS_PER_CLASS,
            seed: DEFAULT_SHUFFLE_SEED,
        }
    }

    /// Cap both classes at `rows` rows.
    pub fn with_rows_per_class(mut self, rows: usize) -> Self {
        self.negative_rows = rows;
        self.positive_rows = rows;
        self
    }

    /// Override the permutation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Load up to the configured number of rows per class from both sinks,
/// label them (positive first, then negative), and return a seeded full
/// permutation of the combined table.
pub fn load_balanced_sample(spec: &BalancedSampleSpec) -> Result<Vec<LabeledSample>, CorpusError> {
    let mut rows = read_labeled_rows(&spec.positive_path, Sentiment::Positive, spec.positive_rows)?;
    rows.extend(read_labeled_rows(
        &spec.negative_path,
        Sentiment::Negative,
        spec.negative_rows,
    )?);
    let mut rng = StdRng::seed_from_u64(spec.seed);
    rows.shuffle(&mut rng);
    Ok(rows)
}

fn read_labeled_rows(
    path: &Path,
    sentiment: Sentiment,
    limit: usize,
) -> Result<Vec<LabeledSample>, CorpusError> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines().take(limit) {
        rows.push(LabeledSample {
            text: line?,
            sentiment,
        });
    }
    Ok(rows)
}
