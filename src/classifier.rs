//! Record classifier and normalizer.
//!
//! Single sequential pass: parse one record per line, bucket it by rating,
//! normalize the text, and append non-neutral lines to the matching sink.
//! All errors abort the run; there is no skip-and-continue recovery.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::CorpusError;
use crate::normalize::normalize_review;
use crate::record::{ReviewRecord, Sentiment};
use crate::sink::{SentimentSinks, SinkPaths};

/// Per-run routing counters returned by `split_reviews`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read from the input.
    pub total: usize,
    /// Lines appended to the negative sink.
    pub negative: usize,
    /// Records discarded at the neutral rating.
    pub neutral: usize,
    /// Lines appended to the positive sink.
    pub positive: usize,
}

/// Split the line-delimited review records in `input` between the two sinks.
///
/// Both sinks are opened once, held for the whole run, and flushed on return.
/// Every non-neutral record appends exactly one normalized line to exactly
/// one sink, in input order; neutral records are discarded silently. The
/// first parse, extraction, or IO failure aborts the run and propagates;
/// lines appended before the failure remain on disk.
pub fn split_reviews(
    input: impl AsRef<Path>,
    paths: &SinkPaths,
) -> Result<RunSummary, CorpusError> {
    let reader = BufReader::new(File::open(input.as_ref())?);
    let mut sinks = SentimentSinks::open(paths)?;
    let mut summary = RunSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let record = ReviewRecord::from_json_line(&line?, line_number)?;
        summary.total += 1;

        let sentiment = Sentiment::from_rating(record.rating);
        match sentiment {
            Sentiment::Neutral => {
                summary.neutral += 1;
                debug!(line = line_number, rating = record.rating, "discarding neutral record");
                continue;
            }
            Sentiment::Negative => summary.negative += 1,
            Sentiment::Positive => summary.positive += 1,
        }

        let normalized = normalize_review(&record.text);
        sinks.append(sentiment, &normalized)?;
        debug!(
            line = line_number,
            rating = record.rating,
            sentiment = ?sentiment,
            "routed record"
        );
    }

    sinks.finish()?;
    info!(
        total = summary.total,
        negative = summary.negative,
        neutral = summary.neutral,
        positive = summary.positive,
        "review split complete"
    );
    Ok(summary)
}
