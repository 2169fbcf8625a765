use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::sinks::{NEGATIVE_FILENAME, POSITIVE_FILENAME};
use crate::errors::CorpusError;
use crate::record::Sentiment;

/// Locations of the two append-only sink files.
///
/// Passed explicitly to the classifier and loader; the default resolves the
/// conventional filenames against the current working directory.
#[derive(Clone, Debug)]
pub struct SinkPaths {
    /// File receiving normalized negative-review lines.
    pub negative: PathBuf,
    /// File receiving normalized positive-review lines.
    pub positive: PathBuf,
}

impl Default for SinkPaths {
    fn default() -> Self {
        Self {
            negative: PathBuf::from(NEGATIVE_FILENAME),
            positive: PathBuf::from(POSITIVE_FILENAME),
        }
    }
}

impl SinkPaths {
    /// Resolve the conventional sink filenames inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            negative: dir.join(NEGATIVE_FILENAME),
            positive: dir.join(POSITIVE_FILENAME),
        }
    }
}

/// Scoped pair of buffered append-only sink writers.
///
/// Both files are opened once for the duration of a run and held until
/// `finish` flushes them. Dropping without `finish` (the error path) still
/// flushes buffered lines via `BufWriter`'s drop, so output appended before
/// a failure stays on disk.
pub struct SentimentSinks {
    negative: BufWriter<File>,
    positive: BufWriter<File>,
}

impl SentimentSinks {
    /// Open both sinks in append mode, creating them when absent.
    pub fn open(paths: &SinkPaths) -> Result<Self, CorpusError> {
        Ok(Self {
            negative: open_append(&paths.negative)?,
            positive: open_append(&paths.positive)?,
        })
    }

    /// Append one normalized text line, newline-terminated, to the sink for
    /// `sentiment`. Neutral is a silent no-op; neutral records never produce
    /// sink output.
    pub fn append(&mut self, sentiment: Sentiment, text: &str) -> Result<(), CorpusError> {
        let writer = match sentiment {
            Sentiment::Negative => &mut self.negative,
            Sentiment::Positive => &mut self.positive,
            Sentiment::Neutral => return Ok(()),
        };
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush both sinks, surfacing any deferred write error.
    pub fn finish(mut self) -> Result<(), CorpusError> {
        self.negative.flush()?;
        self.positive.flush()?;
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<BufWriter<File>, CorpusError> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn appends_route_to_the_matching_file() {
        let temp = tempdir().unwrap();
        let paths = SinkPaths::in_dir(temp.path());

        let mut sinks = SentimentSinks::open(&paths).unwrap();
        sinks.append(Sentiment::Negative, "bad ").unwrap();
        sinks.append(Sentiment::Positive, "good ").unwrap();
        sinks.append(Sentiment::Neutral, "meh ").unwrap();
        sinks.finish().unwrap();

        assert_eq!(fs::read_to_string(&paths.negative).unwrap(), "bad \n");
        assert_eq!(fs::read_to_string(&paths.positive).unwrap(), "good \n");
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let temp = tempdir().unwrap();
        let paths = SinkPaths::in_dir(temp.path());

        for _ in 0..2 {
            let mut sinks = SentimentSinks::open(&paths).unwrap();
            sinks.append(Sentiment::Positive, "again").unwrap();
            sinks.finish().unwrap();
        }

        assert_eq!(fs::read_to_string(&paths.positive).unwrap(), "again\nagain\n");
    }
}
