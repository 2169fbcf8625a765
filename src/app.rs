//! CLI entry points shared by the `prep_reviews` binary.

use std::error::Error;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use crate::classifier::split_reviews;
use crate::sink::SinkPaths;

#[derive(Debug, Parser)]
#[command(
    name = "prep_reviews",
    disable_help_subcommand = true,
    about = "Split line-delimited review records into polarity corpora",
    long_about = "Read one JSON review record per input line, bucket each by its rating against \
the neutral threshold 3, normalize the review text to lowercase alphanumerics, and append \
non-neutral lines to neg.txt / pos.txt in the working directory.",
    after_help = "Sinks are appended to, never truncated; re-running the same input duplicates lines."
)]
struct PrepReviewsCli {
    #[arg(
        value_name = "INPUT",
        help = "Path to the line-delimited review record file"
    )]
    input: PathBuf,
}

/// Run the corpus split for `prep_reviews`-style argument iterators.
///
/// Help and version requests print and return `Ok`; any pipeline error
/// propagates to the caller for exit-code handling.
pub fn run_prep_reviews<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<PrepReviewsCli, _>(
        std::iter::once("prep_reviews".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let paths = SinkPaths::default();
    let summary = split_reviews(&cli.input, &paths)?;
    println!(
        "appended {} negative and {} positive lines ({} neutral discarded, {} records total)",
        summary.negative, summary.positive, summary.neutral, summary.total
    );
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
