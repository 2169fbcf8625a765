use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use polarity::{split_reviews, CorpusError, SinkPaths};

fn write_input(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("reviews.jsonl");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn read_sink(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn routes_records_by_rating_with_exact_normalized_lines() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[
            r#"{"overall": 1, "reviewText": "Terrible! Waste of $$$ money..."}"#,
            r#"{"overall": 5, "reviewText": "Great product!!"}"#,
            r#"{"overall": 3, "reviewText": "It's ok."}"#,
        ],
    );

    let summary = split_reviews(&input, &paths).unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.negative, 1);
    assert_eq!(summary.positive, 1);
    assert_eq!(summary.neutral, 1);

    assert_eq!(read_sink(&paths.negative), "terrible waste of money \n");
    assert_eq!(read_sink(&paths.positive), "great product \n");
}

#[test]
fn negative_ratings_never_reach_the_positive_sink() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[
            r#"{"overall": 1, "reviewText": "awful"}"#,
            r#"{"overall": 2, "reviewText": "bad"}"#,
        ],
    );

    split_reviews(&input, &paths).unwrap();

    assert_eq!(read_sink(&paths.negative), "awful\nbad\n");
    assert_eq!(read_sink(&paths.positive), "");
}

#[test]
fn positive_ratings_never_reach_the_negative_sink() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[
            r#"{"overall": 4, "reviewText": "good"}"#,
            r#"{"overall": 5, "reviewText": "great"}"#,
        ],
    );

    split_reviews(&input, &paths).unwrap();

    assert_eq!(read_sink(&paths.positive), "good\ngreat\n");
    assert_eq!(read_sink(&paths.negative), "");
}

#[test]
fn neutral_records_produce_no_output_in_either_sink() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[
            r#"{"overall": 3, "reviewText": "It's ok."}"#,
            r#"{"overall": "3", "reviewText": "also ok"}"#,
        ],
    );

    let summary = split_reviews(&input, &paths).unwrap();
    assert_eq!(summary.neutral, 2);
    assert_eq!(read_sink(&paths.negative), "");
    assert_eq!(read_sink(&paths.positive), "");
}

#[test]
fn rerunning_the_same_input_appends_duplicates() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(temp.path(), &[r#"{"overall": 5, "reviewText": "great"}"#]);

    split_reviews(&input, &paths).unwrap();
    split_reviews(&input, &paths).unwrap();

    assert_eq!(read_sink(&paths.positive), "great\ngreat\n");
}

#[test]
fn malformed_line_aborts_and_later_lines_are_never_written() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[
            r#"{"overall": 1, "reviewText": "before the failure"}"#,
            "not a record",
            r#"{"overall": 5, "reviewText": "after the failure"}"#,
        ],
    );

    let err = split_reviews(&input, &paths).unwrap_err();
    assert!(matches!(err, CorpusError::Parse { line: 2, .. }));

    // Lines appended before the abort stay on disk; later lines are lost.
    assert_eq!(read_sink(&paths.negative), "before the failure\n");
    assert_eq!(read_sink(&paths.positive), "");
}

#[test]
fn missing_required_field_aborts_the_run() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[r#"{"reviewText": "no rating at all"}"#],
    );

    let err = split_reviews(&input, &paths).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::FieldMissing {
            line: 1,
            field: "overall"
        }
    ));
    assert_eq!(read_sink(&paths.negative), "");
    assert_eq!(read_sink(&paths.positive), "");
}

#[test]
fn missing_input_file_is_an_io_error() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());

    let err = split_reviews(temp.path().join("absent.jsonl"), &paths).unwrap_err();
    assert!(matches!(err, CorpusError::Io(_)));
}

#[test]
fn string_and_float_ratings_route_like_integers() {
    let temp = tempdir().unwrap();
    let paths = SinkPaths::in_dir(temp.path());
    let input = write_input(
        temp.path(),
        &[
            r#"{"overall": "1", "reviewText": "string rated"}"#,
            r#"{"overall": 5.0, "reviewText": "float rated"}"#,
        ],
    );

    let summary = split_reviews(&input, &paths).unwrap();
    assert_eq!(summary.negative, 1);
    assert_eq!(summary.positive, 1);
    assert_eq!(read_sink(&paths.negative), "string rated\n");
    assert_eq!(read_sink(&paths.positive), "float rated\n");
}
