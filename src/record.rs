use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::classifier::NEUTRAL_RATING;
use crate::constants::fields::{RATING_FIELD, TEXT_FIELD};
use crate::constants::loader::{LABEL_NEGATIVE, LABEL_POSITIVE};
use crate::errors::CorpusError;
use crate::types::{FieldName, Rating, ReviewText};

/// Sentiment bucket derived by comparing a record's rating to the neutral threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Rating strictly below the neutral threshold.
    Negative,
    /// Rating exactly at the neutral threshold; discarded by the classifier.
    Neutral,
    /// Rating strictly above the neutral threshold.
    Positive,
}

impl Sentiment {
    /// Bucket a rating against the neutral threshold.
    pub fn from_rating(rating: Rating) -> Self {
        if rating < NEUTRAL_RATING {
            Sentiment::Negative
        } else if rating > NEUTRAL_RATING {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }

    /// Numeric class label used by labeled sample rows (negative 0, positive 1).
    ///
    /// Neutral has no label because neutral records never reach a sink.
    pub fn label_index(self) -> Option<u8> {
        match self {
            Sentiment::Negative => Some(LABEL_NEGATIVE),
            Sentiment::Positive => Some(LABEL_POSITIVE),
            Sentiment::Neutral => None,
        }
    }
}

/// Review payload extracted from one input line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Integer rating coerced from the record's rating field.
    pub rating: Rating,
    /// Raw review text, not yet normalized.
    pub text: ReviewText,
}

impl ReviewRecord {
    /// Parse one JSON object line into a record with checked field extraction.
    ///
    /// `line` is the 1-based input line number used in error reporting.
    /// A line that is not a JSON object fails with `Parse`; a present field of
    /// the wrong type fails with `FieldType` rather than `FieldMissing`.
    pub fn from_json_line(text: &str, line: usize) -> Result<Self, CorpusError> {
        let object: Map<String, Value> =
            serde_json::from_str(text).map_err(|source| CorpusError::Parse { line, source })?;
        let rating = extract_rating(&object, line)?;
        let text = extract_text(&object, line)?;
        Ok(Self { rating, text })
    }
}

fn require_field<'a>(
    object: &'a Map<String, Value>,
    field: FieldName,
    line: usize,
) -> Result<&'a Value, CorpusError> {
    object
        .get(field)
        .ok_or(CorpusError::FieldMissing { line, field })
}

/// Coerce the rating field to an integer the way a loose numeric cast would:
/// integers pass through, floats truncate toward zero, numeric strings parse.
fn extract_rating(object: &Map<String, Value>, line: usize) -> Result<Rating, CorpusError> {
    let value = require_field(object, RATING_FIELD, line)?;
    match value {
        Value::Number(number) => {
            if let Some(rating) = number.as_i64() {
                return Ok(rating);
            }
            match number.as_f64() {
                Some(float) if float.is_finite() => Ok(float as Rating),
                _ => Err(rating_type_error(line, value)),
            }
        }
        Value::String(raw) => {
            let trimmed = raw.trim();
            if let Ok(rating) = trimmed.parse::<Rating>() {
                return Ok(rating);
            }
            match trimmed.parse::<f64>() {
                Ok(float) if float.is_finite() => Ok(float as Rating),
                _ => Err(rating_type_error(line, value)),
            }
        }
        _ => Err(rating_type_error(line, value)),
    }
}

fn rating_type_error(line: usize, value: &Value) -> CorpusError {
    CorpusError::FieldType {
        line,
        field: RATING_FIELD,
        details: format!("expected a number or numeric string, found {value}"),
    }
}

fn extract_text(object: &Map<String, Value>, line: usize) -> Result<ReviewText, CorpusError> {
    let value = require_field(object, TEXT_FIELD, line)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CorpusError::FieldType {
            line,
            field: TEXT_FIELD,
            details: format!("expected a string, found {value}"),
        })
}
