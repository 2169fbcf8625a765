use crate::types::{FieldName, Rating};

/// Constants used by record field extraction.
pub mod fields {
    use super::FieldName;

    /// Record field holding the numeric star rating.
    pub const RATING_FIELD: FieldName = "overall";
    /// Record field holding the free-form review text.
    pub const TEXT_FIELD: FieldName = "reviewText";
}

/// Constants used by sentiment classification.
pub mod classifier {
    use super::Rating;

    /// Rating treated as neutral; strictly below is negative, strictly above positive.
    pub const NEUTRAL_RATING: Rating = 3;
}

/// Constants used by the sentiment sink pair.
pub mod sinks {
    /// Default filename for the negative sink, relative to the working directory.
    pub const NEGATIVE_FILENAME: &str = "neg.txt";
    /// Default filename for the positive sink, relative to the working directory.
    pub const POSITIVE_FILENAME: &str = "pos.txt";
}

/// Constants used by the balanced sample loader.
pub mod loader {
    /// Default cap on rows read per sentiment class.
    pub const DEFAULT_ROWS_PER_CLASS: usize = 50_000;
    /// Default seed for the deterministic sample permutation.
    pub const DEFAULT_SHUFFLE_SEED: u64 = 42;
    /// Numeric class label assigned to negative rows.
    pub const LABEL_NEGATIVE: u8 = 0;
    /// Numeric class label assigned to positive rows.
    pub const LABEL_POSITIVE: u8 = 1;
}
