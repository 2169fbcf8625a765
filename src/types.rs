/// Raw free-form review text extracted from a record.
/// Example: `Great product!!`
pub type ReviewText = String;
/// Lowercased alphanumeric text with separator runs collapsed to spaces.
/// Example: `great product `
pub type NormalizedText = String;
/// Integer star rating attached to a review.
/// Examples: `1`, `5`
pub type Rating = i64;
/// Name of a required record field, used in error reporting.
/// Examples: `overall`, `reviewText`
pub type FieldName = &'static str;
