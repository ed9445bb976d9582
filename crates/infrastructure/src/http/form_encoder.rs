//! `application/x-www-form-urlencoded` encoding of form pairs.

use courier_domain::PairCollection;

/// Content type of an encoded form body.
pub const FORM_URLENCODED_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Error encoding a form body.
#[derive(Debug, thiserror::Error)]
#[error("Failed to encode form body: {0}")]
pub struct FormEncodeError(#[from] serde_urlencoded::ser::Error);

/// Encodes the enabled, named pairs of `pairs` as a form body, in order.
///
/// # Errors
///
/// Returns an error if the encoder rejects the input.
pub fn encode_form(pairs: &PairCollection) -> Result<String, FormEncodeError> {
    let fields: Vec<(&str, &str)> = pairs
        .enabled()
        .filter(|pair| !pair.name.is_empty())
        .map(|pair| (pair.name.as_str(), pair.value.as_str()))
        .collect();
    Ok(serde_urlencoded::to_string(fields)?)
}
