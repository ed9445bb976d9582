//! HTTP body encoding for pair lists.

mod form_encoder;

pub use form_encoder::{FORM_URLENCODED_CONTENT_TYPE, FormEncodeError, encode_form};
