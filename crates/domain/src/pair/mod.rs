//! Key-value pair model used by form bodies, headers and query parameters.

mod bulk;
mod collection;
mod normalize;

pub use bulk::{DISABLED_MARKER, from_bulk_text, from_bulk_text_with_ids, to_bulk_text};
pub use collection::{Pair, PairCollection};
pub use normalize::{FormField, from_domain, to_domain};
