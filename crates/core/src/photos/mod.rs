//! Photo search seam.
//!
//! Hero images come from a third-party photo service. Payloads are passed
//! through untouched, so they are modelled as `serde_json::Value`.

mod error;
mod traits;
mod types;

pub use error::{PhotoError, Result};
pub use traits::PhotoProvider;
pub use types::{PhotoSearch, PhotoSearchQuery, DEFAULT_PAGE, DEFAULT_PER_PAGE};
