//! inkpress_core - domain types and service traits for the inkpress blog backend.
//!
//! Following the Functional Core pattern, this crate holds pure data,
//! validation and the trait seams the server injects implementations into.
//! It performs no I/O.

pub mod generation;
pub mod photos;
pub mod post;
pub mod serde;
pub mod storage;
