pub mod error;
pub mod health;
pub mod photos;
pub mod posts;

pub use error::ApiError;
