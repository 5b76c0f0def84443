//! Text generation seam.
//!
//! The server creates post bodies by sending a prompt to a chat-completion
//! service. The service is reached through [`TextGenerator`] so handlers can
//! be exercised against a fake.

mod error;
mod settings;
mod traits;

pub use error::{GenerationError, Result};
pub use settings::{GenerationSettings, SYSTEM_PROMPT};
pub use traits::TextGenerator;
