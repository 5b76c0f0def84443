mod error;
mod prompt;
mod requests;
mod types;

pub use error::PostError;
pub use prompt::generation_prompt;
pub use requests::{CreatePostInput, CreatePostRequest, UpdatePostRequest};
pub use types::{NewPost, Post, PostUpdate};
