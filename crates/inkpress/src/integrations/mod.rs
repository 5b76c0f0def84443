//! HTTP clients for the third-party services the blog depends on.
//!
//! Each client implements a trait from `inkpress_core` and is built once at
//! startup from [`crate::config::Config`].

pub mod openai;
pub mod unsplash;

pub use openai::OpenAiGenerator;
pub use unsplash::UnsplashClient;

/// Starts a throwaway HTTP server standing in for an upstream API.
#[cfg(test)]
pub(crate) async fn spawn_upstream(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
