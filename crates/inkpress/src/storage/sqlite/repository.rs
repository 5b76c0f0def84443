//! SQLite repository implementation.
//!
//! Implements the repository traits from `inkpress_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use inkpress_core::post::{NewPost, Post, PostUpdate};
use inkpress_core::storage::{PostRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_post};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds the single connection shared by every request handler.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl PostRepository for SqliteRepository {
    async fn list_published(&self) -> Result<Vec<Post>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PUBLISHED_POSTS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_post).map_err(wrap_err)?;

                let mut posts = Vec::new();
                for row_result in rows {
                    posts.push(row_result.map_err(wrap_err)?);
                }
                Ok(posts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Post"))
    }

    async fn create_post(&self, post: &NewPost) -> Result<i64> {
        let title = post.title.clone();
        let slug = post.slug.clone();
        let description = post.description.clone();
        let content = post.content.clone();
        let hero_image = post.hero_image.clone();
        let pub_date = format_datetime(&post.pub_date);
        let post_slug = post.slug.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_POST,
                    rusqlite::params![title, slug, description, content, hero_image, pub_date],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", post_slug))
    }

    async fn update_post(&self, id: i64, update: &PostUpdate) -> Result<()> {
        let title = update.title.clone();
        let slug = update.slug.clone();
        let description = update.description.clone();
        let content = update.content.clone();
        let hero_image = update.hero_image.clone();
        let updated_date = format_datetime(&update.updated_date);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_POST,
                        rusqlite::params![
                            id,
                            title,
                            slug,
                            description,
                            content,
                            hero_image,
                            updated_date
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_POST, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn new_post(slug: &str, pub_date: DateTime<Utc>) -> NewPost {
        NewPost {
            title: format!("Title {slug}"),
            slug: slug.to_string(),
            description: Some("Description".to_string()),
            content: format!("Content for {slug}"),
            hero_image: None,
            pub_date,
        }
    }

    fn update(slug: &str) -> PostUpdate {
        PostUpdate {
            title: "Updated".to_string(),
            slug: slug.to_string(),
            description: None,
            content: "Updated content".to_string(),
            hero_image: Some("https://images.example/new.jpg".to_string()),
            updated_date: at("2024-07-01T08:00:00Z"),
        }
    }

    async fn mark_draft(repo: &SqliteRepository, slug: &'static str) {
        repo.conn
            .call(move |conn| {
                conn.execute("UPDATE posts SET draft = 1 WHERE slug = ?1", [slug])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        SqliteRepository::init_schema(&repo.conn).await.unwrap();

        assert!(repo.list_published().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_list_post() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let pub_date = at("2024-06-15T10:30:00Z");

        let id = repo.create_post(&new_post("hello", pub_date)).await.unwrap();
        let posts = repo.list_published().await.unwrap();

        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, id);
        assert_eq!(post.slug, "hello");
        assert_eq!(post.content, "Content for hello");
        assert_eq!(post.pub_date, pub_date);
        assert_eq!(post.updated_date, None);
        assert!(!post.draft);
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let now = Utc::now();

        let first = repo.create_post(&new_post("one", now)).await.unwrap();
        let second = repo.create_post(&new_post("two", now)).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_list_orders_by_pub_date_desc_and_skips_drafts() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let base = at("2024-01-01T00:00:00Z");

        repo.create_post(&new_post("oldest", base)).await.unwrap();
        repo.create_post(&new_post("newest", base + Duration::days(2)))
            .await
            .unwrap();
        repo.create_post(&new_post("middle", base + Duration::days(1)))
            .await
            .unwrap();
        repo.create_post(&new_post("hidden", base + Duration::days(3)))
            .await
            .unwrap();
        mark_draft(&repo, "hidden").await;

        let slugs: Vec<String> = repo
            .list_published()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();

        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let now = Utc::now();

        repo.create_post(&new_post("hello", now)).await.unwrap();
        let result = repo.create_post(&new_post("hello", now)).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Post",
                id: "hello".to_string(),
            })
        );
        assert_eq!(repo.list_published().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_post_replaces_fields() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let id = repo
            .create_post(&new_post("hello", at("2024-06-15T10:30:00Z")))
            .await
            .unwrap();

        repo.update_post(id, &update("hello-again")).await.unwrap();

        let post = repo.list_published().await.unwrap().remove(0);
        assert_eq!(post.title, "Updated");
        assert_eq!(post.slug, "hello-again");
        assert_eq!(post.description, None);
        assert_eq!(post.content, "Updated content");
        assert_eq!(post.hero_image.as_deref(), Some("https://images.example/new.jpg"));
        assert_eq!(post.updated_date, Some(at("2024-07-01T08:00:00Z")));
        assert_eq!(post.pub_date, at("2024-06-15T10:30:00Z"));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result = repo.update_post(9999, &update("ghost")).await;

        assert_eq!(result, Err(RepositoryError::post_not_found(9999)));
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_is_rejected() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let now = Utc::now();
        repo.create_post(&new_post("taken", now)).await.unwrap();
        let id = repo.create_post(&new_post("mine", now)).await.unwrap();

        let result = repo.update_post(id, &update("taken")).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_delete_post() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let id = repo.create_post(&new_post("bye", Utc::now())).await.unwrap();

        repo.delete_post(id).await.unwrap();

        assert!(repo.list_published().await.unwrap().is_empty());
        assert_eq!(
            repo.delete_post(id).await,
            Err(RepositoryError::post_not_found(id))
        );
    }

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let path = std::env::temp_dir().join(format!(
            "inkpress-test-{}-{}.db",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let path_str = path.to_string_lossy().to_string();

        {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.create_post(&new_post("kept", Utc::now())).await.unwrap();
        }

        let reopened = SqliteRepository::new(&path_str).await.unwrap();
        let posts = reopened.list_published().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "kept");

        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
