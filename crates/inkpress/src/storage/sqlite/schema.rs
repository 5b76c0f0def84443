//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.
//!
//! Column names keep their camelCase spelling so databases created by
//! earlier deployments of the blog stay readable.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Posts table
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    slug TEXT UNIQUE NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    pubDate TEXT NOT NULL,
    updatedDate TEXT,
    heroImage TEXT,
    content TEXT NOT NULL,
    draft BOOLEAN DEFAULT false
);

-- Index for the published listing
CREATE INDEX IF NOT EXISTS idx_posts_draft_pub_date ON posts(draft, pubDate);
"#;

pub const SELECT_PUBLISHED_POSTS: &str = r#"
SELECT id, slug, title, description, pubDate, updatedDate, heroImage, content, draft
FROM posts
WHERE draft = 0
ORDER BY pubDate DESC
"#;

pub const INSERT_POST: &str = r#"
INSERT INTO posts (title, slug, description, content, heroImage, pubDate)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const UPDATE_POST: &str = r#"
UPDATE posts
SET title = ?2, slug = ?3, description = ?4, content = ?5, heroImage = ?6, updatedDate = ?7
WHERE id = ?1
"#;

pub const DELETE_POST: &str = r#"
DELETE FROM posts
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS posts"));
        assert!(CREATE_TABLES.contains("slug TEXT UNIQUE NOT NULL"));
        assert!(CREATE_TABLES.contains("CREATE INDEX IF NOT EXISTS"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(SELECT_PUBLISHED_POSTS.contains("draft = 0"));
        assert!(SELECT_PUBLISHED_POSTS.contains("ORDER BY pubDate DESC"));
        assert!(INSERT_POST.contains("INSERT"));
        assert!(UPDATE_POST.contains("updatedDate = ?7"));
        assert!(DELETE_POST.contains("DELETE"));
    }
}
