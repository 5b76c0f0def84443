//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use inkpress_core::post::Post;

/// Convert a SQLite row to a Post.
///
/// Expected columns: id, slug, title, description, pubDate, updatedDate, heroImage, content, draft
pub fn row_to_post(row: &Row) -> rusqlite::Result<Post> {
    let id: i64 = row.get(0)?;
    let slug: String = row.get(1)?;
    let title: String = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let pub_date: String = row.get(4)?;
    let updated_date: Option<String> = row.get(5)?;
    let hero_image: Option<String> = row.get(6)?;
    let content: String = row.get(7)?;
    let draft: Option<bool> = row.get(8)?;

    Ok(Post {
        id,
        slug,
        title,
        description,
        pub_date: parse_datetime(4, &pub_date)?,
        updated_date: updated_date
            .map(|value| parse_datetime(5, &value))
            .transpose()?,
        hero_image,
        content,
        draft: draft.unwrap_or(false),
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Millisecond precision with a `Z` suffix keeps every stored value the same
/// width, so `ORDER BY pubDate` on the text column is chronological.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_millis_z() {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime(&dt), "2024-06-15T10:30:00.000Z");
    }

    #[test]
    fn test_formatted_values_sort_chronologically() {
        let earlier = DateTime::parse_from_rfc3339("2024-06-15T09:59:59.5Z")
            .unwrap()
            .with_timezone(&Utc);
        let later = DateTime::parse_from_rfc3339("2024-06-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert!(format_datetime(&earlier) < format_datetime(&later));
    }

    #[test]
    fn test_parse_datetime_accepts_stored_format() {
        let parsed = parse_datetime(4, "2024-01-02T03:04:05.678Z").unwrap();
        assert_eq!(format_datetime(&parsed), "2024-01-02T03:04:05.678Z");
    }

    #[test]
    fn test_parse_datetime_invalid() {
        let result = parse_datetime(4, "yesterday");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(4, _, _))
        ));
    }
}
