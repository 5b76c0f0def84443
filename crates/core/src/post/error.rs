use thiserror::Error;

/// Errors raised while validating post request payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    /// One or more required fields were absent, null or empty.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let error = PostError::MissingFields(vec!["title", "slug"]);
        assert_eq!(error.to_string(), "Missing required fields: title, slug");
    }
}
