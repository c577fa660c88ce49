//! Mapping record entity.

/// The stored association between an original URL and its short id.
///
/// Both fields are unique across the store. A record is written once and is
/// never updated, so `short_id` is stable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    /// The URL exactly as it was submitted.
    pub original_url: String,
    /// Sequential identifier, starting at 1.
    pub short_id: i64,
}

impl MappingRecord {
    /// Creates a new mapping record.
    pub fn new(original_url: impl Into<String>, short_id: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_record_creation() {
        let record = MappingRecord::new("https://example.com", 1);

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_id, 1);
    }

    #[test]
    fn test_mapping_record_equality_is_exact() {
        let a = MappingRecord::new("https://example.com", 1);
        let b = MappingRecord::new("https://example.com/", 1);

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
