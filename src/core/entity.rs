//! Entity trait defining the core abstraction for all catalog records

use chrono::{DateTime, Utc};

/// Base trait for every record held by a repository.
///
/// Entities are immutable values. All entities have:
/// - id: Server-assigned numeric identifier, unique within a store
/// - created_at: Creation timestamp, set once and carried across updates
/// - a filterable name used by the collection name filter
///
/// Updates never mutate a record in place; they build a new value and carry
/// protected fields forward with [`Entity::with_created_at`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "animes", "users")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "anime", "user")
    fn resource_name_singular() -> &'static str;

    /// Human-facing name used in error messages (e.g., "Anime")
    fn display_name() -> &'static str;

    // === Core Entity Fields ===

    /// Get the unique identifier for this entity instance
    fn id(&self) -> i64;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the value matched by the name filter
    fn name(&self) -> &str;

    /// Return a copy of this entity carrying the given creation timestamp
    fn with_created_at(self, created_at: DateTime<Utc>) -> Self;

    // === Utility Methods ===

    /// Case-insensitive exact match against the filterable name.
    ///
    /// An empty candidate never matches.
    fn matches_name(&self, name: &str) -> bool {
        names_match(self.name(), name)
    }
}

/// Case-insensitive exact name comparison shared by every name lookup
///
/// An empty candidate never matches.
pub fn names_match(stored: &str, candidate: &str) -> bool {
    !candidate.is_empty() && stored.to_lowercase() == candidate.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEntity {
        id: i64,
        name: String,
        created_at: DateTime<Utc>,
    }

    impl Entity for TestEntity {
        fn resource_name() -> &'static str {
            "test_entities"
        }

        fn resource_name_singular() -> &'static str {
            "test_entity"
        }

        fn display_name() -> &'static str {
            "Test entity"
        }

        fn id(&self) -> i64 {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn with_created_at(self, created_at: DateTime<Utc>) -> Self {
            Self { created_at, ..self }
        }
    }

    fn entity(name: &str) -> TestEntity {
        TestEntity {
            id: 1,
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_name_ignores_case() {
        let e = entity("Anime 01");
        assert!(e.matches_name("anime 01"));
        assert!(e.matches_name("ANIME 01"));
        assert!(!e.matches_name("Anime 0"));
    }

    #[test]
    fn test_empty_name_never_matches() {
        assert!(!entity("").matches_name(""));
        assert!(!entity("Anime 01").matches_name(""));
    }

    #[test]
    fn test_names_match_folds_unicode_case() {
        assert!(names_match("Hero 01", "hero 01"));
        assert!(names_match("Ação", "AÇÃO"));
        assert!(!names_match("Hero 01", ""));
    }

    #[test]
    fn test_with_created_at_keeps_other_fields() {
        let e = entity("Naruto");
        let past = Utc::now() - chrono::Duration::days(3);
        let moved = e.clone().with_created_at(past);
        assert_eq!(moved.created_at, past);
        assert_eq!(moved.name, e.name);
        assert_eq!(moved.id, e.id);
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(TestEntity::resource_name(), "test_entities");
        assert_eq!(TestEntity::resource_name_singular(), "test_entity");
        assert_eq!(TestEntity::display_name(), "Test entity");
    }
}
