//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::Entity) for a record struct
///
/// The struct must have `id: i64` and `created_at: DateTime<Utc>` fields.
/// The last argument names the field matched by the collection name filter.
///
/// # Example
///
/// ```rust,ignore
/// pub struct Anime {
///     pub id: i64,
///     pub name: String,
///     pub created_at: DateTime<Utc>,
/// }
///
/// impl_catalog_entity!(Anime, "anime", "animes", "Anime", name);
/// ```
#[macro_export]
macro_rules! impl_catalog_entity {
    ($type:ident, $singular:expr, $plural:expr, $display:expr, $name_field:ident) => {
        impl $crate::core::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn display_name() -> &'static str {
                $display
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn name(&self) -> &str {
                &self.$name_field
            }

            fn with_created_at(self, created_at: ::chrono::DateTime<::chrono::Utc>) -> Self {
                Self { created_at, ..self }
            }
        }
    };
}
