//! Service modules grouping the catalog resources
//!
//! - [`AnimeModule`]: animes, producers and heroes
//! - [`UserModule`]: users

pub mod anime;
pub mod user;

pub use anime::AnimeModule;
pub use user::UserModule;
