//! Catalog resources: records, request/response shapes and mappers

pub mod macros;

pub mod anime;
pub mod hero;
pub mod producer;
pub mod user;

pub use anime::{Anime, AnimeMapper};
pub use producer::{Producer, ProducerMapper};
pub use user::{UniqueEmail, User, UserMapper};
