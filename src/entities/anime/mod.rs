//! Anime resource

pub mod mapper;
pub mod model;
pub mod request;
pub mod response;

pub use mapper::AnimeMapper;
pub use model::Anime;
pub use request::{AnimePostRequest, AnimePutRequest};
pub use response::{AnimeGetResponse, AnimePostResponse};
