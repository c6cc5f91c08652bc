//! Producer resource

pub mod mapper;
pub mod model;
pub mod request;
pub mod response;

pub use mapper::ProducerMapper;
pub use model::Producer;
pub use request::{ProducerPostRequest, ProducerPutRequest};
pub use response::{ProducerGetResponse, ProducerPostResponse};
