//! User resource

pub mod mapper;
pub mod model;
pub mod request;
pub mod response;
pub mod rules;

pub use mapper::UserMapper;
pub use model::User;
pub use request::{UserPostRequest, UserPutRequest};
pub use response::{UserGetResponse, UserPostResponse};
pub use rules::UniqueEmail;
