//! User mapper

use super::model::User;
use super::request::{UserPostRequest, UserPutRequest};
use super::response::{UserGetResponse, UserPostResponse};
use crate::core::mapper::Mapper;
use chrono::{DateTime, Utc};

pub struct UserMapper;

impl Mapper for UserMapper {
    type Entity = User;
    type PostRequest = UserPostRequest;
    type PutRequest = UserPutRequest;
    type GetResponse = UserGetResponse;
    type PostResponse = UserPostResponse;

    fn from_post_request(request: UserPostRequest, id: i64, created_at: DateTime<Utc>) -> User {
        User::new(
            id,
            request.first_name.unwrap_or_default(),
            request.last_name.unwrap_or_default(),
            request.email.unwrap_or_default(),
            created_at,
        )
    }

    fn from_put_request(request: UserPutRequest) -> User {
        User::new(
            request.id.unwrap_or_default(),
            request.first_name.unwrap_or_default(),
            request.last_name.unwrap_or_default(),
            request.email.unwrap_or_default(),
            Utc::now(),
        )
    }

    fn to_get_response(user: &User) -> UserGetResponse {
        UserGetResponse {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    fn to_post_response(user: &User) -> UserPostResponse {
        UserPostResponse {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}
