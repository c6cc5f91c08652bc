//! Producer mapper

use super::model::Producer;
use super::request::{ProducerPostRequest, ProducerPutRequest};
use super::response::{ProducerGetResponse, ProducerPostResponse};
use crate::core::mapper::Mapper;
use chrono::{DateTime, Utc};

pub struct ProducerMapper;

impl Mapper for ProducerMapper {
    type Entity = Producer;
    type PostRequest = ProducerPostRequest;
    type PutRequest = ProducerPutRequest;
    type GetResponse = ProducerGetResponse;
    type PostResponse = ProducerPostResponse;

    fn from_post_request(
        request: ProducerPostRequest,
        id: i64,
        created_at: DateTime<Utc>,
    ) -> Producer {
        Producer::new(id, request.name.unwrap_or_default(), created_at)
    }

    fn from_put_request(request: ProducerPutRequest) -> Producer {
        Producer::new(
            request.id.unwrap_or_default(),
            request.name.unwrap_or_default(),
            request.created_at.unwrap_or_else(Utc::now),
        )
    }

    fn to_get_response(producer: &Producer) -> ProducerGetResponse {
        ProducerGetResponse {
            id: producer.id,
            name: producer.name.clone(),
            created_at: producer.created_at,
        }
    }

    fn to_post_response(producer: &Producer) -> ProducerPostResponse {
        ProducerPostResponse {
            id: producer.id,
            name: producer.name.clone(),
            created_at: producer.created_at,
        }
    }
}
