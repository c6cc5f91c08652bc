//! Anime mapper

use super::model::Anime;
use super::request::{AnimePostRequest, AnimePutRequest};
use super::response::{AnimeGetResponse, AnimePostResponse};
use crate::core::mapper::Mapper;
use chrono::{DateTime, Utc};

pub struct AnimeMapper;

impl Mapper for AnimeMapper {
    type Entity = Anime;
    type PostRequest = AnimePostRequest;
    type PutRequest = AnimePutRequest;
    type GetResponse = AnimeGetResponse;
    type PostResponse = AnimePostResponse;

    fn from_post_request(request: AnimePostRequest, id: i64, created_at: DateTime<Utc>) -> Anime {
        Anime::new(id, request.name.unwrap_or_default(), created_at)
    }

    fn from_put_request(request: AnimePutRequest) -> Anime {
        Anime::new(
            request.id.unwrap_or_default(),
            request.name.unwrap_or_default(),
            Utc::now(),
        )
    }

    fn to_get_response(anime: &Anime) -> AnimeGetResponse {
        AnimeGetResponse {
            id: anime.id,
            name: anime.name.clone(),
        }
    }

    fn to_post_response(anime: &Anime) -> AnimePostResponse {
        AnimePostResponse {
            id: anime.id,
            name: anime.name.clone(),
        }
    }
}
