//! Anime request bodies

use crate::core::validation::rules::not_blank;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimePostRequest {
    #[validate(
        required(message = "The field 'name' is required"),
        custom(function = "not_blank", message = "The field 'name' is required")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimePutRequest {
    #[validate(required(message = "The field 'id' is required"))]
    pub id: Option<i64>,

    #[validate(
        required(message = "The field 'name' is required"),
        custom(function = "not_blank", message = "The field 'name' is required")
    )]
    pub name: Option<String>,
}
