//! Producer request bodies

use crate::core::validation::rules::{in_the_past, not_blank};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProducerPostRequest {
    #[validate(
        required(message = "The field 'name' is required"),
        custom(function = "not_blank", message = "The field 'name' is required")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProducerPutRequest {
    #[validate(
        required(message = "Id cannot be null"),
        range(min = 1, message = "Id must be positive")
    )]
    pub id: Option<i64>,

    #[validate(
        required(message = "Name cannot be blank"),
        custom(function = "not_blank", message = "Name cannot be blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Created at cannot be null"),
        custom(function = "in_the_past", message = "Created at must be in the past")
    )]
    pub created_at: Option<DateTime<Utc>>,
}
