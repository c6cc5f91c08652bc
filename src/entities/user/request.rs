//! User request bodies

use crate::core::validation::rules::{email_address, not_blank};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPostRequest {
    #[validate(
        required(message = "The field 'firstName' is required"),
        custom(function = "not_blank", message = "The field 'firstName' is required")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "The field 'lastName' is required"),
        custom(function = "not_blank", message = "The field 'lastName' is required")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "The field 'email' is required"),
        custom(function = "email_address")
    )]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPutRequest {
    #[validate(required(message = "The field 'id' is required"))]
    pub id: Option<i64>,

    #[validate(
        required(message = "The field 'firstName' is required"),
        custom(function = "not_blank", message = "The field 'firstName' is required")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "The field 'lastName' is required"),
        custom(function = "not_blank", message = "The field 'lastName' is required")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "The field 'email' is required"),
        custom(function = "email_address")
    )]
    pub email: Option<String>,
}
