//! User record

use crate::impl_catalog_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl_catalog_entity!(User, "user", "users", "User", first_name);

impl User {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            created_at,
        }
    }

    /// Sample records loaded at startup
    pub fn samples() -> Vec<Self> {
        let now = Utc::now();
        (1..=2)
            .map(|id| {
                let first = format!("firstName{:02}", id);
                let last = format!("lastName{:02}", id);
                let email = format!("{}@{}.com", first, last);
                Self::new(id, first, last, email, now)
            })
            .collect()
    }
}
