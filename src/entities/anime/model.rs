//! Anime record

use crate::impl_catalog_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl_catalog_entity!(Anime, "anime", "animes", "Anime", name);

impl Anime {
    pub fn new(id: i64, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }

    /// Sample records loaded at startup
    pub fn samples() -> Vec<Self> {
        let now = Utc::now();
        (1..=4)
            .map(|id| Self::new(id, format!("Anime {:02}", id), now))
            .collect()
    }
}
