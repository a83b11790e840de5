use serde::{Deserialize, Serialize};

use crate::models::court::Court;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub owner_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub name: String,
    pub address: String,
    pub owner_id: i32,
}

/// Location expanded with its courts, as returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationWithCourts {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub owner_id: i32,
    pub courts: Vec<Court>,
}
