use serde::{Deserialize, Serialize};

use crate::models::location::Location;
use crate::models::slot::Slot;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: i32,
    pub name: String,
    pub sport: String,
    pub description: Option<String>,
    pub max_players: i32,
    pub price: f64,
    pub location_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourtRequest {
    pub name: String,
    pub sport: String,
    pub description: Option<String>,
    pub max_players: i32,
    pub price: f64,
    pub location_id: i32,
}

/// Court expanded with its slots, and with its location where the endpoint
/// includes one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtWithSlots {
    pub id: i32,
    pub name: String,
    pub sport: String,
    pub description: Option<String>,
    pub max_players: i32,
    pub price: f64,
    pub location_id: i32,
    pub slots: Vec<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
