use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::location::Location;

/// The record linking a user to a slot they successfully reserved.
/// Immutable once created; one-to-one with a booked slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub slot_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: i32,
    pub slot_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Court data nested in a booking payload. `location` is `null` when no
/// location row backs the court.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCourt {
    pub id: i32,
    pub name: String,
    pub sport: String,
    pub description: Option<String>,
    pub max_players: i32,
    pub price: f64,
    pub location: Option<Location>,
}

/// Slot data nested in a booking payload. `court` is `null` when no court
/// row backs the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_booked: bool,
    pub court: Option<BookingCourt>,
}

/// A booking expanded with slot, court, and location data for display.
/// `user` is present only on the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i32,
    pub user_id: i32,
    pub slot_id: i32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    pub slot: BookingSlot,
}
