use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use courtbook_core::models::{
    booking::Booking, court::Court, location::Location, slot::Slot, user::User,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLocation {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub owner_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourt {
    pub id: i32,
    pub name: String,
    pub sport: String,
    pub description: Option<String>,
    pub max_players: i32,
    pub price: f64,
    pub location_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub court_id: i32,
    pub is_booked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: i32,
    pub user_id: i32,
    pub slot_id: i32,
    pub created_at: DateTime<Utc>,
}

/// One booking joined with its user and slot plus the court and location
/// expansions. Court and location columns come from LEFT JOINs and stay
/// `None` when no row backs them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingDetailRow {
    pub id: i32,
    pub user_id: i32,
    pub slot_id: i32,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub slot_start: DateTime<Utc>,
    pub slot_end: DateTime<Utc>,
    pub slot_is_booked: bool,
    pub court_id: Option<i32>,
    pub court_name: Option<String>,
    pub court_sport: Option<String>,
    pub court_description: Option<String>,
    pub court_max_players: Option<i32>,
    pub court_price: Option<f64>,
    pub location_id: Option<i32>,
    pub location_name: Option<String>,
    pub location_address: Option<String>,
    pub location_owner_id: Option<i32>,
}

impl From<DbUser> for User {
    fn from(u: DbUser) -> Self {
        User {
            id: u.id,
            name: u.name,
            email: u.email,
            is_admin: u.is_admin,
        }
    }
}

impl From<DbLocation> for Location {
    fn from(l: DbLocation) -> Self {
        Location {
            id: l.id,
            name: l.name,
            address: l.address,
            owner_id: l.owner_id,
        }
    }
}

impl From<DbCourt> for Court {
    fn from(c: DbCourt) -> Self {
        Court {
            id: c.id,
            name: c.name,
            sport: c.sport,
            description: c.description,
            max_players: c.max_players,
            price: c.price,
            location_id: c.location_id,
        }
    }
}

impl From<DbSlot> for Slot {
    fn from(s: DbSlot) -> Self {
        Slot {
            id: s.id,
            start: s.start_time,
            end: s.end_time,
            court_id: s.court_id,
            is_booked: s.is_booked,
        }
    }
}

impl From<DbBooking> for Booking {
    fn from(b: DbBooking) -> Self {
        Booking {
            id: b.id,
            user_id: b.user_id,
            slot_id: b.slot_id,
            created_at: b.created_at,
        }
    }
}
