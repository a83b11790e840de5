use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Number of days of slots produced by the generation endpoint.
pub const GRID_DAYS: i64 = 7;
/// First bookable hour of the day (inclusive).
pub const GRID_OPEN_HOUR: u32 = 6;
/// Last bookable hour of the day (exclusive).
pub const GRID_CLOSE_HOUR: u32 = 22;

/// A fixed time interval on a specific court that can be reserved once.
///
/// `is_booked` is monotonic: it moves from `false` to `true` exactly once,
/// by a successful reservation, and never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub court_id: i32,
    pub is_booked: bool,
}

/// One entry of a bulk slot-creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub court_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateSlotsRequest {
    pub slots: Vec<NewSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateSlotsResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSlotsResponse {
    pub message: String,
    pub count: usize,
}

/// Builds the standard one-hour slot grid for a court: `GRID_DAYS` days
/// starting at `from`'s date, one slot per hour from `GRID_OPEN_HOUR` up to
/// `GRID_CLOSE_HOUR`.
///
/// Every returned interval satisfies `start < end`.
pub fn hourly_grid(from: DateTime<Utc>) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let base = from
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(from);

    let mut slots = Vec::with_capacity((GRID_DAYS as usize) * ((GRID_CLOSE_HOUR - GRID_OPEN_HOUR) as usize));
    for day in 0..GRID_DAYS {
        for hour in GRID_OPEN_HOUR..GRID_CLOSE_HOUR {
            let start = (base + Duration::days(day))
                .with_hour(hour)
                .unwrap_or(base + Duration::days(day));
            let end = start + Duration::hours(1);
            slots.push((start, end));
        }
    }
    slots
}
