use chrono::{DateTime, Utc};
use mockall::mock;

use crate::models::{BookingDetailRow, DbCourt, DbLocation, DbSlot, DbUser};
use crate::repositories::booking::ReserveOutcome;

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            name: &'static str,
            email: &'static str,
            password_hash: Option<&'static str>,
            is_admin: bool,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_id(
            &self,
            id: i32,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn update_password(
            &self,
            id: i32,
            password_hash: &'static str,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub LocationRepo {
        pub async fn create_location(
            &self,
            name: &'static str,
            address: &'static str,
            owner_id: i32,
        ) -> eyre::Result<DbLocation>;

        pub async fn list_locations(&self) -> eyre::Result<Vec<DbLocation>>;

        pub async fn get_location_by_id(
            &self,
            id: i32,
        ) -> eyre::Result<Option<DbLocation>>;

        pub async fn list_locations_by_owner(
            &self,
            owner_id: i32,
        ) -> eyre::Result<Vec<DbLocation>>;
    }
}

mock! {
    pub CourtRepo {
        pub async fn create_court(
            &self,
            name: &'static str,
            sport: &'static str,
            description: Option<&'static str>,
            max_players: i32,
            price: f64,
            location_id: i32,
        ) -> eyre::Result<DbCourt>;

        pub async fn list_courts(&self) -> eyre::Result<Vec<DbCourt>>;

        pub async fn get_court_by_id(
            &self,
            id: i32,
        ) -> eyre::Result<Option<DbCourt>>;

        pub async fn list_courts_by_location(
            &self,
            location_id: i32,
        ) -> eyre::Result<Vec<DbCourt>>;
    }
}

mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            court_id: i32,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
        ) -> eyre::Result<DbSlot>;

        pub async fn create_slots(
            &self,
            slots: Vec<(i32, DateTime<Utc>, DateTime<Utc>)>,
        ) -> eyre::Result<u64>;

        pub async fn get_slots_by_court(
            &self,
            court_id: i32,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn get_slot_by_id(
            &self,
            id: i32,
        ) -> eyre::Result<Option<DbSlot>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn reserve_slot(
            &self,
            user_id: i32,
            slot_id: i32,
        ) -> eyre::Result<ReserveOutcome>;

        pub async fn get_booking_detail(
            &self,
            booking_id: i32,
        ) -> eyre::Result<Option<BookingDetailRow>>;

        pub async fn list_bookings(&self) -> eyre::Result<Vec<BookingDetailRow>>;

        pub async fn list_bookings_by_user(
            &self,
            user_id: i32,
        ) -> eyre::Result<Vec<BookingDetailRow>>;
    }
}
