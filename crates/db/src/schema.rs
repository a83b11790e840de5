use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create locations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            address VARCHAR(255) NOT NULL,
            owner_id INTEGER NOT NULL REFERENCES users(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create courts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courts (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            sport VARCHAR(255) NOT NULL,
            description TEXT NULL,
            max_players INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            location_id INTEGER NOT NULL REFERENCES locations(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id SERIAL PRIMARY KEY,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            court_id INTEGER NOT NULL REFERENCES courts(id),
            is_booked BOOLEAN NOT NULL DEFAULT FALSE,
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. The unique index on slot_id backs the
    // one-booking-per-slot invariant at the schema level.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            slot_id INTEGER NOT NULL REFERENCES slots(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    let indexes = [
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_bookings_slot_id ON bookings(slot_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_user_id ON bookings(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_created_at ON bookings(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_slots_court_id ON slots(court_id)",
        "CREATE INDEX IF NOT EXISTS idx_slots_start_time ON slots(start_time)",
        "CREATE INDEX IF NOT EXISTS idx_courts_location_id ON courts(location_id)",
        "CREATE INDEX IF NOT EXISTS idx_locations_owner_id ON locations(owner_id)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
