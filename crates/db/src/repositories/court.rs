use crate::models::DbCourt;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_court(
    pool: &Pool<Postgres>,
    name: &str,
    sport: &str,
    description: Option<&str>,
    max_players: i32,
    price: f64,
    location_id: i32,
) -> Result<DbCourt> {
    tracing::debug!(
        "Creating court: name={}, sport={}, location_id={}",
        name,
        sport,
        location_id
    );

    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        INSERT INTO courts (name, sport, description, max_players, price, location_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, sport, description, max_players, price, location_id
        "#,
    )
    .bind(name)
    .bind(sport)
    .bind(description)
    .bind(max_players)
    .bind(price)
    .bind(location_id)
    .fetch_one(pool)
    .await?;

    Ok(court)
}

pub async fn list_courts(pool: &Pool<Postgres>) -> Result<Vec<DbCourt>> {
    let courts = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, name, sport, description, max_players, price, location_id
        FROM courts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(courts)
}

pub async fn get_court_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbCourt>> {
    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, name, sport, description, max_players, price, location_id
        FROM courts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(court)
}

pub async fn list_courts_by_location(
    pool: &Pool<Postgres>,
    location_id: i32,
) -> Result<Vec<DbCourt>> {
    let courts = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, name, sport, description, max_players, price, location_id
        FROM courts
        WHERE location_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(location_id)
    .fetch_all(pool)
    .await?;

    Ok(courts)
}
