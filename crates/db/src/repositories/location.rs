use crate::models::DbLocation;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_location(
    pool: &Pool<Postgres>,
    name: &str,
    address: &str,
    owner_id: i32,
) -> Result<DbLocation> {
    tracing::debug!("Creating location: name={}, owner_id={}", name, owner_id);

    let location = sqlx::query_as::<_, DbLocation>(
        r#"
        INSERT INTO locations (name, address, owner_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, address, owner_id
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(owner_id)
    .fetch_one(pool)
    .await?;

    Ok(location)
}

pub async fn list_locations(pool: &Pool<Postgres>) -> Result<Vec<DbLocation>> {
    let locations = sqlx::query_as::<_, DbLocation>(
        r#"
        SELECT id, name, address, owner_id
        FROM locations
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(locations)
}

pub async fn get_location_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbLocation>> {
    let location = sqlx::query_as::<_, DbLocation>(
        r#"
        SELECT id, name, address, owner_id
        FROM locations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(location)
}

pub async fn list_locations_by_owner(
    pool: &Pool<Postgres>,
    owner_id: i32,
) -> Result<Vec<DbLocation>> {
    let locations = sqlx::query_as::<_, DbLocation>(
        r#"
        SELECT id, name, address, owner_id
        FROM locations
        WHERE owner_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(locations)
}
