use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_user(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    password_hash: Option<&str>,
    is_admin: bool,
) -> Result<DbUser> {
    tracing::debug!("Creating user: email={}, is_admin={}", email, is_admin);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (name, email, password_hash, is_admin)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, password_hash, is_admin
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(is_admin)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, is_admin
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, is_admin
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn update_password(
    pool: &Pool<Postgres>,
    id: i32,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}
