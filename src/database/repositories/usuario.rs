use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::{models::Usuario, utils::sql};

#[derive(Clone)]
pub struct UsuarioRepository {
    pool: SqlitePool,
}

impl UsuarioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, username: &str, password_hash: &str, email: &str) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(&sql(r#"
            INSERT INTO
                usuarios (username, password, email)
            VALUES
                (?, ?, ?)
            RETURNING
                id
        "#))
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>(&sql(r#"
            SELECT
                id,
                username,
                password,
                email
            FROM
                usuarios
            WHERE
                username = ?
        "#))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>(&sql(r#"
            SELECT
                id,
                username,
                password,
                email
            FROM
                usuarios
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(&sql(r#"
            SELECT
                COUNT(*)
            FROM
                usuarios
            WHERE
                username = ?
        "#))
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
