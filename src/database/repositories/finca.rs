use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::{
    models::{Finca, FincaInput},
    utils::sql,
};

#[derive(Clone)]
pub struct FincaRepository {
    pool: SqlitePool,
}

impl FincaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Finca>> {
        let fincas = sqlx::query_as::<_, Finca>(&sql(r#"
            SELECT
                id,
                nombre,
                ubicacion
            FROM
                fincas
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(fincas)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Finca>> {
        let finca = sqlx::query_as::<_, Finca>(&sql(r#"
            SELECT
                id,
                nombre,
                ubicacion
            FROM
                fincas
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(finca)
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn create(&self, input: &FincaInput) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(&sql(r#"
            INSERT INTO
                fincas (nombre, ubicacion)
            VALUES
                (?, ?)
            RETURNING
                id
        "#))
        .bind(&input.nombre)
        .bind(&input.ubicacion)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &FincaInput) -> Result<bool> {
        let result = sqlx::query(&sql(r#"
            UPDATE
                fincas
            SET
                nombre = ?,
                ubicacion = ?
            WHERE
                id = ?
        "#))
        .bind(&input.nombre)
        .bind(&input.ubicacion)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&sql("DELETE FROM fincas WHERE id = ?"))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
