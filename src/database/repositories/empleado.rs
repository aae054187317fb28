use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::{
    models::{Empleado, EmpleadoInput},
    utils::sql,
};

#[derive(Clone)]
pub struct EmpleadoRepository {
    pool: SqlitePool,
}

impl EmpleadoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Empleado>> {
        let empleados = sqlx::query_as::<_, Empleado>(&sql(r#"
            SELECT
                id,
                nombre,
                cedula,
                telefono
            FROM
                empleados
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(empleados)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Empleado>> {
        let empleado = sqlx::query_as::<_, Empleado>(&sql(r#"
            SELECT
                id,
                nombre,
                cedula,
                telefono
            FROM
                empleados
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(empleado)
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn create(&self, input: &EmpleadoInput) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(&sql(r#"
            INSERT INTO
                empleados (nombre, cedula, telefono)
            VALUES
                (?, ?, ?)
            RETURNING
                id
        "#))
        .bind(&input.nombre)
        .bind(&input.cedula)
        .bind(&input.telefono)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &EmpleadoInput) -> Result<bool> {
        let result = sqlx::query(&sql(r#"
            UPDATE
                empleados
            SET
                nombre = ?,
                cedula = ?,
                telefono = ?
            WHERE
                id = ?
        "#))
        .bind(&input.nombre)
        .bind(&input.cedula)
        .bind(&input.telefono)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&sql("DELETE FROM empleados WHERE id = ?"))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
