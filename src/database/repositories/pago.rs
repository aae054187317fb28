use anyhow::Result;
use sqlx::{FromRow, SqlitePool};

use crate::database::{
    models::{Pago, PagoInput, PagoRow},
    utils::{best_effort, sql},
};

const SELECT_PAGOS: &str = r#"
    SELECT
        p.id,
        p.empleado_id,
        p.libras,
        p.precio_libra,
        p.total,
        p.fecha_pago,
        e.nombre AS empleado_nombre,
        e.cedula AS empleado_dpi,
        e.telefono AS empleado_telefono
    FROM
        pagos p
        LEFT JOIN empleados e ON p.empleado_id = e.id
"#;

#[derive(Clone)]
pub struct PagoRepository {
    pool: SqlitePool,
}

impl PagoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Best-effort listing: rows whose columns cannot be decoded are logged
    /// and left out rather than failing the request.
    pub async fn get_all(&self) -> Result<Vec<Pago>> {
        let rows = sqlx::query(&sql(&format!("{} ORDER BY p.id", SELECT_PAGOS)))
            .fetch_all(&self.pool)
            .await?;

        Ok(best_effort(rows.iter(), "pago", |row| {
            PagoRow::from_row(row).map(Pago::from)
        }))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Pago>> {
        let row = sqlx::query_as::<_, PagoRow>(&sql(&format!("{} WHERE p.id = ?", SELECT_PAGOS)))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Pago::from))
    }

    pub async fn create(&self, input: &PagoInput, fecha_pago: chrono::NaiveDate) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(&sql(r#"
            INSERT INTO
                pagos (empleado_id, libras, precio_libra, total, fecha_pago)
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id
        "#))
        .bind(input.empleado_id)
        .bind(input.libras)
        .bind(input.precio_libra)
        .bind(input.total())
        .bind(fecha_pago)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &PagoInput) -> Result<bool> {
        let result = sqlx::query(&sql(r#"
            UPDATE
                pagos
            SET
                empleado_id = ?,
                libras = ?,
                precio_libra = ?,
                total = ?
            WHERE
                id = ?
        "#))
        .bind(input.empleado_id)
        .bind(input.libras)
        .bind(input.precio_libra)
        .bind(input.total())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&sql("DELETE FROM pagos WHERE id = ?"))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
