use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::{
    models::{Asignacion, AsignacionRow, AsignacionUpdate, NewAsignacion},
    utils::sql,
};

const SELECT_ASIGNACIONES: &str = r#"
    SELECT
        a.id,
        a.empleado_id,
        a.finca_id,
        a.fecha_asignacion,
        a.descripcion,
        e.nombre AS empleado_nombre,
        e.cedula AS empleado_dpi,
        e.telefono AS empleado_telefono,
        f.nombre AS finca_nombre,
        f.ubicacion AS finca_ubicacion
    FROM
        asignaciones a
        LEFT JOIN empleados e ON a.empleado_id = e.id
        LEFT JOIN fincas f ON a.finca_id = f.id
"#;

#[derive(Clone)]
pub struct AsignacionRepository {
    pool: SqlitePool,
}

impl AsignacionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Asignacion>> {
        let rows = sqlx::query_as::<_, AsignacionRow>(&sql(&format!(
            "{} ORDER BY a.id",
            SELECT_ASIGNACIONES
        )))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Asignacion::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Asignacion>> {
        let row = sqlx::query_as::<_, AsignacionRow>(&sql(&format!(
            "{} WHERE a.id = ?",
            SELECT_ASIGNACIONES
        )))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Asignacion::from))
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(&sql("SELECT COUNT(*) FROM asignaciones WHERE id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, input: &NewAsignacion) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(&sql(r#"
            INSERT INTO
                asignaciones (empleado_id, finca_id, fecha_asignacion, descripcion)
            VALUES
                (?, ?, ?, ?)
            RETURNING
                id
        "#))
        .bind(input.empleado_id)
        .bind(input.finca_id)
        .bind(input.fecha_asignacion)
        .bind(&input.descripcion)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &AsignacionUpdate) -> Result<bool> {
        let result = sqlx::query(&sql(r#"
            UPDATE
                asignaciones
            SET
                empleado_id = ?,
                finca_id = ?,
                fecha_asignacion = ?,
                descripcion = COALESCE(?, descripcion)
            WHERE
                id = ?
        "#))
        .bind(input.empleado_id)
        .bind(input.finca_id)
        .bind(input.fecha_asignacion)
        .bind(input.descripcion.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&sql("DELETE FROM asignaciones WHERE id = ?"))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
