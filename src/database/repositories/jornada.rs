use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::{
    models::{Jornada, JornadaInput, JornadaRow},
    utils::sql,
};

const SELECT_JORNADAS: &str = r#"
    SELECT
        j.id,
        j.empleados_id,
        j.fincas_id,
        j.fecha,
        j.libras_recolectadas,
        j.precio_libra,
        COALESCE(e.nombre, 'Sin empleado') AS empleado_nombre,
        COALESCE(e.cedula, '') AS empleado_dpi,
        COALESCE(f.nombre, 'Sin finca') AS finca_nombre,
        COALESCE(f.ubicacion, '') AS finca_ubicacion
    FROM
        jornadas j
        LEFT JOIN empleados e ON j.empleados_id = e.id
        LEFT JOIN fincas f ON j.fincas_id = f.id
"#;

#[derive(Clone)]
pub struct JornadaRepository {
    pool: SqlitePool,
}

impl JornadaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Jornada>> {
        let rows = sqlx::query_as::<_, JornadaRow>(&sql(&format!(
            "{} ORDER BY j.fecha DESC, j.id DESC",
            SELECT_JORNADAS
        )))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Jornada::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Jornada>> {
        let row = sqlx::query_as::<_, JornadaRow>(&sql(&format!(
            "{} WHERE j.id = ?",
            SELECT_JORNADAS
        )))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Jornada::from))
    }

    pub async fn create(&self, input: &JornadaInput) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(&sql(r#"
            INSERT INTO
                jornadas (empleados_id, fincas_id, fecha, libras_recolectadas, precio_libra)
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id
        "#))
        .bind(input.empleados_id)
        .bind(input.fincas_id)
        .bind(input.fecha)
        .bind(input.libras_recolectadas)
        .bind(input.precio_libra)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: i64, input: &JornadaInput) -> Result<bool> {
        let result = sqlx::query(&sql(r#"
            UPDATE
                jornadas
            SET
                empleados_id = ?,
                fincas_id = ?,
                fecha = ?,
                libras_recolectadas = ?,
                precio_libra = ?
            WHERE
                id = ?
        "#))
        .bind(input.empleados_id)
        .bind(input.fincas_id)
        .bind(input.fecha)
        .bind(input.libras_recolectadas)
        .bind(input.precio_libra)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&sql("DELETE FROM jornadas WHERE id = ?"))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
