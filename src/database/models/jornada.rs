use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{lenient_f64, lenient_id, required};
use crate::error::AppError;

/// Flat row produced by the workday ⟕ employee ⟕ farm join. Names are
/// coalesced in SQL so they are never null.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JornadaRow {
    pub id: i64,
    pub empleados_id: i64,
    pub fincas_id: i64,
    pub fecha: NaiveDate,
    pub libras_recolectadas: f64,
    pub precio_libra: f64,
    pub empleado_nombre: String,
    pub empleado_dpi: String,
    pub finca_nombre: String,
    pub finca_ubicacion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JornadaEmpleado {
    pub id: i64,
    pub nombre: String,
    pub dpi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JornadaFinca {
    pub id: i64,
    pub nombre: String,
    pub ubicacion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jornada {
    pub id: i64,
    pub fecha: NaiveDate,
    pub libras_recolectadas: f64,
    pub precio_libra: f64,
    pub empleado: JornadaEmpleado,
    pub finca: JornadaFinca,
}

impl From<JornadaRow> for Jornada {
    fn from(row: JornadaRow) -> Self {
        Self {
            id: row.id,
            fecha: row.fecha,
            libras_recolectadas: row.libras_recolectadas,
            precio_libra: row.precio_libra,
            empleado: JornadaEmpleado {
                id: row.empleados_id,
                nombre: row.empleado_nombre,
                dpi: row.empleado_dpi,
            },
            finca: JornadaFinca {
                id: row.fincas_id,
                nombre: row.finca_nombre,
                ubicacion: row.finca_ubicacion,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JornadaRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub empleados_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub fincas_id: Option<i64>,
    pub fecha: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub libras_recolectadas: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub precio_libra: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct JornadaInput {
    pub empleados_id: i64,
    pub fincas_id: i64,
    pub fecha: NaiveDate,
    pub libras_recolectadas: f64,
    pub precio_libra: f64,
}

impl JornadaRequest {
    pub fn validate(self) -> Result<JornadaInput, AppError> {
        Ok(JornadaInput {
            empleados_id: required(self.empleados_id)?,
            fincas_id: required(self.fincas_id)?,
            fecha: required(self.fecha)?,
            libras_recolectadas: required(self.libras_recolectadas)?,
            precio_libra: required(self.precio_libra)?,
        })
    }
}
