use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::fields::{lenient_id, required};
use crate::error::AppError;

/// Flat row produced by the assignment ⟕ employee ⟕ farm join.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AsignacionRow {
    pub id: i64,
    pub empleado_id: i64,
    pub finca_id: i64,
    pub fecha_asignacion: NaiveDate,
    pub descripcion: Option<String>,
    pub empleado_nombre: Option<String>,
    pub empleado_dpi: Option<String>,
    pub empleado_telefono: Option<String>,
    pub finca_nombre: Option<String>,
    pub finca_ubicacion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpleadoResumen {
    pub id: i64,
    pub nombre: Option<String>,
    pub dpi: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FincaResumen {
    pub id: i64,
    pub nombre: Option<String>,
    pub ubicacion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asignacion {
    pub id: i64,
    pub fecha_asignacion: NaiveDate,
    pub descripcion: String,
    pub empleado: EmpleadoResumen,
    pub finca: FincaResumen,
}

impl From<AsignacionRow> for Asignacion {
    fn from(row: AsignacionRow) -> Self {
        Self {
            id: row.id,
            fecha_asignacion: row.fecha_asignacion,
            descripcion: row.descripcion.unwrap_or_default(),
            empleado: EmpleadoResumen {
                id: row.empleado_id,
                nombre: row.empleado_nombre,
                dpi: row.empleado_dpi,
                telefono: row.empleado_telefono,
            },
            finca: FincaResumen {
                id: row.finca_id,
                nombre: row.finca_nombre,
                ubicacion: row.finca_ubicacion,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AsignacionRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub empleado_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub finca_id: Option<i64>,
    pub fecha_asignacion: Option<NaiveDate>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAsignacion {
    pub empleado_id: i64,
    pub finca_id: i64,
    pub fecha_asignacion: NaiveDate,
    pub descripcion: String,
}

#[derive(Debug, Clone)]
pub struct AsignacionUpdate {
    pub empleado_id: i64,
    pub finca_id: i64,
    pub fecha_asignacion: NaiveDate,
    /// `None` keeps the stored description.
    pub descripcion: Option<String>,
}

impl AsignacionRequest {
    pub fn validate_create(self) -> Result<NewAsignacion, AppError> {
        Ok(NewAsignacion {
            empleado_id: required(self.empleado_id)?,
            finca_id: required(self.finca_id)?,
            fecha_asignacion: self
                .fecha_asignacion
                .unwrap_or_else(|| Local::now().date_naive()),
            descripcion: self.descripcion.unwrap_or_default(),
        })
    }

    pub fn validate_update(self) -> Result<AsignacionUpdate, AppError> {
        Ok(AsignacionUpdate {
            empleado_id: required(self.empleado_id)?,
            finca_id: required(self.finca_id)?,
            fecha_asignacion: required(self.fecha_asignacion)?,
            descripcion: self.descripcion,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AsignacionUpdated {
    pub id: i64,
    pub empleado_id: i64,
    pub finca_id: i64,
    pub fecha_asignacion: NaiveDate,
}
