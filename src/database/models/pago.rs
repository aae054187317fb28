use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{lenient_f64, lenient_id, required};
use crate::error::AppError;

pub const NOMBRE_EMPLEADO_AUSENTE: &str = "Sin nombre";

/// Flat row produced by the payment ⟕ employee join. Every column is optional
/// so null data is coerced instead of failing the row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PagoRow {
    pub id: i64,
    pub empleado_id: i64,
    pub libras: Option<f64>,
    pub precio_libra: Option<f64>,
    pub total: Option<f64>,
    pub fecha_pago: Option<NaiveDate>,
    pub empleado_nombre: Option<String>,
    pub empleado_dpi: Option<String>,
    pub empleado_telefono: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagoEmpleado {
    pub id: i64,
    pub nombre: String,
    pub dpi: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    pub id: i64,
    pub fecha_pago: Option<NaiveDate>,
    pub libras: f64,
    pub precio_libra: f64,
    pub total: f64,
    pub empleado: PagoEmpleado,
}

impl From<PagoRow> for Pago {
    fn from(row: PagoRow) -> Self {
        Self {
            id: row.id,
            fecha_pago: row.fecha_pago,
            libras: row.libras.unwrap_or(0.0),
            precio_libra: row.precio_libra.unwrap_or(0.0),
            total: row.total.unwrap_or(0.0),
            empleado: PagoEmpleado {
                id: row.empleado_id,
                nombre: row
                    .empleado_nombre
                    .unwrap_or_else(|| NOMBRE_EMPLEADO_AUSENTE.to_string()),
                dpi: row.empleado_dpi,
                telefono: row.empleado_telefono,
            },
        }
    }
}

/// A client-supplied `total` is not part of the shape and is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PagoRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub empleado_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub libras: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub precio_libra: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct PagoInput {
    pub empleado_id: i64,
    pub libras: f64,
    pub precio_libra: f64,
}

impl PagoInput {
    pub fn total(&self) -> f64 {
        self.libras * self.precio_libra
    }
}

impl PagoRequest {
    /// Rejects amounts whose product does not fit a finite `total`.
    pub fn validate(self) -> Result<PagoInput, AppError> {
        let input = PagoInput {
            empleado_id: required(self.empleado_id)?,
            libras: required(self.libras)?,
            precio_libra: required(self.precio_libra)?,
        };

        if !input.total().is_finite() {
            return Err(AppError::InvalidFormat(format!(
                "el total de {} libras a {} por libra no es un número válido",
                input.libras, input.precio_libra
            )));
        }

        Ok(input)
    }
}

#[derive(Debug, Serialize)]
pub struct PagoUpdated {
    pub id: i64,
    pub total: f64,
}
