use serde::{Deserialize, Serialize};

use super::fields::required;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Empleado {
    pub id: i64,
    pub nombre: String,
    /// National identity number.
    pub cedula: String,
    pub telefono: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmpleadoRequest {
    pub nombre: Option<String>,
    pub cedula: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmpleadoInput {
    pub nombre: String,
    pub cedula: String,
    pub telefono: String,
}

impl EmpleadoRequest {
    pub fn validate(self) -> Result<EmpleadoInput, AppError> {
        Ok(EmpleadoInput {
            nombre: required(self.nombre)?,
            cedula: required(self.cedula)?,
            telefono: required(self.telefono)?,
        })
    }
}
