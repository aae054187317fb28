use serde::{Deserialize, Serialize};

use super::fields::required;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Finca {
    pub id: i64,
    pub nombre: String,
    pub ubicacion: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FincaRequest {
    pub nombre: Option<String>,
    pub ubicacion: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FincaInput {
    pub nombre: String,
    pub ubicacion: String,
}

impl FincaRequest {
    pub fn validate(self) -> Result<FincaInput, AppError> {
        Ok(FincaInput {
            nombre: required(self.nombre)?,
            ubicacion: required(self.ubicacion)?,
        })
    }
}
