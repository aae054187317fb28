use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::handlers::shared::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Datos incompletos")]
    IncompleteData,

    #[error("Error en el formato de los datos: {0}")]
    InvalidFormat(String),

    #[error("El usuario ya existe")]
    DuplicateUser,

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Token inválido o ausente")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Driver messages are passed through to the caller verbatim.
    #[error("{0}")]
    DatabaseError(sqlx::Error),

    #[error("Error interno del servidor{}", .0.as_ref().map_or("".to_string(), |s| format!(": {}", s)))]
    InternalServerError(Option<String>),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::IncompleteData => StatusCode::BAD_REQUEST,
            AppError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateUser => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        if status_code.is_server_error() {
            log::error!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
            HttpResponse::build(status_code).json(ApiResponse::error(&error_message))
        } else {
            log::warn!(
                "Request rejected with status {}: {}",
                status_code,
                error_message
            );
            HttpResponse::build(status_code).json(ApiResponse::message(&error_message))
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        log::error!("Database error: {}", error);
        AppError::DatabaseError(error)
    }
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn internal_server_error_message(message: impl Into<String>) -> Self {
        AppError::InternalServerError(Some(message.into()))
    }

    pub fn internal_server_error() -> Self {
        AppError::InternalServerError(None)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        log::error!("Anyhow error: {}", error);

        if error.is::<sqlx::Error>() {
            match error.downcast::<sqlx::Error>() {
                Ok(sqlx_err) => return AppError::DatabaseError(sqlx_err),
                Err(original_error) => {
                    return AppError::InternalServerError(Some(original_error.to_string()));
                }
            }
        }

        AppError::InternalServerError(Some(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(AppError::IncompleteData.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidFormat("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::DuplicateUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found("Finca no encontrada").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn anyhow_wrapping_sqlx_becomes_database_error() {
        let err: AppError = anyhow::Error::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, AppError::DatabaseError(sqlx::Error::PoolTimedOut)));

        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::InternalServerError(Some(ref m)) if m == "boom"));
    }

    #[actix_rt::test]
    async fn client_errors_use_message_body_and_server_errors_use_error_body() {
        let body = to_bytes(AppError::IncompleteData.error_response().into_body())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Datos incompletos");
        assert!(json.get("error").is_none());

        let body = to_bytes(
            AppError::DatabaseError(sqlx::Error::PoolTimedOut)
                .error_response()
                .into_body(),
        )
        .await
        .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], sqlx::Error::PoolTimedOut.to_string());
    }
}
