use actix_web::{error::JsonPayloadError, web};

use crate::error::AppError;

pub mod asignaciones;
pub mod auth;
pub mod empleados;
pub mod fincas;
pub mod jornadas;
pub mod pagos;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .configure(auth::configure)
            .configure(empleados::configure)
            .configure(fincas::configure)
            .configure(asignaciones::configure)
            .configure(pagos::configure)
            .configure(jornadas::configure),
    );
}

/// An absent, empty or `null` body (or one that is not JSON) counts as missing
/// data; a body that parses but carries the wrong types is a format error.
/// Request fields are all optional, so a null can only fail at the top level.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = match &err {
            JsonPayloadError::ContentType => AppError::IncompleteData,
            JsonPayloadError::Deserialize(e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
                AppError::IncompleteData
            }
            JsonPayloadError::Deserialize(e) if e.to_string().starts_with("invalid type: null") => {
                AppError::IncompleteData
            }
            JsonPayloadError::Deserialize(e) => AppError::InvalidFormat(e.to_string()),
            other => AppError::InvalidFormat(other.to_string()),
        };
        app_error.into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::InvalidFormat(err.to_string()).into())
}
