pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

use actix_cors::Cors;
use actix_web::{http::header, middleware::DefaultHeaders, web};
use sqlx::SqlitePool;

pub use auth::AuthService;
pub use config::Config;
use database::repositories::{
    AsignacionRepository, EmpleadoRepository, FincaRepository, JornadaRepository, PagoRepository,
    UsuarioRepository,
};

/// Everything handlers receive through `web::Data`, built once at startup and
/// cloned into each worker.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<Config>,
    pub auth_service: web::Data<AuthService>,
    pub empleado_repository: web::Data<EmpleadoRepository>,
    pub finca_repository: web::Data<FincaRepository>,
    pub asignacion_repository: web::Data<AsignacionRepository>,
    pub pago_repository: web::Data<PagoRepository>,
    pub jornada_repository: web::Data<JornadaRepository>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let auth_service = AuthService::new(UsuarioRepository::new(pool.clone()), config.clone());

        Self {
            config: web::Data::new(config),
            auth_service: web::Data::new(auth_service),
            empleado_repository: web::Data::new(EmpleadoRepository::new(pool.clone())),
            finca_repository: web::Data::new(FincaRepository::new(pool.clone())),
            asignacion_repository: web::Data::new(AsignacionRepository::new(pool.clone())),
            pago_repository: web::Data::new(PagoRepository::new(pool.clone())),
            jornada_repository: web::Data::new(JornadaRepository::new(pool)),
        }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.config.clone())
            .app_data(self.auth_service.clone())
            .app_data(self.empleado_repository.clone())
            .app_data(self.finca_repository.clone())
            .app_data(self.asignacion_repository.clone())
            .app_data(self.pago_repository.clone())
            .app_data(self.jornada_repository.clone());
    }
}

/// Echoes the caller's `Origin` with credentials allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_origin, _req_head| true)
        .supports_credentials()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_any_header()
        .max_age(1_728_000)
}

/// Requests without an `Origin` get the configured development origin. Only
/// fills headers the CORS layer did not already set.
pub fn default_cors_headers(config: &Config) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            config.cors_default_origin.clone(),
        ))
        .add((header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"))
}
