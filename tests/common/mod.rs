#![allow(dead_code, unused_macros)]

use anyhow::Result;
use fake::{Fake, faker::name::en::Name};
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;

use jornales::database::init_database;
use jornales::{AppState, Config};

/// Builds the full application (routes, CORS, request ids) around a
/// [`TestContext`] and returns the initialised test service.
macro_rules! init_app {
    ($ctx:expr) => {{
        let state = $ctx.state.clone();
        let config = $ctx.config.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(move |cfg| state.configure(cfg))
                .wrap(jornales::cors())
                .wrap(jornales::default_cors_headers(&config))
                .wrap(jornales::middleware::RequestIdMiddleware)
                .configure(jornales::routes::configure),
        )
        .await
    }};
}

/// Isolated database in a temp directory plus the state the app is built from.
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = test_config(&database_url);
        let pool = init_database(&database_url, 2).await?;
        let state = AppState::new(pool.clone(), config.clone());

        Ok(TestContext {
            pool,
            config,
            state,
            _temp_dir: temp_dir,
        })
    }
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        database_max_connections: 2,
        jwt_secret: "test-jwt-secret-key-that-is-long-enough".to_string(),
        jwt_secret_ephemeral: false,
        jwt_expiration_hours: 24,
        bcrypt_cost: 4,
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        cors_default_origin: "http://localhost:3000".to_string(),
    }
}

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fake_name() -> String {
    Name().fake()
}

pub async fn insert_empleado(pool: &SqlitePool, nombre: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO empleados (nombre, cedula, telefono) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(nombre)
    .bind("2456789010101")
    .bind("5555-1234")
    .fetch_one(pool)
    .await
    .expect("Failed to insert test employee")
}

pub async fn insert_finca(pool: &SqlitePool, nombre: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO fincas (nombre, ubicacion) VALUES (?1, ?2) RETURNING id")
        .bind(nombre)
        .bind("Escuintla")
        .fetch_one(pool)
        .await
        .expect("Failed to insert test farm")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_one(pool)
        .await
        .expect("Failed to count records")
}

/// Saves and restores the given environment variables around a test body.
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub fn new(keys: &[&'static str]) -> Self {
        let saved = keys.iter().map(|key| (*key, env::var(key).ok())).collect();
        for key in keys {
            unsafe {
                env::remove_var(key);
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            unsafe {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
