use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger};
use anyhow::Result;

use jornales::database::init_database;
use jornales::middleware::RequestIdMiddleware;
use jornales::{AppState, Config, cors, default_cors_headers, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("API de jornales y fincas v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (also reads .env)
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );
    if config.jwt_secret_ephemeral {
        log::warn!("JWT_SECRET is not set; using a random secret, issued tokens will not survive a restart");
    }

    let pool = init_database(&config.database_url, config.database_max_connections).await?;
    log::info!("Database initialized");

    let state = AppState::new(pool, config.clone());

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .configure(|cfg| state.configure(cfg))
            .wrap(cors())
            .wrap(default_cors_headers(&config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T request_id=%{x-request-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
