use actix_web::web;

use crate::handlers::jornadas;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jornadas")
            .route("", web::get().to(jornadas::get_jornadas))
            .route("", web::post().to(jornadas::create_jornada))
            .route("/{id}", web::get().to(jornadas::get_jornada))
            .route("/{id}", web::put().to(jornadas::update_jornada))
            .route("/{id}", web::delete().to(jornadas::delete_jornada)),
    );
}
