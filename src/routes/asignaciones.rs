use actix_web::web;

use crate::handlers::asignaciones;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/asignaciones")
            .route("", web::get().to(asignaciones::get_asignaciones))
            .route("", web::post().to(asignaciones::create_asignacion))
            .route("/{id}", web::get().to(asignaciones::get_asignacion))
            .route("/{id}", web::put().to(asignaciones::update_asignacion))
            .route("/{id}", web::delete().to(asignaciones::delete_asignacion)),
    );
}
