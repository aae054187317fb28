use actix_web::web;

use crate::handlers::fincas;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/fincas")
            .route("", web::get().to(fincas::get_fincas))
            .route("", web::post().to(fincas::create_finca))
            .route("/{id}", web::get().to(fincas::get_finca))
            .route("/{id}", web::put().to(fincas::update_finca))
            .route("/{id}", web::delete().to(fincas::delete_finca)),
    );
}
