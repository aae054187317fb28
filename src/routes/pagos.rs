use actix_web::web;

use crate::handlers::pagos;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pagos")
            .route("", web::get().to(pagos::get_pagos))
            .route("", web::post().to(pagos::create_pago))
            .route("/{id}", web::get().to(pagos::get_pago))
            .route("/{id}", web::put().to(pagos::update_pago))
            .route("/{id}", web::delete().to(pagos::delete_pago)),
    );
}
