use actix_web::web;

use crate::handlers::empleados;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/empleados")
            .route("", web::get().to(empleados::get_empleados))
            .route("", web::post().to(empleados::create_empleado))
            .route("/{id}", web::get().to(empleados::get_empleado))
            .route("/{id}", web::put().to(empleados::update_empleado))
            .route("/{id}", web::delete().to(empleados::delete_empleado)),
    );
}
