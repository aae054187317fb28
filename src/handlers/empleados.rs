use actix_web::{HttpResponse, web};

use crate::database::models::EmpleadoRequest;
use crate::database::repositories::EmpleadoRepository;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, CreatedResponse};

const NOT_FOUND: &str = "Empleado no encontrado";

pub async fn get_empleados(
    repo: web::Data<EmpleadoRepository>,
) -> Result<HttpResponse, AppError> {
    let empleados = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(empleados))
}

pub async fn get_empleado(
    repo: web::Data<EmpleadoRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let empleado = repo
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(empleado))
}

pub async fn create_empleado(
    repo: web::Data<EmpleadoRepository>,
    request: web::Json<EmpleadoRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    let id = repo.create(&input).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new(id, "Empleado creado exitosamente")))
}

pub async fn update_empleado(
    repo: web::Data<EmpleadoRepository>,
    path: web::Path<i64>,
    request: web::Json<EmpleadoRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    if !repo.update(path.into_inner(), &input).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Empleado actualizado exitosamente")))
}

pub async fn delete_empleado(
    repo: web::Data<EmpleadoRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !repo.delete(path.into_inner()).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Empleado eliminado exitosamente")))
}
