use actix_web::{HttpResponse, web};

use crate::database::models::{AsignacionRequest, AsignacionUpdated};
use crate::database::repositories::{AsignacionRepository, EmpleadoRepository, FincaRepository};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, CreatedResponse, WithMessage};

const NOT_FOUND: &str = "Asignación no encontrada";

pub async fn get_asignaciones(
    repo: web::Data<AsignacionRepository>,
) -> Result<HttpResponse, AppError> {
    let asignaciones = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(asignaciones))
}

pub async fn get_asignacion(
    repo: web::Data<AsignacionRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let asignacion = repo
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(asignacion))
}

pub async fn create_asignacion(
    repo: web::Data<AsignacionRepository>,
    request: web::Json<AsignacionRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate_create()?;

    let id = repo.create(&input).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new(
        id,
        "Asignación creada exitosamente",
    )))
}

/// Referential checks run in a fixed order (assignment, employee, farm) so the
/// caller learns which reference is missing.
pub async fn update_asignacion(
    repo: web::Data<AsignacionRepository>,
    empleado_repo: web::Data<EmpleadoRepository>,
    finca_repo: web::Data<FincaRepository>,
    path: web::Path<i64>,
    request: web::Json<AsignacionRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = request.into_inner().validate_update()?;

    if !repo.exists(id).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }
    if !empleado_repo.exists(input.empleado_id).await? {
        return Err(AppError::not_found("Empleado no encontrado"));
    }
    if !finca_repo.exists(input.finca_id).await? {
        return Err(AppError::not_found("Finca no encontrada"));
    }

    if !repo.update(id, &input).await? {
        // Deleted between the existence check and the write.
        return Err(AppError::internal_server_error_message(
            "No se pudo actualizar la asignación",
        ));
    }

    Ok(HttpResponse::Ok().json(WithMessage::new(
        "Asignación actualizada exitosamente",
        AsignacionUpdated {
            id,
            empleado_id: input.empleado_id,
            finca_id: input.finca_id,
            fecha_asignacion: input.fecha_asignacion,
        },
    )))
}

pub async fn delete_asignacion(
    repo: web::Data<AsignacionRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !repo.delete(path.into_inner()).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Asignación eliminada exitosamente")))
}
