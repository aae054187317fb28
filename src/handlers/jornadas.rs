use actix_web::{HttpResponse, web};

use crate::database::models::JornadaRequest;
use crate::database::repositories::JornadaRepository;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, CreatedResponse};

const NOT_FOUND: &str = "Jornada no encontrada";

pub async fn get_jornadas(repo: web::Data<JornadaRepository>) -> Result<HttpResponse, AppError> {
    let jornadas = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(jornadas))
}

pub async fn get_jornada(
    repo: web::Data<JornadaRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let jornada = repo
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(jornada))
}

pub async fn create_jornada(
    repo: web::Data<JornadaRepository>,
    request: web::Json<JornadaRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    let id = repo.create(&input).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new(id, "Jornada registrada exitosamente")))
}

pub async fn update_jornada(
    repo: web::Data<JornadaRepository>,
    path: web::Path<i64>,
    request: web::Json<JornadaRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = request.into_inner().validate()?;

    if !repo.update(id, &input).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Jornada actualizada exitosamente")))
}

pub async fn delete_jornada(
    repo: web::Data<JornadaRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !repo.delete(path.into_inner()).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Jornada eliminada exitosamente")))
}
