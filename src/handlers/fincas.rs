use actix_web::{HttpResponse, web};

use crate::database::models::FincaRequest;
use crate::database::repositories::FincaRepository;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, CreatedResponse};

const NOT_FOUND: &str = "Finca no encontrada";

pub async fn get_fincas(repo: web::Data<FincaRepository>) -> Result<HttpResponse, AppError> {
    let fincas = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(fincas))
}

pub async fn get_finca(
    repo: web::Data<FincaRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let finca = repo
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(finca))
}

pub async fn create_finca(
    repo: web::Data<FincaRepository>,
    request: web::Json<FincaRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    let id = repo.create(&input).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new(id, "Finca creada exitosamente")))
}

pub async fn update_finca(
    repo: web::Data<FincaRepository>,
    path: web::Path<i64>,
    request: web::Json<FincaRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    if !repo.update(path.into_inner(), &input).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Finca actualizada exitosamente")))
}

pub async fn delete_finca(
    repo: web::Data<FincaRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !repo.delete(path.into_inner()).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Finca eliminada exitosamente")))
}
