use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::database::models::{PagoRequest, PagoUpdated};
use crate::database::repositories::PagoRepository;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, WithMessage};

const NOT_FOUND: &str = "Pago no encontrado";

pub async fn get_pagos(repo: web::Data<PagoRepository>) -> Result<HttpResponse, AppError> {
    let pagos = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(pagos))
}

pub async fn get_pago(
    repo: web::Data<PagoRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let pago = repo
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(pago))
}

/// Inserts with a server-computed total and today's date, then answers with
/// the stored row re-read through the employee join.
pub async fn create_pago(
    repo: web::Data<PagoRepository>,
    request: web::Json<PagoRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    let id = repo.create(&input, Local::now().date_naive()).await?;

    let pago = repo.find_by_id(id).await?.ok_or_else(|| {
        log::error!("Payment {} vanished right after insert", id);
        AppError::internal_server_error_message("No se pudo leer el pago registrado")
    })?;

    Ok(HttpResponse::Created().json(WithMessage::new("Pago registrado exitosamente", pago)))
}

pub async fn update_pago(
    repo: web::Data<PagoRepository>,
    path: web::Path<i64>,
    request: web::Json<PagoRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = request.into_inner().validate()?;

    if !repo.update(id, &input).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(WithMessage::new(
        "Pago actualizado exitosamente",
        PagoUpdated {
            id,
            total: input.total(),
        },
    )))
}

pub async fn delete_pago(
    repo: web::Data<PagoRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !repo.delete(path.into_inner()).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message("Pago eliminado exitosamente")))
}
