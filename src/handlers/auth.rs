use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::auth::{AuthService, Claims};
use crate::database::models::{LoginRequest, RegisterRequest};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

pub async fn register(
    auth_service: web::Data<AuthService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;
    let username = input.username.clone();

    let id = auth_service.register(input).await?;
    log::info!("Registered user {} ({})", username, id);

    Ok(HttpResponse::Created().json(ApiResponse::message("Usuario registrado exitosamente")))
}

pub async fn login(
    auth_service: web::Data<AuthService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().validate()?;

    let response = auth_service.login(input).await?;

    Ok(HttpResponse::Ok().json(response))
}

pub async fn me(
    auth_service: web::Data<AuthService>,
    claims: Claims,
) -> Result<HttpResponse, AppError> {
    let usuario = auth_service.get_user(&claims).await?;

    Ok(HttpResponse::Ok().json(MeResponse {
        id: usuario.id,
        username: usuario.username,
        email: usuario.email,
    }))
}
