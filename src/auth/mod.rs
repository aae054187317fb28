use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::config::Config;
use crate::database::models::{AuthResponse, LoginInput, RegisterInput, Usuario};
use crate::database::repositories::UsuarioRepository;
use crate::error::AppError;

/// Bearer token claims. Tokens carry nothing beyond the user id and expiry;
/// there is no refresh or revocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize, // expiration time
}

impl FromRequest for Claims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let (Some(token), Some(auth_service)) = (token, req.app_data::<Data<AuthService>>())
        else {
            return ready(Err(AppError::Unauthorized));
        };

        ready(auth_service.verify_token(token))
    }
}

fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(token_data.claims)
}

#[derive(Clone)]
pub struct AuthService {
    usuario_repository: UsuarioRepository,
    config: Config,
}

impl AuthService {
    pub fn new(usuario_repository: UsuarioRepository, config: Config) -> Self {
        Self {
            usuario_repository,
            config,
        }
    }

    /// Stores a new user with a bcrypt hash. No token is issued; callers log
    /// in separately.
    pub async fn register(&self, request: RegisterInput) -> Result<i64, AppError> {
        if self
            .usuario_repository
            .username_exists(&request.username)
            .await?
        {
            return Err(AppError::DuplicateUser);
        }

        let password_hash = hash(&request.password, self.config.bcrypt_cost).map_err(|e| {
            log::error!("Failed to hash password: {}", e);
            AppError::internal_server_error()
        })?;

        match self
            .usuario_repository
            .create_user(&request.username, &password_hash, &request.email)
            .await
        {
            Ok(id) => Ok(id),
            // Lost a race with a concurrent registration of the same name.
            Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateUser),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn login(&self, request: LoginInput) -> Result<AuthResponse, AppError> {
        let usuario = self
            .usuario_repository
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let matches = verify(&request.password, &usuario.password).unwrap_or_else(|e| {
            log::warn!("Stored hash for user {} is unusable: {}", usuario.id, e);
            false
        });
        if !matches {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.generate_token(&usuario)?;

        Ok(AuthResponse {
            token,
            user: usuario.into(),
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        decode_token(token, &self.config.jwt_secret).map_err(|e| {
            log::debug!("Rejected bearer token: {}", e);
            AppError::Unauthorized
        })
    }

    pub async fn get_user(&self, claims: &Claims) -> Result<Usuario, AppError> {
        self.usuario_repository
            .find_by_id(claims.user_id)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    fn generate_token(&self, usuario: &Usuario) -> Result<String, AppError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(self.config.jwt_expiration_hours))
            .ok_or_else(|| AppError::internal_server_error_message("invalid token expiry"))?
            .timestamp() as usize;

        let claims = Claims {
            user_id: usuario.id,
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
        .map_err(|e| {
            log::error!("Failed to sign token: {}", e);
            AppError::internal_server_error()
        })
    }
}

fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let claims = Claims {
            user_id: 9,
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"primer-secreto"),
        )
        .unwrap();

        assert_eq!(decode_token(&token, "primer-secreto").unwrap().user_id, 9);
        assert!(decode_token(&token, "otro-secreto").is_err());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let claims = Claims {
            user_id: 9,
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secreto"),
        )
        .unwrap();

        assert!(decode_token(&token, "secreto").is_err());
    }
}
