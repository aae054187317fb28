use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

#[macro_use]
mod common;

#[actix_web::test]
async fn register_creates_user_with_hashed_password() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "maria", "password": "secreto123", "email": "maria@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Usuario registrado exitosamente");
    assert!(body.get("token").is_none());

    let stored: String = sqlx::query_scalar("SELECT password FROM usuarios WHERE username = 'maria'")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_ne!(stored, "secreto123");
    assert!(bcrypt::verify("secreto123", &stored).unwrap());
}

#[actix_web::test]
async fn duplicate_username_is_rejected_without_second_row() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let payload = json!({ "username": "pedro", "password": "clave", "email": "pedro@example.com" });

    let first = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "El usuario ya existe");

    assert_eq!(common::count_rows(&ctx.pool, "usuarios").await, 1);
}

#[actix_web::test]
async fn register_requires_every_field() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "sin_email", "password": "clave" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Datos incompletos");
    assert_eq!(common::count_rows(&ctx.pool, "usuarios").await, 0);
}

#[actix_web::test]
async fn login_returns_token_usable_on_me() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let register = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "lucia", "password": "clave-segura", "email": "lucia@example.com" }))
        .to_request();
    test::call_service(&app, register).await;

    let login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "lucia", "password": "clave-segura" }))
        .to_request();
    let resp = test::call_service(&app, login).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["username"], "lucia");
    assert!(body["user"]["id"].as_i64().is_some());
    let token = body["token"].as_str().expect("token in login response").to_string();

    let claims = ctx.state.auth_service.verify_token(&token).unwrap();
    assert_eq!(Some(claims.user_id), body["user"]["id"].as_i64());
    let expected_exp = chrono::Utc::now().timestamp() + 24 * 3600;
    assert!((claims.exp as i64 - expected_exp).abs() < 60);

    let me = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, me).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "lucia@example.com");
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_get_401_without_token() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let register = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "jose", "password": "correcta", "email": "jose@example.com" }))
        .to_request();
    test::call_service(&app, register).await;

    for payload in [
        json!({ "username": "jose", "password": "incorrecta" }),
        json!({ "username": "nadie", "password": "correcta" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("token").is_none());
        assert_eq!(body["message"], "Credenciales inválidas");
    }
}

#[actix_web::test]
async fn me_rejects_missing_and_forged_tokens() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer no-es-un-jwt"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn me_rejects_token_signed_with_another_secret() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let register = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "ana", "password": "clave", "email": "ana@example.com" }))
        .to_request();
    test::call_service(&app, register).await;

    let mut other_config = ctx.config.clone();
    other_config.jwt_secret = "otro-secreto-completamente-distinto".to_string();
    let other_service = jornales::AuthService::new(
        jornales::database::repositories::UsuarioRepository::new(ctx.pool.clone()),
        other_config,
    );
    let foreign = other_service
        .login(jornales::database::models::LoginInput {
            username: "ana".to_string(),
            password: "clave".to_string(),
        })
        .await
        .unwrap();

    assert!(ctx.state.auth_service.verify_token(&foreign.token).is_err());

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", foreign.token)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}
