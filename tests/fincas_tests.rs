use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[macro_use]
mod common;

#[actix_web::test]
async fn finca_lifecycle() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/fincas").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));

    let req = test::TestRequest::post()
        .uri("/api/fincas")
        .set_json(json!({ "nombre": "El Porvenir", "ubicacion": "Santa Rosa" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/fincas/{}", id))
        .set_json(json!({ "nombre": "El Porvenir II", "ubicacion": "Jutiapa" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/fincas/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "id": id, "nombre": "El Porvenir II", "ubicacion": "Jutiapa" })
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/fincas/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/fincas/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Finca no encontrada");
}

#[actix_web::test]
async fn finca_requires_ubicacion() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/fincas")
        .set_json(json!({ "nombre": "Sin lugar" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::count_rows(&ctx.pool, "fincas").await, 0);
}
