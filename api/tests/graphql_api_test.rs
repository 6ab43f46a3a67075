//! End-to-end tests for the GraphQL surface

use actix_web::{test, web};
use serde_json::{json, Value};

use rw_api::app::{create_app, AppState};
use rw_api::graphql::build_schema;
use rw_shared::config::JwtConfig;

fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(&JwtConfig::new("test-secret")))
}

macro_rules! init_app {
    () => {{
        let state = test_state();
        let schema = web::Data::new(build_schema(state.get_ref().clone()));
        test::init_service(create_app(state, schema)).await
    }};
}

/// POST a query to /graphql (optionally with a bearer token) and return the
/// response body
macro_rules! graphql {
    ($app:expr, $query:expr) => {
        graphql!($app, $query, Option::<&str>::None)
    };
    ($app:expr, $query:expr, $token:expr) => {{
        let mut req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": $query }));
        if let Some(token) = $token {
            req = req.insert_header(("Authorization", format!("Bearer {}", token)));
        }
        let resp = test::call_service(&$app, req.to_request()).await;
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

/// Register the standard test account over REST
macro_rules! register_user {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "a@b.com", "password": "abcdef" }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
    }};
}

#[actix_web::test]
async fn health_query_answers_ok() {
    let app = init_app!();
    let body = graphql!(app, "{ _health }");
    assert_eq!(body["data"]["_health"], "ok");
}

#[actix_web::test]
async fn login_mutation_issues_a_token() {
    let app = init_app!();
    register_user!(app);

    let body = graphql!(
        app,
        r#"mutation { login(email: "a@b.com", password: "abcdef") { token } }"#
    );
    let token = body["data"]["login"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
}

#[actix_web::test]
async fn login_mutation_rejects_bad_credentials() {
    let app = init_app!();
    register_user!(app);

    let body = graphql!(
        app,
        r#"mutation { login(email: "a@b.com", password: "wrong-pass") { token } }"#
    );
    assert!(body["data"].is_null());
    assert_eq!(body["errors"][0]["message"], "Invalid credentials");
}

#[actix_web::test]
async fn rent_car_mutation_requires_identity() {
    let app = init_app!();

    let body = graphql!(app, r#"mutation { rentCar(carId: "C1") { id status } }"#);
    assert!(body["data"].is_null());
    assert_eq!(body["errors"][0]["message"], "Unauthorized");
}

#[actix_web::test]
async fn rent_car_mutation_uses_the_caller_identity() {
    let app = init_app!();
    register_user!(app);

    let body = graphql!(
        app,
        r#"mutation { login(email: "a@b.com", password: "abcdef") { token } }"#
    );
    let token = body["data"]["login"]["token"].as_str().unwrap().to_string();

    let body = graphql!(
        app,
        r#"mutation { rentCar(carId: "C1") { id userId carId startDate endDate status } }"#,
        Some(&token)
    );
    let rental = &body["data"]["rentCar"];
    assert_eq!(rental["id"], "1");
    assert_eq!(rental["userId"], "1");
    assert_eq!(rental["carId"], "C1");
    assert_eq!(rental["status"], "ACTIVE");
    assert!(rental["endDate"].is_null());

    // The rental is visible through the REST surface too
    let req = test::TestRequest::get()
        .uri("/api/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let rentals: Value = test::read_body_json(resp).await;
    assert_eq!(rentals.as_array().unwrap().len(), 1);
}
