mod common;

use actix_web::{test, web, App};
use backend::routes;
use backend::state::app_state::AppState;
use common::{test_security, test_state};
use serde_json::Value;

#[actix_web::test]
async fn root_serves_the_service_banner() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state().await))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "online");
    assert!(body["message"].as_str().unwrap().contains("Atividades"));
}

#[actix_web::test]
async fn health_reports_up_when_the_database_answers() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state().await))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["database"]["connected"], true);
    assert!(body["database"]["response_time_ms"].is_number());
}

#[actix_web::test]
async fn health_degrades_to_503_without_a_database() {
    let state = AppState::new_without_db(test_security());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 503);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "DEGRADED");
    assert_eq!(body["database"]["connected"], false);
}
