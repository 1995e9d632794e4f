//! Tests for course HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::Error;
use crate::inbound::http::test_utils::MockPorts;

fn course(code: &str, name: &str) -> Course {
    Course::try_from_strings(code, name).expect("valid course")
}

#[rstest]
#[actix_web::test]
async fn create_course_returns_created_envelope() {
    let mut ports = MockPorts::new();
    ports
        .courses
        .expect_create_course()
        .withf(|request| request.code == "T01" && request.name == "TEST1")
        .times(1)
        .returning(|request| Ok(course(&request.code, &request.name)));
    let app = actix_test::init_service(ports.app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/courses")
        .set_json(json!({"code": "T01", "name": "TEST1"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"code": 201, "data": {"code": "T01", "name": "TEST1"}})
    );
}

#[rstest]
#[actix_web::test]
async fn create_course_surfaces_conflicts() {
    let mut ports = MockPorts::new();
    ports
        .courses
        .expect_create_course()
        .returning(|request| Err(Error::conflict(format!("course {} already exists", request.code))));
    let app = actix_test::init_service(ports.app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/courses")
        .set_json(json!({"code": "T01", "name": "TEST1"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("conflict"));
}

#[rstest]
#[actix_web::test]
async fn create_course_rejects_missing_fields_before_reaching_the_service() {
    let mut ports = MockPorts::new();
    ports.courses.expect_create_course().never();
    let app = actix_test::init_service(ports.app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/courses")
        .set_json(json!({"code": "T01"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[rstest]
#[actix_web::test]
async fn list_courses_nests_under_data_list() {
    let mut ports = MockPorts::new();
    ports.courses.expect_list_courses().returning(|| {
        Ok(vec![
            course("6003", "Introduction to Rust"),
            course("T01", "TEST1"),
        ])
    });
    let app = actix_test::init_service(ports.app()).await;

    let request = actix_test::TestRequest::get().uri("/api/courses").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code"), Some(&json!(200)));
    let codes: Vec<&str> = body
        .pointer("/data/list")
        .and_then(Value::as_array)
        .expect("list present")
        .iter()
        .filter_map(|entry| entry.get("code").and_then(Value::as_str))
        .collect();
    assert_eq!(codes, vec!["6003", "T01"]);
}

#[rstest]
#[actix_web::test]
async fn list_courses_returns_empty_list() {
    let mut ports = MockPorts::new();
    ports.courses.expect_list_courses().returning(|| Ok(Vec::new()));
    let app = actix_test::init_service(ports.app()).await;

    let request = actix_test::TestRequest::get().uri("/api/courses").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body, json!({"code": 200, "data": {"list": []}}));
}

#[rstest]
#[case::found("6003", StatusCode::OK)]
#[case::missing("9999", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn get_course_maps_lookup_outcome(#[case] code: &str, #[case] expected: StatusCode) {
    let mut ports = MockPorts::new();
    ports.courses.expect_get_course().returning(|code| match code {
        "6003" => Ok(course("6003", "Introduction to Rust")),
        other => Err(Error::not_found(format!("course {other} not found"))),
    });
    let app = actix_test::init_service(ports.app()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/courses/{code}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), expected);
}
