//! Student HTTP handlers.
//!
//! ```text
//! POST /api/students/signup {"id":"Bob"}
//! GET /api/students/Bob
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Student;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::schemas::{ErrorSchema, StudentEnvelope};
use crate::inbound::http::state::HttpState;

/// Request payload for signing up.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    #[schema(example = "Bob", max_length = 64)]
    pub id: String,
}

/// Student as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentBody {
    #[schema(example = "Bob")]
    pub id: String,
}

impl From<Student> for StudentBody {
    fn from(student: Student) -> Self {
        Self {
            id: student.id().to_string(),
        }
    }
}

/// Register a student under a client-chosen id.
#[utoipa::path(
    post,
    path = "/api/students/signup",
    request_body = SignUpBody,
    responses(
        (status = 201, description = "Student registered", body = StudentEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Student id already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "signUp"
)]
#[post("/students/signup")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignUpBody>,
) -> ApiResult<HttpResponse> {
    let student = state.students.sign_up(payload.into_inner().id).await?;
    Ok(envelope::created(StudentBody::from(student)))
}

/// Fetch a registered student.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = StudentEnvelope),
        (status = 404, description = "Unknown student", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let student = state.students.get_student(&path.into_inner()).await?;
    Ok(envelope::ok(StudentBody::from(student)))
}

#[cfg(test)]
mod tests {
    //! Handler coverage over mocked ports.
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::{Error, Student, StudentId};
    use crate::inbound::http::test_utils::MockPorts;

    fn student(id: &str) -> Student {
        Student::new(StudentId::new(id).expect("valid id"))
    }

    #[rstest]
    #[actix_web::test]
    async fn sign_up_returns_created_student() {
        let mut ports = MockPorts::new();
        ports
            .students
            .expect_sign_up()
            .withf(|id| id == "Alice")
            .times(1)
            .returning(|id| Ok(student(&id)));
        let app = actix_test::init_service(ports.app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/students/signup")
            .set_json(json!({"id": "Alice"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({"code": 201, "data": {"id": "Alice"}}));
    }

    #[rstest]
    #[case::duplicate(Error::conflict("student Alice already exists"), StatusCode::CONFLICT)]
    #[case::blank(Error::invalid_request("student id must not be empty"), StatusCode::BAD_REQUEST)]
    #[case::store_down(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn sign_up_maps_service_errors(#[case] error: Error, #[case] expected: StatusCode) {
        let mut ports = MockPorts::new();
        ports
            .students
            .expect_sign_up()
            .return_once(move |_| Err(error));
        let app = actix_test::init_service(ports.app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/students/signup")
            .set_json(json!({"id": "Alice"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn get_student_echoes_id() {
        let mut ports = MockPorts::new();
        ports
            .students
            .expect_get_student()
            .returning(|id| Ok(student(id)));
        let app = actix_test::init_service(ports.app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/students/Bob")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body.pointer("/data/id").and_then(Value::as_str), Some("Bob"));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_student_is_not_found() {
        let mut ports = MockPorts::new();
        ports
            .students
            .expect_get_student()
            .returning(|id| Err(Error::not_found(format!("student {id} not found"))));
        let app = actix_test::init_service(ports.app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/students/Nobody")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("student Nobody not found")
        );
    }
}
