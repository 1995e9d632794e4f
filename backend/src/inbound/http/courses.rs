//! Course HTTP handlers.
//!
//! ```text
//! POST /api/courses {"code":"6003","name":"Introduction to Rust"}
//! GET /api/courses
//! GET /api/courses/6003
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Course;
use crate::domain::ports::CreateCourseRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{self, ListPayload};
use crate::inbound::http::schemas::{CourseEnvelope, CourseListEnvelope, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request payload for creating a course.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseBody {
    #[schema(example = "6003", max_length = 32)]
    pub code: String,
    #[schema(example = "Introduction to Rust", max_length = 128)]
    pub name: String,
}

/// Course as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseBody {
    #[schema(example = "6003")]
    pub code: String,
    #[schema(example = "Introduction to Rust")]
    pub name: String,
}

impl From<Course> for CourseBody {
    fn from(course: Course) -> Self {
        Self {
            code: course.code().to_string(),
            name: course.name().to_string(),
        }
    }
}

/// Register a new course.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseBody,
    responses(
        (status = 201, description = "Course created", body = CourseEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Course code already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCourseBody>,
) -> ApiResult<HttpResponse> {
    let CreateCourseBody { code, name } = payload.into_inner();
    let course = state
        .courses
        .create_course(CreateCourseRequest { code, name })
        .await?;
    Ok(envelope::created(CourseBody::from(course)))
}

/// List every course ordered by code.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Courses", body = CourseListEnvelope),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let courses = state.courses.list_courses().await?;
    let list: Vec<CourseBody> = courses.into_iter().map(CourseBody::from).collect();
    Ok(envelope::ok(ListPayload::from(list)))
}

/// Fetch a single course.
#[utoipa::path(
    get,
    path = "/api/courses/{code}",
    params(("code" = String, Path, description = "Course code")),
    responses(
        (status = 200, description = "Course", body = CourseEnvelope),
        (status = 404, description = "Unknown course", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{code}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let course = state.courses.get_course(&path.into_inner()).await?;
    Ok(envelope::ok(CourseBody::from(course)))
}

#[cfg(test)]
#[path = "courses_tests.rs"]
mod tests;
