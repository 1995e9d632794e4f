//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST handler in the inbound layer, the health
//! checks, and the schema wrappers from `inbound::http::schemas`. Domain types
//! stay free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::courses::{CourseBody, CreateCourseBody};
use crate::inbound::http::exams::ExamResultBody;
use crate::inbound::http::schemas::{
    CourseEnvelope, CourseListEnvelope, CourseListPayload, ErrorCodeSchema, ErrorSchema,
    ExamResultEnvelope, ExamResultListEnvelope, ExamResultListPayload, StudentEnvelope,
};
use crate::inbound::http::students::{SignUpBody, StudentBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exam registry API",
        description = "Courses, student sign-up, and graded exam submissions.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::students::sign_up,
        crate::inbound::http::students::get_student,
        crate::inbound::http::exams::submit_exam,
        crate::inbound::http::exams::list_results,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateCourseBody,
        CourseBody,
        SignUpBody,
        StudentBody,
        ExamResultBody,
        CourseEnvelope,
        CourseListPayload,
        CourseListEnvelope,
        StudentEnvelope,
        ExamResultEnvelope,
        ExamResultListPayload,
        ExamResultListEnvelope,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "courses", description = "Course registry"),
        (name = "students", description = "Student sign-up and lookup"),
        (name = "exams", description = "Exam submission and results"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
