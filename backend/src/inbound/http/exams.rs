//! Exam submission HTTP handlers.
//!
//! ```text
//! PUT /api/students/Bob/exams/6003
//! GET /api/students/Bob/exams
//! ```
//!
//! Submissions carry no body: the grade is assigned server-side.

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ExamResult;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{self, ListPayload};
use crate::inbound::http::schemas::{ErrorSchema, ExamResultEnvelope, ExamResultListEnvelope};
use crate::inbound::http::state::HttpState;

/// Graded exam as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamResultBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "Bob")]
    pub student_id: String,
    #[schema(example = "6003")]
    pub course_code: String,
    #[schema(example = "B", pattern = "^[A-F]$")]
    pub grade: String,
    #[schema(format = "date-time")]
    pub submitted_at: String,
}

impl From<ExamResult> for ExamResultBody {
    fn from(result: ExamResult) -> Self {
        Self {
            id: result.id().to_string(),
            student_id: result.student_id().to_string(),
            course_code: result.course_code().to_string(),
            grade: result.grade().to_string(),
            submitted_at: result.submitted_at().to_rfc3339(),
        }
    }
}

/// Submit an exam and receive the assigned grade.
#[utoipa::path(
    put,
    path = "/api/students/{id}/exams/{courseCode}",
    params(
        ("id" = String, Path, description = "Student id"),
        ("courseCode" = String, Path, description = "Course code")
    ),
    responses(
        (status = 200, description = "Exam graded", body = ExamResultEnvelope),
        (status = 404, description = "Unknown student or course", body = ErrorSchema),
        (status = 409, description = "A result already exists for this course", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["exams"],
    operation_id = "submitExam"
)]
#[put("/students/{id}/exams/{course_code}")]
pub async fn submit_exam(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (student_id, course_code) = path.into_inner();
    let result = state.exams.submit_exam(&student_id, &course_code).await?;
    Ok(envelope::ok(ExamResultBody::from(result)))
}

/// List a student's graded exams in submission order.
#[utoipa::path(
    get,
    path = "/api/students/{id}/exams",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Exam results", body = ExamResultListEnvelope),
        (status = 404, description = "Unknown student", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["exams"],
    operation_id = "listExamResults"
)]
#[get("/students/{id}/exams")]
pub async fn list_results(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let results = state.exams.list_results(&path.into_inner()).await?;
    let list: Vec<ExamResultBody> = results.into_iter().map(ExamResultBody::from).collect();
    Ok(envelope::ok(ListPayload::from(list)))
}

#[cfg(test)]
#[path = "exams_tests.rs"]
mod tests;
