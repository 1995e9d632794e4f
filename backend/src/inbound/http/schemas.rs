//! OpenAPI schema definitions for domain types and response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

use super::courses::CourseBody;
use super::exams::ExamResultBody;
use super::students::StudentBody;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource already exists or the submission is not allowed again.
    #[schema(rename = "conflict")]
    Conflict,
    /// The backing store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "course code must not be empty")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f9619ff-8b86-4d11-b42d-00c04fc964ff")]
    trace_id: Option<String>,
    /// Supplementary error details, usually `{"field", "code"}`.
    details: Option<serde_json::Value>,
}

/// `{"code": 201, "data": {...course}}`
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseEnvelope {
    #[schema(example = 201)]
    code: u16,
    data: CourseBody,
}

/// List payload wrapping courses.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseListPayload {
    list: Vec<CourseBody>,
}

/// `{"code": 200, "data": {"list": [...]}}`
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseListEnvelope {
    #[schema(example = 200)]
    code: u16,
    data: CourseListPayload,
}

/// `{"code": 201, "data": {"id": "Bob"}}`
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentEnvelope {
    #[schema(example = 201)]
    code: u16,
    data: StudentBody,
}

/// `{"code": 200, "data": {...result}}`
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExamResultEnvelope {
    #[schema(example = 200)]
    code: u16,
    data: ExamResultBody,
}

/// List payload wrapping exam results.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExamResultListPayload {
    list: Vec<ExamResultBody>,
}

/// `{"code": 200, "data": {"list": [...]}}`
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExamResultListEnvelope {
    #[schema(example = 200)]
    code: u16,
    data: ExamResultListPayload,
}
