//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod courses;
pub mod envelope;
pub mod error;
pub mod exams;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

/// Register every REST handler plus extractor error handlers on a scope.
///
/// Mounted under `/api` by the server.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use exam_backend::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(courses::create_course)
        .service(courses::list_courses)
        .service(courses::get_course)
        .service(students::sign_up)
        .service(students::get_student)
        .service(exams::submit_exam)
        .service(exams::list_results);
}
