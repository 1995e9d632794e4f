//! Shared helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{MockCourseDirectory, MockExamService, MockStudentDirectory};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Mocks for each driving port; set expectations before calling [`Self::app`].
#[derive(Default)]
pub struct MockPorts {
    pub courses: MockCourseDirectory,
    pub students: MockStudentDirectory,
    pub exams: MockExamService,
}

impl MockPorts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an app serving the full `/api` scope over the mocks.
    pub fn app(
        self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(
            Arc::new(self.courses),
            Arc::new(self.students),
            Arc::new(self.exams),
        );
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api").configure(configure_api))
    }
}
