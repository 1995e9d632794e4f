//! Success envelope shared by every REST endpoint.
//!
//! Successful responses wrap their payload as `{"code": <status>, "data": ...}`
//! where `code` repeats the HTTP status. Collections nest under `data.list`.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

/// `{"code": <status>, "data": <payload>}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: T,
}

/// Collection payload placed under `data`.
#[derive(Debug, Serialize)]
pub struct ListPayload<T> {
    pub list: Vec<T>,
}

impl<T> From<Vec<T>> for ListPayload<T> {
    fn from(list: Vec<T>) -> Self {
        Self { list }
    }
}

/// Build a JSON response whose envelope `code` mirrors `status`.
pub fn respond<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(Envelope {
        code: status.as_u16(),
        data,
    })
}

/// 200 with the payload wrapped.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    respond(StatusCode::OK, data)
}

/// 201 with the payload wrapped.
pub fn created<T: Serialize>(data: T) -> HttpResponse {
    respond(StatusCode::CREATED, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[actix_web::test]
    async fn created_mirrors_status_in_envelope() {
        let response = created(json!({"id": "Bob"}));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_of(response).await, json!({"code": 201, "data": {"id": "Bob"}}));
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_nest_under_data() {
        let response = ok(ListPayload::from(vec!["6003", "T01"]));
        assert_eq!(
            body_of(response).await,
            json!({"code": 200, "data": {"list": ["6003", "T01"]}})
        );
    }
}
