//! Health endpoint reporting server and storage status.
//!
//! `GET /health` runs a storage round trip through [`StorageHealth`] and
//! reports the outcome with a timestamp taken from the injected clock.
//!
//! [`StorageHealth`]: crate::domain::ports::StorageHealth

use actix_web::{HttpResponse, get, http::header, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Health probe outcome.
///
/// Exactly one of `message` (healthy) or `error` (unhealthy) is present.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Server and database are healthy")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Database connection failed")]
    pub error: Option<String>,
    /// RFC 3339 UTC timestamp with millisecond precision.
    #[schema(example = "2025-01-01T12:00:00.000Z")]
    pub timestamp: String,
}

/// Report whether the server can reach its database.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (
            status = 200,
            description = "Server and database are healthy",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = HealthResponse
        ),
        (status = 500, description = "Database connection failed", body = HealthResponse)
    ),
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> HttpResponse {
    let outcome = state.storage_health.probe().await;
    let timestamp = state
        .clock
        .utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    let (mut builder, body) = match outcome {
        Ok(()) => (
            HttpResponse::Ok(),
            HealthResponse {
                success: true,
                message: Some("Server and database are healthy".to_owned()),
                error: None,
                timestamp,
            },
        ),
        Err(err) => {
            error!(error = %err, "health check failed");
            (
                HttpResponse::InternalServerError(),
                HealthResponse {
                    success: false,
                    message: None,
                    error: Some("Database connection failed".to_owned()),
                    timestamp,
                },
            )
        }
    };

    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        MockStorageHealth, MockUsersCommand, MockUsersQuery, StorageHealthError,
    };

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_utc().return_const(
            Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7)
                .single()
                .expect("valid timestamp"),
        );
        clock
    }

    fn state_with(probe: MockStorageHealth) -> HttpState {
        HttpState::new(
            Arc::new(MockUsersQuery::new()),
            Arc::new(MockUsersCommand::new()),
            Arc::new(probe),
            Arc::new(fixed_clock()),
        )
    }

    #[rstest]
    #[case(Ok(()), StatusCode::OK, json!({
        "success": true,
        "message": "Server and database are healthy",
        "timestamp": "2025-03-04T05:06:07.000Z",
    }))]
    #[case(
        Err(StorageHealthError::unreachable("connection refused")),
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "success": false,
            "error": "Database connection failed",
            "timestamp": "2025-03-04T05:06:07.000Z",
        })
    )]
    #[actix_web::test]
    async fn reports_storage_probe_outcome(
        #[case] outcome: Result<(), StorageHealthError>,
        #[case] expected_status: StatusCode,
        #[case] expected_body: Value,
    ) {
        let mut probe = MockStorageHealth::new();
        probe.expect_probe().times(1).return_once(move || outcome);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(probe)))
                .service(health),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;

        assert_eq!(res.status(), expected_status);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, expected_body);
    }
}
