//! Fallback for requests that match no route.

use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use super::envelope::Envelope;

/// Client message for unmatched paths and methods.
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// `default_service` handler answering every unmatched request with the
/// uniform 404 envelope.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    HttpResponse::NotFound().json(Envelope::error(ROUTE_NOT_FOUND))
}
