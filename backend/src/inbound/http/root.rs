//! Root endpoint describing the server and its entry points.

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paths of the main resources.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Endpoints {
    #[schema(example = "/users")]
    pub users: String,
    #[schema(example = "/health")]
    pub health: String,
    #[schema(example = "/docs")]
    pub docs: String,
}

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub success: bool,
    #[schema(example = "Users API Server")]
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub endpoints: Endpoints,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "Users API Server".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            endpoints: Endpoints {
                users: "/users".to_owned(),
                health: "/health".to_owned(),
                docs: "/docs".to_owned(),
            },
        }
    }
}

/// Describe the server, its version and main endpoints.
#[utoipa::path(
    get,
    path = "/",
    tags = ["meta"],
    responses((status = 200, description = "Server metadata", body = RootResponse)),
    operation_id = "root"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse::default())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;

    #[actix_web::test]
    async fn index_lists_version_and_endpoints() {
        let app = test::init_service(App::new().service(index)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Users API Server",
                "version": env!("CARGO_PKG_VERSION"),
                "endpoints": {"users": "/users", "health": "/health", "docs": "/docs"},
            })
        );
    }
}
