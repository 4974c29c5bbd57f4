//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint and the envelope schemas they
//! return. The document is served at `/api-docs/openapi.json`, rendered by
//! Swagger UI under `/docs/`, and printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::root::{Endpoints, RootResponse};
use crate::inbound::http::schemas::{
    CreatedUserResponseSchema, ErrorResponseSchema, MessageResponseSchema,
    UserListResponseSchema, UserResponseSchema,
};
use crate::inbound::http::users::{CreatedUserBody, UserBody, UserPayload};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD operations over users backed by PostgreSQL, plus health and metadata endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::health,
        crate::inbound::http::root::index,
    ),
    components(schemas(
        UserBody,
        UserPayload,
        CreatedUserBody,
        UserListResponseSchema,
        UserResponseSchema,
        CreatedUserResponseSchema,
        MessageResponseSchema,
        ErrorResponseSchema,
        HealthResponse,
        RootResponse,
        Endpoints,
    )),
    tags(
        (name = "users", description = "User management"),
        (name = "health", description = "Server and database health"),
        (name = "meta", description = "Server metadata")
    )
)]
pub struct ApiDoc;
