//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users       {"name":"Ann","email":"ann@x.com","age":40}
//! PUT    /users/{id}  {"name":"Ann","email":"ann@x.com"}
//! DELETE /users/{id}
//! ```
//!
//! Handlers validate path and body input, delegate to the user ports in
//! [`HttpState`], and wrap results in the uniform envelope. Validation runs
//! before any storage call. Bodies may be JSON or URL-encoded forms and are
//! decoded only after the path id has been checked.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    AgeInput, CreatedUser, Error, User, UserDraft, UserId, UserInput, UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::INVALID_BODY_MESSAGE;
use crate::inbound::http::schemas::{
    CreatedUserResponseSchema, ErrorResponseSchema, MessageResponseSchema,
    UserListResponseSchema, UserResponseSchema,
};
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing a user.
///
/// Fields are optional at the wire level so that missing values produce the
/// domain validation message rather than a deserialisation failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[schema(as = UserInput)]
pub struct UserPayload {
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
    /// Whole years in `0..=150`; numeric strings are accepted.
    #[schema(value_type = Option<i32>, example = 40)]
    pub age: Option<Value>,
}

impl From<UserPayload> for UserInput {
    fn from(value: UserPayload) -> Self {
        Self {
            name: value.name,
            email: value.email,
            age: age_input(value.age),
        }
    }
}

fn age_input(value: Option<Value>) -> AgeInput {
    match value {
        None | Some(Value::Null) => AgeInput::Absent,
        Some(Value::Number(number)) => number
            .as_f64()
            .map_or(AgeInput::Unsupported, AgeInput::Number),
        Some(Value::String(text)) => AgeInput::Text(text),
        Some(_) => AgeInput::Unsupported,
    }
}

/// Stored user as returned by list and get.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = User)]
pub struct UserBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[schema(example = 40)]
    pub age: Option<i32>,
    /// RFC 3339 creation timestamp.
    #[schema(example = "2025-01-01T12:00:00.000Z")]
    pub created_at: String,
}

impl From<User> for UserBody {
    fn from(value: User) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            email: value.email,
            age: value.age.map(|age| age.get()),
            created_at: value
                .created_at
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// Summary returned by create: trimmed name and lowercased email.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreatedUser)]
pub struct CreatedUserBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[schema(example = 40)]
    pub age: Option<i32>,
}

impl From<CreatedUser> for CreatedUserBody {
    fn from(value: CreatedUser) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            email: value.email,
            age: value.age.map(|age| age.get()),
        }
    }
}

fn validation_error(err: UserValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse().map_err(validation_error)
}

fn parse_draft(payload: UserPayload) -> Result<UserDraft, Error> {
    UserDraft::try_from(UserInput::from(payload)).map_err(validation_error)
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn is_json(content_type: &str) -> bool {
    content_type.eq_ignore_ascii_case("application/json")
        || content_type.to_ascii_lowercase().ends_with("+json")
}

/// Decode a create or update body according to its content type.
///
/// An empty JSON body, or one with any other content type, decodes to an
/// empty payload and then fails the presence check.
fn decode_payload(req: &HttpRequest, body: &[u8]) -> Result<UserPayload, Error> {
    let content_type = req.content_type();
    let decoded = if content_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        serde_urlencoded::from_bytes(body).map_err(|err| err.to_string())
    } else if is_json(content_type) && !body.trim_ascii().is_empty() {
        serde_json::from_slice(body).map_err(|err| err.to_string())
    } else {
        Ok(UserPayload::default())
    };
    decoded.map_err(|error| {
        debug!(%error, path = req.path(), "rejected request body");
        Error::invalid_request(INVALID_BODY_MESSAGE)
    })
}

/// List all users, newest first.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users ordered by creation time, newest first", body = UserListResponseSchema),
        (status = 500, description = "Failed to fetch users", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list_users().await?;
    let data: Vec<UserBody> = users.into_iter().map(UserBody::from).collect();
    Ok(HttpResponse::Ok().json(Envelope::data(data)))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponseSchema),
        (status = 400, description = "Invalid user ID", body = ErrorResponseSchema),
        (status = 404, description = "User not found", body = ErrorResponseSchema),
        (status = 500, description = "Failed to fetch user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state.users.get_user(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::data(UserBody::from(user))))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body(
        content(
            (UserPayload = "application/json"),
            (UserPayload = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 201, description = "User created", body = CreatedUserResponseSchema),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorResponseSchema),
        (status = 500, description = "Failed to create user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(decode_payload(&req, &body)?)?;
    let created = state.users_command.create_user(draft).await?;
    Ok(HttpResponse::Created().json(Envelope::data(CreatedUserBody::from(created))))
}

/// Replace a user's name, email and age.
///
/// An absent or `null` age clears the stored value.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body(
        content(
            (UserPayload = "application/json"),
            (UserPayload = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "User updated", body = MessageResponseSchema),
        (status = 400, description = "Invalid ID, validation failure or duplicate email", body = ErrorResponseSchema),
        (status = 404, description = "User not found", body = ErrorResponseSchema),
        (status = 500, description = "Failed to update user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let draft = parse_draft(decode_payload(&req, &body)?)?;
    state.users_command.update_user(id, draft).await?;
    Ok(HttpResponse::Ok().json(Envelope::message("User updated successfully")))
}

/// Delete a user permanently.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponseSchema),
        (status = 400, description = "Invalid user ID", body = ErrorResponseSchema),
        (status = 404, description = "User not found", body = ErrorResponseSchema),
        (status = 500, description = "Failed to delete user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::message("User deleted successfully")))
}
