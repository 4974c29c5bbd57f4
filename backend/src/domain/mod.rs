//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed user values, the use-case service that
//! operates on them, and the ports adapters implement. Nothing here depends on
//! Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a client-safe message.
//! - User, UserDraft, CreatedUser: stored, validated and echoed user shapes.
//! - UserService: implements the `UsersQuery` and `UsersCommand` ports.

pub mod error;
pub mod ports;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{
    AGE_MAX, AGE_MIN, Age, AgeInput, CreatedUser, EmailAddress, User, UserDraft, UserId,
    UserInput, UserName, UserValidationError,
};
pub use self::user_service::UserService;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
