//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod fallback;
pub mod health;
pub mod root;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
