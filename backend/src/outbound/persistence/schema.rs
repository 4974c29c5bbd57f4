//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. The unique index on
//! `lower(email)` is expression-based and therefore invisible here; Diesel
//! only sees its violations as `UniqueViolation` errors.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Storage-assigned identifier (`BIGSERIAL`).
        id -> Int8,
        /// Name exactly as submitted.
        name -> Varchar,
        /// Email exactly as submitted; unique case-insensitively.
        email -> Varchar,
        /// Whole years in `0..=150`.
        age -> Nullable<Int4>,
        /// Creation timestamp, set by the database default.
        created_at -> Timestamptz,
    }
}
