//! # Quill Infra
//!
//! Infrastructure implementations for the Quill backend: the Postgres
//! repositories and the token/password services.

pub mod auth;
pub mod database;
