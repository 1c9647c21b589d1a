//! Database connection management and Postgres repositories.

mod connection;
pub mod entity;
mod postgres_base;
pub mod postgres_repo;

pub use connection::{DatabaseConfig, connect};
pub use sea_orm::DbConn;
pub use postgres_repo::{
    PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
};

#[cfg(test)]
mod tests;
