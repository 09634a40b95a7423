//! PostgreSQL 持久化

pub mod connection;

mod postgres_objection_repository;
mod postgres_resolved_objection_repository;
mod postgres_unit_of_work;
mod postgres_user_repository;
mod tx_repositories;

pub use postgres_objection_repository::PostgresObjectionRepository;
pub use postgres_resolved_objection_repository::PostgresResolvedObjectionRepository;
pub use postgres_unit_of_work::PostgresUnitOfWorkFactory;
pub use postgres_user_repository::PostgresUserRepository;
