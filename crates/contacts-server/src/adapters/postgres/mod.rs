//! PostgreSQL Repository Implementations

mod contact_repository;

pub use contact_repository::PgContactRepository;
