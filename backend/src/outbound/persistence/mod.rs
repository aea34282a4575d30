//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain read ports backed by PostgreSQL
//! via `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types; eligibility rules live in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel and pool failures are mapped to each port's
//!   `Connection` / `Query` variants.
//!
//! # Example
//!
//! ```ignore
//! use hotels_backend::outbound::persistence::{DbPool, DieselHotelRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hotels")).await?;
//! let hotels = DieselHotelRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_hotel_repository;
mod diesel_session_repository;
mod diesel_ticket_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_hotel_repository::DieselHotelRepository;
pub use diesel_session_repository::DieselSessionRepository;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
