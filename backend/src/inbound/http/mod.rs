//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod hotels;
pub mod state;

pub use error::ApiResult;
