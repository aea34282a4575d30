//! Hotels backend library.
//!
//! Hexagonal layout: [`domain`] holds types, ports, and the eligibility
//! service; [`inbound`] adapts HTTP; [`outbound`] implements ports on
//! PostgreSQL. Wiring lives in the binary.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
