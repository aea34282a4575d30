//! Port for the ticket lookup.
//!
//! Resolves a user to the ticket of their enrollment. Adapters hide how
//! enrollments, tickets, and ticket types are stored.

use async_trait::async_trait;

use crate::domain::{Ticket, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError for "ticket repository";
}

/// Read access to users' tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Fetch the user's current ticket with its type flags.
    ///
    /// Returns `None` when the user has no enrollment or the enrollment has
    /// no ticket. When several tickets exist the most recent one is returned.
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;
}

/// Fixture repository in which nobody holds a ticket.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketRepository;

#[async_trait]
impl TicketRepository for FixtureTicketRepository {
    async fn find_by_user_id(
        &self,
        _user_id: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(None)
    }
}
