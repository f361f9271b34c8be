//! Authorization guard applied before every mutating workflow operation.
//!
//! Two gates exist: role-gated operations require a manager, and
//! ownership-gated operations require the ticket's assigned developer.
//! Guard failures are raised before any write, so a rejected call never
//! mutates state.

use crate::account::domain::{Profile, ProfileId};
use crate::ticket::domain::{Ticket, TicketId};
use thiserror::Error;

/// Authorization failures raised by the workflow guard.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// A manager-only operation was invoked by another role.
    #[error("profile {actor} is not a manager")]
    ManagerRequired {
        /// Profile that attempted the operation.
        actor: ProfileId,
    },

    /// An assignee-only operation was invoked by a different profile.
    #[error("profile {actor} is not assigned to ticket {ticket_id}")]
    NotAssignee {
        /// Profile that attempted the operation.
        actor: ProfileId,
        /// Ticket the operation targeted.
        ticket_id: TicketId,
    },

    /// An assignee-only operation targeted an unassigned ticket.
    #[error("ticket {ticket_id} has no assigned developer")]
    Unassigned {
        /// Ticket the operation targeted.
        ticket_id: TicketId,
    },
}

/// Requires the acting profile to hold the manager role.
pub(super) fn require_manager(actor: &Profile) -> Result<(), AccessError> {
    if actor.role().is_manager() {
        return Ok(());
    }
    Err(AccessError::ManagerRequired { actor: actor.id() })
}

/// Requires the acting profile to be the ticket's assigned developer.
pub(super) fn require_assignee(actor: &Profile, ticket: &Ticket) -> Result<(), AccessError> {
    let Some(assignee) = ticket.assigned_to() else {
        return Err(AccessError::Unassigned {
            ticket_id: ticket.id(),
        });
    };
    if assignee == actor.id() {
        return Ok(());
    }
    Err(AccessError::NotAssignee {
        actor: actor.id(),
        ticket_id: ticket.id(),
    })
}
