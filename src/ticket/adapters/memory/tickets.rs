//! In-memory ticket repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::ProfileId;
use crate::ticket::{
    domain::{Ticket, TicketId},
    ports::{TicketRepository, TicketRepositoryError, TicketRepositoryResult},
};

/// Thread-safe in-memory ticket repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketRepository {
    state: Arc<RwLock<InMemoryTicketState>>,
}

#[derive(Debug, Default)]
struct InMemoryTicketState {
    tickets: HashMap<TicketId, StoredTicket>,
    next_sequence: u64,
}

/// Ticket plus its insertion sequence, used as the creation-time tie-break.
#[derive(Debug, Clone)]
struct StoredTicket {
    sequence: u64,
    ticket: Ticket,
}

impl InMemoryTicketRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collects tickets matching `predicate` in creation order.
fn collect_ordered(
    state: &InMemoryTicketState,
    predicate: impl Fn(&Ticket) -> bool,
) -> Vec<Ticket> {
    let mut matches: Vec<&StoredTicket> = state
        .tickets
        .values()
        .filter(|stored| predicate(&stored.ticket))
        .collect();
    matches.sort_by_key(|stored| (stored.ticket.created_at(), stored.sequence));
    matches.into_iter().map(|stored| stored.ticket.clone()).collect()
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn store(&self, ticket: &Ticket) -> TicketRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TicketRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tickets.contains_key(&ticket.id()) {
            return Err(TicketRepositoryError::DuplicateTicket(ticket.id()));
        }
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.tickets.insert(
            ticket.id(),
            StoredTicket {
                sequence,
                ticket: ticket.clone(),
            },
        );
        Ok(())
    }

    async fn update(&self, ticket: &Ticket) -> TicketRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TicketRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .tickets
            .get_mut(&ticket.id())
            .ok_or(TicketRepositoryError::NotFound(ticket.id()))?;
        stored.ticket = ticket.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TicketId) -> TicketRepositoryResult<Option<Ticket>> {
        let state = self.state.read().map_err(|err| {
            TicketRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tickets.get(&id).map(|stored| stored.ticket.clone()))
    }

    async fn list_by_raised_by(&self, manager: ProfileId) -> TicketRepositoryResult<Vec<Ticket>> {
        let state = self.state.read().map_err(|err| {
            TicketRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_ordered(&state, |ticket| {
            ticket.raised_by() == manager
        }))
    }

    async fn list_by_assignee(&self, developer: ProfileId) -> TicketRepositoryResult<Vec<Ticket>> {
        let state = self.state.read().map_err(|err| {
            TicketRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_ordered(&state, |ticket| {
            ticket.is_assigned_to(developer)
        }))
    }
}
