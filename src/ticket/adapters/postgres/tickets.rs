//! `PostgreSQL` repository implementation for ticket storage.

use super::{
    helpers::{TicketPgPool, run_blocking},
    models::{NewTicketRow, TicketRow},
    schema::tickets,
};
use crate::account::domain::ProfileId;
use crate::ticket::{
    domain::{PersistedTicketData, Ticket, TicketId, TicketStatus, TicketTitle},
    ports::{TicketRepository, TicketRepositoryError, TicketRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed ticket repository.
#[derive(Debug, Clone)]
pub struct PostgresTicketRepository {
    pool: TicketPgPool,
}

impl PostgresTicketRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TicketPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PostgresTicketRepository {
    async fn store(&self, ticket: &Ticket) -> TicketRepositoryResult<()> {
        let ticket_id = ticket.id();
        let new_row = to_new_row(ticket);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tickets::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TicketRepositoryError::DuplicateTicket(ticket_id)
                    }
                    _ => TicketRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, ticket: &Ticket) -> TicketRepositoryResult<()> {
        let ticket_id = ticket.id();
        let row = to_new_row(ticket);

        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(
                tickets::table.filter(tickets::id.eq(ticket_id.into_inner())),
            )
            .set((
                tickets::title.eq(row.title),
                tickets::description.eq(row.description),
                tickets::status.eq(row.status),
                tickets::deadline.eq(row.deadline),
                tickets::assigned_to.eq(row.assigned_to),
                tickets::updated_at.eq(row.updated_at),
            ))
            .execute(connection)
            .map_err(TicketRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TicketRepositoryError::NotFound(ticket_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TicketId) -> TicketRepositoryResult<Option<Ticket>> {
        run_blocking(&self.pool, move |connection| {
            let row = tickets::table
                .filter(tickets::id.eq(id.into_inner()))
                .select(TicketRow::as_select())
                .first::<TicketRow>(connection)
                .optional()
                .map_err(TicketRepositoryError::persistence)?;
            row.map(row_to_ticket).transpose()
        })
        .await
    }

    async fn list_by_raised_by(&self, manager: ProfileId) -> TicketRepositoryResult<Vec<Ticket>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tickets::table
                .filter(tickets::raised_by.eq(manager.into_inner()))
                .order((tickets::created_at.asc(), tickets::id.asc()))
                .select(TicketRow::as_select())
                .load::<TicketRow>(connection)
                .map_err(TicketRepositoryError::persistence)?;
            rows.into_iter().map(row_to_ticket).collect()
        })
        .await
    }

    async fn list_by_assignee(&self, developer: ProfileId) -> TicketRepositoryResult<Vec<Ticket>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tickets::table
                .filter(tickets::assigned_to.eq(developer.into_inner()))
                .order((tickets::created_at.asc(), tickets::id.asc()))
                .select(TicketRow::as_select())
                .load::<TicketRow>(connection)
                .map_err(TicketRepositoryError::persistence)?;
            rows.into_iter().map(row_to_ticket).collect()
        })
        .await
    }
}

fn to_new_row(ticket: &Ticket) -> NewTicketRow {
    NewTicketRow {
        id: ticket.id().into_inner(),
        title: ticket.title().as_str().to_owned(),
        description: ticket.description().to_owned(),
        status: ticket.status().as_str().to_owned(),
        deadline: ticket.deadline(),
        raised_by: ticket.raised_by().into_inner(),
        assigned_to: ticket.assigned_to().map(ProfileId::into_inner),
        created_at: ticket.created_at(),
        updated_at: ticket.updated_at(),
    }
}

fn row_to_ticket(row: TicketRow) -> TicketRepositoryResult<Ticket> {
    let TicketRow {
        id,
        title: persisted_title,
        description,
        status: persisted_status,
        deadline,
        raised_by,
        assigned_to,
        created_at,
        updated_at,
    } = row;

    let title = TicketTitle::new(persisted_title).map_err(TicketRepositoryError::persistence)?;
    let status = TicketStatus::try_from(persisted_status.as_str())
        .map_err(TicketRepositoryError::persistence)?;

    let data = PersistedTicketData {
        id: TicketId::from_uuid(id),
        title,
        description,
        deadline,
        status,
        raised_by: ProfileId::from_uuid(raised_by),
        assigned_to: assigned_to.map(ProfileId::from_uuid),
        created_at,
        updated_at,
    };
    Ok(Ticket::from_persisted(data))
}
