//! Shared blocking-execution helpers for the `PostgreSQL` ticket adapters.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::ticket::ports::{CommentRepositoryError, TicketRepositoryError};

/// `PostgreSQL` connection pool type used by ticket adapters.
pub type TicketPgPool = Pool<ConnectionManager<PgConnection>>;

/// Repository errors that can wrap an opaque persistence failure.
pub(super) trait WrapsPersistence {
    /// Wraps a persistence error.
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

impl WrapsPersistence for TicketRepositoryError {
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl WrapsPersistence for CommentRepositoryError {
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

/// Runs a Diesel closure on the blocking thread pool with a pooled
/// connection.
pub(super) async fn run_blocking<F, T, E>(pool: &TicketPgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: WrapsPersistence + Send + 'static,
{
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = owned_pool.get().map_err(E::wrap)?;
        f(&mut connection)
    })
    .await
    .map_err(E::wrap)?
}
