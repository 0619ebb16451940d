//! Database initialization and access to the shared connection.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, category::create_category_table, recipe::create_recipe_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// Foreign key enforcement is switched off for the connection, references
/// between tables are checked by the endpoints.
///
/// # Errors
/// Returns an error if there is an SQL error, in which case no tables are created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    // Has no effect inside a transaction.
    connection.pragma_update(None, "foreign_keys", false)?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_recipe_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Acquire the lock on the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the mutex is poisoned.
pub fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

/// Start a transaction that takes the write lock on the database right away.
///
/// Used by endpoints that check the database and then write to it, so that
/// nothing can change in between. Dropping the transaction without committing
/// rolls it back.
pub fn begin_write(connection: &mut Connection) -> Result<Transaction<'_>, Error> {
    connection
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|error| error.into())
}
