/*! Sets up the application's database schema. */

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, expense::create_expense_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// Safe to call on every start-up.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    tracing::debug!("Database schema is up to date.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initializes_empty_database() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(Ok(()), initialize(&conn));
    }

    #[test]
    fn initialize_keeps_existing_rows() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "INSERT INTO expense (title, amount, note, tags) VALUES ('tea', 12.5, '', '[]')",
            (),
        )
        .unwrap();

        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(id) FROM expense", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
