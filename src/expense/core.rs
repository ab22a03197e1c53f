use rusqlite::{Connection, Row, types::Type};

use crate::expense::ExpenseError;

/// Alias for the integer type used for expense IDs.
pub type ExpenseId = i64;

/// A single expense as it is stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID assigned by the database when the expense was created.
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub title: String,
    /// How much was spent. No currency is implied.
    pub amount: f64,
    /// Free text notes about the expense.
    pub note: String,
    /// Labels for grouping expenses, in the order they were given.
    pub tags: Vec<String>,
}

/// The fields of an expense that has not been stored yet, or the fields to
/// write over an existing expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewExpense {
    /// A short description of what the money was spent on.
    pub title: String,
    /// How much was spent.
    pub amount: f64,
    /// Free text notes about the expense.
    pub note: String,
    /// Labels for grouping expenses.
    pub tags: Vec<String>,
}

/// Parse an expense ID taken from a URL path.
///
/// Text that is not an integer cannot name a stored expense, so it is
/// reported as [ExpenseError::NotFound].
pub fn parse_expense_id(raw_id: &str) -> Result<ExpenseId, ExpenseError> {
    raw_id.parse().map_err(|_| {
        tracing::debug!("Could not parse expense ID \"{raw_id}\"");
        ExpenseError::NotFound
    })
}

pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            note TEXT NOT NULL,
            tags TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_expense(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let note = row.get(3)?;
    let raw_tags: String = row.get(4)?;
    let tags = serde_json::from_str(&raw_tags).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(error))
    })?;

    Ok(Expense {
        id,
        title,
        amount,
        note,
        tags,
    })
}



#[cfg(test)]
mod map_row_tests {
    use rusqlite::Connection;

    use super::{Expense, create_expense_table, map_row_to_expense};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_expense_table(&conn).unwrap();
        conn
    }

    #[test]
    fn decodes_tags_column() {
        let conn = get_test_connection();
        conn.execute(
            "INSERT INTO expense (title, amount, note, tags) VALUES (?1, ?2, ?3, ?4)",
            ("bus fare", 2.5, "commute", r#"["transport","daily"]"#),
        )
        .unwrap();

        let got = conn
            .query_row(
                "SELECT id, title, amount, note, tags FROM expense WHERE id = 1",
                [],
                map_row_to_expense,
            )
            .unwrap();

        assert_eq!(
            got,
            Expense {
                id: 1,
                title: "bus fare".to_owned(),
                amount: 2.5,
                note: "commute".to_owned(),
                tags: vec!["transport".to_owned(), "daily".to_owned()],
            }
        );
    }

    #[test]
    fn fails_on_malformed_tags() {
        let conn = get_test_connection();
        conn.execute(
            "INSERT INTO expense (title, amount, note, tags) VALUES (?1, ?2, ?3, ?4)",
            ("bus fare", 2.5, "commute", "not json"),
        )
        .unwrap();

        let got = conn.query_row(
            "SELECT id, title, amount, note, tags FROM expense WHERE id = 1",
            [],
            map_row_to_expense,
        );

        assert!(matches!(
            got,
            Err(rusqlite::Error::FromSqlConversionFailure(4, _, _))
        ));
    }
}
