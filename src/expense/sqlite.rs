//! Implements a SQLite backed expense store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    expense::{Expense, ExpenseId, ExpenseStore, NewExpense, core::map_row_to_expense},
};

/// Stores expenses in a SQLite database.
///
/// The `expense` table must exist, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Insert a new expense into the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidTags] if the tags could not be encoded,
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let tags = serde_json::to_string(&expense.tags)?;
        let connection = self.lock()?;

        let expense = connection
            .prepare(
                "INSERT INTO expense (title, amount, note, tags)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, title, amount, note, tags",
            )?
            .query_row(
                (expense.title, expense.amount, expense.note, tags),
                map_row_to_expense,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let connection = self.lock()?;

        get_expense(id, &connection)
    }

    /// Overwrite the stored expense `id` with the non-empty fields of `expense`.
    ///
    /// The read and the write happen in one SQL transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(&self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.lock()?;
        let tx = connection.unchecked_transaction()?;

        let mut current = get_expense(id, &tx)?;
        apply_non_empty_fields(&mut current, expense);

        let updated = tx
            .prepare(
                "UPDATE expense SET title = ?1, amount = ?2, note = ?3, tags = ?4
                 WHERE id = ?5
                 RETURNING id, title, amount, note, tags",
            )?
            .query_row(
                (
                    &current.title,
                    current.amount,
                    &current.note,
                    serde_json::to_string(&current.tags)?,
                    id,
                ),
                map_row_to_expense,
            )?;

        tx.commit()?;

        Ok(updated)
    }

    /// Retrieve all expenses in the database, ordered by ID.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        let connection = self.lock()?;

        connection
            .prepare("SELECT id, title, amount, note, tags FROM expense ORDER BY id ASC")?
            .query_map([], map_row_to_expense)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect()
    }
}

fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare("SELECT id, title, amount, note, tags FROM expense WHERE id = :id")?
        .query_row(&[(":id", &id)], map_row_to_expense)
        .map_err(|error| error.into())
}

fn apply_non_empty_fields(current: &mut Expense, changes: NewExpense) {
    if !changes.title.is_empty() {
        current.title = changes.title;
    }

    if changes.amount != 0.0 {
        current.amount = changes.amount;
    }

    if !changes.note.is_empty() {
        current.note = changes.note;
    }

    if !changes.tags.is_empty() {
        current.tags = changes.tags;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        expense::{Expense, ExpenseStore, NewExpense},
    };

    use super::SQLiteExpenseStore;

    fn get_store() -> SQLiteExpenseStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)))
    }

    fn smoothie() -> NewExpense {
        NewExpense {
            title: "strawberry smoothie".to_owned(),
            amount: 79.0,
            note: "night market promotion discount 10 bath".to_owned(),
            tags: vec!["food".to_owned(), "beverage".to_owned()],
        }
    }

    #[test]
    fn create_assigns_id() {
        let store = get_store();

        let got = store.create(smoothie()).unwrap();

        assert_eq!(
            got,
            Expense {
                id: 1,
                title: "strawberry smoothie".to_owned(),
                amount: 79.0,
                note: "night market promotion discount 10 bath".to_owned(),
                tags: vec!["food".to_owned(), "beverage".to_owned()],
            }
        );
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let store = get_store();

        let first = store.create(smoothie()).unwrap();
        let second = store.create(smoothie()).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn get_returns_created_expense() {
        let store = get_store();
        let want = store.create(smoothie()).unwrap();

        let got = store.get(want.id).unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn get_preserves_tag_order() {
        let store = get_store();
        let tags = vec!["z".to_owned(), "a".to_owned(), "m".to_owned(), "a".to_owned()];
        let created = store
            .create(NewExpense {
                tags: tags.clone(),
                ..smoothie()
            })
            .unwrap();

        let got = store.get(created.id).unwrap();

        assert_eq!(got.tags, tags);
    }

    #[test]
    fn get_fails_on_missing_id() {
        let store = get_store();

        let got = store.get(42);

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn update_overwrites_all_fields() {
        let store = get_store();
        let created = store.create(smoothie()).unwrap();
        let changes = NewExpense {
            title: "mango smoothie".to_owned(),
            amount: 100.0,
            note: "no discount".to_owned(),
            tags: vec!["food".to_owned()],
        };

        let got = store.update(created.id, changes).unwrap();

        let want = Expense {
            id: created.id,
            title: "mango smoothie".to_owned(),
            amount: 100.0,
            note: "no discount".to_owned(),
            tags: vec!["food".to_owned()],
        };
        assert_eq!(got, want);
        assert_eq!(store.get(created.id).unwrap(), want);
    }

    #[test]
    fn update_keeps_fields_left_empty() {
        let store = get_store();
        let created = store.create(smoothie()).unwrap();
        let changes = NewExpense {
            amount: 100.0,
            ..Default::default()
        };

        let got = store.update(created.id, changes).unwrap();

        assert_eq!(
            got,
            Expense {
                amount: 100.0,
                ..created
            }
        );
    }

    #[test]
    fn update_fails_on_missing_id() {
        let store = get_store();

        let got = store.update(42, smoothie());

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn get_all_on_empty_table() {
        let store = get_store();

        let got = store.get_all().unwrap();

        assert!(got.is_empty(), "want no expenses, got {got:?}");
    }

    #[test]
    fn get_all_returns_every_expense() {
        let store = get_store();
        let first = store.create(smoothie()).unwrap();
        let second = store
            .create(NewExpense {
                title: "bus fare".to_owned(),
                amount: 15.0,
                note: "to work".to_owned(),
                tags: vec!["transport".to_owned()],
            })
            .unwrap();

        let got = store.get_all().unwrap();

        assert_eq!(got, vec![first, second]);
    }
}
