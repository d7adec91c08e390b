use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_message_and_return;
use derive_getters::Getters;
use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};

pub(crate) mod dao;
pub mod error;
mod migrations;
pub(crate) mod model;
pub(crate) mod schema;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;

const DATABASE_URL_ARG: &str = "--database-url";

/// Location of the club's database.
///
/// No connection is kept around: every operation opens its own,
/// which is closed when dropped, whatever the outcome of the operation.
#[derive(Debug, Clone, Getters)]
pub struct Database {
    database_url: String,
}

impl Database {
    pub fn new(database_url: String) -> Self {
        Self { database_url }
    }

    /// Build from the `--database-url=<path>` argument.
    pub fn from_args() -> Result<Self> {
        let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
        Ok(Self::new(database_url))
    }

    pub fn establish_connection(&self) -> Result<SqliteConnection> {
        let mut connection = SqliteConnection::establish(&self.database_url).map_err(
            log_message_and_return("Can't connect to the database.", ConnectionFailed),
        )?;
        // SQLite leaves foreign keys unchecked unless asked, for each connection.
        connection.batch_execute("PRAGMA foreign_keys = ON;")?;

        Ok(connection)
    }

    /// Run `function` with a fresh connection.
    pub fn with_connection<T, E, F>(&self, function: F) -> Result<T, E>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, E>,
        E: From<DatabaseError>,
    {
        let mut connection = self.establish_connection()?;
        function(&mut connection)
    }

    /// Create the club's tables if they don't exist yet.
    pub fn ensure_schema(&self) -> Result<()> {
        let mut connection = self.establish_connection()?;
        run_migrations(&mut connection)
    }
}

#[cfg(test)]
pub(crate) fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(&Database) -> T,
{
    use crate::tools::test::tests::temp_dir;

    let temp_dir = temp_dir();
    let database_url = temp_dir.join("database.db").to_str().unwrap().to_owned();
    let database = Database::new(database_url);
    database.ensure_schema().unwrap();

    let result = function(&database);

    let _ = std::fs::remove_dir_all(temp_dir);
    result
}
