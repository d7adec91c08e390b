use crate::database::error::DatabaseError;
use diesel::sqlite::Sqlite;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create the tables that don't exist yet. Safe to call on every start.
pub(crate) fn run_migrations(
    connection: &mut impl MigrationHarness<Sqlite>,
) -> Result<(), DatabaseError> {
    let applied_migrations = connection.run_pending_migrations(MIGRATIONS)?;
    for migration in applied_migrations {
        info!("Applied migration {migration}");
    }

    Ok(())
}
