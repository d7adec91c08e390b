use crate::database::error::DatabaseError::{
    ForeignKeyViolation, NotFound, UnderlyingDatabase, UniqueViolation,
};
use diesel::result::DatabaseErrorKind;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("The requested row doesn't exist.")]
    NotFound,
    #[error("A row with the same unique key already exists [{0}].")]
    UniqueViolation(String),
    #[error("The row references a row that doesn't exist [{0}].")]
    ForeignKeyViolation(String),
    #[error("A stored value can't be read [{0}].")]
    MalformedValue(String),
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                UniqueViolation(info.message().to_owned())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                ForeignKeyViolation(info.message().to_owned())
            }
            error => UnderlyingDatabase(error.to_string()),
        }
    }
}

impl From<dto::error::ParseError> for DatabaseError {
    fn from(value: dto::error::ParseError) -> Self {
        DatabaseError::MalformedValue(value.to_string())
    }
}
