use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CustomFieldError {
    #[error("A custom field named `{0}` already exists.")]
    DuplicateField(String),
    #[error("The custom field doesn't exist.")]
    UnknownField,
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
