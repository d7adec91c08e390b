use crate::custom_field::error::CustomFieldError;
use crate::database::error::DatabaseError;
use crate::export::error::ExportError;
use crate::import::error::ImportError;
use crate::people::error::ValidationError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
    #[error("The submitted data is incomplete.")]
    Validation(#[from] ValidationError),
    #[error("Error while managing custom fields.")]
    CustomField(#[from] CustomFieldError),
    #[error("Error while importing data.")]
    Import(#[from] ImportError),
    #[error("Error while exporting data.")]
    Export(#[from] ExportError),
}

impl From<diesel::result::Error> for ApplicationError {
    fn from(value: diesel::result::Error) -> Self {
        ApplicationError::Database(value.into())
    }
}
