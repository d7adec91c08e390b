use crate::database::error::DatabaseError;
use dto::custom_field::FieldId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("The workbook can't be read [{0}].")]
    CantReadWorkbook(String),
    #[error("The workbook has no sheet.")]
    NoSheet,
    #[error("The sheet `{0}` doesn't exist.")]
    SheetNotFound(String),
    #[error("The CSV file can't be read [{0}].")]
    CantReadCsv(String),
    #[error("The column `{0}` doesn't exist in the imported data.")]
    UnknownColumn(String),
    #[error("The custom field #{0} doesn't exist.")]
    UnknownField(FieldId),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<calamine::XlsxError> for ImportError {
    fn from(value: calamine::XlsxError) -> Self {
        ImportError::CantReadWorkbook(value.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        ImportError::CantReadCsv(value.to_string())
    }
}
