use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("The spreadsheet can't be written [{0}].")]
    CantWriteSpreadsheet(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::CantWriteSpreadsheet(value.to_string())
    }
}
