use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("The first name is required.")]
    MissingFirstName,
    #[error("The last name is required.")]
    MissingLastName,
    #[error("The club name can't be blank.")]
    BlankClubName,
    #[error("The field name can't be blank.")]
    BlankFieldName,
}
