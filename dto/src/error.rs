use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("`{0}` is neither a yes nor a no.")]
    UnknownYesNo(String),
    #[error("`{0}` is not a known month.")]
    UnknownMonth(String),
    #[error("`{0}` is not a known domain.")]
    UnknownDomain(String),
}
