use crate::database::error::DatabaseError;

pub(crate) mod custom_field;
pub(crate) mod member_attribute;
pub(crate) mod person;
pub(crate) mod settings;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;
