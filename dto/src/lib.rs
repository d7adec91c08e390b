pub mod custom_field;
pub mod domain;
pub mod error;
pub mod filter_spec;
pub mod month;
pub mod person;
pub mod yes_no;
