#[macro_use]
extern crate log;

pub mod club;
pub mod custom_field;
pub mod database;
pub mod error;
pub mod export;
pub mod filter;
pub mod import;
pub mod people;
pub mod tools;

pub use club::Club;
pub use error::{ApplicationError, Result};
