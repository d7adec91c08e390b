use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A month of the year, stored by its Greek name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    #[serde(rename = "Ιανουάριος")]
    January,
    #[serde(rename = "Φεβρουάριος")]
    February,
    #[serde(rename = "Μάρτιος")]
    March,
    #[serde(rename = "Απρίλιος")]
    April,
    #[serde(rename = "Μάιος")]
    May,
    #[serde(rename = "Ιούνιος")]
    June,
    #[serde(rename = "Ιούλιος")]
    July,
    #[serde(rename = "Αύγουστος")]
    August,
    #[serde(rename = "Σεπτέμβριος")]
    September,
    #[serde(rename = "Οκτώβριος")]
    October,
    #[serde(rename = "Νοέμβριος")]
    November,
    #[serde(rename = "Δεκέμβριος")]
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "Ιανουάριος",
            Month::February => "Φεβρουάριος",
            Month::March => "Μάρτιος",
            Month::April => "Απρίλιος",
            Month::May => "Μάιος",
            Month::June => "Ιούνιος",
            Month::July => "Ιούλιος",
            Month::August => "Αύγουστος",
            Month::September => "Σεπτέμβριος",
            Month::October => "Οκτώβριος",
            Month::November => "Νοέμβριος",
            Month::December => "Δεκέμβριος",
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Month::ALL
            .into_iter()
            .find(|month| month.as_str() == trimmed)
            .ok_or_else(|| ParseError::UnknownMonth(s.to_owned()))
    }
}
