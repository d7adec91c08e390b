use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const YES: &str = "ΝΑΙ";
const NO: &str = "ΟΧΙ";

/// Answer to the closed questions of a person's record (is a member, is an athlete...).
/// Stored and exported as the literal Greek words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "ΝΑΙ")]
    Yes,
    #[serde(rename = "ΟΧΙ")]
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => YES,
            YesNo::No => NO,
        }
    }

    pub fn is_yes(&self) -> bool {
        *self == YesNo::Yes
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl Display for YesNo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// English words and accented Greek ones are accepted too.
impl FromStr for YesNo {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match without_tonos(&s.trim().to_uppercase()).as_str() {
            YES | "YES" => Ok(YesNo::Yes),
            NO | "NO" => Ok(YesNo::No),
            _ => Err(ParseError::UnknownYesNo(s.to_owned())),
        }
    }
}

/// Accented capitals are replaced by their plain form, so that `Όχι` reads as `ΟΧΙ`.
fn without_tonos(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'Ά' => 'Α',
            'Έ' => 'Ε',
            'Ή' => 'Η',
            'Ί' | 'Ϊ' => 'Ι',
            'Ό' => 'Ο',
            'Ύ' | 'Ϋ' => 'Υ',
            'Ώ' => 'Ω',
            c => c,
        })
        .collect()
}
