use crate::database::error::DatabaseError;
use dto::error::ParseError;
use std::str::FromStr;

pub(crate) mod custom_field;
pub(crate) mod person;
pub(crate) mod settings;

/// Read an optional stored literal (yes/no, month...) back into its type.
/// Blank values are read as missing.
fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, DatabaseError>
where
    T: FromStr<Err = ParseError>,
{
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.parse::<T>())
        .transpose()
        .map_err(DatabaseError::from)
}

#[cfg(test)]
mod tests {
    use crate::database::error::DatabaseError;
    use crate::database::model::parse_optional;
    use dto::yes_no::YesNo;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {None, Some(""), Some("  "), Some("ΝΑΙ"), Some("ΟΧΙ")},
        expected_result = {None, None, None, Some(YesNo::Yes), Some(YesNo::No)}
    )]
    fn should_parse_optional(value: Option<&str>, expected_result: Option<YesNo>) {
        let result = parse_optional::<YesNo>(value.map(str::to_owned)).unwrap();
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_fail_to_parse_malformed_value() {
        let result = parse_optional::<YesNo>(Some("Maybe".to_owned()));
        assert!(matches!(result, Err(DatabaseError::MalformedValue(_))));
    }
}
