use derive_getters::Getters;
use dto::custom_field::FieldId;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Person details an imported column can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseField {
    FirstName,
    LastName,
    Phone,
    Email,
    IsMember,
    IsAthlete,
    EomNumber,
}

impl BaseField {
    pub const ALL: [BaseField; 7] = [
        BaseField::FirstName,
        BaseField::LastName,
        BaseField::Phone,
        BaseField::Email,
        BaseField::IsMember,
        BaseField::IsAthlete,
        BaseField::EomNumber,
    ];

    /// Name of the matching column of the `people` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseField::FirstName => "first_name",
            BaseField::LastName => "last_name",
            BaseField::Phone => "phone",
            BaseField::Email => "email",
            BaseField::IsMember => "is_member",
            BaseField::IsAthlete => "is_athlete",
            BaseField::EomNumber => "eom_number",
        }
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which column of the imported data feeds which field.
/// Fields left out of the mapping are not imported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ColumnMapping {
    base_fields: BTreeMap<BaseField, String>,
    custom_fields: BTreeMap<FieldId, String>,
}

impl ColumnMapping {
    pub fn with_base_field(mut self, field: BaseField, column: &str) -> Self {
        self.base_fields.insert(field, column.to_owned());
        self
    }

    pub fn with_custom_field(mut self, field_id: FieldId, column: &str) -> Self {
        self.custom_fields.insert(field_id, column.to_owned());
        self
    }

    /// Every column the mapping reads from.
    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.base_fields.values().chain(self.custom_fields.values())
    }
}

#[cfg(test)]
mod tests {
    use crate::import::mapping::{BaseField, ColumnMapping};

    #[test]
    fn should_replace_previous_column_of_a_field() {
        let mapping = ColumnMapping::default()
            .with_base_field(BaseField::Email, "Mail")
            .with_base_field(BaseField::Email, "E-mail")
            .with_custom_field(3, "ΑΜΚΑ");

        assert_eq!(
            vec!["E-mail", "ΑΜΚΑ"],
            mapping.columns().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[test]
    fn should_name_base_fields_after_people_columns() {
        let names = BaseField::ALL
            .iter()
            .map(BaseField::as_str)
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                "first_name",
                "last_name",
                "phone",
                "email",
                "is_member",
                "is_athlete",
                "eom_number"
            ],
            names
        );
    }
}
