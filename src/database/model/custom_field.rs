use diesel::prelude::*;
use dto::domain::ApplicableDomains;

#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = crate::database::schema::custom_fields)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CustomField {
    id: i32,
    field_name: String,
    display_name: String,
    applicable_domains: String,
}

impl From<CustomField> for dto::custom_field::CustomField {
    fn from(value: CustomField) -> Self {
        let (applicable_domains, unknown_tags) =
            ApplicableDomains::decode(&value.applicable_domains);
        if !unknown_tags.is_empty() {
            warn!(
                "Custom field `{}` refers to unknown domains {unknown_tags:?}, they are ignored.",
                value.field_name
            );
        }

        dto::custom_field::CustomField::new(
            value.id,
            value.field_name,
            value.display_name,
            applicable_domains,
        )
    }
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = crate::database::schema::custom_fields)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct NewCustomField<'a> {
    field_name: &'a str,
    display_name: &'a str,
    applicable_domains: String,
}

impl<'a> NewCustomField<'a> {
    pub(crate) fn new(
        field_name: &'a str,
        display_name: &'a str,
        applicable_domains: &ApplicableDomains,
    ) -> Self {
        Self {
            field_name,
            display_name,
            applicable_domains: applicable_domains.encode(),
        }
    }
}
