use super::Result;
use crate::database::error::DatabaseError::NotFound;
use crate::database::model::custom_field::{CustomField, NewCustomField};
use crate::database::schema::custom_fields;
use diesel::prelude::*;
use dto::custom_field::FieldId;
use dto::domain::ApplicableDomains;

pub fn retrieve_all(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::custom_field::CustomField>> {
    let results = custom_fields::table
        .order(custom_fields::id.asc())
        .select(CustomField::as_select())
        .load(connection)?;

    Ok(results
        .into_iter()
        .map(dto::custom_field::CustomField::from)
        .collect())
}

#[cfg(test)]
pub fn retrieve(
    connection: &mut SqliteConnection,
    field_id: FieldId,
) -> Result<Option<dto::custom_field::CustomField>> {
    let result = custom_fields::table
        .find(field_id)
        .select(CustomField::as_select())
        .first(connection)
        .optional()?;

    Ok(result.map(dto::custom_field::CustomField::from))
}

/// Fails with [crate::database::error::DatabaseError::UniqueViolation] when `field_name` is taken.
pub fn insert(
    connection: &mut SqliteConnection,
    field_name: &str,
    display_name: &str,
    applicable_domains: &ApplicableDomains,
) -> Result<FieldId> {
    let field_id = diesel::insert_into(custom_fields::table)
        .values(NewCustomField::new(
            field_name,
            display_name,
            applicable_domains,
        ))
        .returning(custom_fields::id)
        .get_result(connection)?;

    debug!("Inserted custom field #{field_id} [{field_name}] for [{applicable_domains}]");
    Ok(field_id)
}

pub fn delete(connection: &mut SqliteConnection, field_id: FieldId) -> Result<()> {
    let count = diesel::delete(custom_fields::table.find(field_id)).execute(connection)?;

    if count == 0 {
        Err(NotFound)?;
    }

    debug!("Deleted custom field #{field_id}");
    Ok(())
}
