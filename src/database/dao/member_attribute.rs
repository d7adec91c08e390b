use super::Result;
use crate::database::schema::{custom_fields, member_attributes};
use diesel::prelude::*;
use dto::custom_field::{FieldId, MemberAttribute};
use dto::person::PersonId;

/// Store `value` for the pair, overwriting whatever was stored for it before.
pub fn upsert(
    connection: &mut SqliteConnection,
    person_id: PersonId,
    field_id: FieldId,
    value: &str,
) -> Result<()> {
    diesel::insert_into(member_attributes::table)
        .values((
            member_attributes::member_id.eq(person_id),
            member_attributes::field_id.eq(field_id),
            member_attributes::field_value.eq(value),
        ))
        .on_conflict((member_attributes::member_id, member_attributes::field_id))
        .do_update()
        .set(member_attributes::field_value.eq(value))
        .execute(connection)?;

    debug!("Stored value of custom field #{field_id} for person #{person_id}");
    Ok(())
}

/// Only fields with a stored value for the person are returned.
pub fn retrieve_for_member(
    connection: &mut SqliteConnection,
    person_id: PersonId,
) -> Result<Vec<MemberAttribute>> {
    let results = member_attributes::table
        .inner_join(custom_fields::table)
        .filter(member_attributes::member_id.eq(person_id))
        .order(custom_fields::id.asc())
        .select((
            member_attributes::member_id,
            member_attributes::field_id,
            custom_fields::field_name,
            custom_fields::display_name,
            member_attributes::field_value,
        ))
        .load::<(PersonId, FieldId, String, String, Option<String>)>(connection)?;

    Ok(results
        .into_iter()
        .map(|(member_id, field_id, field_name, display_name, value)| {
            MemberAttribute::new(member_id, field_id, field_name, display_name, value)
        })
        .collect())
}

pub fn delete_for_field(connection: &mut SqliteConnection, field_id: FieldId) -> Result<usize> {
    let count = diesel::delete(
        member_attributes::table.filter(member_attributes::field_id.eq(field_id)),
    )
    .execute(connection)?;

    debug!("Deleted {count} values of custom field #{field_id}");
    Ok(count)
}

pub fn delete_for_member(connection: &mut SqliteConnection, person_id: PersonId) -> Result<usize> {
    let count = diesel::delete(
        member_attributes::table.filter(member_attributes::member_id.eq(person_id)),
    )
    .execute(connection)?;

    debug!("Deleted {count} custom field values of person #{person_id}");
    Ok(count)
}
