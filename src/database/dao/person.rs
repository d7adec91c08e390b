use super::Result;
use crate::database::error::DatabaseError::NotFound;
use crate::database::model::person::{NewPerson, Person};
use crate::database::schema::people;
use diesel::prelude::*;
use dto::person::{PersonDetails, PersonId};

/// Every stored person, in insertion order.
pub fn retrieve_all(connection: &mut SqliteConnection) -> Result<Vec<dto::person::Person>> {
    let results = people::table
        .order(people::id.asc())
        .select(Person::as_select())
        .load(connection)?;

    let people = {
        let mut people = Vec::with_capacity(results.len());
        for result in results {
            people.push(dto::person::Person::try_from(result)?);
        }

        people
    };

    Ok(people)
}

#[cfg(test)]
pub fn retrieve(
    connection: &mut SqliteConnection,
    person_id: PersonId,
) -> Result<Option<dto::person::Person>> {
    let result = people::table
        .find(person_id)
        .select(Person::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::person::Person::try_from).transpose()
}

/// Insert a person and return the identity the database assigned to them.
pub fn insert(connection: &mut SqliteConnection, details: &PersonDetails) -> Result<PersonId> {
    let person_id = diesel::insert_into(people::table)
        .values(NewPerson::from(details))
        .returning(people::id)
        .get_result(connection)?;

    debug!("Inserted person #{person_id} [{}]", details.full_name());
    Ok(person_id)
}

/// Overwrite every editable column of a person. `created_at` is never touched.
pub fn update(
    connection: &mut SqliteConnection,
    person_id: PersonId,
    details: &PersonDetails,
) -> Result<()> {
    let count = diesel::update(people::table.find(person_id))
        .set(NewPerson::from(details))
        .execute(connection)?;

    if count == 0 {
        Err(NotFound)?;
    }

    debug!("Updated person #{person_id}");
    Ok(())
}

pub fn delete(connection: &mut SqliteConnection, person_id: PersonId) -> Result<()> {
    let count = diesel::delete(people::table.find(person_id)).execute(connection)?;

    if count == 0 {
        Err(NotFound)?;
    }

    debug!("Deleted person #{person_id}");
    Ok(())
}
