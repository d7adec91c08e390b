use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::people::error::ValidationError;
use crate::people::error::ValidationError::{MissingFirstName, MissingLastName};
use crate::Result;
use diesel::{Connection, SqliteConnection};
use dto::custom_field::AttributeValues;
use dto::person::{PersonDetails, PersonId};

pub mod error;

/// First and last names are the only mandatory details.
pub fn validate(details: &PersonDetails) -> Result<(), ValidationError> {
    let is_blank =
        |name: &Option<String>| name.as_deref().is_none_or(|name| name.trim().is_empty());

    if is_blank(details.first_name()) {
        Err(MissingFirstName)?;
    }
    if is_blank(details.last_name()) {
        Err(MissingLastName)?;
    }

    Ok(())
}

/// Store a new person along with their custom field values.
/// Either everything is written or nothing is.
pub fn insert(
    connection: &mut SqliteConnection,
    details: &PersonDetails,
    attributes: &AttributeValues,
) -> Result<PersonId> {
    validate(details)?;

    let person_id = connection.transaction::<_, DatabaseError, _>(|connection| {
        let person_id = dao::person::insert(connection, details)?;
        write_attributes(connection, person_id, attributes)?;
        Ok(person_id)
    })?;

    info!("Person #{person_id} [{}] added", details.full_name());
    Ok(person_id)
}

/// Overwrite a person's details and the custom field values given.
/// Values that aren't given are left as they were.
pub fn update(
    connection: &mut SqliteConnection,
    person_id: PersonId,
    details: &PersonDetails,
    attributes: &AttributeValues,
) -> Result<()> {
    validate(details)?;

    connection.transaction::<_, DatabaseError, _>(|connection| {
        dao::person::update(connection, person_id, details)?;
        write_attributes(connection, person_id, attributes)
    })?;

    info!("Person #{person_id} [{}] updated", details.full_name());
    Ok(())
}

pub fn delete(connection: &mut SqliteConnection, person_id: PersonId) -> Result<()> {
    connection.transaction::<_, DatabaseError, _>(|connection| {
        dao::member_attribute::delete_for_member(connection, person_id)?;
        dao::person::delete(connection, person_id)
    })?;

    info!("Person #{person_id} deleted");
    Ok(())
}

/// Blank values are skipped so that no empty cell gets stored.
fn write_attributes(
    connection: &mut SqliteConnection,
    person_id: PersonId,
    attributes: &AttributeValues,
) -> Result<(), DatabaseError> {
    for (field_id, value) in attributes {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        dao::member_attribute::upsert(connection, person_id, *field_id, value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    mod validate {
        use crate::people::error::ValidationError;
        use crate::people::error::ValidationError::{MissingFirstName, MissingLastName};
        use crate::people::validate;
        use dto::person::PersonDetails;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            last_name = {Some("Papas"), None, Some("  "), Some("Papas"), None},
            first_name = {Some("Nikos"), Some("Nikos"), Some("Nikos"), Some(""), None},
            expected_result = {Ok(()), Err(MissingLastName), Err(MissingLastName), Err(MissingFirstName), Err(MissingFirstName)}
        )]
        fn should_require_names(
            last_name: Option<&str>,
            first_name: Option<&str>,
            expected_result: Result<(), ValidationError>,
        ) {
            let details = PersonDetails::new(
                last_name.map(str::to_owned),
                first_name.map(str::to_owned),
                None,
                None,
            );

            assert_eq!(expected_result, validate(&details));
        }
    }

    mod insert {
        use crate::database::dao::{custom_field, member_attribute, person};
        use crate::database::with_temp_database;
        use crate::people::error::ValidationError::MissingLastName;
        use crate::people::insert;
        use crate::ApplicationError;
        use dto::custom_field::AttributeValues;
        use dto::person::PersonDetails;
        use dto::person::tests::nikos_papas_details;

        #[test]
        fn success() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let (amka_id, size_id) = custom_field::tests::populate_db(&mut connection);
                let attributes = AttributeValues::from([
                    (amka_id, " 12345 ".to_owned()),
                    (size_id, "".to_owned()),
                ]);

                let person_id =
                    insert(&mut connection, &nikos_papas_details(), &attributes).unwrap();

                let person = person::retrieve(&mut connection, person_id).unwrap().unwrap();
                assert_eq!(&nikos_papas_details(), person.details());
                let stored_attributes =
                    member_attribute::retrieve_for_member(&mut connection, person_id).unwrap();
                assert_eq!(1, stored_attributes.len());
                assert_eq!(&amka_id, stored_attributes[0].field_id());
                assert_eq!(&Some("12345".to_owned()), stored_attributes[0].value());
            })
        }

        #[test]
        fn fail_before_writing_when_name_is_missing() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let details = PersonDetails::new(None, Some("Nikos".to_owned()), None, None);

                let result = insert(&mut connection, &details, &AttributeValues::new());

                assert!(matches!(
                    result,
                    Err(ApplicationError::Validation(MissingLastName))
                ));
                assert!(person::retrieve_all(&mut connection).unwrap().is_empty());
            })
        }

        #[test]
        fn should_roll_back_person_when_an_attribute_fails() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let attributes = AttributeValues::from([(42, "12345".to_owned())]);

                let result = insert(&mut connection, &nikos_papas_details(), &attributes);

                assert!(matches!(result, Err(ApplicationError::Database(_))));
                assert!(person::retrieve_all(&mut connection).unwrap().is_empty());
            })
        }
    }

    mod update {
        use crate::database::dao::{custom_field, member_attribute, person};
        use crate::database::error::DatabaseError::NotFound;
        use crate::database::with_temp_database;
        use crate::people::{insert, update};
        use crate::ApplicationError;
        use dto::custom_field::AttributeValues;
        use dto::person::tests::{kostas_papadopoulos_details, nikos_papas_details};

        #[test]
        fn success() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let (amka_id, size_id) = custom_field::tests::populate_db(&mut connection);
                let person_id = insert(
                    &mut connection,
                    &nikos_papas_details(),
                    &AttributeValues::from([
                        (amka_id, "12345".to_owned()),
                        (size_id, "M".to_owned()),
                    ]),
                )
                .unwrap();

                update(
                    &mut connection,
                    person_id,
                    &kostas_papadopoulos_details(),
                    &AttributeValues::from([
                        (amka_id, "67890".to_owned()),
                        (size_id, " ".to_owned()),
                    ]),
                )
                .unwrap();

                let person = person::retrieve(&mut connection, person_id).unwrap().unwrap();
                assert_eq!(&kostas_papadopoulos_details(), person.details());
                let values = member_attribute::retrieve_for_member(&mut connection, person_id)
                    .unwrap()
                    .into_iter()
                    .map(|attribute| attribute.value().clone())
                    .collect::<Vec<_>>();
                assert_eq!(vec![Some("67890".to_owned()), Some("M".to_owned())], values);
            })
        }

        #[test]
        fn fail_when_unknown_person() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();

                let result = update(
                    &mut connection,
                    42,
                    &nikos_papas_details(),
                    &AttributeValues::new(),
                );

                assert!(matches!(result, Err(ApplicationError::Database(NotFound))));
            })
        }
    }

    mod delete {
        use crate::database::dao::{custom_field, member_attribute, person};
        use crate::database::with_temp_database;
        use crate::people::{delete, insert};
        use dto::custom_field::AttributeValues;
        use dto::person::tests::nikos_papas_details;

        #[test]
        fn success() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let (amka_id, _) = custom_field::tests::populate_db(&mut connection);
                let person_id = insert(
                    &mut connection,
                    &nikos_papas_details(),
                    &AttributeValues::from([(amka_id, "12345".to_owned())]),
                )
                .unwrap();

                delete(&mut connection, person_id).unwrap();

                assert_eq!(None, person::retrieve(&mut connection, person_id).unwrap());
                assert!(
                    member_attribute::retrieve_for_member(&mut connection, person_id)
                        .unwrap()
                        .is_empty()
                );
            })
        }
    }
}
