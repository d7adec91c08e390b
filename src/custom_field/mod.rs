use crate::custom_field::error::CustomFieldError;
use crate::custom_field::error::CustomFieldError::{DuplicateField, UnknownField};
use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{NotFound, UniqueViolation};
use crate::people::error::ValidationError::BlankFieldName;
use crate::Result;
use diesel::{Connection, SqliteConnection};
use dto::custom_field::{CustomField, FieldId, MemberAttribute};
use dto::domain::{ApplicableDomains, Domain};
use dto::person::PersonId;

pub mod error;

/// Define a new custom field. A blank display name falls back to the field name.
pub fn define_field(
    connection: &mut SqliteConnection,
    field_name: &str,
    display_name: &str,
    applicable_domains: &ApplicableDomains,
) -> Result<FieldId> {
    let field_name = field_name.trim();
    if field_name.is_empty() {
        Err(BlankFieldName)?;
    }
    let display_name = match display_name.trim() {
        "" => field_name,
        display_name => display_name,
    };

    let field_id = dao::custom_field::insert(
        connection,
        field_name,
        display_name,
        applicable_domains,
    )
    .map_err(|error| match error {
        UniqueViolation(_) => DuplicateField(field_name.to_owned()),
        error => CustomFieldError::Database(error),
    })?;

    info!("Custom field `{field_name}` defined for [{applicable_domains}]");
    Ok(field_id)
}

pub fn custom_fields(connection: &mut SqliteConnection) -> Result<Vec<CustomField>> {
    Ok(dao::custom_field::retrieve_all(connection)?)
}

/// Fields to show in the section of `domain`, including those defined for every domain.
pub fn fields_for_domain(
    connection: &mut SqliteConnection,
    domain: Domain,
) -> Result<Vec<CustomField>> {
    let fields = dao::custom_field::retrieve_all(connection)?
        .into_iter()
        .filter(|field| field.applicable_domains().contains(domain))
        .collect();

    Ok(fields)
}

/// Values go first, then the definition,
/// so that no value is left behind even if foreign keys weren't enforced.
pub fn delete_field(connection: &mut SqliteConnection, field_id: FieldId) -> Result<()> {
    let count = connection
        .transaction::<_, DatabaseError, _>(|connection| {
            let count = dao::member_attribute::delete_for_field(connection, field_id)?;
            dao::custom_field::delete(connection, field_id)?;
            Ok(count)
        })
        .map_err(|error| match error {
            NotFound => UnknownField,
            error => CustomFieldError::Database(error),
        })?;

    info!("Custom field #{field_id} deleted along with {count} values");
    Ok(())
}

/// Store the value a person holds for a field, replacing any previous one.
pub fn set_attribute(
    connection: &mut SqliteConnection,
    person_id: PersonId,
    field_id: FieldId,
    value: &str,
) -> Result<()> {
    Ok(dao::member_attribute::upsert(
        connection, person_id, field_id, value,
    )?)
}

pub fn attributes_for(
    connection: &mut SqliteConnection,
    person_id: PersonId,
) -> Result<Vec<MemberAttribute>> {
    Ok(dao::member_attribute::retrieve_for_member(
        connection, person_id,
    )?)
}

#[cfg(test)]
mod tests {
    mod define_field {
        use crate::custom_field::error::CustomFieldError::DuplicateField;
        use crate::custom_field::{custom_fields, define_field, fields_for_domain};
        use crate::database::with_temp_database;
        use crate::people::error::ValidationError::BlankFieldName;
        use crate::ApplicationError;
        use dto::custom_field::CustomField;
        use dto::domain::{ApplicableDomains, Domain};
        use std::collections::BTreeSet;

        #[test]
        fn success() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let domains = ApplicableDomains::from_domains([Domain::Member]);

                let field_id = define_field(&mut connection, " ΑΜΚΑ ", "", &domains).unwrap();

                assert_eq!(
                    vec![CustomField::new(
                        field_id,
                        "ΑΜΚΑ".to_owned(),
                        "ΑΜΚΑ".to_owned(),
                        domains
                    )],
                    custom_fields(&mut connection).unwrap()
                );
            })
        }

        #[test]
        fn should_apply_empty_domain_set_to_every_domain() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let domains = ApplicableDomains::Only(BTreeSet::new());

                define_field(&mut connection, "ΑΜΚΑ", "", &domains).unwrap();

                assert_eq!(
                    &ApplicableDomains::All,
                    custom_fields(&mut connection).unwrap()[0].applicable_domains()
                );
                for domain in Domain::ALL {
                    assert_eq!(1, fields_for_domain(&mut connection, domain).unwrap().len());
                }
            })
        }

        #[test]
        fn fail_when_name_is_taken() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                define_field(&mut connection, "ΑΜΚΑ", "ΑΜΚΑ", &ApplicableDomains::All).unwrap();

                let result = define_field(&mut connection, "ΑΜΚΑ", "Άλλο", &ApplicableDomains::All);

                assert!(matches!(
                    result,
                    Err(ApplicationError::CustomField(DuplicateField(name))) if name == "ΑΜΚΑ"
                ));
                assert_eq!(1, custom_fields(&mut connection).unwrap().len());
            })
        }

        #[test]
        fn fail_when_name_is_blank() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();

                let result = define_field(&mut connection, "  ", "Κενό", &ApplicableDomains::All);

                assert!(matches!(
                    result,
                    Err(ApplicationError::Validation(BlankFieldName))
                ));
            })
        }
    }

    mod fields_for_domain {
        use crate::custom_field::{define_field, fields_for_domain};
        use crate::database::with_temp_database;
        use dto::domain::{ApplicableDomains, Domain};
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            domain = {Domain::General, Domain::Member, Domain::Athlete, Domain::Student, Domain::Prospect},
            expected_fields = {vec!["Μέγεθος"], vec!["ΑΜΚΑ", "Μέγεθος"], vec!["ΑΜΚΑ", "Μέγεθος"], vec!["Μέγεθος", "Σχολή"], vec!["Μέγεθος"]}
        )]
        fn should_list_fields_of_domain_and_of_every_domain(
            domain: Domain,
            expected_fields: Vec<&str>,
        ) {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                define_field(
                    &mut connection,
                    "ΑΜΚΑ",
                    "",
                    &ApplicableDomains::from_domains([Domain::Member, Domain::Athlete]),
                )
                .unwrap();
                define_field(&mut connection, "Μέγεθος", "", &ApplicableDomains::All).unwrap();
                define_field(
                    &mut connection,
                    "Σχολή",
                    "",
                    &ApplicableDomains::from_domains([Domain::Student]),
                )
                .unwrap();

                let result = fields_for_domain(&mut connection, domain).unwrap();

                let field_names = result
                    .iter()
                    .map(|field| field.field_name().as_str())
                    .collect::<Vec<_>>();
                assert_eq!(expected_fields, field_names);
            })
        }
    }

    mod delete_field {
        use crate::custom_field::error::CustomFieldError::UnknownField;
        use crate::custom_field::{
            attributes_for, custom_fields, define_field, delete_field, set_attribute,
        };
        use crate::database::dao::person;
        use crate::database::with_temp_database;
        use crate::ApplicationError;
        use dto::domain::ApplicableDomains;

        #[test]
        fn success() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let people = person::tests::populate_db(&mut connection);
                let amka_id =
                    define_field(&mut connection, "ΑΜΚΑ", "", &ApplicableDomains::All).unwrap();
                let size_id =
                    define_field(&mut connection, "Μέγεθος", "", &ApplicableDomains::All).unwrap();
                for person in &people {
                    set_attribute(&mut connection, *person.id(), amka_id, "12345").unwrap();
                    set_attribute(&mut connection, *person.id(), size_id, "M").unwrap();
                }

                delete_field(&mut connection, amka_id).unwrap();

                for person in &people {
                    let attributes = attributes_for(&mut connection, *person.id()).unwrap();
                    assert!(attributes.iter().all(|attribute| *attribute.field_id() == size_id));
                    assert_eq!(1, attributes.len());
                }
                assert_eq!(1, custom_fields(&mut connection).unwrap().len());
            })
        }

        #[test]
        fn fail_when_unknown_field() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();

                let result = delete_field(&mut connection, 42);

                assert!(matches!(
                    result,
                    Err(ApplicationError::CustomField(UnknownField))
                ));
            })
        }
    }

    mod set_attribute {
        use crate::custom_field::{attributes_for, define_field, set_attribute};
        use crate::database::dao::person;
        use crate::database::with_temp_database;
        use dto::domain::ApplicableDomains;

        #[test]
        fn should_keep_a_single_value_per_person_and_field() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let people = person::tests::populate_db(&mut connection);
                let person_id = *people[0].id();
                let field_id =
                    define_field(&mut connection, "ΑΜΚΑ", "", &ApplicableDomains::All).unwrap();

                for _ in 0..3 {
                    set_attribute(&mut connection, person_id, field_id, "12345").unwrap();
                }

                let attributes = attributes_for(&mut connection, person_id).unwrap();
                assert_eq!(1, attributes.len());
                assert_eq!(&Some("12345".to_owned()), attributes[0].value());
            })
        }

        #[test]
        fn should_allow_overwriting_with_blank_value() {
            with_temp_database(|database| {
                let mut connection = database.establish_connection().unwrap();
                let people = person::tests::populate_db(&mut connection);
                let person_id = *people[0].id();
                let field_id =
                    define_field(&mut connection, "ΑΜΚΑ", "", &ApplicableDomains::All).unwrap();
                set_attribute(&mut connection, person_id, field_id, "12345").unwrap();

                set_attribute(&mut connection, person_id, field_id, "").unwrap();

                let attributes = attributes_for(&mut connection, person_id).unwrap();
                assert_eq!(&Some("".to_owned()), attributes[0].value());
            })
        }
    }
}
