use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::import::dataset::{CellValue, Dataset};
use crate::import::error::ImportError;
use crate::import::error::ImportError::{UnknownColumn, UnknownField};
use crate::import::mapping::{BaseField, ColumnMapping};
use derive_getters::Getters;
use diesel::{Connection, SqliteConnection};
use dto::person::{AthleteRole, MembershipRole, PersonDetails};
use dto::yes_no::YesNo;
use serde::Serialize;
use std::collections::HashSet;

pub mod dataset;
pub mod error;
pub mod mapping;

/// A cell that couldn't be imported. The rest of its row was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ImportWarning {
    /// Line of the row in the source, the header being line 1.
    line: usize,
    field: String,
    reason: String,
}

impl ImportWarning {
    pub fn new(line: usize, field: String, reason: String) -> Self {
        warn!("Line {line}, `{field}` not imported: {reason}");
        Self {
            line,
            field,
            reason,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Getters)]
pub struct ImportReport {
    inserted: usize,
    skipped: usize,
    warnings: Vec<ImportWarning>,
}

/// First name, last name and email, lowercased.
type DuplicateKey = (Option<String>, Option<String>, Option<String>);

fn duplicate_key(details: &PersonDetails) -> DuplicateKey {
    let normalize = |value: &Option<String>| {
        value
            .as_deref()
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty())
    };

    (
        normalize(details.first_name()),
        normalize(details.last_name()),
        normalize(details.email()),
    )
}

/// Insert every row of `dataset` that isn't already known, along with its custom field values.
///
/// Rows are compared with the people stored before the import started.
/// Each row is written in its own transaction, and each custom field value in its own savepoint:
/// a value that can't be stored is reported without losing the person.
pub fn import_rows(
    connection: &mut SqliteConnection,
    dataset: &Dataset,
    mapping: &ColumnMapping,
) -> Result<ImportReport, ImportError> {
    let base_columns = mapping
        .base_fields()
        .iter()
        .map(|(field, column)| -> Result<_, ImportError> {
            Ok((*field, column_index(dataset, column)?))
        })
        .collect::<Result<Vec<_>, ImportError>>()?;

    let fields = dao::custom_field::retrieve_all(connection)?;
    let custom_columns = mapping
        .custom_fields()
        .iter()
        .map(|(field_id, column)| -> Result<_, ImportError> {
            let field = fields
                .iter()
                .find(|field| field.id() == field_id)
                .ok_or(UnknownField(*field_id))?;
            Ok((*field_id, field.field_name().clone(), column_index(dataset, column)?))
        })
        .collect::<Result<Vec<_>, ImportError>>()?;

    let existing_keys = dao::person::retrieve_all(connection)?
        .iter()
        .map(|person| duplicate_key(person.details()))
        .collect::<HashSet<_>>();

    let mut report = ImportReport::default();
    for (index, row) in dataset.rows().iter().enumerate() {
        let line = index + 2;
        let details = project(line, row, &base_columns, &mut report.warnings);

        if existing_keys.contains(&duplicate_key(&details)) {
            warn!("Line {line}: [{}] is already registered, skipped", details.full_name());
            report.skipped += 1;
            continue;
        }

        let warnings = &mut report.warnings;
        connection.transaction::<_, DatabaseError, _>(|connection| {
            let person_id = dao::person::insert(connection, &details)?;

            for (field_id, field_name, column) in &custom_columns {
                let value = match cell(row, *column).to_text() {
                    Ok(Some(value)) => value,
                    Ok(None) => continue,
                    Err(reason) => {
                        warnings.push(ImportWarning::new(line, field_name.clone(), reason));
                        continue;
                    }
                };

                let result = connection.transaction::<_, DatabaseError, _>(|connection| {
                    dao::member_attribute::upsert(connection, person_id, *field_id, &value)
                });
                if let Err(error) = result {
                    warnings.push(ImportWarning::new(
                        line,
                        field_name.clone(),
                        error.to_string(),
                    ));
                }
            }

            Ok(person_id)
        })?;
        report.inserted += 1;
    }

    info!(
        "Import done: {} inserted, {} skipped, {} warnings",
        report.inserted,
        report.skipped,
        report.warnings.len()
    );
    Ok(report)
}

fn column_index(dataset: &Dataset, column: &str) -> Result<usize, ImportError> {
    dataset
        .column_index(column)
        .ok_or_else(|| UnknownColumn(column.to_owned()))
}

/// Rows may be shorter than the header line: missing cells are empty.
fn cell(row: &[CellValue], column: usize) -> &CellValue {
    row.get(column).unwrap_or(&CellValue::Empty)
}

fn project(
    line: usize,
    row: &[CellValue],
    base_columns: &[(BaseField, usize)],
    warnings: &mut Vec<ImportWarning>,
) -> PersonDetails {
    let mut first_name = None;
    let mut last_name = None;
    let mut phone = None;
    let mut email = None;
    let mut is_member = None;
    let mut is_athlete = None;
    let mut eom_number = None;

    for (field, column) in base_columns {
        let text = match cell(row, *column).to_text() {
            Ok(text) => text,
            Err(reason) => {
                warnings.push(ImportWarning::new(line, field.to_string(), reason));
                continue;
            }
        };
        let mut parse_flag = |text: Option<String>| match text.map(|text| text.parse::<YesNo>()) {
            Some(Ok(flag)) => Some(flag),
            Some(Err(error)) => {
                warnings.push(ImportWarning::new(line, field.to_string(), error.to_string()));
                None
            }
            None => None,
        };

        match field {
            BaseField::FirstName => first_name = text,
            BaseField::LastName => last_name = text,
            BaseField::Phone => phone = text,
            BaseField::Email => email = text,
            BaseField::IsMember => is_member = parse_flag(text),
            BaseField::IsAthlete => is_athlete = parse_flag(text),
            BaseField::EomNumber => eom_number = text,
        }
    }

    PersonDetails::new(last_name, first_name, phone, email)
        .with_membership(MembershipRole::new(is_member, None, None, None))
        .with_athlete(AthleteRole::new(is_athlete, eom_number, None))
}
