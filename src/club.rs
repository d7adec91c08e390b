use crate::database::Database;
use crate::database::dao;
use crate::export::{
    ALL_DATA_PREFIX, ALL_SHEET_LABEL, FILTERED_DATA_PREFIX, FILTERED_SHEET_LABEL, SpreadsheetFile,
};
use crate::filter::apply_filters;
use crate::import::dataset::Dataset;
use crate::import::mapping::ColumnMapping;
use crate::import::{ImportReport, import_rows};
use crate::people::error::ValidationError::BlankClubName;
use crate::{Result, custom_field, people};
use derive_getters::Getters;
use dto::custom_field::{AttributeValues, CustomField, FieldId, MemberAttribute};
use dto::domain::{ApplicableDomains, Domain};
use dto::filter_spec::FilterSpec;
use dto::person::{Person, PersonDetails, PersonId, RoleCounts};

/// Every operation the presentation layer can call.
///
/// Each call opens its own connection to the database and closes it before returning.
#[derive(Debug, Clone, Getters)]
pub struct Club {
    database: Database,
}

impl Club {
    /// Make sure the database is ready to be used.
    pub fn open(database: Database) -> Result<Self> {
        let club = Self { database };
        club.ensure_schema()?;
        Ok(club)
    }

    pub fn ensure_schema(&self) -> Result<()> {
        Ok(self.database.ensure_schema()?)
    }

    // region Settings
    /// `None` until the club is set up.
    pub fn club_name(&self) -> Result<Option<String>> {
        Ok(self
            .database
            .with_connection(dao::settings::retrieve_club_name)?)
    }

    pub fn set_club_name(&self, club_name: &str) -> Result<()> {
        let club_name = club_name.trim();
        if club_name.is_empty() {
            Err(BlankClubName)?;
        }

        self.database
            .with_connection(|connection| dao::settings::replace_club_name(connection, club_name))?;
        info!("Club renamed to [{club_name}]");
        Ok(())
    }
    // endregion

    // region People
    pub fn fetch_all_people(&self) -> Result<Vec<Person>> {
        Ok(self.database.with_connection(dao::person::retrieve_all)?)
    }

    pub fn role_counts(&self) -> Result<RoleCounts> {
        let people = self.fetch_all_people()?;
        Ok(RoleCounts::from(people.as_slice()))
    }

    pub fn filtered_people(&self, filter: &FilterSpec) -> Result<Vec<Person>> {
        let people = self.fetch_all_people()?;
        Ok(apply_filters(&people, filter))
    }

    pub fn insert_person(
        &self,
        details: &PersonDetails,
        attributes: &AttributeValues,
    ) -> Result<PersonId> {
        self.database
            .with_connection(|connection| people::insert(connection, details, attributes))
    }

    pub fn update_person(
        &self,
        person_id: PersonId,
        details: &PersonDetails,
        attributes: &AttributeValues,
    ) -> Result<()> {
        self.database.with_connection(|connection| {
            people::update(connection, person_id, details, attributes)
        })
    }

    pub fn delete_person(&self, person_id: PersonId) -> Result<()> {
        self.database
            .with_connection(|connection| people::delete(connection, person_id))
    }
    // endregion

    // region Custom fields
    pub fn define_field(
        &self,
        field_name: &str,
        display_name: &str,
        applicable_domains: &ApplicableDomains,
    ) -> Result<FieldId> {
        self.database.with_connection(|connection| {
            custom_field::define_field(connection, field_name, display_name, applicable_domains)
        })
    }

    pub fn custom_fields(&self) -> Result<Vec<CustomField>> {
        self.database.with_connection(custom_field::custom_fields)
    }

    pub fn fields_for_domain(&self, domain: Domain) -> Result<Vec<CustomField>> {
        self.database
            .with_connection(|connection| custom_field::fields_for_domain(connection, domain))
    }

    pub fn delete_field(&self, field_id: FieldId) -> Result<()> {
        self.database
            .with_connection(|connection| custom_field::delete_field(connection, field_id))
    }

    pub fn set_attribute(&self, person_id: PersonId, field_id: FieldId, value: &str) -> Result<()> {
        self.database.with_connection(|connection| {
            custom_field::set_attribute(connection, person_id, field_id, value)
        })
    }

    pub fn attributes_for(&self, person_id: PersonId) -> Result<Vec<MemberAttribute>> {
        self.database
            .with_connection(|connection| custom_field::attributes_for(connection, person_id))
    }
    // endregion

    // region Import / export
    pub fn import_rows(&self, dataset: &Dataset, mapping: &ColumnMapping) -> Result<ImportReport> {
        let report = self
            .database
            .with_connection(|connection| import_rows(connection, dataset, mapping))?;
        Ok(report)
    }

    pub fn export_filtered_people(&self, filter: &FilterSpec) -> Result<SpreadsheetFile> {
        let people = self.filtered_people(filter)?;
        Ok(SpreadsheetFile::from_rows(
            FILTERED_DATA_PREFIX,
            FILTERED_SHEET_LABEL,
            &people,
        )?)
    }

    pub fn export_all_people(&self) -> Result<SpreadsheetFile> {
        let people = self.fetch_all_people()?;
        Ok(SpreadsheetFile::from_rows(
            ALL_DATA_PREFIX,
            ALL_SHEET_LABEL,
            &people,
        )?)
    }
    // endregion
}

#[cfg(test)]
pub(crate) fn with_temp_club<F, T>(function: F) -> T
where
    F: FnOnce(&Club) -> T,
{
    crate::database::with_temp_database(|database| {
        let club = Club::open(database.clone()).unwrap();
        function(&club)
    })
}
