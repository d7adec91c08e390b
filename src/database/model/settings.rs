use derive_getters::Getters;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Debug, PartialEq, Getters)]
#[diesel(table_name = crate::database::schema::settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Settings {
    club_name: String,
}

impl Settings {
    pub(crate) fn new(club_name: String) -> Self {
        Self { club_name }
    }
}
