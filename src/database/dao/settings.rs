use super::Result;
use crate::database::model::settings::Settings;
use crate::database::schema::settings;
use diesel::prelude::*;

/// The stored club name, if one was ever set.
pub fn retrieve_club_name(connection: &mut SqliteConnection) -> Result<Option<String>> {
    let result = settings::table
        .order(settings::id.desc())
        .select(Settings::as_select())
        .first(connection)
        .optional()?;

    Ok(result.map(|settings| settings.club_name().to_owned()))
}

/// The table holds a single row: any previous one is dropped.
pub fn replace_club_name(connection: &mut SqliteConnection, club_name: &str) -> Result<()> {
    connection.transaction(|connection| {
        diesel::delete(settings::table).execute(connection)?;
        diesel::insert_into(settings::table)
            .values(Settings::new(club_name.to_owned()))
            .execute(connection)?;

        debug!("Club name set to [{club_name}]");
        Ok(())
    })
}
