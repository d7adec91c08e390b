#[macro_use]
extern crate log;

use club_registry::Club;
use club_registry::database::Database;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}\n{e:#?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> club_registry::Result<()> {
    let club = Club::open(Database::from_args()?)?;

    match club.club_name()? {
        Some(club_name) => info!("Club [{club_name}] is ready"),
        None => warn!("No club name yet, the club has to be set up"),
    }

    let counts = club.role_counts()?;
    info!(
        "{} people: {} members, {} athletes, {} students, {} prospects",
        counts.total(),
        counts.members(),
        counts.athletes(),
        counts.students(),
        counts.prospects()
    );

    Ok(())
}
