//! `explore`: list the Pokemon encountered in a location area

use super::CommandError;
use crate::app::App;

pub async fn run(app: &mut App, location_name: &str) -> Result<(), CommandError> {
    let location = app.api.fetch_location(location_name).await?;

    println!("Exploring {}...", location.name);
    println!("Found Pokemon:");
    for encounter in &location.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(())
}
