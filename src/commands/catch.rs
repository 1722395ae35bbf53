//! `catch`: throw a Pokeball at a Pokemon

use rand::Rng;

use super::CommandError;
use crate::app::App;
use crate::data::CaughtPokemon;

/// Base-experience value assumed when the API reports none
const DEFAULT_DIFFICULTY: u32 = 50;

/// Rolls at or below this always catch, so weak Pokemon are a sure thing
const CATCH_THRESHOLD: u32 = 40;

pub async fn run(app: &mut App, pokemon_name: &str) -> Result<(), CommandError> {
    let pokemon = app.api.fetch_pokemon(pokemon_name).await?;

    println!("Throwing a Pokeball at {}...", pokemon.name);

    let difficulty = pokemon
        .base_experience
        .unwrap_or(DEFAULT_DIFFICULTY)
        .max(1);
    let roll = rand::thread_rng().gen_range(0..difficulty);

    if roll <= CATCH_THRESHOLD {
        println!("{} was caught!", pokemon.name);
        println!("You may now inspect it with the inspect command.");
        app.pokedex
            .insert(pokemon.name.clone(), CaughtPokemon::new(pokemon));
    } else {
        println!("{} escaped!", pokemon.name);
    }
    Ok(())
}
