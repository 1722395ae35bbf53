//! `inspect`: show details of a caught Pokemon

use crate::app::App;

pub fn run(app: &App, pokemon_name: &str) {
    let Some(caught) = app.pokedex.get(pokemon_name) else {
        println!("you have not caught that pokemon");
        return;
    };
    let pokemon = &caught.pokemon;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  -{}: {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for slot in &pokemon.types {
        println!("  - {}", slot.kind.name);
    }
    println!("Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M"));
}
