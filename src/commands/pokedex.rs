//! `pokedex`: list every caught Pokemon

use crate::app::App;

pub fn run(app: &App) {
    println!("Your Pokedex:");
    for name in app.pokedex.keys() {
        println!(" - {}", name);
    }
}
