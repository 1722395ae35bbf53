//! `map` / `mapb`: page through the location-area listing

use super::CommandError;
use crate::app::App;
use crate::data::LocationPage;

/// Fetches the next page of location areas and prints their names
///
/// With no page fetched yet this starts from the first page; after the last
/// page the listing wraps back to the start, matching the catalog's own
/// pagination links.
pub async fn run(app: &mut App) -> Result<(), CommandError> {
    let page = app.api.fetch_locations(app.next_url.as_deref()).await?;
    show_page(app, page);
    Ok(())
}

/// Fetches the previous page, erroring if there is none
pub async fn run_back(app: &mut App) -> Result<(), CommandError> {
    let prev = app.prev_url.clone().ok_or(CommandError::FirstPage)?;
    let page = app.api.fetch_locations(Some(&prev)).await?;
    show_page(app, page);
    Ok(())
}

fn show_page(app: &mut App, page: LocationPage) {
    app.next_url = page.next;
    app.prev_url = page.previous;

    for location in &page.results {
        println!("{}", location.name);
    }
}
