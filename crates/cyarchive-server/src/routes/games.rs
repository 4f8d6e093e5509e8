//! Game detail endpoint.

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::debug;

use crate::error::{ArchiveError, Result};
use crate::AppState;

/// Game detail routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/game/:game", get(handle_game))
}

/// Render the detail page for one game.
async fn handle_game(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> Result<Html<String>> {
    debug!(game = %game, "Getting game");

    let found = state.catalog.lookup(&[game.as_str()]);
    let game = found
        .first()
        .copied()
        .ok_or(ArchiveError::GameNotFound(game))?;

    Ok(Html(state.templates.render_game(game)?))
}
