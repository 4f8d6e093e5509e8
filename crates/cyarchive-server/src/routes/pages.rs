//! Listing pages.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use cyarchive_catalog::PAGE_SIZE;
use tracing::debug;

use crate::error::{ArchiveError, Result};
use crate::views::page_links;
use crate::AppState;

/// A parsed `/page/{page}` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Every game on one page.
    All,
    /// A numbered page, not yet clamped.
    Number(i64),
}

impl FromStr for PageRequest {
    type Err = ArchiveError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            return Ok(PageRequest::All);
        }
        s.parse::<i64>()
            .map(PageRequest::Number)
            .map_err(|_| ArchiveError::InvalidPage(s.to_string()))
    }
}

/// Listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/page/:page", get(handle_page))
}

/// Render one listing page, or every game for `all`.
async fn handle_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Html<String>> {
    debug!(page = %page, "Getting archive page");
    let catalog = &state.catalog;

    let (games, pages) = match page.parse::<PageRequest>()? {
        PageRequest::All => (
            catalog.all().iter().collect::<Vec<_>>(),
            page_links(catalog.len(), catalog.len() + 1, 1),
        ),
        PageRequest::Number(number) => {
            let games = catalog
                .page_slice(number)
                .ok_or(ArchiveError::EmptyPage(page))?;
            (games, page_links(catalog.len(), PAGE_SIZE, number))
        }
    };

    Ok(Html(state.templates.render_listing(&games, &pages)?))
}
