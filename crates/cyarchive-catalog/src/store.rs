//! In-memory catalog and its read-only queries.

use crate::game::Game;
use crate::PAGE_SIZE;

/// Games ordered by folder name. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    /// Wrap games already in folder order with page numbers assigned.
    pub(crate) fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Highest page a request is clamped to. The page may be empty when the
    /// game count is an exact multiple of [`PAGE_SIZE`].
    pub fn max_page(&self) -> usize {
        self.games.len() / PAGE_SIZE + 1
    }

    /// The full ordered catalog.
    pub fn all(&self) -> &[Game] {
        &self.games
    }

    /// Games whose folder identifier is in `names`, grouped by name in input order.
    pub fn lookup<S: AsRef<str>>(&self, names: &[S]) -> Vec<&Game> {
        names
            .iter()
            .flat_map(|name| {
                self.games
                    .iter()
                    .filter(move |game| game.folder_name == name.as_ref())
            })
            .collect()
    }

    /// Games on `page` after clamping it to `1..=max_page()`.
    ///
    /// Returns `None` when no game falls on the clamped page.
    pub fn page_slice(&self, page: i64) -> Option<Vec<&Game>> {
        let page = self.clamp_page(page);
        let games: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| game.page_number == page)
            .collect();

        if games.is_empty() {
            None
        } else {
            Some(games)
        }
    }

    /// Clamp a requested page into `1..=max_page()`.
    pub fn clamp_page(&self, page: i64) -> usize {
        let max = self.max_page() as i64;
        page.clamp(1, max) as usize
    }
}
