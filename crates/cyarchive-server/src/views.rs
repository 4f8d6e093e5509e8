//! Listing and detail pages rendered through minijinja templates.
//!
//! Both templates ship with the binary. An operator can replace either one by
//! dropping a file of the same name into the template directory.

use std::fs;
use std::path::Path;

use cyarchive_catalog::Game;
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use tracing::info;

use crate::error::TemplateError;

/// Template for `/page/{page}`. Receives `games` and `total_pages`.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Template for `/game/{game}`. Receives `game`.
pub const GAME_TEMPLATE: &str = "game.html";

const BUILTIN_INDEX: &str = include_str!("../templates/index.html");
const BUILTIN_GAME: &str = include_str!("../templates/game.html");

/// One entry in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: usize,
    pub is_active: bool,
    pub is_first: bool,
    pub is_last: bool,
}

/// Page links `1..=total / limit + 1`.
///
/// `is_last` marks page `total / limit` and `is_active` compares against the
/// page as requested, before clamping. With a limit above the total (the
/// `all` listing) no link is last.
pub fn page_links(total: usize, limit: usize, active: i64) -> Vec<PageLink> {
    let last = total / limit.max(1);
    (1..=last + 1)
        .map(|page| PageLink {
            page,
            is_active: i64::try_from(page).map_or(false, |page| page == active),
            is_first: page == 1,
            is_last: page == last,
        })
        .collect()
}

/// Compiled page templates.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Templates shipped with the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::load(None)
    }

    /// Builtin templates, overridden by same-named files in `dir` if given.
    pub fn load(dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        // Descriptions arrive as HTML; templates escape names themselves.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(INDEX_TEMPLATE, BUILTIN_INDEX)?;
        env.add_template(GAME_TEMPLATE, BUILTIN_GAME)?;

        if let Some(dir) = dir {
            for name in [INDEX_TEMPLATE, GAME_TEMPLATE] {
                let path = dir.join(name);
                if !path.is_file() {
                    continue;
                }
                let source = fs::read_to_string(&path).map_err(|source| TemplateError::Read {
                    path: path.clone(),
                    source,
                })?;
                env.add_template_owned(name, source)?;
                info!(path = %path.display(), "Loaded template override");
            }
        }

        Ok(Self { env })
    }

    /// Render a listing page.
    pub fn render_listing(
        &self,
        games: &[&Game],
        pages: &[PageLink],
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_TEMPLATE)?
            .render(context! { games => games, total_pages => pages })
    }

    /// Render the detail page of one game.
    pub fn render_game(&self, game: &Game) -> Result<String, minijinja::Error> {
        self.env
            .get_template(GAME_TEMPLATE)?
            .render(context! { game => game })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(page: usize, is_active: bool, is_first: bool, is_last: bool) -> PageLink {
        PageLink {
            page,
            is_active,
            is_first,
            is_last,
        }
    }

    #[test]
    fn test_page_links() {
        // 40 games: page 1 carries the last flag, page 2 does not.
        assert_eq!(
            page_links(40, 32, 2),
            vec![link(1, false, true, true), link(2, true, false, false)]
        );
    }

    #[test]
    fn test_page_links_unclamped_active() {
        let links = page_links(40, 32, 0);
        assert!(links.iter().all(|l| !l.is_active));
        assert!(page_links(40, 32, 99).iter().all(|l| !l.is_active));
    }

    #[test]
    fn test_page_links_all() {
        // `all` uses a limit past the total, leaving one link and no last flag.
        assert_eq!(page_links(40, 41, 1), vec![link(1, true, true, false)]);
    }

    #[test]
    fn test_page_links_empty_catalog() {
        assert_eq!(page_links(0, 32, 1), vec![link(1, true, true, false)]);
        assert_eq!(page_links(0, 0, 1).len(), 1);
    }

    #[test]
    fn test_builtin_templates_render() {
        let templates = Templates::builtin().unwrap();
        let html = templates
            .render_listing(&[], &page_links(0, 32, 1))
            .unwrap();
        assert!(html.contains("<title>Cybiko Archive</title>"));
        assert!(html.contains("class=\"page active first\" href=\"/page/1\""));
    }

    #[test]
    fn test_override_replaces_one_template() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_TEMPLATE), "{{ total_pages|length }} pages").unwrap();

        let templates = Templates::load(Some(dir.path())).unwrap();
        let html = templates
            .render_listing(&[], &page_links(70, 32, 1))
            .unwrap();
        assert_eq!(html, "3 pages");
        assert!(templates.env.get_template(GAME_TEMPLATE).is_ok());
    }

    #[test]
    fn test_override_syntax_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GAME_TEMPLATE), "{% for %}").unwrap();

        let err = Templates::load(Some(dir.path())).err().unwrap();
        assert!(matches!(err, TemplateError::Syntax(_)));
    }
}
