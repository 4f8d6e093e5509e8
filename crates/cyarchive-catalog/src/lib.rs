//! Cybiko archive catalog.
//!
//! Scans a resources directory once at startup and holds the resulting games
//! in memory. Each immediate subdirectory of the resources root is one game;
//! the files inside it are classified by filename suffix.
//!
//! ```text
//! resources/
//!   alpha_two/
//!     intro-pic.png   -> Game::intro_img
//!     root-ico.png    -> Game::icon_img
//!     root-spl.txt    -> Game::text, Game::text_shortened
//!     level1-pic.png  -> GameFile (PIC)
//! ```

pub mod error;
pub mod game;
pub mod loader;
pub mod store;
pub mod text;

pub use error::{CatalogError, Result};
pub use game::{FileKind, Game, GameFile};
pub use loader::load;
pub use store::Catalog;

/// Number of games shown on one listing page.
pub const PAGE_SIZE: usize = 32;
