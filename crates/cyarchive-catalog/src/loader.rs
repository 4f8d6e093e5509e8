//! One-shot directory scan that builds the catalog.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::game::{self, Game, GameFile, ICON_FILE, INTRO_FILE, TEXT_FILE};
use crate::store::Catalog;
use crate::text;

/// Scan `root` and build the catalog.
///
/// Every immediate subdirectory of `root` becomes one game, in byte-wise
/// name order. Any I/O failure aborts the whole load.
pub fn load(root: impl AsRef<Path>) -> Result<Catalog> {
    let root = root.as_ref();
    let folders = game_folders(root)?;

    let games = folders
        .iter()
        .enumerate()
        .map(|(index, folder)| scan_game(root, index, folder))
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog::new(games))
}

/// Sorted directories directly under `root`.
fn game_folders(root: &Path) -> Result<Vec<DirEntry>> {
    let folders: Vec<DirEntry> = sorted_entries(root)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .collect();

    debug!(games = folders.len(), "Games scanned in");
    Ok(folders)
}

/// Build the game for `folder`, the `index`-th folder in sorted order.
fn scan_game(root: &Path, index: usize, folder: &DirEntry) -> Result<Game> {
    let dir = root.join(&folder.file_name);
    let folder_name = folder.name.as_str();
    let mut game = Game::new(folder_name, index);

    for (position, entry) in sorted_entries(&dir)?.into_iter().enumerate() {
        if entry.is_dir {
            continue;
        }

        match entry.name.as_str() {
            TEXT_FILE => {
                game.text = read_text(&dir.join(&entry.file_name))?;
                game.text_shortened = text::shorten_text(&game.text);
            }
            INTRO_FILE => game.intro_img = game::resource_path(folder_name, INTRO_FILE),
            ICON_FILE => game.icon_img = game::resource_path(folder_name, ICON_FILE),
            _ => {}
        }

        let file = GameFile::new(folder_name, &entry.name, position + 1);
        game.cy_files.insert(entry.name, file);
    }

    debug!(
        game = %game.name,
        files = game.cy_files.len(),
        "Files scanned in"
    );
    Ok(game)
}

/// Read a description file and shape it for display.
fn read_text(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Handling text file");
    let bytes = fs::read(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text::format_description(&String::from_utf8_lossy(&bytes)))
}

/// A listed entry. `file_name` addresses the filesystem; `name` is its
/// display form and may be lossy.
struct DirEntry {
    file_name: OsString,
    name: String,
    is_dir: bool,
}

/// Entries of `dir` sorted by raw name.
fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let read_dir_error = |source| CatalogError::ReadDir {
        path: PathBuf::from(dir),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_type = entry.file_type().map_err(read_dir_error)?;
        let file_name = entry.file_name();
        entries.push(DirEntry {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(entries)
}
