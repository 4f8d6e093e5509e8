//! Game and asset records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::text;
use crate::PAGE_SIZE;

/// URL prefix under which game folders are served.
pub const RESOURCE_URL_PREFIX: &str = "/public/resources";

/// Intro image used when a game has no `intro-pic.png`.
pub const INTRO_PLACEHOLDER: &str = "https://via.placeholder.com/160x100.png";

/// Icon used when a game has no `root-ico.png`.
pub const ICON_PLACEHOLDER: &str = "https://via.placeholder.com/48x48.png";

/// File supplying a game's description.
pub const TEXT_FILE: &str = "root-spl.txt";

/// File supplying a game's intro image.
pub const INTRO_FILE: &str = "intro-pic.png";

/// File supplying a game's icon.
pub const ICON_FILE: &str = "root-ico.png";

const SCREENSHOT_METHOD: &str = "Screenshot of PicView.exe from Cybiko SDK";
const ICONV_METHOD: &str = "Text file converted from iso-8859-1 to utf-8 using iconv";

/// Original Cybiko format of an extracted asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Picture.
    Pic,
    /// Icon.
    Ico,
    /// Splash text.
    Spl,
    /// Plain text.
    Txt,
    /// Anything not recognized by suffix.
    Unknown,
}

/// Suffix dispatch table. Evaluated in order; first match wins.
const SUFFIX_TABLE: &[(&str, FileKind)] = &[
    ("-pic.png", FileKind::Pic),
    ("-ico.png", FileKind::Ico),
    ("-spl.txt", FileKind::Spl),
    ("-txt.txt", FileKind::Txt),
];

impl FileKind {
    /// Classify a file by its name.
    pub fn classify(file_name: &str) -> Self {
        SUFFIX_TABLE
            .iter()
            .find(|(suffix, _)| file_name.ends_with(suffix))
            .map(|(_, kind)| *kind)
            .unwrap_or(FileKind::Unknown)
    }

    /// Label of the original format.
    pub fn original_type(self) -> &'static str {
        match self {
            FileKind::Pic => "PIC",
            FileKind::Ico => "ICO",
            FileKind::Spl => "SPL",
            FileKind::Txt => "TXT",
            FileKind::Unknown => "Unknown",
        }
    }

    /// How the asset was pulled off the device.
    pub fn extraction_method(self) -> &'static str {
        match self {
            FileKind::Pic | FileKind::Ico => SCREENSHOT_METHOD,
            FileKind::Spl | FileKind::Txt => ICONV_METHOD,
            FileKind::Unknown => "Unknown",
        }
    }
}

/// One media or text asset belonging to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameFile {
    /// 1-based position of the entry in the folder listing.
    pub ref_id: usize,
    pub name: String,
    /// URL path the file is served under.
    pub file_path: String,
    pub extraction_method: &'static str,
    pub original_type: &'static str,
}

impl GameFile {
    /// Build the record for `file_name` inside `folder_name`.
    pub fn new(folder_name: &str, file_name: &str, ref_id: usize) -> Self {
        let kind = FileKind::classify(file_name);
        Self {
            ref_id,
            name: file_name.to_string(),
            file_path: resource_path(folder_name, file_name),
            extraction_method: kind.extraction_method(),
            original_type: kind.original_type(),
        }
    }
}

/// A game derived from one folder under the resources root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    /// Display name.
    pub name: String,
    /// Folder identifier, unique within a catalog.
    pub folder_name: String,
    #[serde(rename = "files")]
    pub cy_files: BTreeMap<String, GameFile>,
    pub intro_img: String,
    pub icon_img: String,
    /// Full description, already escaped for HTML.
    pub text: String,
    pub text_shortened: String,
    pub page_number: usize,
    /// Query-escaped share message.
    pub tweet_string: String,
}

impl Game {
    /// Create a game with no assets at position `index` in the sorted folder list.
    pub(crate) fn new(folder_name: &str, index: usize) -> Self {
        let name = text::make_title(folder_name);
        let tweet_string = text::share_link(&name, folder_name);
        Self {
            name,
            folder_name: folder_name.to_string(),
            cy_files: BTreeMap::new(),
            intro_img: INTRO_PLACEHOLDER.to_string(),
            icon_img: ICON_PLACEHOLDER.to_string(),
            text: String::new(),
            text_shortened: String::new(),
            page_number: index / PAGE_SIZE + 1,
            tweet_string,
        }
    }

    /// Files in name order.
    pub fn files(&self) -> impl Iterator<Item = &GameFile> {
        self.cy_files.values()
    }
}

/// URL path of `file_name` inside a game folder.
pub fn resource_path(folder_name: &str, file_name: &str) -> String {
    format!("{}/{}/{}", RESOURCE_URL_PREFIX, folder_name, file_name)
}
