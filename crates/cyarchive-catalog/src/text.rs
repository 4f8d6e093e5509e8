//! Text shaping for descriptions, titles and share links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters of the preview before it is cut.
pub const PREVIEW_CHARS: usize = 280;

/// Suffix appended to a cut preview.
pub const ELLIPSIS: &str = "...";

/// Text used when the description file is empty.
pub const EMPTY_TEXT: &str = "No text found";

const SHARE_BASE_URL: &str = "https://cybiko.kn100.me/game";

/// Everything except the unreserved set is escaped in a query component.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap escaped angle brackets in `<kbd>` so literal tag text stands out.
///
/// Two independent passes: every `&lt;` opens a marker and every `&gt;` closes
/// one, so unbalanced input yields unbalanced markers.
pub fn add_formatting(text: &str) -> String {
    text.replace("&lt;", "<kbd>&lt;")
        .replace("&gt;", "&gt;</kbd>")
}

/// Turn raw description text into the HTML fragment shown on the site.
pub fn format_description(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_TEXT.to_string();
    }
    let escaped = escape_html(raw).replace('\n', "<br>");
    add_formatting(&escaped)
}

/// First [`PREVIEW_CHARS`] characters of `text`, with an ellipsis if cut.
pub fn shorten_text(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Display name for a folder: underscores become spaces, words are capitalized.
pub fn make_title(folder_name: &str) -> String {
    let mut title = String::with_capacity(folder_name.len());
    let mut word_start = true;
    for c in folder_name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        word_start = !c.is_alphanumeric();
    }
    title
}

/// Query-escape `value`: unreserved bytes pass, space becomes `+`, the rest `%XX`.
pub fn query_escape(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Escaped share message for a game.
///
/// The `%20` pass runs after query escaping and only touches spaces the first
/// pass left behind.
pub fn share_link(name: &str, folder_name: &str) -> String {
    let message = format!(
        "Remember {}? - It's a game released for the Cybiko Classic, a handheld from the early 2000! {}/{} #cybiko #retrogaming",
        name, SHARE_BASE_URL, folder_name
    );
    query_escape(&message).replace(' ', "%20")
}
