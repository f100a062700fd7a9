/// Base URL of contributor profile links.
const PROFILE_URL: &str = "https://github.com";

/// Glyph joining the rendered links.
const SEPARATOR: &str = " · ";

/// Rendered in place of the list when no contributors were collected.
pub const EMPTY_MESSAGE: &str = "No contributors found or error fetching data.";

/// Renders one profile hyperlink per login, visually joined by a separator
/// glyph, or the fallback message for an empty roster.
pub fn contributors_fragment(logins: &[String]) -> String {
    if logins.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    logins
        .iter()
        .map(|login| {
            format!(
                r#"<a href="{}/{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                PROFILE_URL, login, login
            )
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
