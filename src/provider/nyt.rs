//! Puzzle scraped from the daily Spelling Bee page

use super::{ProviderError, PuzzleProvider, parse_puzzle};
use crate::core::PuzzleDescriptor;
use std::time::Duration;
use tracing::{debug, info};

/// Default puzzle page
pub const DEFAULT_URL: &str = "https://www.nytimes.com/puzzles/spelling-bee";

const GAME_DATA_MARKER: &str = "window.gameData = ";
const GAME_DATA_END: &str = "}}";

/// Fetches the puzzle embedded in the published game page
pub struct NytProvider {
    url: String,
    timeout: Duration,
}

impl NytProvider {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl Default for NytProvider {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl PuzzleProvider for NytProvider {
    fn source(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<PuzzleDescriptor, ProviderError> {
        debug!(url = %self.url, "fetching puzzle page");
        let body = ureq::get(&self.url)
            .timeout(self.timeout)
            .call()
            .map_err(Box::new)?
            .into_string()?;

        let data = extract_game_data(&body).ok_or(ProviderError::MissingGameData)?;
        let puzzle = parse_puzzle(data)?;
        info!(date = %puzzle.date(), answers = puzzle.answers().len(), "puzzle fetched");
        Ok(puzzle)
    }
}

/// Locate the game data JSON in the page source
///
/// The blob runs from the `window.gameData = ` assignment up to and including
/// the first `}}`.
///
/// # Examples
/// ```
/// use spelling_bee::provider::extract_game_data;
///
/// let page = r#"<script>window.gameData = {"today":{"a":1}}</script>"#;
/// assert_eq!(extract_game_data(page), Some(r#"{"today":{"a":1}}"#));
/// ```
#[must_use]
pub fn extract_game_data(page: &str) -> Option<&str> {
    let start = page.find(GAME_DATA_MARKER)? + GAME_DATA_MARKER.len();
    let rest = &page[start..];
    let end = rest.find(GAME_DATA_END)? + GAME_DATA_END.len();
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_game_data_from_page() {
        let page = concat!(
            "<html><script>var x = 1;</script>",
            r#"<script type="text/javascript">window.gameData = {"today":{"displayDate":"October 18, 2026"}}</script>"#,
            "</html>"
        );
        assert_eq!(
            extract_game_data(page),
            Some(r#"{"today":{"displayDate":"October 18, 2026"}}"#)
        );
    }

    #[test]
    fn extract_game_data_missing() {
        assert_eq!(extract_game_data("<html></html>"), None);
        assert_eq!(extract_game_data("window.gameData = {\"today\": 1"), None);
    }

    #[test]
    fn provider_reports_url() {
        assert_eq!(NytProvider::default().source(), DEFAULT_URL);
    }
}
