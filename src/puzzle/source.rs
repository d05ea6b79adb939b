//! Puzzle page fetching and game data extraction

use std::time::Duration;

use async_trait::async_trait;

use super::{GameData, PuzzleCatalog};
use crate::error::PuzzleError;

/// Canned game data used when the live page can't be fetched or parsed
pub const FALLBACK_GAME_DATA_JSON: &str = include_str!("../../assets/fallback_game_data.json");

const GAME_DATA_MARKER: &str = "window.gameData = {";

/// The marker must start within this many bytes of the script text
const GAME_DATA_MAX_OFFSET: usize = 10;

/// Anything that can hand back the puzzle page's HTML
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    async fn fetch_page(&self) -> Result<String, PuzzleError>;
}

/// Fetches the live puzzle page over HTTP
pub struct HttpPuzzleSource {
    url: String,
    timeout: Duration,
}

impl HttpPuzzleSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl PuzzleSource for HttpPuzzleSource {
    async fn fetch_page(&self) -> Result<String, PuzzleError> {
        let url = self.url.clone();
        let timeout = self.timeout;

        // ureq is blocking
        tokio::task::spawn_blocking(move || -> Result<String, PuzzleError> {
            let response = ureq::get(&url)
                .timeout(timeout)
                .set("User-Agent", "hive-puzzle-fetcher")
                .call()
                .map_err(|e| PuzzleError::Fetch(e.to_string()))?;
            response
                .into_string()
                .map_err(|e| PuzzleError::Fetch(e.to_string()))
        })
        .await
        .map_err(|e| PuzzleError::Fetch(e.to_string()))?
    }
}

/// Pull the `window.gameData` object out of the puzzle page
pub fn extract_game_data(html: &str) -> Result<GameData, PuzzleError> {
    if !html.contains("<!DOCTYPE html>") {
        return Err(PuzzleError::NotHtml);
    }

    let text = script_bodies(html)
        .find(|body| {
            body.find(GAME_DATA_MARKER)
                .is_some_and(|pos| pos < GAME_DATA_MAX_OFFSET)
        })
        .ok_or(PuzzleError::MissingGameData)?;

    let json_start = text.find('{').ok_or(PuzzleError::MissingGameData)?;

    // The object may be followed by a semicolon or more statements
    let mut stream = serde_json::Deserializer::from_str(&text[json_start..]).into_iter::<GameData>();
    match stream.next() {
        Some(result) => Ok(result?),
        None => Err(PuzzleError::MissingGameData),
    }
}

/// Parse the embedded canned puzzle payload
pub fn fallback_game_data() -> Result<GameData, PuzzleError> {
    Ok(serde_json::from_str(FALLBACK_GAME_DATA_JSON)?)
}

/// Fetch and parse today's puzzle, falling back to the canned puzzle in
/// debug mode on any failure.
///
/// Only fails if the embedded canned puzzle itself is broken.
pub async fn load_catalog(source: &dyn PuzzleSource) -> Result<PuzzleCatalog, PuzzleError> {
    let live = match source.fetch_page().await {
        Ok(html) => extract_game_data(&html)
            .and_then(|data| PuzzleCatalog::from_game_data(data, false)),
        Err(e) => Err(e),
    };

    match live {
        Ok(catalog) => {
            tracing::info!("Loaded puzzle for {}", catalog.header());
            Ok(catalog)
        }
        Err(e) => {
            tracing::warn!("Error getting puzzle data, using canned puzzle: {}", e);
            fallback_catalog()
        }
    }
}

fn fallback_catalog() -> Result<PuzzleCatalog, PuzzleError> {
    PuzzleCatalog::from_game_data(fallback_game_data()?, true)
}

/// Bodies of all inline `<script>` elements, in document order
fn script_bodies(html: &str) -> impl Iterator<Item = &str> {
    let mut rest = html;
    std::iter::from_fn(move || {
        let open = rest.find("<script")?;
        let after_open = &rest[open..];
        let body_start = after_open.find('>')? + 1;
        let body = &after_open[body_start..];
        let body_end = body.find("</script>").unwrap_or(body.len());
        rest = &body[body_end..];
        Some(&body[..body_end])
    })
}
