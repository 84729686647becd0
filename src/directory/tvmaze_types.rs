/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One element of the TVMaze show search response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show; the relevance score and other fields are ignored
    pub show: TvMazeShow,
}

/// A show as returned inside a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// Directory identifier for the show
    pub id: u64,
    /// The name of the show (may be null)
    pub name: Option<String>,
    /// Short description in HTML format (may be null)
    pub summary: Option<String>,
    /// Artwork URLs (null for shows without artwork)
    pub image: Option<TvMazeImage>,
}

/// Artwork URLs attached to a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// URL of the medium-sized poster
    pub medium: String,
}

/// A single episode from the TVMaze episode list endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Directory identifier for the episode
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
