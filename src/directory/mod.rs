/// Data structures and traits for show directory lookups.
///
/// This module provides the normalized records the rest of the application
/// displays (show summaries and episode lists), as well as a trait for
/// implementing directory backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeDirectory;

use thiserror::Error;

/// Errors that can occur while querying a show directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Request to the directory failed
    #[error("Request failed: {0}")]
    Request(String),

    /// Failed to parse the directory's JSON response
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// Normalized display record for one TV show.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowSummary {
    /// Identifier used to fetch the show's episode list later
    pub id: u64,
    /// The show's title
    pub name: String,
    /// Short description, kept verbatim (may contain HTML markup)
    pub summary: String,
    /// URL of a medium-sized poster image, never empty
    pub image: String,
}

/// Normalized display record for one episode of a show.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// Directory identifier for the episode
    pub id: u64,
    /// The episode title
    pub name: String,
    /// Season number, as reported by the directory
    pub season: u32,
    /// Episode number within the season, as reported by the directory
    pub number: u32,
}

/// Trait for backends that can look up shows and their episodes.
///
/// Implementors of this trait retrieve show information from sources
/// such as TVMaze or other show databases.
pub trait ShowDirectory {
    /// Searches the directory for shows matching the given query.
    ///
    /// Results are returned in the backend's relevance order, without
    /// re-sorting. Callers are expected to guard against empty queries;
    /// the backend does not.
    ///
    /// # Arguments
    ///
    /// * `query` - The search term to match show titles against
    ///
    /// # Returns
    ///
    /// A Result containing the matching show summaries, or a DirectoryError
    fn search_shows(&self, query: &str) -> Result<Vec<ShowSummary>, DirectoryError>;

    /// Fetches the episode list for a previously returned show.
    ///
    /// Episodes are returned in the order the backend supplies them,
    /// typically season-then-number.
    ///
    /// # Arguments
    ///
    /// * `show_id` - Identifier taken from an earlier search result
    ///
    /// # Returns
    ///
    /// A Result containing the show's episodes, or a DirectoryError
    fn episodes(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError>;
}
