/// TVMaze directory backend implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{DirectoryError, Episode, ShowDirectory, ShowSummary};

/// Poster substituted for shows the directory has no artwork for.
const DEFAULT_SHOW_IMAGE: &str = "https://store-images.s-microsoft.com/image/apps.65316.13510798887490672.6e1ebb25-96c8-4504-b714-1f7cbca3c5ad.f9514a23-1eb8-4916-a18e-99b1a9817d15?mode=scale&q=90&h=300&w=300";

/// Show directory backed by the TVMaze API.
///
/// This backend fetches show and episode information from
/// https://api.tvmaze.com using the search and episode list endpoints.
pub struct TvMazeDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeDirectory {
    /// Creates a new TVMaze directory instance.
    pub fn new() -> Self {
        Self::with_base_url("https://api.tvmaze.com")
    }

    /// Creates a TVMaze directory talking to a different API root.
    ///
    /// Mostly useful for pointing the client at a local test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Converts one raw search result to our internal ShowSummary structure.
    ///
    /// Substitutes the default poster URL when the show carries no artwork.
    fn convert_search_result(result: TvMazeSearchResult) -> ShowSummary {
        let show = result.show;

        ShowSummary {
            id: show.id,
            name: show.name.unwrap_or_default(),
            summary: show.summary.unwrap_or_default(),
            image: show
                .image
                .map(|image| image.medium)
                .unwrap_or_else(|| DEFAULT_SHOW_IMAGE.to_string()),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: tvmaze_episode.season,
            number: tvmaze_episode.number,
        }
    }

    /// Issues a GET request and checks the response status.
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::blocking::Response, DirectoryError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| DirectoryError::Request(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(DirectoryError::Request(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response)
    }
}

impl ShowDirectory for TvMazeDirectory {
    fn search_shows(&self, query: &str) -> Result<Vec<ShowSummary>, DirectoryError> {
        // Build the API URL
        let url = format!("{}/search/shows", self.base_url);

        // Make the HTTP request with the search term as a query parameter
        let response = self.get(&url, &[("q", query)])?;

        // Parse the JSON response
        let results: Vec<TvMazeSearchResult> = response
            .json()
            .map_err(|e| DirectoryError::Parse(e.to_string()))?;

        // Convert to our internal structures, keeping the API's order
        Ok(results
            .into_iter()
            .map(Self::convert_search_result)
            .collect())
    }

    fn episodes(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let response = self.get(&url, &[])?;

        let episodes: Vec<TvMazeEpisode> = response
            .json()
            .map_err(|e| DirectoryError::Parse(e.to_string()))?;

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_search(json: &str) -> Vec<ShowSummary> {
        let results: Vec<TvMazeSearchResult> = serde_json::from_str(json).unwrap();
        results
            .into_iter()
            .map(TvMazeDirectory::convert_search_result)
            .collect()
    }

    fn convert_episodes(json: &str) -> Vec<Episode> {
        let episodes: Vec<TvMazeEpisode> = serde_json::from_str(json).unwrap();
        episodes
            .into_iter()
            .map(TvMazeDirectory::convert_episode)
            .collect()
    }

    #[test]
    fn test_show_without_artwork_gets_default_image() {
        let shows =
            convert_search(r#"[{"show":{"id":1,"name":"X","summary":"s","image":null}}]"#);

        assert_eq!(
            shows,
            vec![ShowSummary {
                id: 1,
                name: "X".to_string(),
                summary: "s".to_string(),
                image: DEFAULT_SHOW_IMAGE.to_string(),
            }]
        );
    }

    #[test]
    fn test_show_artwork_is_kept() {
        let shows = convert_search(
            r#"[{"show":{"id":2,"name":"Y","summary":"s2","image":{"medium":"http://img"}}}]"#,
        );

        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].image, "http://img");
    }

    #[test]
    fn test_search_results_keep_count_and_order() {
        let shows = convert_search(
            r#"[
                {"score":0.9,"show":{"id":3,"name":"First","summary":null,"image":null}},
                {"score":0.8,"show":{"id":4,"name":"Second","summary":"<p>b</p>","image":null}},
                {"score":0.7,"show":{"id":5,"name":"Third","summary":null,"image":null}}
            ]"#,
        );

        let names: Vec<&str> = shows.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(shows[0].summary, "");
    }

    #[test]
    fn test_episode_fields_are_kept_verbatim() {
        let episodes = convert_episodes(
            r#"[
                {"id":10,"name":"Pilot","season":1,"number":1},
                {"id":11,"name":"Cat's in the Bag...","season":1,"number":2},
                {"id":12,"name":"Seven Thirty-Seven","season":2,"number":1}
            ]"#,
        );

        assert_eq!(
            episodes,
            vec![
                Episode {
                    id: 10,
                    name: "Pilot".to_string(),
                    season: 1,
                    number: 1,
                },
                Episode {
                    id: 11,
                    name: "Cat's in the Bag...".to_string(),
                    season: 1,
                    number: 2,
                },
                Episode {
                    id: 12,
                    name: "Seven Thirty-Seven".to_string(),
                    season: 2,
                    number: 1,
                },
            ]
        );
    }

    #[test]
    fn test_untitled_episode_is_named_unknown() {
        let episodes = convert_episodes(r#"[{"id":13,"name":null,"season":0,"number":1}]"#);

        assert_eq!(episodes[0].name, "Unknown");
    }
}
