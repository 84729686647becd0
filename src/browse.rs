//! Wiring between user actions, the show directory and the page.

use crate::directory::{DirectoryError, ShowDirectory};
use crate::page::Page;

/// User-facing notification emitted when a directory call fails.
///
/// Carries the underlying error for diagnostics; the text shown to the
/// user is the fixed message returned by [`Notice::message`].
#[derive(Debug)]
pub enum Notice {
    /// A show search could not be completed
    SearchFailed(DirectoryError),
    /// An episode list could not be fetched
    EpisodeFetchFailed(DirectoryError),
}

impl Notice {
    /// The fixed message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SearchFailed(_) => "Error finding that for you! Please try again!",
            Notice::EpisodeFetchFailed(_) => {
                "Unable to get episodes! Sorry about that, please try again."
            }
        }
    }

    /// The underlying error, for diagnostics.
    pub fn cause(&self) -> &DirectoryError {
        match self {
            Notice::SearchFailed(e) | Notice::EpisodeFetchFailed(e) => e,
        }
    }
}

/// Drives the page in response to user actions.
///
/// Both entry points issue at most one directory call and never return an
/// error: a failed call is reported once through the notice callback and
/// the page keeps the state it had before the call.
pub struct Browser<D, F>
where
    D: ShowDirectory,
    F: FnMut(Notice),
{
    directory: D,
    page: Page,
    notify: F,
}

impl<D, F> Browser<D, F>
where
    D: ShowDirectory,
    F: FnMut(Notice),
{
    /// Creates a browser over the given directory backend.
    ///
    /// The callback receives one notice per failed directory call; it can
    /// display the message, log the cause, or stay silent.
    pub fn new(directory: D, notify: F) -> Self {
        Self {
            directory,
            page: Page::default(),
            notify,
        }
    }

    /// The current page state.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Handles a search submission.
    ///
    /// A blank query is a no-op: no request is made and the page keeps its
    /// current contents. Otherwise the episode panel is hidden and the
    /// show list replaced with the results.
    pub fn submit_search(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        self.page.episodes.hide();

        match self.directory.search_shows(query) {
            Ok(shows) => self.page.shows.render(&shows),
            Err(e) => (self.notify)(Notice::SearchFailed(e)),
        }
    }

    /// Handles activation of a card's "show episodes" affordance.
    ///
    /// `card_index` addresses the rendered show list; an out-of-range
    /// index is a no-op. On success the panel heading becomes
    /// `"<show name> Episodes"`, the panel is made visible and the
    /// episodes are rendered into it.
    pub fn request_episodes(&mut self, card_index: usize) {
        let Some(card) = self.page.shows.cards().get(card_index) else {
            return;
        };
        let show_id = card.show_id;
        let name = card.name.clone();

        match self.directory.episodes(show_id) {
            Ok(episodes) => {
                self.page.episodes.set_heading(format!("{name} Episodes"));
                self.page.episodes.show();
                self.page.episodes.render(&episodes);
            }
            Err(e) => (self.notify)(Notice::EpisodeFetchFailed(e)),
        }
    }
}
