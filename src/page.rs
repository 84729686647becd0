//! In-memory page model
//!
//! The page holds the two display containers the browser mutates: the
//! show list and the episode panel. Rendering replaces or appends entries
//! in these containers; drawing writes the current state to any `Write`
//! sink, so tests can inspect the containers directly or capture the
//! drawn output in a buffer.

use crate::directory::{Episode, ShowSummary};
use std::io::{self, Write};

/// A single rendered show card.
///
/// The stored show id is the affordance association: activating the
/// card's "show episodes" entry hands this id back to the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCard {
    /// Directory identifier of the show
    pub show_id: u64,
    /// The show's title
    pub name: String,
    /// Plain-text summary (HTML stripped at render time)
    pub summary: String,
    /// Poster image URL
    pub image: String,
}

/// Container for the rendered show cards.
#[derive(Debug, Default)]
pub struct ShowList {
    cards: Vec<ShowCard>,
}

impl ShowList {
    /// Replaces the rendered cards with one card per given show, in order.
    ///
    /// Show summaries arrive as HTML and are converted to plain text here,
    /// so nothing downstream has to deal with markup.
    pub fn render(&mut self, shows: &[ShowSummary]) {
        self.cards.clear();

        for show in shows {
            self.cards.push(ShowCard {
                show_id: show.id,
                name: show.name.clone(),
                summary: nanohtml2text::html2text(&show.summary).trim().to_string(),
                image: show.image.clone(),
            });
        }
    }

    /// The currently rendered cards.
    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    fn draw(&self, w: &mut impl Write) -> io::Result<()> {
        for (index, card) in self.cards.iter().enumerate() {
            writeln!(w, "[{}] {}", index + 1, card.name)?;
            writeln!(w, "    {}", card.image)?;
            if !card.summary.is_empty() {
                writeln!(w, "    {}", card.summary)?;
            }
            writeln!(w)?;
        }

        Ok(())
    }
}

/// Container for the episode panel: a heading plus the rendered items.
#[derive(Debug, Default)]
pub struct EpisodePanel {
    heading: String,
    items: Vec<String>,
    visible: bool,
}

impl EpisodePanel {
    /// Sets the panel heading, e.g. `"Breaking Bad Episodes"`.
    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.heading = heading.into();
    }

    /// The current panel heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Appends one item per episode, in order.
    ///
    /// Prior items are kept: repeated renders accumulate.
    pub fn render(&mut self, episodes: &[Episode]) {
        for episode in episodes {
            self.items.push(format!(
                "{} - (Season {}, Episode {})",
                episode.name, episode.season, episode.number
            ));
        }
    }

    /// The currently rendered items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Hides the panel without discarding its contents.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Makes the panel visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Whether the panel is drawn as part of the page.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn draw(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "=== {} ===", self.heading)?;

        for item in &self.items {
            writeln!(w, "- {}", item)?;
        }

        writeln!(w)?;

        Ok(())
    }
}

/// The complete page: show list plus episode panel.
#[derive(Debug, Default)]
pub struct Page {
    pub shows: ShowList,
    pub episodes: EpisodePanel,
}

impl Page {
    /// Draws the current page state to the given sink.
    ///
    /// The episode panel is only drawn while visible.
    pub fn draw(&self, w: &mut impl Write) -> io::Result<()> {
        self.shows.draw(w)?;

        if self.episodes.is_visible() {
            self.episodes.draw(w)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, name: &str, summary: &str) -> ShowSummary {
        ShowSummary {
            id,
            name: name.to_string(),
            summary: summary.to_string(),
            image: "http://img".to_string(),
        }
    }

    fn episode(name: &str, season: u32, number: u32) -> Episode {
        Episode {
            id: 0,
            name: name.to_string(),
            season,
            number,
        }
    }

    #[test]
    fn test_show_render_replaces_previous_cards() {
        let mut list = ShowList::default();

        list.render(&[summary(1, "First", ""), summary(2, "Second", "")]);
        list.render(&[summary(3, "Third", "")]);

        assert_eq!(list.cards().len(), 1);
        assert_eq!(list.cards()[0].show_id, 3);
        assert_eq!(list.cards()[0].name, "Third");
    }

    #[test]
    fn test_show_render_strips_html_from_summaries() {
        let mut list = ShowList::default();

        list.render(&[summary(1, "X", "<p><b>Bold</b> description</p>")]);

        assert_eq!(list.cards()[0].summary, "Bold description");
    }

    #[test]
    fn test_episode_render_accumulates_across_calls() {
        // Appending without clearing is long-standing behavior; this test
        // pins it so a change to replace semantics is made deliberately.
        let mut panel = EpisodePanel::default();

        panel.render(&[episode("Pilot", 1, 1)]);
        panel.render(&[episode("Ozymandias", 5, 14)]);

        assert_eq!(
            panel.items(),
            &[
                "Pilot - (Season 1, Episode 1)".to_string(),
                "Ozymandias - (Season 5, Episode 14)".to_string(),
            ]
        );
    }

    #[test]
    fn test_episode_item_format() {
        let mut panel = EpisodePanel::default();

        panel.render(&[episode("Fly", 3, 10)]);

        assert_eq!(panel.items(), &["Fly - (Season 3, Episode 10)".to_string()]);
    }

    #[test]
    fn test_hidden_panel_is_not_drawn() {
        let mut page = Page::default();
        page.episodes.set_heading("X Episodes");
        page.episodes.render(&[episode("Pilot", 1, 1)]);

        let mut hidden = Vec::new();
        page.draw(&mut hidden).unwrap();
        assert_eq!(hidden, b"");

        page.episodes.show();

        let mut shown = Vec::new();
        page.draw(&mut shown).unwrap();
        let text = String::from_utf8(shown).unwrap();
        assert!(text.contains("=== X Episodes ==="));
        assert!(text.contains("Pilot - (Season 1, Episode 1)"));
    }

    #[test]
    fn test_drawn_card_includes_image_name_and_summary() {
        let mut page = Page::default();
        page.shows.render(&[summary(7, "Some Show", "About things")]);

        let mut out = Vec::new();
        page.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[1] Some Show"));
        assert!(text.contains("http://img"));
        assert!(text.contains("About things"));
    }
}
