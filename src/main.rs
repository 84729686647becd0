use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use log::error;
use show_scout::{Browser, Notice, TvMazeDirectory};
use std::io;
use std::process;

/// Search the TVMaze show directory and browse episode lists.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search to run immediately instead of starting at the prompt.
    query: Option<String>,

    /// API root to query. Mostly useful for testing against a local server.
    #[arg(long, default_value = "https://api.tvmaze.com")]
    base_url: String,
}

type TerminalBrowser = Browser<TvMazeDirectory, fn(Notice)>;

/// What the user picked from the show list menu.
enum Action {
    Search,
    Episodes(usize),
    Quit,
}

/// Displays a notice the way the original alert did: fixed message to the
/// user, underlying error to the diagnostics log.
fn display_notice(notice: Notice) {
    error!("{}", notice.cause());
    eprintln!("{}", notice.message());
}

/// Draws the current page to stdout.
fn redraw(browser: &TerminalBrowser) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = browser.page().draw(&mut out) {
        eprintln!("Error: failed to draw page: {e}");
        process::exit(1);
    }
}

/// Prompts for a search query.
///
/// Empty input is submitted as-is; the browser treats it as a no-op, so
/// the user just lands back at the prompt.
fn prompt_query() -> Result<String, dialoguer::Error> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Search TV shows")
        .allow_empty(true)
        .interact_text()
}

/// Asks the user what to do next with the current show list.
fn next_action(browser: &TerminalBrowser) -> Result<Action, dialoguer::Error> {
    let cards = browser.page().shows.cards();

    if cards.is_empty() {
        return Ok(Action::Search);
    }

    let mut items: Vec<String> = cards
        .iter()
        .map(|card| format!("Show episodes: {}", card.name))
        .collect();
    items.push("Search again".to_string());
    items.push("Quit".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick a show")
        .items(&items)
        .default(0)
        .interact()?;

    if selection < cards.len() {
        Ok(Action::Episodes(selection))
    } else if selection == cards.len() {
        Ok(Action::Search)
    } else {
        Ok(Action::Quit)
    }
}

/// Unwraps a prompt result, treating an interrupted read (Ctrl+C or Esc)
/// as a quiet quit.
fn prompt_or_quit<T>(result: Result<T, dialoguer::Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => None,
        Err(e) => {
            eprintln!("Error: prompt failed: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    let directory = TvMazeDirectory::with_base_url(&args.base_url);
    let mut browser: TerminalBrowser = Browser::new(directory, display_notice);

    if let Some(query) = &args.query {
        browser.submit_search(query);
        redraw(&browser);
    }

    loop {
        let Some(action) = prompt_or_quit(next_action(&browser)) else {
            break;
        };

        match action {
            Action::Search => {
                let Some(query) = prompt_or_quit(prompt_query()) else {
                    break;
                };
                browser.submit_search(&query);
                redraw(&browser);
            }
            Action::Episodes(index) => {
                browser.request_episodes(index);
                redraw(&browser);
            }
            Action::Quit => break,
        }
    }
}
