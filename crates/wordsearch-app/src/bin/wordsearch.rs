//! Wordsearch command-line player.
//!
//! Loads a puzzle catalog, then lists it or replays recorded pointer events
//! through the application state and prints what was found.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- demos/puzzles.json --list
//! cargo run -- demos/puzzles.json --play 0 --events demos/events.json
//! ```

use std::{error::Error, path::PathBuf};

use clap::Parser;
use wordsearch_app::{
    input,
    settings::Settings,
    state::{AppState, PlayRecord},
};
use wordsearch_core::CellPos;
use wordsearch_game::{CellAppearance, DEFAULT_DEAD_ZONE, PuzzleCatalog, Session};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle catalog: a JSON array of `{title, grid, words}` records.
    #[arg(value_name = "PUZZLES")]
    puzzles: PathBuf,

    /// Print the puzzle titles and exit.
    #[arg(long)]
    list: bool,

    /// Start on puzzle N (zero-based) instead of the puzzle menu.
    #[arg(long, value_name = "N")]
    play: Option<usize>,

    /// Replay a JSON array of input events.
    #[arg(long, value_name = "EVENTS")]
    events: Option<PathBuf>,

    /// Pointer travel, in pixels, before a drag selects an end cell
    /// (0 to 20; also adjustable from the puzzle menu).
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_DEAD_ZONE)]
    dead_zone: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let catalog = PuzzleCatalog::from_path(&args.puzzles)?;
    for rejected in catalog.rejected() {
        eprintln!(
            "Skipped puzzle #{} ({}): {}",
            rejected.index,
            rejected.title.as_deref().unwrap_or("untitled"),
            rejected.error
        );
    }

    if args.list {
        for (index, title) in catalog.titles().enumerate() {
            println!("{index}: {title}");
        }
        return Ok(());
    }

    let mut settings = Settings::default();
    settings.drag.dead_zone = args.dead_zone;
    let mut app = AppState::new(catalog, settings)?;
    if let Some(index) = args.play {
        app.start_puzzle(index)?;
    }

    if let Some(path) = &args.events {
        let events = input::load_events(path)?;
        log::info!("replaying {} events from {}", events.len(), path.display());
        for event in events {
            if app.handle(event).is_exit() {
                break;
            }
        }
    }

    for record in app.records() {
        print_record(record);
    }
    if let Some(session) = app.session() {
        print_session(session);
    }
    Ok(())
}

fn print_record(record: &PlayRecord) {
    let status = if record.solved { "solved" } else { "unsolved" };
    println!(
        "{}: {}/{} words, {status}",
        record.title, record.found, record.total
    );
}

fn print_session(session: &Session) {
    let puzzle = session.puzzle();
    println!("{} (in progress)", puzzle.title());

    let size = puzzle.size();
    for y in 0..size.rows() {
        let row: Vec<String> = (0..size.cols())
            .map(|x| {
                let pos = CellPos::new(x, y);
                let letter = puzzle.letter(pos).unwrap_or(' ');
                match session.appearance(pos) {
                    Some(CellAppearance::Found) => letter.to_lowercase().to_string(),
                    _ => letter.to_string(),
                }
            })
            .collect();
        println!("  {}", row.join(" "));
    }
    println!();

    for (word, found) in session.word_states() {
        let mark = if found { 'x' } else { ' ' };
        println!("  [{mark}] {word}");
    }
    println!(
        "  {}/{} words{}",
        session.found_words(),
        session.word_list().len(),
        if session.is_solved() { ", solved" } else { "" }
    );
}
