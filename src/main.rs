use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use fretcards::logging::init_cli_logger;
use fretcards::render::{card_face, deck_to_text};
use fretcards::{
    export_deck, find_deck, get_all_decks, validate_catalogue, Advance, ExportFormat,
    FretcardsError, StudyConfig, StudySession,
};

#[derive(Debug, Parser)]
#[command(name = "fretcards")]
#[command(about = "Guitar theory flashcards: keys, triad voicings and mode shapes")]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "YAML study configuration file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every deck with its card count
    Decks,
    /// Print every card of a deck with its answer
    Show { deck: String },
    /// Serialize a deck
    Export {
        deck: String,
        #[arg(long, default_value = "json")]
        format: ExportFormat,
    },
    /// Flip through a deck interactively
    Study {
        deck: String,
        #[arg(long, help = "Fixed shuffle seed")]
        seed: Option<u64>,
        #[arg(long, help = "Keep catalogue order")]
        no_shuffle: bool,
    },
    /// Validate every diagram in the catalogue
    Check,
}

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FretcardsError> {
    let mut config = match &cli.config {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };

    match cli.command {
        Command::Decks => {
            for deck in get_all_decks() {
                println!("{:<24} {:>3} cards", deck.title, deck.cards.len());
            }
        }
        Command::Show { deck } => {
            let deck = find_deck(&deck)?;
            print!("{}", deck_to_text(deck, config.show_diagrams));
        }
        Command::Export { deck, format } => {
            let deck = find_deck(&deck)?;
            println!("{}", export_deck(deck, format)?);
        }
        Command::Study {
            deck,
            seed,
            no_shuffle,
        } => {
            if seed.is_some() {
                config.seed = seed;
            }
            if no_shuffle {
                config.shuffle = false;
            }
            let deck = find_deck(&deck)?;
            let session = StudySession::from_config(deck, &config);
            study(session, &config)?;
        }
        Command::Check => {
            let decks = get_all_decks();
            validate_catalogue(decks)?;
            let cards: usize = decks.iter().map(|d| d.cards.len()).sum();
            tracing::info!(decks = decks.len(), cards, "catalogue valid");
            println!("{} decks, {} cards: all diagrams valid", decks.len(), cards);
        }
    }

    Ok(())
}

/// Interactive loop: Enter or f flips, n next, p previous, q quits.
fn study(mut session: StudySession, config: &StudyConfig) -> Result<(), FretcardsError> {
    if session.is_empty() {
        println!("{} has no cards", session.title());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(card) = session.current() {
            let face = if session.is_flipped() && !config.show_diagrams {
                card.answer.clone()
            } else {
                card_face(card, session.is_flipped())
            };
            println!("\n[{}/{}] {}", session.position(), session.len(), session.title());
            println!("{}", face);
        }
        print!("(f)lip (n)ext (p)revious (q)uit > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match line?.trim() {
            "" | "f" => session.flip(),
            "n" => {
                if session.next() == Advance::Completed {
                    println!("\nFinished {} ({} cards)", session.title(), session.len());
                    break;
                }
            }
            "p" => session.previous(),
            "q" => break,
            other => println!("Unknown command '{}'", other),
        }
    }

    Ok(())
}
