//! Interactive terminal driver for the worddeck engine.
//!
//! Maps the listen-and-write gestures onto stdin commands: the learner hears
//! a word, writes it down, then either skips it as already known (which
//! removes it from the round) or reveals the card to study it.

pub mod source;
pub mod speech;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worddeck_core::{Deck, DeckSnapshot, NullPronouncer, Pronouncer};

use crate::speech::CommandPronouncer;

#[derive(Debug, Parser)]
#[command(
    name = "worddeck",
    about = "Listen-and-write vocabulary drill for plain-text word lists"
)]
pub struct Args {
    /// Word list file, one `word[phonetic]meaning` entry per line.
    /// The bundled sample list is used when omitted.
    pub file: Option<PathBuf>,

    /// Start in shuffled traversal order.
    #[arg(long)]
    pub random: bool,

    /// Shuffle seed, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Text-to-speech command; the word is appended as the last argument.
    #[arg(long)]
    pub tts: Option<String>,

    /// Disable pronunciation.
    #[arg(long)]
    pub quiet: bool,

    /// Print the parsed entries as JSON and exit.
    #[arg(long)]
    pub dump_json: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let src = match &args.file {
        Some(path) => source::read_file(path)?,
        None => source::builtin_sample(),
    };

    if args.dump_json {
        let entries = worddeck_core::parse_content(&src.content);
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let pronouncer: Box<dyn Pronouncer> = if args.quiet {
        Box::new(NullPronouncer)
    } else {
        let command = args.tts.as_deref().unwrap_or_else(|| speech::default_command());
        Box::new(CommandPronouncer::new(command))
    };

    let mut deck = match args.seed {
        Some(seed) => Deck::with_seed(pronouncer, seed),
        None => Deck::new(pronouncer),
    };
    if args.random {
        deck.toggle_random_mode();
    }

    print_help();
    deck.set_on_change(render);
    deck.load(&src.content, Some(&src.label));
    tracing::info!(
        "loaded {} words from {}",
        deck.entries().len(),
        deck.source_label()
    );

    let started = Utc::now();
    repl(&mut deck)?;

    let elapsed = Utc::now().signed_duration_since(started);
    println!(
        "studied {} of {} words in {}m{:02}s",
        deck.completed_count(),
        deck.entries().len(),
        elapsed.num_minutes(),
        elapsed.num_seconds() % 60,
    );
    Ok(())
}

fn repl(deck: &mut Deck) -> anyhow::Result<()> {
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" | "n" | "next" => deck.next(),
            "p" | "prev" | "previous" => deck.previous(),
            "r" | "reveal" => deck.toggle_reveal(),
            "m" | "mix" | "shuffle" => deck.toggle_random_mode(),
            "s" | "say" => deck.pronounce_current(),
            "h" | "help" | "?" => print_help(),
            "q" | "quit" | "exit" => return Ok(()),
            _ => match input
                .strip_prefix("o ")
                .or_else(|| input.strip_prefix("open "))
            {
                Some(path) => open(deck, path.trim()),
                None => println!("unknown command {input:?}, 'h' for help"),
            },
        }
        prompt()?;
    }
    Ok(())
}

/// A failed read reports the error and keeps the current deck.
fn open(deck: &mut Deck, path: &str) {
    match source::read_file(Path::new(path)) {
        Ok(src) => {
            deck.load(&src.content, Some(&src.label));
            tracing::info!("loaded {} words from {}", deck.entries().len(), path);
        }
        Err(err) => {
            tracing::warn!("{err}");
            println!("could not open {path}, keeping the current list");
        }
    }
}

fn render(snapshot: &DeckSnapshot) {
    println!();
    println!(
        "[{}] {} remaining · {} done{}",
        snapshot.source_label,
        snapshot.remaining,
        snapshot.completed,
        if snapshot.random_mode {
            " · shuffled"
        } else {
            ""
        }
    );
    match &snapshot.current {
        Some(entry) if snapshot.revealed => {
            match &entry.phonetic {
                Some(phonetic) => println!("  {}  [{}]", entry.text, phonetic),
                None => println!("  {}", entry.text),
            }
            if !entry.meaning.is_empty() {
                println!("  {}", entry.meaning);
            }
        }
        Some(_) => println!("  listen and write ('r' reveals, plain Enter marks it known)"),
        None => println!("  all words mastered, 'o <file>' opens another list"),
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn print_help() {
    println!("worddeck: listen-and-write vocabulary drill");
    println!("  Enter/n  next word (skipping a hidden word marks it known)");
    println!("  p        previous word");
    println!("  r        reveal or hide the card");
    println!("  m        toggle shuffled order (restarts the round)");
    println!("  s        say the word again");
    println!("  o <file> open another word list");
    println!("  q        quit");
}
