//! Terminal front end for the reflections store.
//!
//! Sequences gateway calls and renders their results; every query and
//! outcome distinction lives in `reflections_core`.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use reflections_core::{
    default_log_level, init_logging, DateLookup, LanguageCode, LanguageTable, ReflectionStore,
    SqliteReflectionStore,
};
use std::path::PathBuf;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "reflections",
    version,
    about = "Daily multilingual reflections from a local SQLite store"
)]
struct Cli {
    /// Path to the reflections database file.
    #[arg(long, default_value = "data/reflections.db")]
    db: PathBuf,

    /// Language code (english, spanish, french, pt-BR); blank means english.
    #[arg(short, long, default_value = "")]
    language: String,

    /// Emit the raw result as JSON instead of formatted output.
    #[arg(long)]
    json: bool,

    /// Directory for rolling log files; logging stays off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show today's reflection.
    Today,
    /// Show the reflection for a date (YYYY-MM-DD).
    Date { date: String },
    /// Show a random reflection.
    Random,
    /// Search reflections by keyword.
    Search { keyword: String },
    /// Compare one date across all stored languages.
    Compare { date: String },
    /// List a calendar month (1-12).
    Month { month: u32 },
    /// Show store statistics.
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), log_dir).map_err(anyhow::Error::msg)?;
    }

    let store = SqliteReflectionStore::open(&cli.db).with_context(|| {
        format!("failed to open reflections store at `{}`", cli.db.display())
    })?;
    let table = LanguageTable::builtin();

    match &cli.command {
        Commands::Today => {
            let today = Local::now().format("%Y-%m-%d").to_string();
            show_date(&store, &today, &cli.language, cli.json)
        }
        Commands::Date { date } => show_date(&store, date, &cli.language, cli.json),
        Commands::Random => {
            let reflection = store.get_random(&cli.language)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reflection)?);
            } else {
                print!("{}", render::boxed_reflection(&reflection, true));
            }
            Ok(())
        }
        Commands::Search { keyword } => {
            let hits = store.search(keyword, &cli.language)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
                return Ok(());
            }
            println!("Found {} reflection(s) matching `{keyword}`.", hits.len());
            for hit in &hits {
                print!("{}", render::boxed_reflection(hit, false));
            }
            Ok(())
        }
        Commands::Compare { date } => {
            let variants = store.get_multilingual(date)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&variants)?);
                return Ok(());
            }
            if variants.is_empty() {
                println!("No reflections found for {date}.");
            } else {
                print!("{}", render::multilingual_display(&variants, date, &table));
            }
            Ok(())
        }
        Commands::Month { month } => {
            let listing = store.get_by_month(*month, &cli.language)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(());
            }
            let language = LanguageCode::resolve(&cli.language);
            println!(
                "{} reflection(s) for month {month:02} ({language}).",
                listing.len()
            );
            for reflection in &listing {
                println!("{}  {}", reflection.date, reflection.title);
            }
            Ok(())
        }
        Commands::Stats => {
            let summary = store.get_statistics()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::stats_table(&summary, &table));
            }
            Ok(())
        }
    }
}

fn show_date(
    store: &SqliteReflectionStore,
    date: &str,
    language: &str,
    json: bool,
) -> Result<()> {
    match store.get_by_date(date, language)? {
        DateLookup::Found(reflection) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&reflection)?);
            } else {
                print!("{}", render::boxed_reflection(&reflection, true));
            }
        }
        DateLookup::NotFound => {
            if json {
                println!("null");
            } else {
                let language = LanguageCode::resolve(language);
                println!("No reflection found for {date} ({language}).");
            }
        }
    }
    Ok(())
}
