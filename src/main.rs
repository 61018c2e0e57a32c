//! # Rota - Vote-Aware Rotation
//!
//! Rota decides which media item to present next: a per-item vote filters
//! eligibility, per-category cooldowns keep recently shown items out of
//! rotation, and the pick itself is a uniform random draw. This binary is a
//! thin shell around the [`rota`] library.
//!
//! ## Architecture
//!
//! - `cli`: Command-line interface definitions
//! - `engine`: Selection, cooldown and history engine
//! - `universe`: Item list loading and identifier normalization
//! - `config`: Settings-file store (votes + cooldown configuration)
//! - `completion`: Shell completion generation
//!
//! ## Usage
//!
//! ```bash
//! # Pick five items from a list
//! rota next --list photos.list --count 5
//!
//! # Vote an item down, permanently blocking it while negative-cooldown is 0
//! rota vote down /media/photos/blurry.jpg
//!
//! # Inspect the universe
//! rota stats --list photos.list
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;
use std::path::{Path, PathBuf};

use rota::engine::NavigationEngine;
use rota::{cli, completion, config, universe};

/// Resolve the settings file: an explicit `--settings`/`ROTA_SETTINGS`
/// override wins, otherwise the platform default is used.
fn resolve_settings_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => config::settings_path(),
    }
}

/// Build an engine over `items`, seeded from the settings file.
fn load_engine(settings: &Path, items: Vec<String>) -> Result<NavigationEngine> {
    let snapshot = config::load_snapshot(settings)?;
    let mut engine = NavigationEngine::new(items);
    engine.import(&snapshot);
    Ok(engine)
}

/// Write the engine's votes and configuration back to the settings file.
fn save_engine(settings: &Path, engine: &NavigationEngine) -> Result<()> {
    config::save_snapshot(settings, &engine.export())
}

/// Main entry point for the Rota application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the appropriate module functions. All operations return Results for
/// consistent error handling throughout the application.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug rota next --list photos.list` - Enable debug logging
/// - `RUST_LOG=rota::eligibility=trace rota stats --list photos.list`
fn main() -> Result<()> {
    // Initialize environment logger for debugging and monitoring
    env_logger::init();

    // Parse command-line arguments using Clap derive macros
    let args = cli::Args::parse();
    let settings = resolve_settings_path(args.settings)?;

    // Route commands to appropriate module functions
    match args.command {
        cli::Command::Next {
            list,
            count,
            verbose,
        } => {
            let items = universe::load_universe(&list)?;
            info!("Picking {count} item(s) from {} candidates", items.len());
            let mut engine = load_engine(&settings, items)?;

            for _ in 0..count {
                match engine.pick_next() {
                    Some(item) => {
                        if verbose {
                            println!("{} {item}", engine.get_vote(&item).symbol());
                        } else {
                            println!("{item}");
                        }
                    }
                    None => {
                        // Distinguished outcome, not an error: nothing is
                        // selectable (empty list or everything blocked).
                        eprintln!("No items available. Adjust cooldowns or clear negative votes.");
                        break;
                    }
                }
            }
        }
        cli::Command::Vote {
            direction,
            item,
            toggle,
        } => {
            let id = universe::normalize_id(&item);
            let mut engine = load_engine(&settings, Vec::new())?;

            match (direction, toggle) {
                (cli::VoteDirection::Up, false) => engine.vote_positive(&id),
                (cli::VoteDirection::Down, false) => engine.vote_negative(&id),
                (cli::VoteDirection::Up, true) => {
                    engine.toggle_vote(&id, rota::vote::Vote::Positive);
                }
                (cli::VoteDirection::Down, true) => {
                    engine.toggle_vote(&id, rota::vote::Vote::Negative);
                }
                (cli::VoteDirection::Clear, _) => engine.clear_vote(&id),
            }

            save_engine(&settings, &engine)?;
            println!("{} {id}", engine.get_vote(&id).symbol());
        }
        cli::Command::Stats { list } => {
            let items = universe::load_universe(&list)?;
            let engine = load_engine(&settings, items)?;
            print_stats(&engine);
        }
        cli::Command::Info { list, item } => {
            let items = universe::load_universe(&list)?;
            let engine = load_engine(&settings, items)?;
            let id = universe::normalize_id(&item);
            print_item_info(&engine, &id);
        }
        cli::Command::Config {
            positive,
            neutral,
            negative,
            history,
        } => {
            let mut engine = load_engine(&settings, Vec::new())?;

            if let Some(capacity) = positive {
                engine.set_positive_cooldown(capacity);
            }
            if let Some(capacity) = neutral {
                engine.set_neutral_cooldown(capacity);
            }
            if let Some(capacity) = negative {
                engine.set_negative_cooldown(capacity);
            }
            if let Some(bound) = history {
                engine.set_max_history(bound);
            }

            save_engine(&settings, &engine)?;
            let stats = engine.stats();
            println!(
                "Cooldowns: 👍={} ⚪={} 👎={}{}",
                stats.positive_cooldown,
                stats.neutral_cooldown,
                stats.negative_cooldown,
                if stats.negative_cooldown == 0 {
                    " (blocked)"
                } else {
                    ""
                }
            );
        }
        cli::Command::Reset { target } => {
            let mut engine = load_engine(&settings, Vec::new())?;
            match target {
                cli::ResetTarget::Votes => engine.reset_votes(),
                cli::ResetTarget::Positive => engine.reset_positive_votes(),
                cli::ResetTarget::Negative => engine.reset_negative_votes(),
                cli::ResetTarget::Neutral => engine.reset_neutral_votes(),
                cli::ResetTarget::All => engine.reset_all(),
            }
            save_engine(&settings, &engine)
                .context("Reset applied but settings could not be saved")?;
            println!("✓ Reset {target:?}");
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
    }

    Ok(())
}

/// Render engine statistics the way the status bar of a viewer would.
fn print_stats(engine: &NavigationEngine) {
    let stats = engine.stats();
    println!("Items:     {}", stats.total_items);
    println!("Votes:     👍 {}  ⚪ {}  👎 {}", stats.positive_voted, stats.neutral_voted, stats.negative_voted);
    println!("Eligible:  {}/{}", stats.eligible_now, stats.total_items);
    println!(
        "Cooldowns: 👍={} ⚪={} 👎={}{}",
        stats.positive_cooldown,
        stats.neutral_cooldown,
        stats.negative_cooldown,
        if stats.negative_cooldown == 0 {
            " (blocked)"
        } else {
            ""
        }
    );
    println!(
        "Cooling:   👍 {}  ⚪ {}  👎 {}",
        stats.in_cooldown.positive, stats.in_cooldown.neutral, stats.in_cooldown.negative
    );
    println!("History:   {}/{}", stats.history_position, stats.history_length);
}

fn print_item_info(engine: &NavigationEngine, id: &str) {
    let item_info = engine.item_info(id);
    println!("{} {id}", item_info.vote.symbol());
    println!("Cooldown:   {}", item_info.cooldown);
    println!("Cooling:    {}", if item_info.in_cooldown { "yes" } else { "no" });
    println!("Blocked:    {}", if item_info.blocked { "yes" } else { "no" });
    println!("Selectable: {}", if item_info.selectable { "yes" } else { "no" });
}
