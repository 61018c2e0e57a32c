//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Rota using Clap derive
//! macros. It provides a type-safe way to parse command-line arguments and
//! route them to appropriate functionality.
//!
//! ## Commands
//!
//! - `next`: Pick the next item(s) from a list file
//! - `vote`: Record, toggle or clear a vote for an item
//! - `stats`: Display vote/cooldown/eligibility statistics
//! - `info`: Display everything known about one item
//! - `config`: Change cooldown capacities and the history bound
//! - `reset`: Reset votes by category, or everything
//!
//! ## Examples
//!
//! ```bash
//! rota next --list photos.list
//! rota vote down /media/photos/blurry.jpg
//! rota stats --list photos.list
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Vote direction on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum VoteDirection {
    /// 👍 positive vote
    Up,
    /// 👎 negative vote
    Down,
    /// ⚪ back to neutral
    Clear,
}

/// What to reset.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ResetTarget {
    /// All votes, of every category
    Votes,
    /// Only positive votes (and the positive cooldown window)
    Positive,
    /// Only negative votes (and the negative cooldown window)
    Negative,
    /// The neutral cooldown window (neutral votes are never stored)
    Neutral,
    /// Votes, cooldown windows and history
    All,
}

/// Main application arguments structure.
///
/// Uses Clap derive macros to automatically generate argument parsing,
/// help text, and validation.
#[derive(Parser)]
#[command(name = "rota")]
#[command(about = "Rota: vote-aware rotation - cooldowns, history & random picks")]
#[command(version)]
pub struct Args {
    /// Settings file to use instead of the platform default
    ///
    /// Votes and cooldown configuration are read from and written back to
    /// this file. History and cooldown windows are session-only and never
    /// persisted.
    #[arg(long, global = true, env = "ROTA_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
///
/// Each variant corresponds to a major piece of functionality in Rota.
/// Command arguments are embedded directly in the enum variants for
/// type safety and automatic validation.
#[derive(Subcommand)]
pub enum Command {
    /// Pick the next item(s) to present
    ///
    /// Applies the vote-based exclusion rules and per-category cooldowns,
    /// then draws uniformly at random among the eligible items. With
    /// `--count` larger than one, picks run back-to-back in the same
    /// session, so cooldowns space the output exactly as they would space
    /// an interactive viewer.
    Next {
        /// Newline-delimited item list file ("-" reads stdin)
        ///
        /// Each line is one item identifier, usually a file path. Blank
        /// lines and lines starting with '#' are ignored; paths are
        /// normalized to absolute form.
        #[arg(short, long)]
        list: PathBuf,

        /// Number of picks to make
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Show the vote symbol next to each pick
        #[arg(short, long)]
        verbose: bool,
    },

    /// Record a vote for an item
    ///
    /// Votes filter eligibility only: a positive vote shortens how long an
    /// item stays out of rotation after being shown, a negative vote
    /// lengthens it (or blocks the item outright when the negative cooldown
    /// is zero). Votes never change selection probability among eligible
    /// items.
    Vote {
        /// Vote direction
        direction: VoteDirection,

        /// Item identifier (normalized like list entries)
        item: String,

        /// Toggle instead of set: voting the same way twice clears the vote
        #[arg(short, long)]
        toggle: bool,
    },

    /// Show statistics for a universe
    ///
    /// Displays vote counts, the current eligible-set size, per-category
    /// cooldown occupancy and the configured capacities.
    Stats {
        /// Newline-delimited item list file ("-" reads stdin)
        #[arg(short, long)]
        list: PathBuf,
    },

    /// Show detailed information about one item
    ///
    /// Displays the item's vote, its effective cooldown capacity, whether
    /// it is currently cooling down, whether it is permanently blocked and
    /// whether the next pick could select it.
    Info {
        /// Newline-delimited item list file ("-" reads stdin)
        #[arg(short, long)]
        list: PathBuf,

        /// Item identifier (normalized like list entries)
        item: String,
    },

    /// Update cooldown capacities and the history bound
    ///
    /// Only the options given are changed; everything else keeps its stored
    /// value. Negative numbers are clamped to zero. A negative-cooldown of
    /// zero means "blocked permanently", while zero for positive/neutral
    /// means "no cooldown".
    Config {
        /// Picks before a positively voted item may repeat
        #[arg(long)]
        positive: Option<i64>,

        /// Picks before an unvoted item may repeat
        #[arg(long)]
        neutral: Option<i64>,

        /// Picks before a negatively voted item may repeat (0 = never)
        #[arg(long)]
        negative: Option<i64>,

        /// Maximum number of history entries (minimum 1)
        #[arg(long)]
        history: Option<i64>,
    },

    /// Reset stored votes
    ///
    /// Category resets drop only the named votes and empty that category's
    /// cooldown window; `all` also forgets the session history.
    Reset {
        /// What to reset
        target: ResetTarget,
    },

    /// Generate shell completions
    ///
    /// Generates completion scripts for various shells to enable tab
    /// completion of commands and options.
    ///
    /// Usage: rota completion bash > ~/.local/share/bash-completion/completions/rota
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
