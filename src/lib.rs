//! Vote-aware rotation engine for media collections.
//!
//! Core modules:
//! - [`vote`] - Per-item preference votes (sparse, neutral-by-absence)
//! - [`cooldown`] - Bounded recency windows, one per vote category
//! - [`eligibility`] - Eligible-set computation and the retry-once policy
//! - [`history`] - Back/forward history with redo-branch truncation
//! - [`engine`] - The orchestrating `NavigationEngine`
//!
//! ### Supporting Modules
//!
//! - [`persist`] - Exported/persisted snapshot shape (votes + configuration)
//! - [`config`] - Settings-file store in the platform config directory
//! - [`universe`] - Item-universe supplier (list files, id normalization)
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use rota::engine::NavigationEngine;
//! use rota::vote::Vote;
//!
//! let items = vec![
//!     "/media/a.jpg".to_string(),
//!     "/media/b.jpg".to_string(),
//!     "/media/c.jpg".to_string(),
//! ];
//! let mut engine = NavigationEngine::new(items);
//!
//! // Block one item while the negative cooldown is zero.
//! engine.vote_negative("/media/b.jpg");
//!
//! let picked = engine.pick_next().expect("two items remain eligible");
//! assert_ne!(picked, "/media/b.jpg");
//! assert_eq!(engine.current(), Some(picked.as_str()));
//! assert_eq!(engine.get_vote("/media/b.jpg"), Vote::Negative);
//! ```
//!
//! ## Selection Model
//!
//! Votes never weight probability. They decide which exclusion rule applies
//! to an item:
//!
//! - **Negative** items are blocked outright while the negative cooldown is
//!   zero, otherwise they cool down in the negative window.
//! - **Positive** and **neutral** items cool down in their own windows; a
//!   zero capacity disables the cooldown entirely.
//!
//! Among the items that survive filtering, the pick is uniformly random.
//! When nothing survives, all three windows are cleared once and the scan
//! repeats; only an empty universe or a fully blocked one yields no pick.
//!
//! ## History Model
//!
//! Only `pick_next` appends. Back/forward navigation moves a position
//! through the log without touching votes or windows, and picking from the
//! middle of the log discards the forward branch, like a browser. The log
//! is bounded; the oldest entries fall off the front.
//!
//! ## Persistence
//!
//! [`engine::NavigationEngine::export`] and
//! [`engine::NavigationEngine::import`] exchange a [`persist::Snapshot`]:
//! votes and cooldown/history configuration only. History and windows are
//! transient by design and reset on reload. The engine itself never touches
//! the filesystem; [`config`] is the settings store that does.
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. Embedders share one engine instance and
//! provide their own single-writer synchronization; there is no internal
//! locking and no global state.

pub mod cli;
pub mod completion;
pub mod config;
pub mod cooldown;
pub mod eligibility;
pub mod engine;
pub mod history;
pub mod persist;
pub mod universe;
pub mod vote;
