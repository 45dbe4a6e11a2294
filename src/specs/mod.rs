//! # Game “specs” module
//!
//! Everything that knows what a Puerto Rico log *means*:
//!
//! - `catalog` – closed item sets (roles, crops, buildings) and their labels.
//! - `log` – role blocks → `RoleRecord`s (player, role, resolved events).
//! - `rules` – declarative event rules: phrase test → ledger deltas.
//!
//! ## What does **not** live here
//! - Raw text scanning (`core::scan`, `core::fields`, `core::template`), which
//!   is shape-only and knows nothing about the game.
//! - Ledger layout and aggregation (`ledger`, `totals`, `game`).
//! - Loading and export (`store`, `series`, `data`, `file`).
//!
//! ## Conventions
//! - Catalog order is column order and also match precedence: a `$label`
//!   lookup returns the first declared item found in the event text.
//! - A rule that fires but cannot read its magnitude is an error, never zero.
//!
//! In short: **`specs` knows how to read the game.** Other layers decide what
//! to load, how to aggregate, and how to present/export.
pub mod catalog;
pub mod log;
pub mod rules;
