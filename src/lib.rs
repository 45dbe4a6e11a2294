// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod data;
pub mod file;
pub mod game;
pub mod ledger;
pub mod progress;
pub mod runner;
pub mod series;
pub mod store;
pub mod tally;
pub mod totals;
pub mod csv;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, TallyError};
pub use game::Game;
pub use ledger::{Counter, Ledger, LedgerView, Row};
pub use series::{Series, SeriesLoad};
pub use specs::catalog::{Building, Crop, Role};
pub use store::{FileStore, LogSource, MemoryStore};
pub use totals::{winner, CumulativeTotals, Winner};
