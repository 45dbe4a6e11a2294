// src/game.rs
use std::ops::Range;
use std::time::Instant;

use crate::error::Result;
use crate::ledger::{Ledger, LedgerView};
use crate::specs::catalog::Role;
use crate::specs::log::{self, RoleRecord};
use crate::tally;
use crate::totals::{CumulativeTotals, Winner};

/// One parsed game. Built in one pass from its log and never mutated after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    id: Option<String>,
    records: Vec<RoleRecord>,
    ledger: Ledger,
}

impl Game {
    /// Parse and tabulate a full log. Any structural problem fails the whole
    /// game; a partial ledger is never returned.
    pub fn from_log(text: &str) -> Result<Self> {
        let started = Instant::now();
        let records = log::parse_records(text)?;
        let players = tally::players_of(&records);
        let ledger = tally::tabulate(&records, &players)?;
        logd!(
            "{} turns, {} players tabulated in {:?}",
            records.len(),
            players.len(),
            started.elapsed()
        );
        Ok(Self { id: None, records, ledger })
    }

    pub fn with_id(id: impl Into<String>, text: &str) -> Result<Self> {
        let mut game = Self::from_log(text)?;
        game.id = Some(id.into());
        Ok(game)
    }

    pub fn id(&self) -> Option<&str> { self.id.as_deref() }

    pub fn records(&self) -> &[RoleRecord] { &self.records }

    pub fn turns(&self) -> usize { self.records.len() }

    /// Role picker of each turn.
    pub fn turn_order(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.player.as_str()).collect()
    }

    pub fn role_order(&self) -> Vec<Role> {
        self.records.iter().map(|r| r.role).collect()
    }

    /// Distinct players, first appearance in the turn order.
    pub fn players(&self) -> &[String] { self.ledger.players() }

    pub fn ledger(&self) -> &Ledger { &self.ledger }

    pub fn view(&self, range: Range<usize>) -> LedgerView<'_> {
        self.ledger.view(range)
    }

    /// Totals over `range`, or over the whole game with `None`.
    pub fn cumulative(&self, range: Option<Range<usize>>) -> CumulativeTotals {
        match range {
            Some(r) => self.ledger.view(r).cumulative(),
            None => self.ledger.cumulative(),
        }
    }

    pub fn winner(&self) -> Winner {
        self.cumulative(None).winner()
    }

    /// Who would be ahead if the game ended after `range`.
    pub fn winner_within(&self, range: Range<usize>) -> Winner {
        self.cumulative(Some(range)).winner()
    }
}
