// src/totals.rs
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ledger::Row;

/// Summed counters per player over some window of a ledger.
/// Derived on demand; never cached by the ledger it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CumulativeTotals {
    players: Vec<String>,
    rows: Vec<Row>,
}

impl CumulativeTotals {
    pub fn players(&self) -> &[String] { &self.players }

    pub fn get(&self, player: &str) -> Option<&Row> {
        self.players.iter().position(|p| p == player).map(|ix| &self.rows[ix])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.players.iter().map(String::as_str).zip(self.rows.iter())
    }

    /// Score of one player (sum of the VP columns).
    pub fn vp(&self, player: &str) -> Option<i64> {
        self.get(player).map(Row::vp)
    }

    pub fn winner(&self) -> Winner {
        winner(self)
    }
}

impl FromIterator<(String, Row)> for CumulativeTotals {
    fn from_iter<I: IntoIterator<Item = (String, Row)>>(iter: I) -> Self {
        let (players, rows) = iter.into_iter().unzip();
        Self { players, rows }
    }
}

impl Serialize for CumulativeTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.players.len()))?;
        for (p, r) in self.iter() {
            map.serialize_entry(p, r)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Winner {
    Player(String),
    /// Tie for the top score, or nobody played.
    NoWinner,
}

impl Winner {
    pub fn name(&self) -> Option<&str> {
        match self {
            Winner::Player(p) => Some(p.as_str()),
            Winner::NoWinner => None,
        }
    }

    pub fn is(&self, player: &str) -> bool {
        self.name() == Some(player)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player(p) => f.write_str(p),
            Winner::NoWinner => f.write_str("no winner"),
        }
    }
}

impl Serialize for Winner {
    // A name, or null on a tie
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(p) => serializer.serialize_some(p),
            None => serializer.serialize_none(),
        }
    }
}

/// Highest VP sum wins; a shared maximum is no winner.
pub fn winner(totals: &CumulativeTotals) -> Winner {
    let mut best: Option<(i64, &str)> = None;
    let mut shared = false;

    for (player, row) in totals.iter() {
        let score = row.vp();
        match best {
            Some((top, _)) if score < top => {}
            Some((top, _)) if score == top => shared = true,
            _ => {
                best = Some((score, player));
                shared = false;
            }
        }
    }

    match best {
        Some((_, player)) if !shared => Winner::Player(s!(player)),
        _ => Winner::NoWinner,
    }
}
