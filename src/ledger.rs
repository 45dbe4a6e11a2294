// src/ledger.rs
//
// Per-player, per-turn counters.
//
// - Counter: one ledger column (role tally, VP bucket, resource, plantation, building).
// - Row:     all counters of one player for one turn (or a sum of turns).
// - Ledger:  rows for every player × every turn. Written once by the tabulator.
// - LedgerView: borrowed [start, end) window over a Ledger, for partial-game sums.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index, IndexMut, Range};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::specs::catalog::{Building, Crop, Role};
use crate::totals::CumulativeTotals;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Counter {
    /// Times the player picked this role.
    Role(Role),
    VpBuilding,
    VpBonus,
    VpHarbor,
    VpShipping,
    Colonists,
    Doubloons,
    Plantation(Crop),
    Quarry,
    RandomPlantation,
    Building(Building),
}

const SCALAR_BASE: usize = Role::COUNT;
const CROP_BASE: usize = SCALAR_BASE + 6;
const QUARRY_IX: usize = CROP_BASE + Crop::COUNT;
const RANDOM_IX: usize = QUARRY_IX + 1;
const BUILDING_BASE: usize = RANDOM_IX + 1;

/// Number of ledger columns.
pub const COLUMN_COUNT: usize = BUILDING_BASE + Building::COUNT;

/// Columns that make up a player's score.
pub const VP_COUNTERS: [Counter; 4] = [
    Counter::VpShipping,
    Counter::VpBuilding,
    Counter::VpBonus,
    Counter::VpHarbor,
];

const SCALARS: [Counter; 6] = [
    Counter::VpBuilding,
    Counter::VpBonus,
    Counter::VpHarbor,
    Counter::VpShipping,
    Counter::Colonists,
    Counter::Doubloons,
];

impl Counter {
    pub fn index(self) -> usize {
        match self {
            Counter::Role(r) => r.index(),
            Counter::VpBuilding => SCALAR_BASE,
            Counter::VpBonus => SCALAR_BASE + 1,
            Counter::VpHarbor => SCALAR_BASE + 2,
            Counter::VpShipping => SCALAR_BASE + 3,
            Counter::Colonists => SCALAR_BASE + 4,
            Counter::Doubloons => SCALAR_BASE + 5,
            Counter::Plantation(c) => CROP_BASE + c.index(),
            Counter::Quarry => QUARRY_IX,
            Counter::RandomPlantation => RANDOM_IX,
            Counter::Building(b) => BUILDING_BASE + b.index(),
        }
    }

    pub fn from_index(ix: usize) -> Option<Counter> {
        match ix {
            i if i < SCALAR_BASE => Role::ALL.get(i).copied().map(Counter::Role),
            i if i < CROP_BASE => SCALARS.get(i - SCALAR_BASE).copied(),
            i if i < QUARRY_IX => Crop::ALL.get(i - CROP_BASE).copied().map(Counter::Plantation),
            QUARRY_IX => Some(Counter::Quarry),
            RANDOM_IX => Some(Counter::RandomPlantation),
            i => Building::ALL.get(i - BUILDING_BASE).copied().map(Counter::Building),
        }
    }

    /// Column name, as used in exported tables.
    pub fn name(self) -> &'static str {
        match self {
            Counter::Role(r) => r.label(),
            Counter::VpBuilding => "vp_bld",
            Counter::VpBonus => "vp_bonus",
            Counter::VpHarbor => "vp_harbor",
            Counter::VpShipping => "vp_ship",
            Counter::Colonists => "colonists",
            Counter::Doubloons => "dblns",
            Counter::Plantation(c) => c.column(),
            Counter::Quarry => "plant_quarry",
            Counter::RandomPlantation => "plant_rand",
            Counter::Building(b) => b.label(),
        }
    }

    pub fn from_name(name: &str) -> Option<Counter> {
        Counter::all().find(|c| c.name() == name)
    }

    /// Every column, in ledger order.
    pub fn all() -> impl Iterator<Item = Counter> {
        (0..COLUMN_COUNT).filter_map(Counter::from_index)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/* ---------------- Row ---------------- */

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Row([i64; COLUMN_COUNT]);

impl Default for Row {
    fn default() -> Self { Row([0; COLUMN_COUNT]) }
}

impl Row {
    #[inline]
    pub fn get(&self, c: Counter) -> i64 { self.0[c.index()] }

    /// Saturating add; for counts that cannot realistically overflow.
    #[inline]
    pub fn add(&mut self, c: Counter, n: i64) {
        let v = &mut self.0[c.index()];
        *v = v.saturating_add(n);
    }

    /// Add `n`, returning the new value. `None` on overflow, and the row is left as it was.
    #[inline]
    pub fn checked_add(&mut self, c: Counter, n: i64) -> Option<i64> {
        let v = &mut self.0[c.index()];
        *v = v.checked_add(n)?;
        Some(*v)
    }

    /// Score: the sum of the VP columns (saturating).
    pub fn vp(&self) -> i64 {
        VP_COUNTERS.iter().fold(0i64, |acc, &c| acc.saturating_add(self.get(c)))
    }

    /// Raw values in column order.
    pub fn values(&self) -> &[i64] { &self.0 }

    pub fn iter(&self) -> impl Iterator<Item = (Counter, i64)> + '_ {
        Counter::all().map(move |c| (c, self.get(c)))
    }

    pub fn is_zero(&self) -> bool { self.0.iter().all(|&v| v == 0) }
}

impl fmt::Debug for Row {
    // Only non-zero columns; a full row is 43 numbers of mostly zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter(|(_, v)| *v != 0).map(|(c, v)| (c.name(), v)))
            .finish()
    }
}

impl Index<Counter> for Row {
    type Output = i64;
    fn index(&self, c: Counter) -> &i64 { &self.0[c.index()] }
}

impl IndexMut<Counter> for Row {
    fn index_mut(&mut self, c: Counter) -> &mut i64 { &mut self.0[c.index()] }
}

impl AddAssign<&Row> for Row {
    fn add_assign(&mut self, rhs: &Row) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a = a.saturating_add(*b);
        }
    }
}

impl Add for Row {
    type Output = Row;
    fn add(mut self, rhs: Row) -> Row {
        self += &rhs;
        self
    }
}

impl<'a> Sum<&'a Row> for Row {
    fn sum<I: Iterator<Item = &'a Row>>(iter: I) -> Row {
        iter.fold(Row::default(), |mut acc, r| {
            acc += r;
            acc
        })
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for (c, v) in self.iter() {
            map.serialize_entry(c.name(), &v)?;
        }
        map.end()
    }
}

/* ---------------- Ledger ---------------- */

/// Rows for every player at every turn. All players advance together:
/// turn `i` exists for everyone, whoever picked the role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    players: Vec<String>,
    turns: usize,
    tables: Vec<Vec<Row>>, // [player][turn]
}

impl Ledger {
    pub(crate) fn new(players: Vec<String>, turns: usize) -> Self {
        let tables = vec![vec![Row::default(); turns]; players.len()];
        Self { players, turns, tables }
    }

    /// Tabulator-only write access.
    pub(crate) fn row_mut(&mut self, player_ix: usize, turn: usize) -> &mut Row {
        &mut self.tables[player_ix][turn]
    }

    /// Players in first-appearance order.
    pub fn players(&self) -> &[String] { &self.players }

    pub fn turns(&self) -> usize { self.turns }

    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p == name)
    }

    /// All turns of one player.
    pub fn table(&self, player: &str) -> Option<&[Row]> {
        self.player_index(player).map(|ix| self.tables[ix].as_slice())
    }

    pub fn row(&self, player: &str, turn: usize) -> Option<&Row> {
        self.table(player)?.get(turn)
    }

    /// Borrowed window over `range`, clamped to the game length.
    pub fn view(&self, range: Range<usize>) -> LedgerView<'_> {
        let end = range.end.min(self.turns);
        let start = range.start.min(end);
        LedgerView { ledger: self, range: start..end }
    }

    pub fn full(&self) -> LedgerView<'_> {
        self.view(0..self.turns)
    }

    /// Whole-game totals.
    pub fn cumulative(&self) -> CumulativeTotals {
        self.full().cumulative()
    }
}

#[derive(Clone, Debug)]
pub struct LedgerView<'a> {
    ledger: &'a Ledger,
    range: Range<usize>,
}

impl<'a> LedgerView<'a> {
    pub fn range(&self) -> Range<usize> { self.range.clone() }

    pub fn turns(&self) -> usize { self.range.len() }

    pub fn players(&self) -> &'a [String] { &self.ledger.players }

    /// Rows of one player inside the window.
    pub fn rows(&self, player: &str) -> Option<&'a [Row]> {
        let ix = self.ledger.player_index(player)?;
        Some(&self.ledger.tables[ix][self.range.clone()])
    }

    /// Column sums per player over the window.
    pub fn cumulative(&self) -> CumulativeTotals {
        self.ledger
            .players
            .iter()
            .zip(&self.ledger.tables)
            .map(|(p, t)| (p.clone(), t[self.range.clone()].iter().sum::<Row>()))
            .collect()
    }
}
