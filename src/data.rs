// src/data.rs
//
// Shaping parsed games into export tables.
//
// - DataSet:     headers + string rows, the one shape every writer consumes.
// - totals_table: one row per game × player, summed over a window.
// - ledger_table: one row per game × turn × player inside a window.
// - GameSummary: per-game JSON document (serde).

use std::ops::Range;

use serde::Serialize;

use crate::config::options::{TableKind, Window};
use crate::game::Game;
use crate::ledger::{Counter, Row};
use crate::series::Series;
use crate::totals::{CumulativeTotals, Winner};

/// Column index of the game id in both table kinds.
pub const GAME_COL: usize = 0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Id used in tables and file names; position in the series when the game has none.
pub fn game_label(game: &Game, ix: usize) -> String {
    game.id().map_or_else(|| ix.to_string(), str::to_owned)
}

/// A game paired with its export label.
pub type Labeled<'a> = (String, &'a Game);

pub fn labeled(series: &Series) -> Vec<Labeled<'_>> {
    series.iter().enumerate().map(|(ix, g)| (game_label(g, ix), g)).collect()
}

fn counter_headers() -> impl Iterator<Item = String> {
    Counter::all().map(|c| s!(c.name()))
}

fn push_counters(out: &mut Vec<String>, row: &Row) {
    out.extend(row.values().iter().map(i64::to_string));
}

/* ---------------- Totals ---------------- */

pub fn totals_headers() -> Vec<String> {
    let mut h = vec![s!("game"), s!("player")];
    h.extend(counter_headers());
    h.push(s!("vp_total"));
    h.push(s!("winner"));
    h
}

/// Per-player sums for `window`; the winner column is decided within the same window.
pub fn totals_table(games: &[Labeled<'_>], window: Window) -> DataSet {
    let mut rows = Vec::new();
    for (label, game) in games {
        let totals = game.cumulative(Some(window.range(game.turns())));
        let winner = totals.winner();
        for (player, row) in totals.iter() {
            let mut out = vec![label.clone(), s!(player)];
            push_counters(&mut out, row);
            out.push(row.vp().to_string());
            out.push(if winner.is(player) { s!("1") } else { s!("0") });
            rows.push(out);
        }
    }
    DataSet { headers: Some(totals_headers()), rows }
}

/* ---------------- Ledger ---------------- */

pub fn ledger_headers() -> Vec<String> {
    let mut h = vec![s!("game"), s!("turn"), s!("role_player"), s!("role"), s!("player")];
    h.extend(counter_headers());
    h
}

/// Raw per-turn rows. Turns are numbered from 0, like `Window`.
pub fn ledger_table(games: &[Labeled<'_>], window: Window) -> DataSet {
    let mut rows = Vec::new();
    for (label, game) in games {
        let range = window.range(game.turns());
        let ledger = game.ledger();
        for turn in range {
            let record = &game.records()[turn];
            for player in ledger.players() {
                let Some(row) = ledger.row(player, turn) else { continue };
                let mut out = vec![
                    label.clone(),
                    turn.to_string(),
                    record.player.clone(),
                    s!(record.role.label()),
                    player.clone(),
                ];
                push_counters(&mut out, row);
                rows.push(out);
            }
        }
    }
    DataSet { headers: Some(ledger_headers()), rows }
}

pub fn table(games: &[Labeled<'_>], kind: TableKind, window: Window) -> DataSet {
    match kind {
        TableKind::Totals => totals_table(games, window),
        TableKind::Ledger => ledger_table(games, window),
    }
}

/* ---------------- JSON ---------------- */

/// Score per player, in player order.
#[derive(Debug)]
pub struct Scores<'a>(&'a CumulativeTotals);

impl Serialize for Scores<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.players().len()))?;
        for (p, r) in self.0.iter() {
            map.serialize_entry(p, &r.vp())?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct LedgerEntry<'a> {
    pub turn: usize,
    pub role_player: &'a str,
    pub role: &'static str,
    pub rows: Vec<(&'a str, &'a Row)>,
}

#[derive(Debug, Serialize)]
pub struct GameSummary<'a> {
    pub id: String,
    pub players: &'a [String],
    pub turns: usize,
    pub window: [usize; 2],
    pub totals: &'a CumulativeTotals,
    pub vp: Scores<'a>,
    pub winner: Winner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<Vec<LedgerEntry<'a>>>,
}

impl<'a> GameSummary<'a> {
    pub fn new(
        game: &'a Game,
        label: String,
        range: Range<usize>,
        totals: &'a CumulativeTotals,
        with_ledger: bool,
    ) -> Self {
        let ledger = with_ledger.then(|| {
            range
                .clone()
                .map(|turn| {
                    let record = &game.records()[turn];
                    let rows = game
                        .players()
                        .iter()
                        .filter_map(|p| game.ledger().row(p, turn).map(|r| (p.as_str(), r)))
                        .collect();
                    LedgerEntry {
                        turn,
                        role_player: record.player.as_str(),
                        role: record.role.label(),
                        rows,
                    }
                })
                .collect()
        });

        Self {
            id: label,
            players: game.players(),
            turns: game.turns(),
            window: [range.start, range.end],
            totals,
            vp: Scores(totals),
            winner: totals.winner(),
            ledger,
        }
    }
}

/// JSON array with one summary per game.
pub fn to_json(games: &[Labeled<'_>], kind: TableKind, window: Window) -> serde_json::Result<String> {
    let ranges: Vec<Range<usize>> = games.iter().map(|(_, g)| window.range(g.turns())).collect();
    let totals: Vec<CumulativeTotals> = games
        .iter()
        .zip(&ranges)
        .map(|((_, g), r)| g.cumulative(Some(r.clone())))
        .collect();

    let summaries: Vec<GameSummary<'_>> = games
        .iter()
        .zip(ranges.iter().zip(&totals))
        .map(|((label, g), (r, t))| GameSummary::new(g, label.clone(), r.clone(), t, kind == TableKind::Ledger))
        .collect();

    let mut text = serde_json::to_string_pretty(&summaries)?;
    text.push('\n');
    Ok(text)
}
