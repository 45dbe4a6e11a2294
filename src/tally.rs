// src/tally.rs
use crate::core::scan;
use crate::error::{Result, TallyError};
use crate::ledger::{Counter, Ledger};
use crate::specs::log::RoleRecord;
use crate::specs::rules;

/// Distinct role pickers in first-appearance order.
pub fn players_of(records: &[RoleRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !out.iter().any(|p| p == &r.player) {
            out.push(r.player.clone());
        }
    }
    out
}

/// Build the per-turn ledger for one game.
///
/// Turn `i` credits the picker with one use of its role, then runs every
/// event of the turn through the rule catalog and credits the event's doer.
/// Events without a known `$player` are skipped.
pub fn tabulate(records: &[RoleRecord], players: &[String]) -> Result<Ledger> {
    let mut ledger = Ledger::new(players.to_vec(), records.len());

    for (turn, record) in records.iter().enumerate() {
        let picker = players
            .iter()
            .position(|p| p == &record.player)
            .ok_or_else(|| TallyError::malformed(record.player.as_str(), "role picker is not a player").at_turn(turn))?;
        ledger.row_mut(picker, turn).add(Counter::Role(record.role), 1);

        for event in &record.events {
            let Some(doer) = resolve_doer(event, players) else {
                logd!("turn {turn}: no player in `{event}`");
                continue;
            };
            let deltas = rules::classify(event).map_err(|e| e.at_turn(turn))?;
            let row = ledger.row_mut(doer, turn);
            for d in deltas {
                if row.checked_add(d.counter, d.amount).is_none() {
                    return Err(TallyError::malformed(event.as_str(), "amount out of range").at_turn(turn));
                }
            }
        }
    }
    Ok(ledger)
}

/// Index of the player an event is about.
///
/// The earliest `$name` in the text wins. When two names start at the same
/// offset (one is a prefix of the other) the longer one wins; any remaining
/// tie goes to the earlier player.
pub fn resolve_doer(event: &str, players: &[String]) -> Option<usize> {
    let mut best: Option<(usize, usize, usize)> = None; // (offset, len, ix)
    let mut found = 0usize;

    for (ix, name) in players.iter().enumerate() {
        let Some(at) = scan::find_sigil_name(event, name) else {
            continue;
        };
        found += 1;
        let better = match best {
            None => true,
            Some((b_at, b_len, _)) => at < b_at || (at == b_at && name.len() > b_len),
        };
        if better {
            best = Some((at, name.len(), ix));
        }
    }
    if found > 1 {
        if let Some((_, _, ix)) = best {
            logd!("{found} players named in `{event}`, crediting {}", players[ix]);
        }
    }
    best.map(|(_, _, ix)| ix)
}
