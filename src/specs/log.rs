// src/specs/log.rs
// Role blocks → RoleRecords.
//
// A BGA archive log is one JSON-ish blob of notifications. Every role pick
// carries `"i18n":["rol_type_tr"],"player_name":"…","rol_type":"…"` in its
// args, which is where a new block starts. The notifications that follow,
// up to the next pick, are the consequences of that role:
//
//   …"log":"${player_name} selected the ${rol_type_tr}","args":{"i18n":["rol_type_tr"],"player_name":"Alice","rol_type":"builder",…}},
//    {…"log":"${player_name} bought a new building for ${cost} doubloons: ${building_name}","args":{…}}, …

use crate::config::consts::{LOG_FIELD, NOISE_TEMPLATE, PLAYER_FIELD, ROLE_FIELD, ROLE_MARKER};
use crate::core::fields::{self, Value};
use crate::core::scan::{self, Block};
use crate::core::template;
use crate::error::{Result, TallyError};
use crate::specs::catalog::Role;

/// One turn: who picked which role, and what happened as a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRecord {
    pub player: String,
    pub role: Role,
    /// Resolved event descriptions, in log order. Never contains the role-pick notice.
    pub events: Vec<String>,
}

/// Decode every role block of a game log. The first structural error aborts
/// the whole log, tagged with the turn it occurred at.
pub fn parse_records(log: &str) -> Result<Vec<RoleRecord>> {
    let blocks = scan::split_blocks(log, ROLE_MARKER);
    logd!("{} role blocks", blocks.len());

    blocks
        .iter()
        .enumerate()
        .map(|(turn, block)| decode_block(block).map_err(|e| e.at_turn(turn)))
        .collect()
}

pub fn decode_block(block: &Block<'_>) -> Result<RoleRecord> {
    let text = block.text();
    let player = fields::extract(PLAYER_FIELD, text)?;
    let role_raw = fields::extract(ROLE_FIELD, text)?;
    let role = Role::from_label(role_raw).ok_or_else(|| TallyError::UnknownRole(s!(role_raw)))?;

    Ok(RoleRecord {
        player: s!(player),
        role,
        events: resolve_messages(text)?,
    })
}

/// Every `"log":` span of a block, left to right. Each span runs from its
/// own occurrence to the end of the block, so placeholder values are looked
/// up in the message's own args first.
pub fn message_spans(block: &str) -> impl Iterator<Item = &str> {
    let pat = fields::field_pattern(LOG_FIELD);
    scan::find_all(block, &pat).into_iter().map(move |at| &block[at..])
}

/// Resolved, noise-free messages of one block.
pub fn resolve_messages(block: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();

    for span in message_spans(block) {
        let raw = match fields::find_value(LOG_FIELD, span) {
            Some(Value::Quoted(raw)) => raw,
            // `"log":null` and friends carry nothing to resolve
            _ => continue,
        };
        if raw.is_empty() || raw == NOISE_TEMPLATE {
            continue;
        }
        out.push(template::resolve(raw, span)?);
    }
    Ok(out)
}
