// src/specs/rules.rs
// Event classification as data: each rule pairs a text test with a ledger
// effect. Rules are independent; every rule whose test passes applies.

use crate::core::scan;
use crate::error::{Result, TallyError};
use crate::ledger::Counter;
use crate::specs::catalog::{Building, Crop};

/// Text test run against a resolved event description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matcher {
    Phrase(&'static str),
    /// `phrase` present and `unless` absent.
    PhraseUnless { phrase: &'static str, unless: &'static str },
    Suffix(&'static str),
    /// `from his <word> market` / `markets`
    MarketIncome,
}

/// Where a rule's number comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Amount {
    /// First `$<digits>` followed by whitespace.
    Parsed,
    Fixed(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Credit { counter: Counter, amount: Amount },
    /// Crop picked out by `$<crop>`.
    NamedPlantation,
    /// Building picked out by `$<building>`: count + 1, its VP, minus the price.
    BuildingPurchase,
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub effect: Effect,
}

/// One counter change produced by a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub counter: Counter,
    pub amount: i64,
}

const SHIPPING_TOTAL: &str = "for shipping during the game";
const FROM_HIS: &str = "from his ";
const MARKET: &str = " market";

const fn credit(counter: Counter, amount: Amount) -> Effect {
    Effect::Credit { counter, amount }
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "role card doubloons",
        matcher: Matcher::Phrase("doubloon from the role card"),
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    // settler
    Rule {
        name: "random plantation",
        matcher: Matcher::Phrase("got a new plantation from the deck"),
        effect: credit(Counter::RandomPlantation, Amount::Fixed(1)),
    },
    Rule {
        name: "chosen plantation",
        matcher: Matcher::PhraseUnless { phrase: "got a new plantation", unless: "from the deck" },
        effect: Effect::NamedPlantation,
    },
    Rule {
        name: "quarry",
        matcher: Matcher::Phrase("got a new quarry"),
        effect: credit(Counter::Quarry, Amount::Fixed(1)),
    },
    // builder
    Rule {
        name: "building purchase",
        matcher: Matcher::Phrase("bought a new building for"),
        effect: Effect::BuildingPurchase,
    },
    // captain; the end-of-game shipping summary is not a per-turn gain
    Rule {
        name: "shipping point",
        matcher: Matcher::PhraseUnless { phrase: "victory point for shipping", unless: SHIPPING_TOTAL },
        effect: credit(Counter::VpShipping, Amount::Parsed),
    },
    Rule {
        name: "shipping points",
        matcher: Matcher::PhraseUnless { phrase: "victory points for shipping", unless: SHIPPING_TOTAL },
        effect: credit(Counter::VpShipping, Amount::Parsed),
    },
    Rule {
        name: "harbor point",
        matcher: Matcher::Phrase("victory point from his harbor"),
        effect: credit(Counter::VpHarbor, Amount::Parsed),
    },
    Rule {
        name: "captain privilege",
        matcher: Matcher::Phrase("victory point as his privilege"),
        effect: credit(Counter::VpShipping, Amount::Parsed),
    },
    // mayor
    Rule {
        name: "colonist from ship",
        matcher: Matcher::Phrase("colonist from the ship"),
        effect: credit(Counter::Colonists, Amount::Parsed),
    },
    Rule {
        name: "colonists from ship",
        matcher: Matcher::Phrase("colonists from the ship"),
        effect: credit(Counter::Colonists, Amount::Parsed),
    },
    Rule {
        name: "mayor privilege",
        matcher: Matcher::Phrase("colonist from the supply as his privilege"),
        effect: credit(Counter::Colonists, Amount::Fixed(1)),
    },
    // craftsman
    Rule {
        name: "factory doubloon",
        matcher: Matcher::Phrase("doubloon from his factory"),
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    Rule {
        name: "factory doubloons",
        matcher: Matcher::Phrase("doubloons from his factory"),
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    // trader
    Rule {
        name: "sale",
        matcher: Matcher::Phrase("from the sale"),
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    Rule {
        name: "market bonus",
        matcher: Matcher::MarketIncome,
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    Rule {
        name: "trader privilege",
        matcher: Matcher::Phrase("doubloon as his privilege"),
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    // prospector
    Rule {
        name: "prospecting",
        matcher: Matcher::Suffix("doubloon"),
        effect: credit(Counter::Doubloons, Amount::Parsed),
    },
    // end of game
    Rule {
        name: "bonus points",
        matcher: Matcher::Phrase("bonus points"),
        effect: credit(Counter::VpBonus, Amount::Parsed),
    },
];

impl Matcher {
    pub fn matches(&self, event: &str) -> bool {
        match *self {
            Matcher::Phrase(p) => event.contains(p),
            Matcher::PhraseUnless { phrase, unless } => event.contains(phrase) && !event.contains(unless),
            Matcher::Suffix(s) => event.ends_with(s),
            Matcher::MarketIncome => market_income(event),
        }
    }
}

fn market_income(event: &str) -> bool {
    event.match_indices(FROM_HIS).any(|(at, _)| {
        let rest = &event[at + FROM_HIS.len()..];
        let word = rest
            .char_indices()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
            .map_or(rest.len(), |(i, _)| i);
        rest[word..].starts_with(MARKET)
    })
}

impl Amount {
    fn resolve(self, event: &str) -> Result<i64> {
        match self {
            Amount::Fixed(n) => Ok(n),
            Amount::Parsed => parse_amount(event),
        }
    }
}

/// The event's `$<n>` magnitude. Absent or out of range is malformed, never zero.
pub fn parse_amount(event: &str) -> Result<i64> {
    let digits = scan::sigil_amount(event)
        .ok_or_else(|| TallyError::malformed(event, "no $-prefixed amount"))?;
    digits
        .parse::<i64>()
        .map_err(|_| TallyError::malformed(event, "amount out of range"))
}

/// First catalog item whose `$label` occurs in the event as a whole word.
fn find_named<T: Copy>(event: &str, items: &[T], label: impl Fn(T) -> &'static str) -> Option<T> {
    items.iter().copied().find(|&it| scan::find_sigil_word(event, label(it)).is_some())
}

impl Rule {
    /// Append this rule's changes for `event`. Call only when the matcher passed.
    pub fn apply(&self, event: &str, out: &mut Vec<Delta>) -> Result<()> {
        match self.effect {
            Effect::Credit { counter, amount } => {
                out.push(Delta { counter, amount: amount.resolve(event)? });
            }
            Effect::NamedPlantation => {
                let crop = find_named(event, Crop::ALL, Crop::label)
                    .ok_or_else(|| TallyError::malformed(event, "plantation without a known crop"))?;
                out.push(Delta { counter: Counter::Plantation(crop), amount: 1 });
            }
            Effect::BuildingPurchase => {
                let building = find_named(event, Building::ALL, Building::label)
                    .ok_or_else(|| TallyError::UnknownBuilding { event: s!(event) })?;
                let price = parse_amount(event)?;
                out.push(Delta { counter: Counter::Building(building), amount: 1 });
                out.push(Delta { counter: Counter::VpBuilding, amount: building.vp() });
                out.push(Delta { counter: Counter::Doubloons, amount: -price });
            }
        }
        Ok(())
    }
}

/// Run the whole catalog over one event; all firing rules contribute.
pub fn classify(event: &str) -> Result<Vec<Delta>> {
    let mut out = Vec::new();
    for rule in RULES.iter().filter(|r| r.matcher.matches(event)) {
        rule.apply(event, &mut out)?;
    }
    Ok(out)
}

/// Names of the rules that fire on `event` (diagnostics).
pub fn matching_rules(event: &str) -> impl Iterator<Item = &'static str> + '_ {
    RULES.iter().filter(move |r| r.matcher.matches(event)).map(|r| r.name)
}
