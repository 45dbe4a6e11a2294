// tests/game_flow.rs
mod common;

use pr_tally::{Building, Counter, Crop, Game, Role, TallyError, Winner};

#[test]
fn turn_and_role_order_follow_the_log() {
    let game = Game::with_id("1001", &common::three_player_game()).unwrap();
    assert_eq!(game.id(), Some("1001"));
    assert_eq!(game.turns(), 6);
    assert_eq!(game.turn_order(), vec!["Alice", "Bob", "Carol", "Alice", "Bob", "Carol"]);
    assert_eq!(
        game.role_order(),
        vec![Role::Settler, Role::Builder, Role::Captain, Role::Mayor, Role::Prospector, Role::Trader]
    );
    assert_eq!(game.players(), ["Alice", "Bob", "Carol"]);
}

#[test]
fn role_pick_notices_are_not_events() {
    let game = Game::from_log(&common::three_player_game()).unwrap();
    for record in game.records() {
        assert!(record.events.iter().all(|e| !e.contains("selected the")));
        assert!(record.events.iter().all(|e| !e.contains('{')), "{:?}", record.events);
    }
    assert_eq!(game.records()[0].events[0], "$Alice got a new plantation: $coffee");
}

#[test]
fn whole_game_totals() {
    let game = Game::from_log(&common::three_player_game()).unwrap();
    let totals = game.cumulative(None);

    let alice = totals.get("Alice").unwrap();
    assert_eq!(alice.get(Counter::Role(Role::Settler)), 1);
    assert_eq!(alice.get(Counter::Role(Role::Mayor)), 1);
    assert_eq!(alice.get(Counter::Plantation(Crop::Coffee)), 1);
    assert_eq!(alice.get(Counter::Building(Building::LargeMarket)), 1);
    assert_eq!(alice.get(Counter::VpBuilding), 2);
    assert_eq!(alice.get(Counter::VpBonus), 4);
    assert_eq!(alice.get(Counter::Colonists), 1);
    assert_eq!(alice.get(Counter::Doubloons), -4);

    let bob = totals.get("Bob").unwrap();
    assert_eq!(bob.get(Counter::RandomPlantation), 1);
    assert_eq!(bob.get(Counter::Building(Building::SmallMarket)), 1);
    assert_eq!(bob.get(Counter::VpHarbor), 1);
    assert_eq!(bob.get(Counter::Colonists), 2);
    assert_eq!(bob.get(Counter::Doubloons), 0);

    let carol = totals.get("Carol").unwrap();
    assert_eq!(carol.get(Counter::Quarry), 1);
    // the end-of-game shipping summary is not counted again
    assert_eq!(carol.get(Counter::VpShipping), 4);
    assert_eq!(carol.get(Counter::Doubloons), 2);

    assert_eq!(totals.vp("Alice"), Some(6));
    assert_eq!(totals.vp("Bob"), Some(2));
    assert_eq!(totals.vp("Carol"), Some(4));
    assert_eq!(game.winner(), Winner::Player(String::from("Alice")));
}

#[test]
fn events_land_on_their_own_turn() {
    let game = Game::from_log(&common::three_player_game()).unwrap();
    let ledger = game.ledger();
    // Alice's purchase happened during Bob's builder turn
    assert_eq!(ledger.row("Alice", 1).unwrap().get(Counter::VpBuilding), 2);
    assert_eq!(ledger.row("Alice", 1).unwrap().get(Counter::Role(Role::Builder)), 0);
    assert_eq!(ledger.row("Bob", 1).unwrap().get(Counter::Role(Role::Builder)), 1);
    assert!(ledger.row("Carol", 0).unwrap().get(Counter::Quarry) == 1);
    assert!(ledger.row("Carol", 4).unwrap().is_zero());
}

#[test]
fn winner_as_of_a_turn() {
    let game = Game::from_log(&common::three_player_game()).unwrap();
    assert_eq!(game.winner_within(0..1), Winner::NoWinner);
    assert_eq!(game.winner_within(0..2), Winner::Player(String::from("Alice")));
    assert_eq!(game.winner_within(0..3), Winner::Player(String::from("Carol")));
    assert_eq!(game.winner_within(0..100), game.winner());
}

#[test]
fn windows_are_additive() {
    let game = Game::from_log(&common::three_player_game()).unwrap();
    for split in 0..=game.turns() {
        let left = game.cumulative(Some(0..split));
        let right = game.cumulative(Some(split..game.turns()));
        let whole = game.cumulative(None);
        for player in game.players() {
            let sum = *left.get(player).unwrap() + *right.get(player).unwrap();
            assert_eq!(&sum, whole.get(player).unwrap(), "split at {split}");
        }
    }
}

#[test]
fn inverted_window_is_empty() {
    let game = Game::from_log(&common::three_player_game()).unwrap();
    let totals = game.cumulative(Some(4..2));
    assert!(totals.iter().all(|(_, row)| row.is_zero()));
    assert_eq!(totals.winner(), Winner::NoWinner);
}

#[test]
fn tie_has_no_winner() {
    let game = Game::from_log(&common::two_player_tie()).unwrap();
    assert_eq!(game.winner(), Winner::NoWinner);
    assert_eq!(game.cumulative(None).get("Dora").unwrap().get(Counter::Doubloons), 2);
    assert_eq!(game.cumulative(None).get("Eve").unwrap().get(Counter::Doubloons), 1);
}

#[test]
fn unknown_building_fails_the_whole_game() {
    let err = Game::from_log(&common::broken_game()).unwrap_err();
    assert!(matches!(err, TallyError::AtTurn { turn: 1, .. }));
    assert!(matches!(err.root(), TallyError::UnknownBuilding { .. }));
}

#[test]
fn log_without_markers_is_an_empty_game() {
    let game = Game::from_log(r#"{"status":1,"data":{"logs":[]}}"#).unwrap();
    assert_eq!(game.turns(), 0);
    assert!(game.players().is_empty());
    assert_eq!(game.winner(), Winner::NoWinner);
}

#[test]
fn parsing_is_deterministic() {
    let log = common::three_player_game();
    assert_eq!(Game::from_log(&log).unwrap(), Game::from_log(&log).unwrap());
}

#[test]
fn overflowing_grants_fail_the_game_instead_of_panicking() {
    let max = i64::MAX.to_string();
    let log = common::LogBuilder::new()
        .pick("Ann", "prospector")
        .event("${player_name} got ${nbr} doubloon", &[("player_name", "Ann"), ("nbr", max.as_str())])
        .event("${player_name} got ${nbr} doubloon", &[("player_name", "Ann"), ("nbr", max.as_str())])
        .build();
    let err = Game::from_log(&log).unwrap_err();
    assert!(matches!(err, TallyError::AtTurn { turn: 0, .. }));
    assert!(matches!(err.root(), TallyError::MalformedEvent { reason: "amount out of range", .. }));
}
