use fritanga_royale::characters::{CharacterId, CATALOG};
use fritanga_royale::config::GameConfig;
use fritanga_royale::game::{Game, GamePhase, SetupError};

#[test]
fn players_join_in_order_unplaced() {
    let mut g = Game::seeded(1);
    let a = g.add_player("Ana", CharacterId::Fries).unwrap();
    let b = g.add_player("Beto", CharacterId::Burger).unwrap();
    assert_ne!(a, b);

    let players = g.state().players();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name(), "Ana");
    assert_eq!(players[1].character().id(), CharacterId::Burger);
    assert!(players.iter().all(|p| p.position().is_none() && !p.is_eliminated()));
    assert_eq!(g.state().phase(), GamePhase::Setup);
}

#[test]
fn claimed_character_is_rejected_and_roster_unchanged() {
    let mut g = Game::seeded(1);
    g.add_player("Ana", CharacterId::Taco).unwrap();
    let before = g.snapshot();
    let err = g.add_player("Beto", CharacterId::Taco).unwrap_err();
    assert_eq!(err, SetupError::CharacterTaken(CharacterId::Taco));
    assert_eq!(g.snapshot(), before);
}

#[test]
fn blank_names_are_rejected() {
    let mut g = Game::seeded(1);
    assert_eq!(g.add_player("   ", CharacterId::Fries), Err(SetupError::EmptyName));
    let id = g.add_player("  Ana ", CharacterId::Fries).unwrap();
    assert_eq!(g.state().player(id).unwrap().name(), "Ana");
}

#[test]
fn roster_cap_is_enforced() {
    let mut g = Game::with_seed(GameConfig::default().with_max_players(3), 1).unwrap();
    for c in &CATALOG[..3] {
        g.add_player("p", c.id()).unwrap();
    }
    let err = g.add_player("late", CATALOG[3].id()).unwrap_err();
    assert_eq!(err, SetupError::RosterFull { max: 3 });
    assert_eq!(g.state().players().len(), 3);
}

#[test]
fn catalog_runs_out_before_default_cap() {
    let mut g = Game::seeded(1);
    for c in CATALOG {
        g.add_player(c.name(), c).unwrap();
    }
    assert!(g.available_characters().is_empty());
    assert!(g.add_player("seventh", CharacterId::Fries).is_err());
    assert_eq!(g.state().players().len(), 6);
}

#[test]
fn available_characters_keep_catalog_order() {
    let mut g = Game::seeded(1);
    assert_eq!(g.available_characters(), CATALOG.to_vec());
    g.add_player("Ana", CharacterId::Burger).unwrap();
    g.add_player("Beto", CharacterId::Pizza).unwrap();
    let ids: Vec<CharacterId> = g.available_characters().iter().map(|c| c.id()).collect();
    assert_eq!(
        ids,
        vec![CharacterId::Fries, CharacterId::HotDog, CharacterId::Taco, CharacterId::Chicken]
    );
}

#[test]
fn removing_frees_the_character() {
    let mut g = Game::seeded(1);
    let a = g.add_player("Ana", CharacterId::Chicken).unwrap();
    g.add_player("Beto", CharacterId::Fries).unwrap();
    g.remove_player(a);
    assert_eq!(g.state().players().len(), 1);
    assert!(g.available_characters().iter().any(|c| c.id() == CharacterId::Chicken));
    g.add_player("Cata", CharacterId::Chicken).unwrap();

    // Unknown ids are a no-op.
    let before = g.snapshot();
    g.remove_player(a);
    assert_eq!(g.snapshot(), before);
}

#[test]
fn start_needs_two_players() {
    let mut g = Game::seeded(1);
    assert_eq!(g.start_game(), Err(SetupError::NotEnoughPlayers { min: 2, got: 0 }));
    g.add_player("Solo", CharacterId::Fries).unwrap();
    assert_eq!(g.start_game(), Err(SetupError::NotEnoughPlayers { min: 2, got: 1 }));
    assert_eq!(g.state().phase(), GamePhase::Setup);
    assert!(g.state().players()[0].position().is_none());
}

#[test]
fn start_places_everyone_and_locks_roster() {
    let mut g = Game::seeded(9);
    for c in &CATALOG[..4] {
        g.add_player("p", c.id()).unwrap();
    }
    g.start_game().unwrap();

    let state = g.state();
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.round(), 1);
    assert_eq!(state.grid_size(), 5);
    assert_eq!(state.current_player_index(), 0);
    assert!(!state.has_moved_this_round());
    assert!(state.players().iter().all(|p| p.position().is_some_and(|pos| pos.in_bounds(5))));

    assert_eq!(g.add_player("late", CharacterId::Chicken), Err(SetupError::GameInProgress));
    assert_eq!(g.start_game(), Err(SetupError::GameInProgress));
}

#[test]
fn same_seed_same_starting_cells() {
    let place = |seed| {
        let mut g = Game::seeded(seed);
        for c in &CATALOG[..3] {
            g.add_player("p", c.id()).unwrap();
        }
        g.start_game().unwrap();
        g.state().players().iter().map(|p| p.position()).collect::<Vec<_>>()
    };
    assert_eq!(place(77), place(77));
}
