use fritanga_royale::characters::CharacterId;
use fritanga_royale::config::{GameConfig, MoveRule};
use fritanga_royale::game::{Game, MoveError, PlayerId};
use fritanga_royale::grid::Position;

fn started(config: GameConfig) -> (Game, PlayerId, PlayerId) {
    let mut g = Game::with_seed(config, 21).unwrap();
    let a = g.add_player("Ana", CharacterId::Fries).unwrap();
    let b = g.add_player("Beto", CharacterId::Burger).unwrap();
    g.start_game().unwrap();
    (g, a, b)
}

fn position_of(g: &Game, id: PlayerId) -> Position {
    g.state().player(id).and_then(|p| p.position()).unwrap()
}

#[test]
fn moves_are_rejected_before_the_game_starts() {
    let mut g = Game::seeded(1);
    let a = g.add_player("Ana", CharacterId::Fries).unwrap();
    g.add_player("Beto", CharacterId::Burger).unwrap();
    assert_eq!(g.move_player(a, Position::new(0, 0)), Err(MoveError::NotPlaying));
}

#[test]
fn first_mover_can_move_once() {
    let (mut g, a, b) = started(GameConfig::default());
    let target = if position_of(&g, b) == Position::new(0, 0) {
        Position::new(1, 1)
    } else {
        Position::new(0, 0)
    };
    g.move_player(a, target).unwrap();
    assert_eq!(position_of(&g, a), target);
    assert!(g.state().has_moved_this_round());

    let before = g.snapshot();
    assert_eq!(g.move_player(a, Position::new(2, 2)), Err(MoveError::AlreadyMoved));
    assert_eq!(g.snapshot(), before);
}

#[test]
fn only_the_current_player_may_move() {
    let (mut g, a, b) = started(GameConfig::default());
    let before = g.snapshot();
    let err = g.move_player(b, Position::new(2, 2)).unwrap_err();
    assert_eq!(err, MoveError::NotYourTurn { expected: a, got: b });
    assert_eq!(g.snapshot(), before);
}

#[test]
fn out_of_bounds_and_occupied_cells_are_rejected() {
    let (mut g, a, b) = started(GameConfig::default());
    assert_eq!(
        g.move_player(a, Position::new(5, 0)),
        Err(MoveError::OutOfBounds { x: 5, y: 0, size: 5 })
    );
    let taken = position_of(&g, b);
    assert_eq!(g.move_player(a, taken), Err(MoveError::Occupied { x: taken.x, y: taken.y }));
    assert!(!g.state().has_moved_this_round());
}

#[test]
fn staying_put_counts_as_a_move() {
    let (mut g, a, _) = started(GameConfig::default());
    let here = position_of(&g, a);
    g.move_player(a, here).unwrap();
    assert!(g.state().has_moved_this_round());
}

#[test]
fn removed_players_are_unknown() {
    let mut g = Game::seeded(2);
    g.add_player("Ana", CharacterId::Fries).unwrap();
    g.add_player("Beto", CharacterId::Burger).unwrap();
    let gone = g.add_player("Cata", CharacterId::Taco).unwrap();
    g.remove_player(gone);
    g.start_game().unwrap();
    assert_eq!(g.move_player(gone, Position::new(0, 0)), Err(MoveError::UnknownPlayer(gone)));
}

#[test]
fn adjacent_rule_limits_step_length() {
    let (mut g, a, _) = started(GameConfig::default().with_move_rule(MoveRule::Adjacent));
    let from = position_of(&g, a);
    let far = (0..5)
        .flat_map(|y| (0..5).map(move |x| Position::new(x, y)))
        .find(|&p| from.distance(p) >= 2 && g.state().occupant(p).is_none())
        .unwrap();
    assert_eq!(g.move_player(a, far), Err(MoveError::NotAdjacent { from, to: far }));

    let near = g.legal_moves(a).into_iter().find(|&p| p != from).unwrap();
    g.move_player(a, near).unwrap();
    assert_eq!(position_of(&g, a), near);
}

#[test]
fn legal_moves_exclude_other_players() {
    let (g, a, b) = started(GameConfig::default());
    let moves = g.legal_moves(a);
    assert!(moves.contains(&position_of(&g, a)));
    assert!(!moves.contains(&position_of(&g, b)));
    assert!(moves.iter().all(|p| p.in_bounds(5)));
}
