use crossterm::event::KeyCode;
use fritanga_royale::game::{Game, GamePhase};
use fritanga_royale::tui::app::{AppState, InputAction, Scene};
use fritanga_royale::tui::controller::handle_key;

fn type_name(app: &mut AppState, name: &str) {
    for c in name.chars() {
        let _ = app.handle_input(InputAction::NameChar(c));
    }
}

fn board_app() -> AppState {
    let mut app = AppState::new(Game::seeded(6));
    type_name(&mut app, "Ana");
    assert!(app.handle_input(InputAction::AddPlayer));
    type_name(&mut app, "Beto");
    assert!(app.handle_input(InputAction::AddPlayer));
    assert!(app.handle_input(InputAction::StartGame));
    app
}

#[test]
fn setup_form_adds_players_with_distinct_characters() {
    let mut app = AppState::new(Game::seeded(6));
    assert_eq!(app.scene, Scene::Setup);
    type_name(&mut app, "Anaa");
    let _ = app.handle_input(InputAction::NameBackspace);
    assert_eq!(app.name_input(), "Ana");

    let first = app.selected_character().unwrap();
    let _ = app.handle_input(InputAction::CharacterNext);
    assert_ne!(app.selected_character(), Some(first));
    let _ = app.handle_input(InputAction::CharacterPrev);
    assert_eq!(app.selected_character(), Some(first));

    assert!(app.handle_input(InputAction::AddPlayer));
    assert_eq!(app.name_input(), "");
    assert_ne!(app.selected_character(), Some(first));

    // One player is not enough.
    assert!(!app.handle_input(InputAction::StartGame));
    assert_eq!(app.scene, Scene::Setup);
    assert!(app.notice().is_some());
}

#[test]
fn enter_on_empty_name_starts_the_game() {
    let mut app = AppState::new(Game::seeded(6));
    type_name(&mut app, "Ana");
    assert!(!handle_key(&mut app, KeyCode::Enter));
    type_name(&mut app, "Beto");
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert_eq!(app.state().players().len(), 2);
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert_eq!(app.scene, Scene::Board);
    assert_eq!(app.state().phase(), GamePhase::Playing);
}

#[test]
fn delete_removes_selected_player() {
    let mut app = AppState::new(Game::seeded(6));
    type_name(&mut app, "Ana");
    let _ = app.handle_input(InputAction::AddPlayer);
    type_name(&mut app, "Beto");
    let _ = app.handle_input(InputAction::AddPlayer);
    assert_eq!(app.roster_index, 1);
    assert!(!handle_key(&mut app, KeyCode::Delete));
    assert_eq!(app.state().players().len(), 1);
    assert_eq!(app.state().players()[0].name(), "Ana");
}

#[test]
fn help_and_history_toggle() {
    let mut app = board_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn move_and_end_turn_from_the_board() {
    let mut app = board_app();
    let first = app.state().current_player().map(|p| p.id());
    // The cursor starts on the acting player's own cell.
    assert!(app.handle_input(InputAction::MoveHere));
    assert!(app.state().has_moved_this_round());
    assert!(!handle_key(&mut app, KeyCode::Char('e')));
    let second = app.state().current_player().map(|p| p.id());
    assert_ne!(first, second);
    let pos = app.state().current_player().and_then(|p| p.position());
    assert_eq!(Some(app.cursor), pos);
}

#[test]
fn reset_and_quit_keys() {
    let mut app = board_app();
    assert!(!handle_key(&mut app, KeyCode::Char('r')));
    assert_eq!(app.scene, Scene::Setup);
    assert!(app.state().players().is_empty());
    assert!(handle_key(&mut app, KeyCode::Esc));

    let mut app = board_app();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
