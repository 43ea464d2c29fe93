use crate::characters::Character;

use super::AppState;

impl AppState {
    /// Character currently highlighted in the picker, if any remain.
    pub fn selected_character(&self) -> Option<Character> {
        let available = self.game.available_characters();
        if available.is_empty() {
            return None;
        }
        available.get(self.character_index % available.len()).copied()
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub(super) fn name_push(&mut self, c: char) {
        if c.is_control() || self.name_input.chars().count() >= Self::MAX_NAME_LEN {
            return;
        }
        self.name_input.push(c);
    }

    pub(super) fn name_backspace(&mut self) {
        self.name_input.pop();
    }

    pub(super) fn character_next(&mut self) {
        let n = self.game.available_characters().len();
        if n > 0 {
            self.character_index = (self.character_index + 1) % n;
        }
    }

    pub(super) fn character_prev(&mut self) {
        let n = self.game.available_characters().len();
        if n > 0 {
            self.character_index = (self.character_index % n + n - 1) % n;
        }
    }

    pub(super) fn roster_next(&mut self) {
        let n = self.game.state().players().len();
        if n > 0 {
            self.roster_index = (self.roster_index + 1) % n;
        }
    }

    pub(super) fn roster_prev(&mut self) {
        let n = self.game.state().players().len();
        if n > 0 {
            self.roster_index = (self.roster_index % n + n - 1) % n;
        }
    }

    pub(super) fn submit_player(&mut self) -> bool {
        let Some(character) = self.selected_character() else {
            self.set_notice("No characters left");
            return false;
        };
        let name = self.name_input.clone();
        match self.engine().add_player(&name, character.id()) {
            Ok(_) => {
                self.name_input.clear();
                self.character_index = 0;
                self.roster_index = self.game.state().players().len().saturating_sub(1);
                self.clear_notice();
                true
            }
            Err(err) => {
                self.set_notice(err.to_string());
                false
            }
        }
    }

    pub(super) fn remove_selected(&mut self) -> bool {
        let Some(id) = self.game.state().players().get(self.roster_index).map(|p| p.id()) else {
            return false;
        };
        self.engine().remove_player(id);
        let n = self.game.state().players().len();
        self.roster_index = self.roster_index.min(n.saturating_sub(1));
        true
    }

    pub(super) fn start(&mut self) -> bool {
        match self.engine().start_game() {
            Ok(()) => {
                self.clear_notice();
                self.enter_board();
                true
            }
            Err(err) => {
                self.set_notice(err.to_string());
                false
            }
        }
    }
}
