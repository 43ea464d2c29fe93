mod board;
mod layout;
mod setup;

use crate::characters::Rgb;
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::{Color, Frame};

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Setup => setup::draw_setup(f, app),
        Scene::Board => board::draw_board(f, app),
    }
}

pub(crate) fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}
