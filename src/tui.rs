//! Terminal front-end: scene state, key handling and Ratatui drawing.

pub mod app;
pub mod controller;
pub mod ui;
