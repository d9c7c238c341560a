//! Global actions - terminal input and application lifetime

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Text pasted into the terminal
    Pasted(String),
    /// The terminal window lost focus
    FocusLost,
    /// Quit the application
    Quit,
}
