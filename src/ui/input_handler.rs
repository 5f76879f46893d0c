use crate::types::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Decode a terminal event into a menu action
    ///
    /// Only key presses are considered. Returns `None` for anything that has
    /// no binding so the caller can leave the state untouched.
    pub fn action_for_event(event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::action_for_key(key),
            _ => None,
        }
    }

    pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            // Quit
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') if plain => Some(Action::Quit),

            // Back to the menu
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('b') if plain => Some(Action::Back),

            KeyCode::Enter => Some(Action::Activate),

            // Menu navigation
            KeyCode::Up => Some(Action::Up),
            KeyCode::Char('k') if plain => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::Char('j') if plain => Some(Action::Down),

            _ => None,
        }
    }
}
