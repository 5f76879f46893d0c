//! Text rendering of the menu state
//!
//! `view` is a pure function of `AppState`. The returned buffer is what the
//! frontend draws after every update; drawing concerns such as tab expansion
//! live in `layout`.

use crate::app::AppState;
use crate::content::{
    ABOUT, ALREADY_HOME_NOTICE, BACK_HINT, CONTACT, EXPERIENCE, MENU_INTRO, QUIT_HINT,
};
use crate::types::Page;

const CURSOR_MARKER: &str = "->";

pub fn view(app: &AppState) -> String {
    let body = match app.current_page {
        Page::Home => {
            let mut s = render_menu(app);
            if app.selected == Some(Page::Home) {
                s.push('\n');
                s.push_str(ALREADY_HOME_NOTICE);
            }
            s
        }
        Page::About => with_back_hint(ABOUT),
        Page::Experience => with_back_hint(EXPERIENCE),
        Page::Contact => with_back_hint(CONTACT),
    };

    format!("{}\n{}\n", body, QUIT_HINT)
}

fn with_back_hint(block: &str) -> String {
    format!("{}\n{}", block, BACK_HINT)
}

/// Intro sentence followed by one line per choice, marking the cursor
pub fn render_menu(app: &AppState) -> String {
    let mut s = format!("{}\n\n", MENU_INTRO);
    for (idx, choice) in app.choices().iter().enumerate() {
        let marker = if idx == app.cursor { CURSOR_MARKER } else { " " };
        s.push_str(&format!("{} [{}]\n", marker, choice.label()));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;

    #[test]
    fn test_home_view() {
        let app = AppState::new();
        let expected = format!(
            "{}\n\n-> [Home]\n  [About]\n  [Experience]\n  [Contact]\n\nPress 'q' to quit.\n",
            MENU_INTRO
        );
        assert_eq!(view(&app), expected);
    }

    #[test]
    fn test_cursor_marker_follows_cursor() {
        let mut app = AppState::new();
        app.update(Action::Up);
        let menu = render_menu(&app);
        assert!(menu.contains("\n  [Home]\n"));
        assert!(menu.ends_with("-> [Contact]\n"));
        assert_eq!(menu.matches(CURSOR_MARKER).count(), 1);
    }

    #[test]
    fn test_already_home_notice() {
        let mut app = AppState::new();
        app.update(Action::Activate);
        let text = view(&app);
        assert!(text.contains("\n\nOops! You are already at the Home Page!\nPress 'q' to quit.\n"));
        assert!(text.lines().any(|l| l == "Oops! You are already at the Home Page!"));
    }

    #[test]
    fn test_no_notice_for_fresh_home() {
        let app = AppState::new();
        assert!(!view(&app).contains(ALREADY_HOME_NOTICE));
    }

    #[test]
    fn test_about_view() {
        let mut app = AppState::new();
        app.update(Action::Down);
        app.update(Action::Activate);
        assert_eq!(app.selected, Some(Page::About));
        assert_eq!(app.current_page, Page::About);

        let text = view(&app);
        assert!(text.starts_with("[About Me]"));
        assert!(text.ends_with(
            "Press 'ESC' or 'b' to return to the home page.\nPress 'q' to quit.\n"
        ));
        assert!(!text.contains(MENU_INTRO));
    }

    #[test]
    fn test_experience_view() {
        let mut app = AppState::new();
        app.cursor = 2;
        app.update(Action::Activate);
        let text = view(&app);
        assert!(text.starts_with("[Experience]\n\n## Education ##\n"));
        assert!(text.contains("\t  -Swiss Army Knife, Jack of All Trades\n\nPress 'ESC'"));
    }

    #[test]
    fn test_contact_view() {
        let mut app = AppState::new();
        app.cursor = 3;
        app.update(Action::Activate);
        let text = view(&app);
        assert!(text.lines().any(|l| l == "E-Mail -> maintainentropicprivacy@gmail.com"));
        assert_eq!(
            text,
            "[Contact]\n\nE-Mail -> maintainentropicprivacy@gmail.com\n\n\
             Press 'ESC' or 'b' to return to the home page.\nPress 'q' to quit.\n"
        );
    }

    #[test]
    fn test_subpages_end_with_hints() {
        for cursor in 1..Page::ALL.len() {
            let mut app = AppState::new();
            app.cursor = cursor;
            app.update(Action::Activate);
            let text = view(&app);
            assert_eq!(text.matches(BACK_HINT).count(), 1);
            assert!(text.ends_with(&format!("\n{}\n{}\n", BACK_HINT, QUIT_HINT)));
            assert!(!text.contains(CURSOR_MARKER));
        }
    }

    #[test]
    fn test_back_redraws_menu() {
        let mut app = AppState::new();
        app.cursor = 3;
        app.update(Action::Activate);
        app.update(Action::Back);
        assert!(view(&app).contains("-> [Home]"));
    }
}
