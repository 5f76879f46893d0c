use crate::constants::WINDOW_TITLE;
use crate::types::{Action, Command, Page};

/// Navigation state for the portfolio menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub current_page: Page,
    pub cursor: usize,
    /// Last activated choice, cleared when returning to Home
    pub selected: Option<Page>,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            current_page: Page::Home,
            cursor: 0,
            selected: None,
            should_quit: false,
        }
    }

    /// Menu choices in display order
    pub fn choices(&self) -> &'static [Page] {
        &Page::ALL
    }

    /// Command to run once before the first frame
    pub fn init(&self) -> Command {
        Command::SetWindowTitle(WINDOW_TITLE)
    }

    pub fn update(&mut self, action: Action) -> Command {
        match action {
            Action::Quit => self.quit(),
            Action::Back => self.back(),
            Action::Activate => self.activate(),
            Action::Up => {
                self.cursor_up();
                Command::None
            }
            Action::Down => {
                self.cursor_down();
                Command::None
            }
        }
    }

    pub fn quit(&mut self) -> Command {
        tracing::info!("Quit requested on {} page", self.current_page);
        self.should_quit = true;
        Command::Quit
    }

    pub fn back(&mut self) -> Command {
        if self.current_page == Page::Home {
            return Command::None;
        }

        tracing::debug!("Returning to Home from {}", self.current_page);
        self.current_page = Page::Home;
        self.cursor = 0;
        self.selected = None;
        Command::ClearScreen
    }

    pub fn activate(&mut self) -> Command {
        if self.current_page != Page::Home {
            return Command::None;
        }

        let choice = self.choices()[self.cursor];
        self.selected = Some(choice);
        tracing::debug!("Activated choice '{}'", choice);

        match choice {
            // Already here, the view shows a notice instead
            Page::Home => Command::None,
            Page::About | Page::Experience | Page::Contact => {
                self.current_page = choice;
                Command::ClearScreen
            }
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.choices().len();
        self.cursor = if self.cursor == 0 {
            len - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn cursor_down(&mut self) {
        let len = self.choices().len();
        self.cursor = if self.cursor + 1 >= len {
            0
        } else {
            self.cursor + 1
        };
    }
}
