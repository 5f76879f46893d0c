use std::fmt;

/// One of the navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Experience,
    Contact,
}

impl Page {
    /// Menu choices in display order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Experience, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Experience => "Experience",
            Page::Contact => "Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    Activate,
    Up,
    Down,
}

/// Side effect the model asks the frontend to perform after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    ClearScreen,
    SetWindowTitle(&'static str),
    Quit,
}
