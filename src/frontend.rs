//! Terminal collaborator used by the event loop
//!
//! The run loop only talks to the `Frontend` trait, which lets tests drive it
//! with scripted events. `CrosstermFrontend` is the real implementation: raw
//! mode on the alternate screen, drawn through ratatui.

use crate::error::Result;
use crate::ui::layout;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;

pub trait Frontend {
    /// Wait for the next terminal event, `None` if nothing arrived in time
    fn poll_event(&mut self) -> Result<Option<Event>>;

    /// Redraw the visible region with the given text
    fn render(&mut self, text: &str) -> Result<()>;

    fn clear_screen(&mut self) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()>;

    /// Called once when the loop ends because of a quit
    fn quit(&mut self) -> Result<()>;
}

pub struct CrosstermFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    poll_interval: Duration,
    active: bool,
}

impl CrosstermFrontend {
    /// Enter raw mode and the alternate screen
    pub fn new(poll_interval: Duration) -> Result<Self> {
        setup_terminal()?;
        tracing::debug!("Terminal setup completed");

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = cleanup_terminal();
                return Err(e.into());
            }
        };

        Ok(CrosstermFrontend {
            terminal,
            poll_interval,
            active: true,
        })
    }

    /// Leave the alternate screen and raw mode. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            cleanup_terminal()?;
            tracing::debug!("Terminal cleanup completed");
        }
        Ok(())
    }
}

impl Frontend for CrosstermFrontend {
    fn poll_event(&mut self) -> Result<Option<Event>> {
        if event::poll(self.poll_interval)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn render(&mut self, text: &str) -> Result<()> {
        self.terminal.draw(|f| layout::render(f, text))?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(self.terminal.backend_mut(), SetTitle(title))?;
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        self.restore()
    }
}

impl Drop for CrosstermFrontend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Raw mode plus alternate screen, undone by the panic hook if we crash
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

/// Give the terminal back to the shell
fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
