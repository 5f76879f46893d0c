//! The event loop
//!
//! Events are handled one at a time: decode, update, apply the resulting
//! command, then redraw. The loop ends when the model quits or the running
//! flag is cleared by the signal handler.

use crate::app::AppState;
use crate::error::Result;
use crate::frontend::Frontend;
use crate::types::Command;
use crate::ui::{InputHandler, view};
use std::sync::atomic::{AtomicBool, Ordering};

pub fn run<F: Frontend>(frontend: &mut F, app: &mut AppState, running: &AtomicBool) -> Result<()> {
    let init = app.init();
    apply_command(frontend, init)?;
    frontend.render(&view(app))?;

    while !app.should_quit {
        if !running.load(Ordering::SeqCst) {
            tracing::info!("Interrupted, shutting down");
            let command = app.quit();
            apply_command(frontend, command)?;
            break;
        }

        let Some(event) = frontend.poll_event()? else {
            continue;
        };

        if let Some(action) = InputHandler::action_for_event(&event) {
            tracing::debug!("Action {:?} on {} page", action, app.current_page);
            let command = app.update(action);
            apply_command(frontend, command)?;
        }

        if !app.should_quit {
            frontend.render(&view(app))?;
        }
    }

    Ok(())
}

fn apply_command<F: Frontend>(frontend: &mut F, command: Command) -> Result<()> {
    match command {
        Command::None => Ok(()),
        Command::ClearScreen => frontend.clear_screen(),
        Command::SetWindowTitle(title) => frontend.set_title(title),
        Command::Quit => frontend.quit(),
    }
}
