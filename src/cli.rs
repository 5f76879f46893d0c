//! Command-line interface parsing and validation
//!
//! The viewer takes no required arguments. The only option turns on
//! logging, since nothing can be printed to the terminal while the menu
//! is on screen.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stardust")]
#[command(version)]
#[command(about = "A text-based visualization experiment: a terminal portfolio", long_about = None)]
pub struct Cli {
    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if the log file path points at a directory
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.log_file
            && path.is_dir()
        {
            return Err(format!("Log file path is a directory: {}", path.display()));
        }
        Ok(())
    }
}
