//! Relaunches Windows Terminal through `explorer.exe`, forwarding this
//! program's own arguments.

rust_i18n::i18n!("locales", fallback = "en");

pub mod args;
pub mod config;
pub mod error;
pub mod launcher;
pub mod locator;
pub mod logging;
pub mod utils;

use std::{io::{self, Write}, path::PathBuf};

pub use config::Config;
pub use error::Error;
use launcher::{Launch, Spawn};

/// Locates the target and launches it with `forwarded` as its arguments.
pub fn run(
    config: &Config,
    forwarded: Option<&str>,
    drives: impl FnOnce() -> Vec<PathBuf>,
    spawner: &mut impl Spawn,
    out: &mut impl Write
) -> Result<(), Error> {
    tracing::debug!(strategy = ?config.strategy, "locating target");
    let target = config.strategy().locate(drives)?;
    tracing::info!(path = %target.display(), "resolved target");

    let launch = Launch::new(config.shell(), target, forwarded.unwrap_or_default());
    launcher::execute(&launch, spawner, out)?;

    if config.pause {
        wait_for_enter()?;
    }
    Ok(())
}

fn wait_for_enter() -> io::Result<()> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
