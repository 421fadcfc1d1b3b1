//! Jot - a small desktop text editor with find and replace

mod runtime;
mod view;

use anyhow::{anyhow, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use jot::cli::CliArgs;

use runtime::App;

fn main() -> Result<()> {
    jot::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;
    tracing::info!(path = ?startup.path, "Starting jot");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);
    event_loop.run_app(&mut app)?;

    app.finish()
}
