//! Spark Runtime
//!
//! Overlay window that plays a completion burst wherever you click.
//! Usage: `spark [settings.json]`

mod app;
mod input;

use anyhow::{Context, Result};
use spark_render::window::create_event_loop;
use spark_services::Settings;
use winit::event_loop::ControlFlow;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Spark v{}", spark_core::VERSION);

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            tracing::info!("no settings file given, using defaults");
            Settings::default()
        }
    };

    let event_loop = create_event_loop().context("failed to create event loop")?;
    // frames are requested explicitly by the overlay
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = app::App::new(settings);
    event_loop.run_app(&mut app).context("event loop terminated abnormally")?;

    tracing::info!("Spark shut down");
    Ok(())
}
