//! Freelook - first-person camera rig demo host
//!
//! Opens a window and flies a camera around with WASD, Shift, and the mouse.

mod app;
mod settings;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::FreelookApp;
use crate::settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting freelook...");

    let settings = Settings::load();
    if Settings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            warn!("Failed to write default settings: {:#}", e);
        }
    }

    let mut app = FreelookApp::new(settings).context("Failed to attach camera rig")?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app).context("Event loop terminated with an error")?;

    Ok(())
}
