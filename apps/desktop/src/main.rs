use std::{
    io::{self, BufRead},
    path::PathBuf,
    sync::Arc,
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::Storefront;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use storage::Catalog;
use tracing_subscriber::EnvFilter;

mod app;
mod backend_bridge;
mod config;
mod controller;
mod render;

use app::{DesktopApp, Flow};
use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;

const TICK: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(about = "Browse the shop directory and edit a shop's catalog from the terminal")]
struct Args {
    /// Settings file; missing files fall back to defaults.
    #[arg(long, default_value = "storefront.toml")]
    config: PathBuf,
    /// JSON catalog to browse instead of the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = config::load_settings(&args.config);

    let catalog = match args.catalog.or_else(|| settings.catalog_path.clone()) {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => Catalog::seeded().context("built-in catalog is invalid")?,
    };
    let store = Storefront::new(Arc::new(catalog), settings.storefront_options());

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let backend = backend_bridge::runtime::launch(cmd_rx, ui_tx.clone());
    spawn_input_thread(ui_tx);

    let mut app = DesktopApp::new(store, cmd_tx);
    println!("{}", app.screen());

    loop {
        match ui_rx.recv_timeout(TICK) {
            Ok(event) => {
                if app.handle_event(event) == Flow::Exit {
                    break;
                }
                println!("{}", app.screen());
            }
            Err(RecvTimeoutError::Timeout) => {
                if app.tick() {
                    println!("{}", app.screen());
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    if backend.join().is_err() {
        tracing::warn!("backend worker panicked");
    }
    Ok(())
}

fn spawn_input_thread(ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if ui_tx.send(UiEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    tracing::warn!("failed to read input: {err}");
                    break;
                }
            }
        }
        let _ = ui_tx.send(UiEvent::InputClosed);
    });
}
