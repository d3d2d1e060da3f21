//! Graveshot desktop shell.
//!
//! Runs the game session on its own thread and exposes it to the web
//! frontend through Tauri IPC commands and snapshot events.

pub mod config;
pub mod game_loop;
pub mod ipc;
pub mod state;

use anyhow::Context;
use tauri::Manager;

pub use graveshot_core as core;

use crate::config::AppConfig;
use crate::state::AppState;

/// Build the Tauri application, spawn the game loop and block until exit.
pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let app = tauri::Builder::default()
        .manage(AppState::new())
        .setup(move |app| {
            let state = app.state::<AppState>();
            let tx = game_loop::spawn_game_loop(
                app.handle().clone(),
                state.latest_snapshot.clone(),
                config,
            )?;
            state.install(tx)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            ipc::send_command,
            ipc::sprite_loaded,
            ipc::get_snapshot,
        ])
        .build(tauri::generate_context!())
        .context("failed to build the Graveshot window")?;

    app.run(|handle, event| {
        if let tauri::RunEvent::Exit = event {
            handle.state::<AppState>().shutdown();
        }
    });
    Ok(())
}
