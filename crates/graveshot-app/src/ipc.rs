//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via `invoke()`.
//! They forward requests to the game loop thread over its channel.

use tauri::State;

use graveshot_core::commands::PlayerCommand;
use graveshot_core::enums::EnemyKind;
use graveshot_core::state::GameStateSnapshot;

use crate::state::{AppState, GameLoopCommand};

/// Send a player command (start, pause, reset, shoot) to the session.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: PlayerCommand, state: State<'_, AppState>) -> Result<(), String> {
    state.send(GameLoopCommand::Player(command))
}

/// Report that the sprite image for `kind` finished loading.
///
/// Frontend: `invoke("sprite_loaded", { kind })`
#[tauri::command]
pub fn sprite_loaded(kind: EnemyKind, state: State<'_, AppState>) -> Result<(), String> {
    state.send(GameLoopCommand::SpriteLoaded(kind))
}

/// Get the latest snapshot synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}
