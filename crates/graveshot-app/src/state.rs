//! Application state shared across Tauri commands and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use graveshot_core::commands::PlayerCommand;
use graveshot_core::enums::EnemyKind;
use graveshot_core::state::GameStateSnapshot;

/// Commands sent from the IPC layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the game session.
    Player(PlayerCommand),
    /// The frontend finished loading the sprite for this kind.
    SpriteLoaded(EnemyKind),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state, stored as Tauri managed state.
///
/// Tauri requires managed state to be Send + Sync:
/// - `mpsc::Sender` is wrapped in a `Mutex` (Sender is Send but not Sync)
/// - the latest snapshot is `Arc<Mutex<...>>`, shared with the game loop thread
pub struct AppState {
    /// Channel sender to the game loop thread. `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the sender of a freshly spawned game loop.
    pub fn install(&self, tx: mpsc::Sender<GameLoopCommand>) -> Result<(), String> {
        let mut lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        *lock = Some(tx);
        Ok(())
    }

    /// Forward a command to the game loop thread.
    pub fn send(&self, command: GameLoopCommand) -> Result<(), String> {
        let lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        match lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| format!("Failed to send command: {e}")),
            None => Err("Game loop not running".into()),
        }
    }

    /// Ask the game loop to stop and drop the sender. Safe to call twice.
    pub fn shutdown(&self) {
        let Ok(mut lock) = self.command_tx.lock() else {
            return;
        };
        if let Some(tx) = lock.take() {
            // The loop may already be gone; nothing left to stop then.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
    }
}
