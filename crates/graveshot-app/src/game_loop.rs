//! Game loop thread: owns the session, delivers frames and emits snapshots.
//!
//! The session is created inside this thread so nothing else can touch it.
//! Commands arrive via `mpsc` channel and are applied between frames. This
//! thread also plays the part of the browser's frame scheduler: each pass it
//! delivers the pending frame handle, if any, with the time since launch.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tauri::{AppHandle, Emitter};

use graveshot_core::state::{DrawCommand, DrawList, GameStateSnapshot};
use graveshot_sim::host::{FrameQueue, SpriteRegistry};
use graveshot_sim::{GameSession, SessionConfig};

use crate::config::AppConfig;
use crate::state::GameLoopCommand;

/// Event name the frontend listens on.
pub const SNAPSHOT_EVENT: &str = "game:state_snapshot";

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the IPC layer to use.
pub fn spawn_game_loop(
    app_handle: AppHandle,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    config: AppConfig,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("graveshot-game-loop".into())
        .spawn(move || {
            run_game_loop(app_handle, cmd_rx, &latest_snapshot, config);
        })?;

    Ok(cmd_tx)
}

/// Everything the session needs from its host, owned by the loop thread.
pub(crate) struct LoopHost {
    session: GameSession,
    frames: FrameQueue,
    sprites: SpriteRegistry,
    surface: DrawList,
    clock: Instant,
}

impl LoopHost {
    pub(crate) fn new(config: SessionConfig) -> Self {
        Self {
            session: GameSession::new(config),
            frames: FrameQueue::new(),
            sprites: SpriteRegistry::new(),
            surface: DrawList::default(),
            clock: Instant::now(),
        }
    }

    /// Apply one command. Returns false when the loop should exit.
    pub(crate) fn handle(&mut self, command: GameLoopCommand) -> bool {
        match command {
            GameLoopCommand::Player(command) => {
                tracing::debug!(?command, "player command");
                self.session.apply(command, &mut self.frames);
            }
            GameLoopCommand::SpriteLoaded(kind) => {
                if self.sprites.mark_ready(kind) {
                    tracing::debug!(?kind, "sprite loaded");
                }
                self.session.assets_ready(&self.sprites);
            }
            GameLoopCommand::Shutdown => return false,
        }
        true
    }

    /// Deliver the pending frame, if any. Returns the draw list it produced.
    pub(crate) fn pump_frame(&mut self) -> Option<Vec<DrawCommand>> {
        let handle = self.frames.take_due()?;
        let now = self.clock.elapsed().as_secs_f64();
        let accepted = self.session.on_frame(
            handle,
            now,
            &mut self.frames,
            &mut self.surface,
            &self.sprites,
        );
        accepted.then(|| self.surface.take())
    }

    pub(crate) fn snapshot(&mut self, frame: Option<Vec<DrawCommand>>) -> GameStateSnapshot {
        self.session.snapshot(frame)
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &GameSession {
        &self.session
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    app_handle: AppHandle,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    config: AppConfig,
) {
    let frame_duration = config.frame_duration();
    let mut host = LoopHost::new(config.session_config());
    let mut next_frame_time = Instant::now();
    tracing::info!(seed = config.seed, frame_rate = config.frame_rate, "game loop started");

    let initial = host.snapshot(None);
    publish(&app_handle, latest_snapshot, initial);

    loop {
        // 1. Drain all pending commands
        let mut changed = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !host.handle(command) {
                        tracing::info!("game loop shutting down");
                        return;
                    }
                    changed = true;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Deliver the frame the session asked for
        let frame = host.pump_frame();

        // 3. Publish whenever something the frontend shows may have changed
        if changed || frame.is_some() {
            let snapshot = host.snapshot(frame);
            publish(&app_handle, latest_snapshot, snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Emit a snapshot to the frontend and keep it for polling.
fn publish(
    app_handle: &AppHandle,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    snapshot: GameStateSnapshot,
) {
    if let Err(err) = app_handle.emit(SNAPSHOT_EVENT, &snapshot) {
        tracing::warn!(%err, "failed to emit snapshot");
    }
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}
