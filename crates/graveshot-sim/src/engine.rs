//! Game session: the core of the game.
//!
//! `GameSession` owns the hecs world, the score and the loop state machine
//! (Stopped → Running ⇄ Paused, reset back to Stopped). The host drives it
//! with frame callbacks and player commands from a single thread.
//! Completely headless (no Tauri dependency), enabling deterministic testing.

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use graveshot_core::commands::PlayerCommand;
use graveshot_core::components::{Enemy, SpawnIndex};
use graveshot_core::constants::*;
use graveshot_core::enums::{EnemyKind, LoopState, MessageDisplay};
use graveshot_core::events::{AudioEvent, SessionEvent};
use graveshot_core::state::{DrawCommand, EnemyView, GameStateSnapshot};
use graveshot_core::types::Arena;
use graveshot_motion::MotionTuning;

use crate::host::{FrameHandle, FrameScheduler, RenderSurface, SpriteProvider};
use crate::systems;
use crate::systems::hit::Hit;
use crate::{input, world_setup};

/// Configuration for a new game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    pub arena: Arena,
    /// Enemies created on the initial load and on every reset.
    pub population: usize,
    /// Cap on the delta time of a single frame (seconds).
    pub max_frame_dt: f64,
    pub tuning: MotionTuning,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::default(),
            population: POPULATION_COUNT,
            max_frame_dt: MAX_FRAME_DT,
            tuning: MotionTuning::default(),
        }
    }
}

/// The game session. Owns the enemy world and all game state.
pub struct GameSession {
    world: World,
    rng: ChaCha8Rng,
    arena: Arena,
    tuning: MotionTuning,
    population: usize,
    max_frame_dt: f64,

    state: LoopState,
    score: u32,
    assets_loaded: bool,
    pending_frame: Option<FrameHandle>,
    last_frame_time: Option<f64>,

    order_buffer: Vec<Entity>,
    events: Vec<SessionEvent>,
    audio_events: Vec<AudioEvent>,
}

impl GameSession {
    /// Create a new session with an empty board. Enemies appear once the
    /// sprites are ready (`assets_ready`) or on `reset`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            arena: config.arena,
            tuning: config.tuning,
            population: config.population,
            max_frame_dt: config.max_frame_dt,
            state: LoopState::default(),
            score: 0,
            assets_loaded: false,
            pending_frame: None,
            last_frame_time: None,
            order_buffer: Vec::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Report sprite readiness. The first time every sprite is ready, the
    /// board is populated and the welcome message shown. Returns true on
    /// that transition.
    pub fn assets_ready(&mut self, sprites: &impl SpriteProvider) -> bool {
        if self.assets_loaded {
            return false;
        }
        if !EnemyKind::ALL.iter().all(|kind| sprites.is_ready(*kind)) {
            tracing::debug!("waiting for sprites");
            return false;
        }
        self.assets_loaded = true;
        self.populate(self.population);
        self.events
            .push(SessionEvent::message("Press Start to play", MESSAGE_WELCOME_MILLIS));
        true
    }

    /// Apply one player command between frames.
    pub fn apply(&mut self, command: PlayerCommand, scheduler: &mut impl FrameScheduler) {
        match command {
            PlayerCommand::Start => {
                if self.start(scheduler) {
                    self.events
                        .push(SessionEvent::message("STARTED!", MESSAGE_STARTED_MILLIS));
                }
            }
            PlayerCommand::Pause => {
                self.pause(scheduler);
            }
            PlayerCommand::TogglePause => {
                if self.state == LoopState::Running {
                    self.pause(scheduler);
                } else {
                    self.start(scheduler);
                }
            }
            PlayerCommand::Reset => self.reset(scheduler),
            PlayerCommand::Shoot {
                client_x,
                client_y,
                viewport,
            } => match input::to_canvas(client_x, client_y, &viewport, &self.arena) {
                Some(point) => {
                    self.handle_click(point);
                }
                None => tracing::debug!(?viewport, "ignoring click on a collapsed canvas"),
            },
        }
    }

    /// Begin (or resume) scheduling frames. No effect while running or
    /// before the sprites are ready. Returns true if the loop started.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        if !self.assets_loaded {
            tracing::debug!("start refused: sprites not loaded");
            return false;
        }

        self.state = LoopState::Running;
        self.last_frame_time = None;
        self.pending_frame = Some(scheduler.request_frame());
        self.audio_events.push(AudioEvent::MusicStart);
        self.events.push(SessionEvent::hide_message());
        tracing::info!(score = self.score, "game loop running");
        true
    }

    /// Stop scheduling frames and freeze the board. No effect unless running.
    /// Returns true if the loop paused.
    pub fn pause(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.state != LoopState::Running {
            return false;
        }

        self.state = LoopState::Paused;
        self.cancel_pending(scheduler);
        self.events
            .push(SessionEvent::message("PAUSED", MESSAGE_DEFAULT_MILLIS));
        tracing::info!(score = self.score, "game loop paused");
        true
    }

    /// Stop the loop, zero the score and put a fresh population on the board.
    pub fn reset(&mut self, scheduler: &mut impl FrameScheduler) {
        self.state = LoopState::Stopped;
        self.cancel_pending(scheduler);
        self.last_frame_time = None;
        self.score = 0;
        self.events.push(SessionEvent::ScoreReset);
        self.populate(self.population);
        self.events
            .push(SessionEvent::message("Ready. Press Start", MESSAGE_DEFAULT_MILLIS));
        self.audio_events.push(AudioEvent::MusicStop);
        tracing::info!("game reset");
    }

    /// Frame callback from the host, with a monotonic timestamp in seconds.
    ///
    /// Callbacks for cancelled or superseded handles are ignored. The first
    /// frame after a start only records the timestamp; later frames advance
    /// the enemies by the capped delta time. Every accepted frame renders
    /// and requests the next one. Returns true if the frame was accepted.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        now: f64,
        scheduler: &mut impl FrameScheduler,
        surface: &mut impl RenderSurface,
        sprites: &impl SpriteProvider,
    ) -> bool {
        if self.state != LoopState::Running || self.pending_frame != Some(handle) {
            tracing::trace!(?handle, state = ?self.state, "discarding stale frame");
            return false;
        }
        self.pending_frame = None;

        if let Some(last) = self.last_frame_time {
            let dt = (now - last).min(self.max_frame_dt).max(0.0);
            self.advance(dt);
        }
        self.last_frame_time = Some(now);

        systems::render::run(&self.world, &self.arena, surface, sprites);

        self.pending_frame = Some(scheduler.request_frame());
        true
    }

    /// Advance every enemy by `dt` seconds. The frame loop calls this with
    /// an already capped delta.
    pub fn advance(&mut self, dt: f64) {
        systems::movement::run(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            &self.tuning,
            dt,
            &mut self.order_buffer,
        );
    }

    /// Shoot at a point in canvas coordinates. Only counts while running.
    pub fn handle_click(&mut self, point: DVec2) -> Option<Hit> {
        if self.state != LoopState::Running {
            return None;
        }

        let hit = systems::hit::resolve_click(
            &mut self.world,
            &mut self.rng,
            point,
            &mut self.order_buffer,
        )?;

        self.score = self.score.saturating_add(hit.points);
        self.events.push(SessionEvent::ScoreChanged {
            delta: hit.points,
            total: self.score,
        });
        self.audio_events.push(AudioEvent::ShotFired);
        tracing::debug!(index = hit.index, kind = ?hit.kind, score = self.score, "enemy hit");
        Some(hit)
    }

    /// Replace the board with `count` fresh enemies.
    pub fn populate(&mut self, count: usize) {
        world_setup::populate(&mut self.world, &mut self.rng, &self.arena, count);
        tracing::info!(count, "board populated");
    }

    /// Put one more enemy on top of the board. Returns its spawn index.
    pub fn add_enemy(&mut self, enemy: Enemy) -> usize {
        let entity = world_setup::spawn_enemy(&mut self.world, enemy);
        self.world
            .get::<&SpawnIndex>(entity)
            .map(|index| index.0)
            .unwrap_or_default()
    }

    /// Build a snapshot for the frontend, draining pending events.
    pub fn snapshot(&mut self, frame: Option<Vec<DrawCommand>>) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.state,
            self.score,
            frame,
            events,
            audio_events,
        )
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current loop state.
    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    /// Frame handle the session is waiting for, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Read-only views of the enemies in spawn order.
    pub fn enemies(&self) -> Vec<EnemyView> {
        world_setup::enemy_views(&self.world)
    }

    /// Events queued since the last snapshot, without draining them.
    pub fn pending_events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Most recent status message text queued since the last snapshot.
    pub fn last_message(&self) -> Option<(&str, MessageDisplay)> {
        self.events.iter().rev().find_map(|event| match event {
            SessionEvent::Message { text, display } => Some((text.as_str(), *display)),
            _ => None,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn cancel_pending(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
