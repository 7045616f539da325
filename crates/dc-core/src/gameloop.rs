//! Main game loop
//!
//! `GameState` owns one level and advances it one player input at a time.
//! After every input the view is refreshed: field of view first, so that
//! freshly explored floor is already known when the walls around it are
//! re-resolved.

use std::time::{Duration, Instant};

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::action::{Direction, TurnOutcome, resolve_player_turn};
use crate::autotile::recalculate_wall_adjacency;
use crate::config::GameConfig;
use crate::dungeon::{Layout, Tile, populate, tiles_from_layout};
use crate::entity::{Entity, EntityId};
use crate::grid::{Rect, TileGrid};
use crate::rng::GameRng;
use crate::vision::{VisibleSet, compute_visibility};

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum TurnPhase {
    #[default]
    PlayerTurn,
    /// Enemies do not act yet; this phase passes straight back to the player
    EnemyTurn,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tiles: TileGrid<Tile>,
    pub entities: Vec<Entity>,
    pub player: EntityId,
    pub phase: TurnPhase,
    pub rng: GameRng,
    pub config: GameConfig,

    /// Cells seen from the player's position after the last refresh
    pub visible: VisibleSet,

    /// Turn counter; only inputs other than `Stay` count
    pub turns: u64,

    /// Messages for the current turn
    pub messages: Vec<String>,

    /// Permanent message history
    pub message_history: Vec<String>,
}

impl GameState {
    /// Build a level from a layout: populate it and compute the first view
    pub fn new(layout: &Layout, config: GameConfig, rng: GameRng) -> Self {
        let (entities, player) = populate(layout);
        let mut state = Self {
            tiles: tiles_from_layout(layout),
            entities,
            player,
            phase: TurnPhase::PlayerTurn,
            rng,
            config,
            visible: VisibleSet::default(),
            turns: 0,
            messages: Vec::new(),
            message_history: Vec::new(),
        };
        state.refresh_view();
        state
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        self.messages.push(msg_str.clone());
        self.message_history.push(msg_str);
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn player_entity(&self) -> &Entity {
        &self.entities[self.player.0]
    }

    /// Player position, or the origin if the player has none
    pub fn player_pos(&self) -> (i32, i32) {
        self.player_entity()
            .position
            .map_or((0, 0), |p| (p.x, p.y))
    }

    /// Process one player input and refresh the view
    pub fn step(&mut self, direction: Direction) -> TurnOutcome {
        self.clear_messages();

        let outcome = resolve_player_turn(&mut self.entities, &self.tiles, self.player, direction);
        match outcome {
            TurnOutcome::DoorOpened(_) => self.message("The door opens."),
            TurnOutcome::Attacked { target, killed, .. } => {
                let name = self.entities[target.0].name.clone();
                if killed {
                    self.message(format!("You kill the {name}!"));
                } else {
                    self.message(format!("You hit the {name}."));
                }
            }
            TurnOutcome::Idle | TurnOutcome::Blocked | TurnOutcome::Moved { .. } => {}
        }

        if !direction.is_stay() {
            self.phase = TurnPhase::EnemyTurn;
            self.enemy_turn();
            self.phase = TurnPhase::PlayerTurn;
            self.turns += 1;
        }

        self.refresh_view();
        debug!("turn {}: {direction} -> {outcome:?}", self.turns);
        outcome
    }

    /// Enemies have no behaviour yet
    fn enemy_turn(&mut self) {
        trace!("enemy turn ({} entities)", self.entities.len());
    }

    /// Area around the player whose walls are re-resolved each turn
    pub fn viewport(&self) -> Rect {
        let (x, y) = self.player_pos();
        let to_i32 = |v: usize| i32::try_from(v).unwrap_or(i32::MAX);
        Rect::around(
            x,
            y,
            to_i32(self.config.viewport_width),
            to_i32(self.config.viewport_height),
            to_i32(self.config.viewport_margin),
        )
        .intersection(&self.tiles.bounds())
    }

    /// Recompute the field of view, then the walls inside the viewport
    pub fn refresh_view(&mut self) {
        let origin = self.player_pos();
        self.visible = compute_visibility(
            &mut self.tiles,
            &self.entities,
            origin,
            self.config.fov_radius,
        );
        let area = self.viewport();
        recalculate_wall_adjacency(&mut self.tiles, Some(area), &mut self.rng);
    }
}

/// Rate limit for player input: at most one turn per interval
#[derive(Debug, Clone)]
pub struct TurnThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl TurnThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(Duration::from_millis(config.turn_interval_ms))
    }

    /// Check whether an input arriving at `now` may take a turn
    pub fn ready(&self, now: Instant) -> bool {
        self.last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Accept an input at `now` if the interval has passed, starting a new one
    pub fn try_accept(&mut self, now: Instant) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last = Some(now);
        true
    }
}
