//! Player-related components.

use bevy::prelude::*;

use crate::core::{StatBlock, TimedFlag};

/// Which way the player faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Unit step in map space (y grows downwards).
    pub fn step(self) -> IVec2 {
        match self {
            Facing::Up => IVec2::new(0, -1),
            Facing::Down => IVec2::new(0, 1),
            Facing::Left => IVec2::new(-1, 0),
            Facing::Right => IVec2::new(1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// What the player is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Moving,
    Idle,
    Attack,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Moving, Mode::Idle, Mode::Attack];
}

/// Facing plus mode; also the key of the player's animation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerStatus {
    pub facing: Facing,
    pub mode: Mode,
}

impl PlayerStatus {
    pub const fn new(facing: Facing, mode: Mode) -> Self {
        Self { facing, mode }
    }

    /// Frame folder for this status under `assets/`.
    pub fn folder(self) -> String {
        let suffix = match self.mode {
            Mode::Moving => "",
            Mode::Idle => "_idle",
            Mode::Attack => "_attack",
        };
        format!("graphics/player/{}{}", self.facing.name(), suffix)
    }
}

/// The player entity. Exactly one exists per session.
#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Stat maxima. Only ever grow, through leveling.
    pub stats: StatBlock,
    pub health: i32,
    pub energy: i32,
    pub exp: u32,
    pub exp_needed: u32,
    pub level: u32,
    /// Index into the weapon catalog.
    pub weapon: usize,
    /// Index into the spell catalog.
    pub spell: usize,
    pub status: PlayerStatus,
    /// Raised while an attack or cast is in progress.
    pub attack: TimedFlag,
    /// Raised while invulnerable after a hit.
    pub invulnerability: TimedFlag,
    pub weapon_switch: TimedFlag,
    pub spell_switch: TimedFlag,
}

impl Player {
    pub fn is_attacking(&self) -> bool {
        self.attack.is_raised()
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.invulnerability.is_raised()
    }
}

/// The weapon hitbox the player currently owns, if any.
#[derive(Component, Debug, Default)]
pub struct WeaponSlot(pub Option<Entity>);

/// Movement and action requests read from the keyboard this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
    pub cast: bool,
    pub next_weapon: bool,
    pub next_spell: bool,
}
