mod constants;
mod events;
pub mod input;
mod projectiles;
mod tanks;
mod update;

use rand::{SeedableRng, rngs::SmallRng};

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::entities::{PlayerSlot, Projectile, Tank};
use crate::world::World;

pub use events::GameEvent;
pub use input::{Action, ControlState, Controls, InputSource, Key, KeyBindings, TickInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    RoundOver,
}

/// The match loop. Owns the walls, both tanks and every live projectile.
pub struct Game {
    state: MatchState,
    world: World,
    tanks: [Tank; 2],
    projectiles: Vec<Projectile>,
    rng: SmallRng,
    winner: Option<PlayerSlot>,
    tick_count: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let world = World::new(&mut rng, WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        Self::build(rng, world)
    }

    /// Starts a match on a caller-supplied wall set. Resets still use the
    /// generator.
    pub fn with_world(seed: u64, world: World) -> Self {
        Self::build(SmallRng::seed_from_u64(seed), world)
    }

    fn build(rng: SmallRng, world: World) -> Self {
        let tanks = tanks::spawn_tanks(&world);
        Self {
            state: MatchState::Playing,
            world,
            tanks,
            projectiles: Vec::new(),
            rng,
            winner: None,
            tick_count: 0,
        }
    }

    fn reset_match(&mut self) {
        self.world = World::new(&mut self.rng, self.world.width, self.world.height);
        self.projectiles.clear();
        for tank in &mut self.tanks {
            tank.score = 0;
            tank.respawn();
        }
        self.winner = None;
        self.state = MatchState::Playing;
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        self.winner
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tanks(&self) -> &[Tank; 2] {
        &self.tanks
    }

    pub fn tank(&self, slot: PlayerSlot) -> &Tank {
        &self.tanks[slot.index()]
    }

    /// Direct access for placing tanks in scripted matches.
    pub fn tank_mut(&mut self, slot: PlayerSlot) -> &mut Tank {
        &mut self.tanks[slot.index()]
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
