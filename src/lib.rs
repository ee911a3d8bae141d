//! Tank Duel - two tanks, independent turrets, first to five.
//!
//! - `world`: static wall set for a match
//! - `entities`: tanks and projectiles
//! - `game`: fixed-tick match loop, input snapshot, scoring
//! - `render`: draws a match against any [`render::Canvas`]
//! - `settings`: key bindings loaded from JSON
//! - `frontend`: raylib window and keyboard (feature `window`)

pub mod config;
pub mod entities;
pub mod game;
pub mod math;
pub mod render;
pub mod settings;
pub mod world;

#[cfg(feature = "window")]
pub mod frontend;

pub use entities::{PlayerSlot, Projectile, Tank};
pub use game::{Game, GameEvent, MatchState};
pub use settings::Settings;
pub use world::World;
