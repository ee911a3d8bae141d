pub const WINDOW_WIDTH: i32 = 960;
pub const WINDOW_HEIGHT: i32 = 640;
pub const TICKS_PER_SECOND: u32 = 60;

pub const TANK_WIDTH: f32 = 40.0;
pub const TANK_HEIGHT: f32 = 30.0;
pub const TANK_SPEED: f32 = 2.6;
/// Radians per tick, shared by body and turret.
pub const TANK_TURN_SPEED: f32 = 3.2 * std::f32::consts::PI / 180.0;
pub const MAX_HEALTH: u8 = 3;
pub const RESPAWN_TICKS: u32 = 2 * TICKS_PER_SECOND;
pub const FIRE_COOLDOWN_TICKS: u32 = 18;

pub const BULLET_SPEED: f32 = 8.0;
pub const BULLET_LIFE: i32 = 90;
pub const BULLET_RADIUS: f32 = 4.0;

pub const WINNING_SCORE: u32 = 5;
