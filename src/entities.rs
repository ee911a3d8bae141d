use glam::Vec2;

use crate::config::{
    BULLET_LIFE, BULLET_RADIUS, BULLET_SPEED, MAX_HEALTH, RESPAWN_TICKS, TANK_HEIGHT, TANK_SPEED,
    TANK_TURN_SPEED, TANK_WIDTH,
};
use crate::math::{Rect, vec2, vec2_from_angle};
use crate::render::Color;

/// Respawning tanks alternate hidden/shown every this many ticks.
pub const BLINK_PERIOD_TICKS: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerSlot::One => "Player 1",
            PlayerSlot::Two => "Player 2",
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            PlayerSlot::One => "Blue",
            PlayerSlot::Two => "Green",
        }
    }

    pub fn color(self) -> Color {
        match self {
            PlayerSlot::One => Color::new(40, 80, 200, 255),
            PlayerSlot::Two => Color::new(40, 200, 60, 255),
        }
    }

    pub fn opponent(self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub slot: PlayerSlot,
    pub pos: Vec2,
    pub body_angle: f32,
    /// Always in [0, 2π).
    pub turret_angle: f32,
    pub size: Vec2,
    pub speed: f32,
    pub turn_speed: f32,
    pub health: u8,
    pub score: u32,
    /// Ticks left in the respawn window; zero means active.
    pub respawn_timer: u32,
    /// Ticks until the next shot is allowed.
    pub cooldown: u32,
}

impl Tank {
    pub fn new(slot: PlayerSlot, pos: Vec2) -> Self {
        Self {
            slot,
            pos,
            body_angle: 0.0,
            turret_angle: 0.0,
            size: vec2(TANK_WIDTH, TANK_HEIGHT),
            speed: TANK_SPEED,
            turn_speed: TANK_TURN_SPEED,
            health: MAX_HEALTH,
            score: 0,
            respawn_timer: 0,
            cooldown: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    pub fn is_respawning(&self) -> bool {
        self.respawn_timer > 0
    }

    pub fn max_dimension(&self) -> f32 {
        self.size.x.max(self.size.y)
    }

    /// Applies one hit. Returns true when this hit eliminated the tank.
    pub fn take_damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.respawn_timer = RESPAWN_TICKS;
            true
        } else {
            false
        }
    }

    pub fn respawn(&mut self) {
        self.health = MAX_HEALTH;
        self.respawn_timer = 0;
    }

    pub fn is_visible(&self) -> bool {
        !self.is_respawning() || (self.respawn_timer / BLINK_PERIOD_TICKS) % 2 != 0
    }

    pub fn turret_tip(&self) -> Vec2 {
        self.pos + vec2_from_angle(self.turret_angle) * self.max_dimension() * 0.6
    }
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    /// Ticks left; the projectile is spent at zero or below.
    pub life: i32,
    pub radius: f32,
    pub owner: PlayerSlot,
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32, owner: PlayerSlot) -> Self {
        Self {
            pos,
            angle,
            speed: BULLET_SPEED,
            life: BULLET_LIFE,
            radius: BULLET_RADIUS,
            owner,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(self.radius * 2.0))
    }

    pub fn is_spent(&self) -> bool {
        self.life <= 0
    }
}
