//! Draws a match through a backend-agnostic [`Canvas`].

mod hud;
mod world;

use glam::Vec2;

use crate::game::{Game, KeyBindings};
use crate::math::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(200, 40, 40, 255);
    pub const GRAY: Color = Color::new(130, 130, 130, 255);
    pub const BACKGROUND: Color = Color::new(200, 220, 240, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Immediate-mode drawing surface. Presenting the frame is up to the owner.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// `angle` in radians, rotating about `center`.
    fn fill_rotated_rect(&mut self, center: Vec2, size: Vec2, angle: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, size: i32, color: Color);
    fn measure_text(&self, text: &str, size: i32) -> i32;
}

pub fn draw_match(game: &Game, bindings: &KeyBindings, canvas: &mut impl Canvas) {
    canvas.clear(Color::BACKGROUND);
    world::draw_walls(game, canvas);
    world::draw_projectiles(game, canvas);
    for tank in game.tanks() {
        world::draw_tank(tank, canvas);
    }
    hud::draw_hud(game, bindings, canvas);
    if let Some(winner) = game.winner() {
        hud::draw_winner(winner, bindings, canvas);
    }
}
