use crate::entities::Tank;
use crate::game::Game;
use crate::math::{Rect, rotate_offset, vec2};

use super::{Canvas, Color};

const TURRET_THICKNESS: f32 = 6.0;
const TURRET_HUB_RADIUS: f32 = 12.0;
const PIP_SPACING: f32 = 12.0;

pub(super) fn draw_walls(game: &Game, canvas: &mut impl Canvas) {
    for wall in &game.world().walls {
        canvas.fill_rect(*wall, Color::GRAY);
    }
}

pub(super) fn draw_projectiles(game: &Game, canvas: &mut impl Canvas) {
    for projectile in game.projectiles() {
        canvas.circle(projectile.pos, projectile.radius, Color::BLACK);
    }
}

pub(super) fn draw_tank(tank: &Tank, canvas: &mut impl Canvas) {
    if !tank.is_visible() {
        return;
    }
    let color = tank.slot.color();
    canvas.fill_rotated_rect(tank.pos, tank.size, tank.body_angle, color);

    // tread stripe sits just above the body's long axis
    let stripe_size = vec2(tank.size.x - 4.0, (tank.size.y / 6.0).floor());
    let stripe_top = (tank.size.y / 3.0).floor();
    let stripe_offset = vec2(0.0, stripe_top + stripe_size.y * 0.5 - tank.size.y * 0.5);
    canvas.fill_rotated_rect(
        tank.pos + rotate_offset(stripe_offset, tank.body_angle),
        stripe_size,
        tank.body_angle,
        Color::BLACK,
    );

    canvas.line(tank.pos, tank.turret_tip(), TURRET_THICKNESS, Color::BLACK);
    canvas.circle(tank.pos, TURRET_HUB_RADIUS, color);

    for i in 0..tank.health {
        canvas.fill_rect(
            Rect::new(
                tank.pos.x - 18.0 + i as f32 * PIP_SPACING,
                tank.pos.y + 26.0,
                8.0,
                6.0,
            ),
            Color::RED,
        );
    }
}
