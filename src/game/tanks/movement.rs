use crate::entities::Tank;
use crate::game::input::ControlState;
use crate::math::{vec2_from_angle, wrap_angle};
use crate::world::World;

impl Tank {
    /// Advances one tick of driving and aiming. A respawning tank only
    /// counts down. Health is left alone; only a match reset restores it.
    pub fn update(&mut self, controls: &ControlState, world: &World) {
        if self.respawn_timer > 0 {
            self.respawn_timer -= 1;
            return;
        }

        let turn = controls.turn();
        if turn != 0.0 {
            self.body_angle = wrap_angle(self.body_angle + turn * self.turn_speed);
        }

        let forward = controls.forward();
        if forward != 0.0 {
            let velocity = vec2_from_angle(self.body_angle) * forward * self.speed;
            try_move_tank(self, world, velocity);
        }

        let turret = controls.turret();
        self.turret_angle = wrap_angle(self.turret_angle + turret * self.turn_speed);
    }
}

/// All-or-nothing: a move that would touch any wall is dropped entirely.
fn try_move_tank(tank: &mut Tank, world: &World, velocity: glam::Vec2) {
    let moved = tank.rect().translated(velocity);
    if !world.blocks(&moved) {
        tank.pos += velocity;
    }
}
