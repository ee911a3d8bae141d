use crate::entities::{PlayerSlot, Projectile};
use crate::math::vec2_from_angle;
use crate::world::World;

use super::Game;
use super::events::GameEvent;

impl Projectile {
    /// Moves, ages, then checks walls. A wall hit spends the projectile.
    pub fn update(&mut self, world: &World) {
        self.pos += vec2_from_angle(self.angle) * self.speed;
        self.life -= 1;
        if world.blocks(&self.bounds()) {
            self.life = 0;
        }
    }
}

impl Game {
    pub(super) fn update_projectiles(&mut self, events: &mut Vec<GameEvent>) {
        let active = std::mem::take(&mut self.projectiles);
        let mut survivors = Vec::with_capacity(active.len());
        for mut projectile in active {
            projectile.update(&self.world);
            if projectile.is_spent() {
                continue;
            }
            if let Some(target) = self.first_hit(&projectile) {
                self.apply_hit(target, projectile.owner, events);
                continue;
            }
            survivors.push(projectile);
        }
        self.projectiles = survivors;
    }

    /// First tank in slot order that this projectile can damage.
    fn first_hit(&self, projectile: &Projectile) -> Option<PlayerSlot> {
        self.tanks
            .iter()
            .find(|tank| {
                tank.slot != projectile.owner
                    && !tank.is_respawning()
                    && tank.rect().contains_point(projectile.pos)
            })
            .map(|tank| tank.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BULLET_LIFE;
    use crate::math::{Rect, vec2};

    #[test]
    fn moves_and_ages_each_tick() {
        let world = World::with_walls(960.0, 640.0, Vec::new());
        let mut projectile = Projectile::new(vec2(100.0, 100.0), 0.0, PlayerSlot::One);
        projectile.update(&world);
        assert!((projectile.pos.x - 108.0).abs() < 1e-4);
        assert_eq!(projectile.life, BULLET_LIFE - 1);
    }

    #[test]
    fn expires_after_lifetime() {
        let world = World::with_walls(10_000.0, 640.0, Vec::new());
        let mut projectile = Projectile::new(vec2(100.0, 100.0), 0.0, PlayerSlot::One);
        for _ in 0..BULLET_LIFE - 1 {
            projectile.update(&world);
            assert!(!projectile.is_spent());
        }
        projectile.update(&world);
        assert!(projectile.is_spent());
    }

    #[test]
    fn wall_contact_spends_after_moving() {
        let world = World::with_walls(960.0, 640.0, vec![Rect::new(110.0, 90.0, 10.0, 20.0)]);
        let mut projectile = Projectile::new(vec2(100.0, 100.0), 0.0, PlayerSlot::Two);
        projectile.update(&world);
        assert!(projectile.is_spent());
        assert!((projectile.pos.x - 108.0).abs() < 1e-4);
    }
}
