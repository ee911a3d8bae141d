use crate::config::FIRE_COOLDOWN_TICKS;
use crate::entities::{PlayerSlot, Projectile, Tank};
use crate::math::vec2_from_angle;

use super::super::constants::MUZZLE_DIVISOR;
use super::super::events::GameEvent;
use super::super::Game;

impl Tank {
    /// A projectile leaving the muzzle, or `None` while respawning.
    /// Cooldown is the match loop's business.
    pub fn fire(&self) -> Option<Projectile> {
        if self.is_respawning() {
            return None;
        }
        let dir = vec2_from_angle(self.turret_angle);
        let muzzle = (self.max_dimension() / MUZZLE_DIVISOR).floor();
        Some(Projectile::new(
            self.pos + dir * muzzle,
            self.turret_angle,
            self.slot,
        ))
    }
}

impl Game {
    /// Fires for `slot` if its cooldown has run out and it is not respawning.
    pub(in crate::game) fn handle_fire(&mut self, slot: PlayerSlot, events: &mut Vec<GameEvent>) {
        let tank = &mut self.tanks[slot.index()];
        if tank.cooldown > 0 {
            return;
        }
        if let Some(projectile) = tank.fire() {
            tank.cooldown = FIRE_COOLDOWN_TICKS;
            log::debug!("{} fired at {:.2} rad", slot.name(), projectile.angle);
            self.projectiles.push(projectile);
            events.push(GameEvent::Fired { by: slot });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::math::vec2;

    #[test]
    fn projectile_leaves_muzzle_along_turret() {
        let mut tank = Tank::new(PlayerSlot::One, vec2(100.0, 100.0));
        tank.turret_angle = PI / 2.0;
        tank.body_angle = 1.0;
        let projectile = tank.fire().expect("active tank fires");
        assert!((projectile.pos.x - 100.0).abs() < 1e-4);
        assert!((projectile.pos.y - 125.0).abs() < 1e-4);
        assert_eq!(projectile.angle, PI / 2.0);
        assert_eq!(projectile.owner, PlayerSlot::One);
    }

    #[test]
    fn respawning_tank_cannot_fire() {
        let mut tank = Tank::new(PlayerSlot::Two, vec2(100.0, 100.0));
        tank.respawn_timer = 1;
        assert!(tank.fire().is_none());
    }

    #[test]
    fn firing_does_not_touch_tank_state() {
        let tank = Tank::new(PlayerSlot::One, vec2(50.0, 60.0));
        let before = format!("{tank:?}");
        let _ = tank.fire();
        assert_eq!(before, format!("{tank:?}"));
    }
}
