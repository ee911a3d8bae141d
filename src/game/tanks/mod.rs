mod combat;
mod movement;
mod spawn;

pub(super) use spawn::spawn_tanks;

use super::Game;
use super::input::TickInput;

impl Game {
    pub(super) fn update_tanks(&mut self, input: &TickInput) {
        for tank in &mut self.tanks {
            tank.cooldown = tank.cooldown.saturating_sub(1);
        }
        let world = &self.world;
        for tank in &mut self.tanks {
            let controls = input.controls(tank.slot);
            tank.update(controls, world);
        }
    }
}
