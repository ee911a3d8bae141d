use crate::entities::{PlayerSlot, Tank};
use crate::math::vec2;
use crate::world::World;

use super::super::constants::SPAWN_INSET;

pub(crate) fn spawn_tanks(world: &World) -> [Tank; 2] {
    let mid_y = (world.height * 0.5).floor();
    PlayerSlot::ALL.map(|slot| {
        let x = match slot {
            PlayerSlot::One => SPAWN_INSET,
            PlayerSlot::Two => world.width - SPAWN_INSET,
        };
        Tank::new(slot, vec2(x, mid_y))
    })
}
