/// Muzzle offset is the tank's largest dimension divided by this, floored.
pub(super) const MUZZLE_DIVISOR: f32 = 1.6;
/// Horizontal distance from the playfield edge to each tank's start.
pub(super) const SPAWN_INSET: f32 = 120.0;
