use rand::{Rng, rngs::SmallRng};

use crate::math::Rect;

use super::World;

pub const BORDER_PAD: f32 = 10.0;

pub const SEGMENT_COUNT: usize = 5;
const SEGMENT_START_X: f32 = 160.0;
const SEGMENT_SPACING: f32 = 120.0;
const SEGMENT_Y: f32 = 200.0;
const SEGMENT_WIDTH: f32 = 40.0;
const SEGMENT_HEIGHT: f32 = 200.0;

pub const OBSTACLE_COUNT: usize = 6;
pub const OBSTACLE_MARGIN: i32 = 80;
pub const OBSTACLE_WIDTH: f32 = 60.0;
pub const OBSTACLE_HEIGHT: f32 = 20.0;

pub(super) fn generate_world(rng: &mut SmallRng, width: f32, height: f32) -> World {
    let mut walls = Vec::with_capacity(4 + SEGMENT_COUNT + OBSTACLE_COUNT);
    walls.extend(border_walls(width, height));
    walls.extend(fixed_segments());
    walls.extend(random_obstacles(rng, width, height));
    log::debug!("generated {} walls for {width}x{height} playfield", walls.len());
    World {
        width,
        height,
        walls,
    }
}

fn border_walls(width: f32, height: f32) -> [Rect; 4] {
    [
        Rect::new(0.0, 0.0, width, BORDER_PAD),
        Rect::new(0.0, 0.0, BORDER_PAD, height),
        Rect::new(0.0, height - BORDER_PAD, width, BORDER_PAD),
        Rect::new(width - BORDER_PAD, 0.0, BORDER_PAD, height),
    ]
}

fn fixed_segments() -> impl Iterator<Item = Rect> {
    (0..SEGMENT_COUNT).map(|i| {
        Rect::new(
            SEGMENT_START_X + i as f32 * SEGMENT_SPACING,
            SEGMENT_Y,
            SEGMENT_WIDTH,
            SEGMENT_HEIGHT,
        )
    })
}

/// Top-left corners sampled on the integer grid; overlaps are allowed.
fn random_obstacles(rng: &mut SmallRng, width: f32, height: f32) -> Vec<Rect> {
    let max_x = (width as i32 - OBSTACLE_MARGIN).max(OBSTACLE_MARGIN);
    let max_y = (height as i32 - OBSTACLE_MARGIN).max(OBSTACLE_MARGIN);
    (0..OBSTACLE_COUNT)
        .map(|_| {
            let x = rng.random_range(OBSTACLE_MARGIN..=max_x);
            let y = rng.random_range(OBSTACLE_MARGIN..=max_y);
            Rect::new(x as f32, y as f32, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
        })
        .collect()
}
