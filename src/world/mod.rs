mod generation;

use rand::rngs::SmallRng;

use crate::math::Rect;

pub use generation::{
    BORDER_PAD, OBSTACLE_COUNT, OBSTACLE_HEIGHT, OBSTACLE_MARGIN, OBSTACLE_WIDTH, SEGMENT_COUNT,
};

/// Static obstacle set for one match. Never mutated once generated.
#[derive(Clone, Debug)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub walls: Vec<Rect>,
}

impl World {
    pub fn new(rng: &mut SmallRng, width: f32, height: f32) -> Self {
        generation::generate_world(rng, width, height)
    }

    /// A world with an explicit wall set, for scripted matches.
    pub fn with_walls(width: f32, height: f32, walls: Vec<Rect>) -> Self {
        Self {
            width,
            height,
            walls,
        }
    }

    pub fn blocks(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| wall.overlaps(rect))
    }
}
