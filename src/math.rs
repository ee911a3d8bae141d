use glam::Vec2;
use std::f32::consts::PI;

pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub fn vec2_from_angle(angle: f32) -> Vec2 {
    vec2(angle.cos(), angle.sin())
}

pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(PI * 2.0);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= PI * 2.0 { 0.0 } else { wrapped }
}

/// Rotates a body-local offset into world space.
pub fn rotate_offset(offset: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(offset)
}

pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open on the right and bottom edges.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
