use glam::Vec2;
use raylib::prelude::{RaylibDraw, RaylibDrawHandle, Rectangle, Vector2};

use crate::math::{Rect, rad_to_deg};
use crate::render::{Canvas, Color};

pub struct RaylibCanvas<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
}

impl<'a, 'b> RaylibCanvas<'a, 'b> {
    pub fn new(d: &'a mut RaylibDrawHandle<'b>) -> Self {
        Self { d }
    }
}

fn color(c: Color) -> raylib::prelude::Color {
    raylib::prelude::Color::new(c.r, c.g, c.b, c.a)
}

fn vector(v: Vec2) -> Vector2 {
    Vector2 { x: v.x, y: v.y }
}

fn rectangle(r: Rect) -> Rectangle {
    Rectangle {
        x: r.x,
        y: r.y,
        width: r.w,
        height: r.h,
    }
}

impl Canvas for RaylibCanvas<'_, '_> {
    fn clear(&mut self, c: Color) {
        self.d.clear_background(color(c));
    }

    fn fill_rect(&mut self, rect: Rect, c: Color) {
        self.d.draw_rectangle_rec(rectangle(rect), color(c));
    }

    fn fill_rotated_rect(&mut self, center: Vec2, size: Vec2, angle: f32, c: Color) {
        // raylib rotates about `origin`, measured from the rect's x/y
        let dest = Rectangle {
            x: center.x,
            y: center.y,
            width: size.x,
            height: size.y,
        };
        self.d
            .draw_rectangle_pro(dest, vector(size * 0.5), rad_to_deg(angle), color(c));
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, c: Color) {
        self.d
            .draw_line_ex(vector(from), vector(to), thickness, color(c));
    }

    fn circle(&mut self, center: Vec2, radius: f32, c: Color) {
        self.d.draw_circle_v(vector(center), radius, color(c));
    }

    fn text(&mut self, text: &str, pos: Vec2, size: i32, c: Color) {
        self.d
            .draw_text(text, pos.x as i32, pos.y as i32, size, color(c));
    }

    fn measure_text(&self, text: &str, size: i32) -> i32 {
        self.d.measure_text(text, size)
    }
}
