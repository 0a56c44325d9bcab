use std::f32::consts::TAU;

use glam::{IVec2, Vec2};

use crate::segment::Segment;

/// `rays` segments from the centre of a `width` x `height` image to just past its border.
///
/// Rays overshoot the image on purpose so drawing also exercises the bounds check.
pub fn star(width: usize, height: usize, rays: u32) -> Vec<Segment> {
    let center = Vec2::new(width as f32, height as f32) * 0.5;
    let radius = center.length() + 2.0;
    let start = center.floor().as_ivec2();

    (0..rays)
        .map(|i| {
            let angle = i as f32 / rays as f32 * TAU;
            let tip = center + Vec2::from_angle(angle) * radius;
            Segment::from_points(start, IVec2::new(tip.x.round() as i32, tip.y.round() as i32))
        })
        .collect()
}
