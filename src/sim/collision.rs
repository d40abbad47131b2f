//! Collision queries for discrete circles and axis-aligned rectangles
//!
//! Tanks and bullets are circles, walls are axis-aligned rectangles. Both
//! tests are inclusive at the boundary: a zero-distance overlap counts.

use glam::Vec2;

use super::arena::Wall;

/// Check whether a circle overlaps an axis-aligned wall rectangle
///
/// Clamps the circle center to the rectangle to find the nearest rectangle
/// point, then compares its distance to the radius. A center inside the
/// rectangle clamps to itself (distance zero), so containment always hits.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, wall: &Wall) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(wall.x, wall.x + wall.w),
        center.y.clamp(wall.y, wall.y + wall.h),
    );
    center.distance_squared(nearest) <= radius * radius
}

/// Check whether two circles overlap (touching counts)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) <= reach * reach
}
