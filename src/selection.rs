//! Hover resolution: pointer position → nearest visible point.

use egui::{Pos2, Rect};

use crate::projection::ProjectedPoint;

/// A point is a hit candidate when the pointer is closer than this fraction
/// of its rendered size. Scaling the hit radius with the marker keeps
/// selection equally forgiving for small and large points.
pub const HIT_RADIUS_FACTOR: f32 = 0.7;

/// Find the projected point nearest to the pointer.
///
/// Returns `None` when the pointer is absent or outside the map viewport,
/// or when no point is within its own hit radius. Among candidates the
/// strictly smallest distance wins; on an exact distance tie the point
/// encountered first in iteration order is kept, so the result is
/// deterministic for a fixed point order.
///
/// Only the pointer is gated on the viewport; a point whose center sits
/// marginally outside it (edge-of-range float rounding) remains hoverable.
pub fn resolve_hover<'a>(
    pointer: Option<Pos2>,
    points: &'a [ProjectedPoint],
    viewport: Rect,
) -> Option<&'a ProjectedPoint> {
    let pointer = pointer?;
    if !viewport.contains(pointer) {
        return None;
    }

    let mut best: Option<(&ProjectedPoint, f32)> = None;
    for point in points {
        let distance = point.pos.distance(pointer);
        if distance >= HIT_RADIUS_FACTOR * point.size {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((point, distance)),
        }
    }
    best.map(|(point, _)| point)
}
