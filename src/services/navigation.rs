//! Navigation rules
//!
//! Course arithmetic, the vitals check and wormhole exits used by
//! [`Vessel::move_by`](crate::models::vessel::Vessel::move_by).

use rand::Rng;

use crate::models::constants::Vital;
use crate::models::position::Coordinate;

/// Integer grid offset for travelling `distance` CP at `angle_degrees`
/// (0 = +x, 90 = +y). Each axis is rounded to the nearest cell.
pub fn course_delta(distance: f64, angle_degrees: f64) -> (i32, i32) {
    let radians = angle_degrees.to_radians();
    let dx = (distance * radians.cos()).round() as i32;
    let dy = (distance * radians.sin()).round() as i32;
    (dx, dy)
}

/// The first exhausted vital, checking energy before supplies.
pub fn depleted_vital(energy: f64, supplies: f64) -> Option<Vital> {
    if energy <= 0.0 {
        Some(Vital::Energy)
    } else if supplies <= 0.0 {
        Some(Vital::Supplies)
    } else {
        None
    }
}

/// Where a vessel that left the domain reappears: the fixed exit when one
/// is configured, otherwise a uniformly random in-bounds cell.
pub fn wormhole_exit<R: Rng>(boundary: i32, fixed: Option<Coordinate>, rng: &mut R) -> Coordinate {
    match fixed {
        Some(point) => point,
        None => Coordinate {
            x: rng.gen_range(-boundary..=boundary),
            y: rng.gen_range(-boundary..=boundary),
        },
    }
}
