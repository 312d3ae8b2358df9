//! Analytic two-bone inverse kinematics
//!
//! Given the lengths of two chained bones and where the end of the chain
//! should be, find the middle joint using the law of cosines. `dir_bend`
//! (+1 or -1) picks which of the two mirror solutions is used.

use limber_core::Vec2;

/// Joint position for a chain rooted at the origin.
///
/// When the target is out of reach (or closer than `|l1 - l2|`) the cosine
/// falls outside [-1, 1] and the bend angle is taken as zero, which lays the
/// first bone straight along the line to the target. A zero-length target
/// takes the same path.
pub fn solve_local(l1: f64, l2: f64, end_effector: Vec2, dir_bend: f64) -> Vec2 {
    let d = end_effector.magnitude();
    let cos_theta = (l1 * l1 + d * d - l2 * l2) / (2.0 * l1 * d);
    let mut theta = dir_bend * cos_theta.acos();
    if theta.is_nan() {
        theta = 0.0;
    }
    Vec2::from_polar(theta + end_effector.angle(), l1)
}

/// Joint position for a chain rooted at `origin`, in the same frame as the
/// inputs
pub fn solve_global(l1: f64, l2: f64, end_effector: Vec2, origin: Vec2, dir_bend: f64) -> Vec2 {
    solve_local(l1, l2, end_effector - origin, dir_bend) + origin
}
