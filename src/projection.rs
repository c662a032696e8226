//! World-to-screen projection with perspective divide.

use glam::{Mat4, Vec2, Vec3};

/// Homogeneous-w threshold below which a projection is degenerate.
///
/// A point whose transformed w lands within this distance of zero sits on
/// the camera's eye plane; dividing by it would blow the coordinates up
/// or flip their signs.
pub const W_EPSILON: f32 = 1e-6;

/// Project a world-space position into 2-D screen coordinates.
///
/// Homogenizes `world_pos` with w = 1, applies `view_transform`, then
/// divides x and y by the resulting w. Returns `None` instead of dividing
/// when |w| < [`W_EPSILON`] or the transform produced non-finite
/// components (e.g. a NaN-carrying camera matrix), so the caller can keep
/// the previous placement for that actor this frame.
///
/// Pure and idempotent: the same inputs always yield bit-identical
/// output.
#[must_use]
pub fn project(world_pos: Vec3, view_transform: Mat4) -> Option<Vec2> {
    let clip = view_transform * world_pos.extend(1.0);
    if !clip.is_finite() || clip.w.abs() < W_EPSILON {
        return None;
    }
    Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_passes_xy_through() {
        let p = Vec3::new(1.5, -0.75, 0.15);
        let screen = project(p, Mat4::IDENTITY).unwrap();
        assert_eq!(screen, Vec2::new(1.5, -0.75));
    }

    #[test]
    fn repeated_projection_is_bit_identical() {
        let m = Mat4::perspective_rh(1.0, 1.6, 0.1, 100.0)
            * Mat4::look_at_rh(Vec3::new(3.0, 2.0, 5.0), Vec3::ZERO, Vec3::Z);
        let p = Vec3::new(-1.2, 0.8, 0.15);

        let a = project(p, m).unwrap();
        let b = project(p, m).unwrap();
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn near_zero_w_is_flagged_not_divided() {
        // Perspective matrix maps the eye plane (z = 0 in view space) to
        // w = 0; a point at the eye must not be divided through.
        let proj = Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0);
        assert_eq!(project(Vec3::ZERO, proj), None);
    }

    #[test]
    fn nan_transform_is_flagged() {
        let mut m = Mat4::IDENTITY;
        m.x_axis.x = f32::NAN;
        assert_eq!(project(Vec3::ONE, m), None);
    }

    #[test]
    fn valid_result_is_always_finite() {
        let proj = Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0);
        let p = Vec3::new(0.5, 0.25, -2.0);
        let screen = project(p, proj).unwrap();
        assert!(screen.x.is_finite());
        assert!(screen.y.is_finite());
    }
}
