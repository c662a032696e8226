//! Camera state shared between the host controller and the label core.

use glam::{Mat4, Vec3, Vec4};

/// Camera pose as the host's orbit/turntable controller maintains it.
///
/// The scene registry owns a `CameraState` but treats it as read-only;
/// the host camera controller writes the fields directly when the user
/// rotates or zooms, then delivers the triggering input event so label
/// placements are recomputed against the state as of that event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Combined rotation + translation + perspective transform.
    pub transform: Mat4,
    /// Pivot point the camera orbits around.
    pub center: Vec3,
    /// Vertical field of view in degrees. 0 selects the orthographic-like
    /// reference framing; 60 the perspective one.
    pub fov: f32,
}

impl CameraState {
    /// Orthographic-like framing (fov 0), centered at the origin.
    #[must_use]
    pub fn orthographic() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            center: Vec3::ZERO,
            fov: 0.0,
        }
    }

    /// Perspective framing with the given vertical field of view in
    /// degrees.
    #[must_use]
    pub fn perspective(fov: f32) -> Self {
        Self { fov, ..Self::orthographic() }
    }

    /// The rotation component of [`transform`](Self::transform), with the
    /// translation column zeroed.
    ///
    /// Billboard labels adopt this as their orientation so they face the
    /// camera without inheriting its translation.
    #[must_use]
    pub fn rotation_part(&self) -> Mat4 {
        let mut m = self.transform;
        m.w_axis = Vec4::W;
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_part_drops_translation() {
        let rotation = Mat4::from_rotation_z(0.7);
        let camera = CameraState {
            transform: Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * rotation,
            center: Vec3::ZERO,
            fov: 60.0,
        };
        assert_eq!(camera.rotation_part(), rotation);
    }

    #[test]
    fn framing_constructors_set_fov() {
        assert_eq!(CameraState::orthographic().fov, 0.0);
        assert_eq!(CameraState::perspective(60.0).fov, 60.0);
    }
}
