//! Actors and the labels they own.

use glam::{Mat4, Vec2, Vec3};

use crate::graph::NodeHandle;

/// RGBA color, components in [0, 1].
pub type Color = [f32; 4];

/// Default label text color (white).
pub const LABEL_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// Default label backing-quad color (opaque black).
pub const LABEL_FACE_COLOR: Color = [0.0, 0.0, 0.0, 1.0];

/// Default actor body color.
pub const ACTOR_COLOR: Color = [0.95, 0.75, 0.0, 1.0];

/// Label backing-quad extent in world units (width, height).
pub const LABEL_QUAD_SIZE: (f32, f32) = (0.5, 0.15);

/// Where a label currently sits, in the coordinate space its anchoring
/// policy works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPlacement {
    /// Oriented quad inside the 3-D scene, relative to the owning actor's
    /// local origin (billboard policy).
    World {
        /// Orientation matrix; the camera's rotation component under the
        /// billboard policy.
        orientation: Mat4,
        /// Offset from the actor's local origin.
        offset: Vec3,
    },
    /// Position in the host's 2-D overlay layer, outside the 3-D
    /// transform chain (screen-anchor policy).
    Screen {
        /// Overlay position after projection and pixel offset.
        pos: Vec2,
    },
}

/// Floating text label owned by exactly one [`Actor`] for its lifetime.
///
/// Created alongside its actor and never reassigned. The placement is
/// written only by anchor recomputation; user code reads it through the
/// actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text shown on the label.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Backing-quad color.
    pub face_color: Color,
    /// Draw priority; the scene assigns a value strictly greater than the
    /// owning actor's so the label draws on top.
    pub render_order: i32,
    /// Current placement; written only by anchor recomputation.
    pub placement: LabelPlacement,
}

/// A movable scene object carrying one label.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Display name, shown on the label. Duplicates across actors are
    /// permitted.
    pub name: String,
    /// Position in world space.
    pub world_position: Vec3,
    /// Uniform scale applied to the actor's mesh.
    pub scale: f32,
    /// Draw priority of the actor mesh.
    pub render_order: i32,
    /// Host scene-graph node this actor is attached under, once added.
    parent: Option<NodeHandle>,
    label: Label,
}

impl Actor {
    /// Initial world-space label offset: floats [`LABEL_LIFT`] above the
    /// actor's origin before the first camera-driven recomputation.
    ///
    /// [`LABEL_LIFT`]: crate::anchor::LABEL_LIFT
    fn initial_placement() -> LabelPlacement {
        LabelPlacement::World {
            orientation: Mat4::IDENTITY,
            offset: Vec3::new(0.0, 0.0, crate::anchor::LABEL_LIFT),
        }
    }

    /// Create an actor with its label, using the default colors.
    ///
    /// The label text is the actor's name; its render order is assigned
    /// by the scene at add time.
    #[must_use]
    pub fn new(name: impl Into<String>, world_position: Vec3, scale: f32) -> Self {
        let name = name.into();
        let label = Label {
            text: name.clone(),
            color: LABEL_COLOR,
            face_color: LABEL_FACE_COLOR,
            render_order: 0,
            placement: Self::initial_placement(),
        };
        Self {
            name,
            world_position,
            scale,
            render_order: 0,
            parent: None,
            label,
        }
    }

    /// Move the actor to a new world position.
    ///
    /// The label placement is refreshed on the next recomputation pass,
    /// not immediately.
    pub fn set_world_position(&mut self, position: Vec3) {
        self.world_position = position;
    }

    /// The host node this actor is attached under, if added to a scene.
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Record the host node this actor was attached under.
    pub fn set_parent(&mut self, parent: NodeHandle) {
        self.parent = Some(parent);
    }

    /// World transform of the actor's mesh (translation and uniform
    /// scale).
    #[must_use]
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_translation(self.world_position) * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Read access to the owned label.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Write access for anchor recomputation and render-order assignment.
    pub(crate) fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_owns_one_label_from_construction() {
        let actor = Actor::new("actor_0", Vec3::new(1.0, 0.5, 0.15), 0.1);
        assert_eq!(actor.label().text, "actor_0");
        assert_eq!(actor.label().color, LABEL_COLOR);
        assert_eq!(actor.label().face_color, LABEL_FACE_COLOR);
    }

    #[test]
    fn world_transform_combines_translation_and_scale() {
        let actor = Actor::new("a", Vec3::new(2.0, -1.0, 0.25), 0.5);
        let transformed = actor.world_transform().transform_point3(Vec3::ONE);
        assert_eq!(transformed, Vec3::new(2.5, -0.5, 0.75));
    }

    #[test]
    fn label_starts_lifted_above_origin() {
        let actor = Actor::new("a", Vec3::ZERO, 1.0);
        match actor.label().placement {
            LabelPlacement::World { offset, .. } => {
                assert_eq!(offset, Vec3::new(0.0, 0.0, 0.25));
            }
            LabelPlacement::Screen { .. } => panic!("expected world placement"),
        }
    }
}
