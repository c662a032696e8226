//! Boundary with the host 3-D scene-graph / rendering engine.

use glam::Mat4;

use crate::actor::{Label, LabelPlacement};

/// Opaque identifier for a node in the host scene graph.
///
/// Handles are minted by the host; the core only stores and returns
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u32);

/// Narrow interface the label core drives the host engine through.
///
/// The core attaches actor meshes and labels under host-owned parents
/// and pushes placement updates as the camera moves; it never issues
/// raw draw calls. Billboard labels are attached under their actor's
/// node; screen-anchored labels under the host's overlay node, outside
/// the 3-D transform chain.
pub trait SceneGraph {
    /// Attach an actor mesh under `parent` with the given world
    /// transform and draw priority. Returns the handle of the new node.
    fn attach_actor(
        &mut self,
        parent: NodeHandle,
        world_transform: Mat4,
        render_order: i32,
    ) -> NodeHandle;

    /// Attach a label under `parent`, carrying its initial placement,
    /// draw priority, text, and colors. Returns the handle of the new
    /// node.
    fn attach_label(&mut self, parent: NodeHandle, label: &Label) -> NodeHandle;

    /// Push an updated placement for a previously attached label.
    fn update_label(&mut self, node: NodeHandle, placement: &LabelPlacement);
}
