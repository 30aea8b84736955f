use glam::Mat4;

use crate::scene::Drawable;

/// Read-only view of one node in a loaded scene graph
///
/// The extractor only ever walks a graph through this trait, so any tree
/// shape (the importer's `scene::Node`, or a synthetic graph in tests) can be
/// inspected without being converted first.
pub trait SceneNode: Sized {
    /// Direct children in stored order
    fn children(&self) -> &[Self];

    /// Transform relative to the parent node
    fn local_transform(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// Geometry and materials attached to this node, if any
    fn drawable(&self) -> Option<&Drawable>;
}
