use glam::{Mat4, Vec3};
use std::sync::Arc;

use crate::math::AABB;
use crate::traits::SceneNode;

/// Surface description attached to drawables
///
/// Shared between drawables through `Arc`; two drawables reference the same
/// material iff their `Arc`s point at the same allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub name: Option<String>,
    /// Linear RGB base color
    pub color: Option<[f32; 3]>,
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
    pub has_texture_map: bool,
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = Some(roughness);
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = Some(metalness);
        self
    }

    pub fn with_texture_map(mut self, has_texture_map: bool) -> Self {
        self.has_texture_map = has_texture_map;
        self
    }
}

/// Vertex data of a drawable
///
/// `positions` is `None` when the position attribute could not be read.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub positions: Option<Vec<Vec3>>,
}

impl Geometry {
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self {
            positions: Some(positions),
        }
    }

    pub fn unreadable() -> Self {
        Self { positions: None }
    }

    pub fn position_count(&self) -> usize {
        self.positions.as_ref().map_or(0, Vec::len)
    }

    /// Recomputes the local bounding box from the current positions
    pub fn compute_bounds(&self) -> Option<AABB> {
        self.positions.as_ref().and_then(|p| AABB::from_points(p))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Drawable {
    pub geometry: Geometry,
    pub materials: Vec<Arc<Material>>,
}

impl Drawable {
    pub fn new(geometry: Geometry, materials: Vec<Arc<Material>>) -> Self {
        Self { geometry, materials }
    }
}

/// Scene graph node produced by the importer
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub name: Option<String>,
    pub transform: Mat4,
    pub drawable: Option<Drawable>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn group() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            ..Self::default()
        }
    }

    pub fn mesh(drawable: Drawable) -> Self {
        Self {
            drawable: Some(drawable),
            ..Self::group()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

impl SceneNode for Node {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn local_transform(&self) -> Mat4 {
        self.transform
    }

    fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }
}

/// A loaded model: a root group whose children are the model's top-level nodes
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: Option<String>,
    pub root: Node,
}

impl Scene {
    pub fn new(root: Node) -> Self {
        Self { name: None, root }
    }

    pub fn empty() -> Self {
        Self::new(Node::group())
    }
}
