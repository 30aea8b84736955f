//! Scene metadata extraction
//!
//! Walks a scene graph once and derives the summary shown next to the
//! render: distinct materials, a vertex count and the bounding volume.

use glam::Mat4;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::math::AABB;
use crate::scene::Material;
use crate::traits::SceneNode;

pub const UNNAMED_MATERIAL: &str = "Unnamed Material";

/// Value copy of a material's display fields at extraction time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialDescriptor {
    pub name: String,
    pub color_hex: Option<String>,
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
    pub has_texture_map: bool,
}

impl MaterialDescriptor {
    pub fn from_material(material: &Material) -> Self {
        Self {
            name: material
                .name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(UNNAMED_MATERIAL)
                .to_string(),
            color_hex: material.color.map(color_hex),
            roughness: material.roughness,
            metalness: material.metalness,
            has_texture_map: material.has_texture_map,
        }
    }
}

/// Derived metadata of one loaded scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataSnapshot {
    pub material_count: usize,
    pub material_descriptors: Vec<MaterialDescriptor>,
    pub vertex_count: usize,
    pub bounding_volume: Option<AABB>,
}

/// Extracts a snapshot from the graph rooted at `root`
///
/// Materials and bounds come from a full depth-first walk. The vertex count
/// only sums the drawables attached to the root's direct children, so
/// geometry nested deeper is not counted.
pub fn extract<N: SceneNode>(root: &N) -> MetadataSnapshot {
    let mut walk = Walk::default();
    walk.visit(root, Mat4::IDENTITY);

    let vertex_count = root
        .children()
        .iter()
        .filter_map(|child| child.drawable())
        .map(|drawable| drawable.geometry.position_count())
        .sum();

    MetadataSnapshot {
        material_count: walk.seen.len(),
        material_descriptors: walk.descriptors,
        vertex_count,
        bounding_volume: walk.bounds,
    }
}

#[derive(Default)]
struct Walk {
    // Keyed by allocation address; identity, not structural equality
    seen: HashSet<*const Material>,
    descriptors: Vec<MaterialDescriptor>,
    bounds: Option<AABB>,
}

impl Walk {
    fn visit<N: SceneNode>(&mut self, node: &N, parent: Mat4) {
        let world = parent * node.local_transform();

        if let Some(drawable) = node.drawable() {
            for material in &drawable.materials {
                if self.seen.insert(Arc::as_ptr(material)) {
                    self.descriptors.push(MaterialDescriptor::from_material(material));
                }
            }

            if let Some(local) = drawable.geometry.compute_bounds() {
                let world_bounds = local.transformed(&world);
                self.bounds = Some(match self.bounds {
                    Some(b) => b.union(&world_bounds),
                    None => world_bounds,
                });
            }
        }

        for child in node.children() {
            self.visit(child, world);
        }
    }
}

/// `#rrggbb` for a linear RGB color, encoded to sRGB
pub fn color_hex(linear: [f32; 3]) -> String {
    let [r, g, b] = linear.map(|c| (linear_to_srgb(c) * 255.0).round() as u8);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn linear_to_srgb(c: f32) -> f32 {
    let c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    if c < 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
