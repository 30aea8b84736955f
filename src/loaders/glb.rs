use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::sync::Arc;

use crate::scene::{Drawable, Geometry, Material, Node, Scene};

/// Extensions offered by the file picker. Not a content check.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["glb"];

/// Whether `file_name` passes the picker's extension filter
pub fn accepts(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Decodes a binary glTF blob into a scene graph
///
/// The root is a group holding the default scene's (else the first scene's)
/// root nodes. A document without scenes yields an empty root. Images are
/// never decoded; materials only record whether a base color map is present.
pub fn import_glb(bytes: &[u8]) -> Result<Scene> {
    let gltf::Gltf { document, blob } =
        gltf::Gltf::from_slice(bytes).context("Failed to decode glTF data")?;
    let buffers =
        gltf::import_buffers(&document, None, blob).context("Failed to load glTF buffers")?;

    log::debug!(
        "glTF decoded: {} scenes, {} nodes, {} meshes, {} materials",
        document.scenes().len(),
        document.nodes().len(),
        document.meshes().len(),
        document.materials().len()
    );

    let materials = MaterialCache::new(&document);

    let Some(gltf_scene) = document.default_scene().or_else(|| document.scenes().next()) else {
        log::warn!("glTF document contains no scenes");
        return Ok(Scene::empty());
    };

    let mut root = Node::group();
    for node in gltf_scene.nodes() {
        root.children.push(convert_node(&node, &buffers, &materials));
    }

    Ok(Scene {
        name: gltf_scene.name().map(str::to_string),
        root,
    })
}

/// One shared `Material` per glTF material index, plus the default
struct MaterialCache {
    indexed: Vec<Arc<Material>>,
    default: Arc<Material>,
}

impl MaterialCache {
    fn new(document: &gltf::Document) -> Self {
        Self {
            indexed: document
                .materials()
                .map(|m| Arc::new(convert_material(&m)))
                .collect(),
            default: Arc::new(
                Material::default()
                    .with_color([1.0, 1.0, 1.0])
                    .with_roughness(1.0)
                    .with_metalness(1.0),
            ),
        }
    }

    fn get(&self, material: &gltf::Material) -> Arc<Material> {
        material
            .index()
            .and_then(|i| self.indexed.get(i))
            .unwrap_or(&self.default)
            .clone()
    }
}

fn convert_material(material: &gltf::Material) -> Material {
    let pbr = material.pbr_metallic_roughness();
    let [r, g, b, _a] = pbr.base_color_factor();

    Material {
        name: material.name().map(str::to_string),
        color: Some([r, g, b]),
        roughness: Some(pbr.roughness_factor()),
        metalness: Some(pbr.metallic_factor()),
        has_texture_map: pbr.base_color_texture().is_some(),
    }
}

fn convert_node(node: &gltf::Node, buffers: &[gltf::buffer::Data], materials: &MaterialCache) -> Node {
    let mut out = Node::group().with_transform(Mat4::from_cols_array_2d(&node.transform().matrix()));
    out.name = node.name().map(str::to_string);

    if let Some(mesh) = node.mesh() {
        let mut drawables: Vec<Drawable> = mesh
            .primitives()
            .map(|primitive| convert_primitive(&primitive, buffers, materials))
            .collect();

        // Single-primitive meshes sit on the node itself; otherwise one child per primitive
        if drawables.len() == 1 {
            out.drawable = drawables.pop();
        } else {
            for drawable in drawables {
                out.children.push(Node::mesh(drawable));
            }
        }
    }

    for child in node.children() {
        out.children.push(convert_node(&child, buffers, materials));
    }

    out
}

fn convert_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    materials: &MaterialCache,
) -> Drawable {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data.0[..]));

    let geometry = match reader.read_positions() {
        Some(positions) => Geometry::from_positions(positions.map(Vec3::from_array).collect()),
        None => {
            log::debug!("Primitive {} has no readable positions", primitive.index());
            Geometry::unreadable()
        }
    };

    Drawable::new(geometry, vec![materials.get(&primitive.material())])
}
