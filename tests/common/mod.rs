#![allow(dead_code)]

use chrono::DateTime;
use glb_viewer::FileSelection;

const GLB_MAGIC: u32 = 0x4654_6C67;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

/// Packs a glTF JSON document and its binary buffer into a GLB container
///
/// An empty `bin` omits the BIN chunk.
pub fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let mut bin_bytes = bin.to_vec();
    while bin_bytes.len() % 4 != 0 {
        bin_bytes.push(0);
    }

    let bin_chunk = if bin_bytes.is_empty() { 0 } else { 8 + bin_bytes.len() };
    let total = 12 + 8 + json_bytes.len() + bin_chunk;
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());

    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(&json_bytes);

    if !bin_bytes.is_empty() {
        out.extend_from_slice(&(bin_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        out.extend_from_slice(&bin_bytes);
    }
    out
}

pub fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Unit right triangle in the XY plane: (0,0,0) (1,0,0) (0,1,0)
pub fn triangle_positions() -> Vec<u8> {
    f32_bytes(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
}

/// Two root nodes share material 0, a nested child uses material 1, and the
/// second root is translated by +2 on X.
pub fn two_material_glb() -> Vec<u8> {
    let json = r##"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [ { "name": "Main", "nodes": [0, 1] } ],
        "nodes": [
            { "name": "Left", "mesh": 0 },
            { "name": "Right", "mesh": 0, "translation": [2.0, 0.0, 0.0], "children": [2] },
            { "name": "Nested", "mesh": 1, "translation": [0.0, 0.0, 3.0] }
        ],
        "meshes": [
            { "primitives": [ { "attributes": { "POSITION": 0 }, "material": 0 } ] },
            { "primitives": [ { "attributes": { "POSITION": 0 }, "material": 1 } ] }
        ],
        "materials": [
            { "name": "Shared", "pbrMetallicRoughness": { "roughnessFactor": 0.4, "metallicFactor": 0.1 } },
            { "name": "Red", "pbrMetallicRoughness": { "baseColorFactor": [1.0, 0.0, 0.0, 1.0] } }
        ],
        "buffers": [ { "byteLength": 36 } ],
        "bufferViews": [ { "buffer": 0, "byteOffset": 0, "byteLength": 36 } ],
        "accessors": [
            {
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            }
        ]
    }"##;
    glb(json, &triangle_positions())
}

/// One node whose mesh has two primitives, neither with a material
pub fn multi_primitive_glb() -> Vec<u8> {
    let json = r##"{
        "asset": { "version": "2.0" },
        "scenes": [ { "nodes": [0] } ],
        "nodes": [ { "mesh": 0 } ],
        "meshes": [
            { "primitives": [
                { "attributes": { "POSITION": 0 } },
                { "attributes": { "POSITION": 0 } }
            ] }
        ],
        "buffers": [ { "byteLength": 36 } ],
        "bufferViews": [ { "buffer": 0, "byteOffset": 0, "byteLength": 36 } ],
        "accessors": [
            {
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            }
        ]
    }"##;
    glb(json, &triangle_positions())
}

/// One triangle whose material's base color map points at bytes that are not
/// a decodable image
pub fn undecodable_texture_glb() -> Vec<u8> {
    let json = r##"{
        "asset": { "version": "2.0" },
        "scenes": [ { "nodes": [0] } ],
        "nodes": [ { "name": "Textured", "mesh": 0 } ],
        "meshes": [
            { "primitives": [ { "attributes": { "POSITION": 0 }, "material": 0 } ] }
        ],
        "materials": [
            { "name": "Painted", "pbrMetallicRoughness": { "baseColorTexture": { "index": 0 } } }
        ],
        "textures": [ { "source": 0 } ],
        "images": [ { "bufferView": 1, "mimeType": "image/png" } ],
        "buffers": [ { "byteLength": 44 } ],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 8 }
        ],
        "accessors": [
            {
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            }
        ]
    }"##;
    let mut bin = triangle_positions();
    bin.extend_from_slice(b"notapng!");
    glb(json, &bin)
}

/// Valid document with a scene but no nodes
pub fn empty_scene_glb() -> Vec<u8> {
    let json = r##"{
        "asset": { "version": "2.0" },
        "scenes": [ { "nodes": [] } ]
    }"##;
    glb(json, &[])
}

pub fn selection(name: &str, bytes: Vec<u8>) -> FileSelection {
    FileSelection::new(name, bytes, DateTime::from_timestamp(1_700_000_000, 0).unwrap())
}
