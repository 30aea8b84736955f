//! Display projection of the current file and its scene metadata

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::extract::{MaterialDescriptor, MetadataSnapshot};
use crate::math::AABB;
use crate::resource::FileDescriptor;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const NO_DIMENSIONS: &str = "N/A";

/// Scene-derived half of the view model, present once the load completed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub material_count: usize,
    pub material_descriptors: Vec<MaterialDescriptor>,
    pub vertex_count: String,
    pub dimensions: String,
}

impl SceneSummary {
    pub fn from_snapshot(snapshot: MetadataSnapshot) -> Self {
        Self {
            material_count: snapshot.material_count,
            vertex_count: format_count(snapshot.vertex_count),
            dimensions: format_dimensions(snapshot.bounding_volume.as_ref()),
            material_descriptors: snapshot.material_descriptors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub file_name: String,
    pub file_size: String,
    pub last_modified: String,
    pub scene: Option<SceneSummary>,
}

impl ViewModel {
    pub fn for_file(file: &FileDescriptor) -> Self {
        Self {
            file_name: file.name.clone(),
            file_size: format_file_size(file.size_bytes),
            last_modified: format_timestamp(&file.last_modified),
            scene: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.scene.is_none()
    }

    pub fn materials_label(&self) -> String {
        self.scene
            .as_ref()
            .map_or_else(|| LOADING_PLACEHOLDER.to_string(), |s| s.material_count.to_string())
    }

    pub fn vertices_label(&self) -> &str {
        self.scene.as_ref().map_or(LOADING_PLACEHOLDER, |s| s.vertex_count.as_str())
    }

    pub fn dimensions_label(&self) -> &str {
        self.scene.as_ref().map_or(LOADING_PLACEHOLDER, |s| s.dimensions.as_str())
    }

    pub fn material_descriptors(&self) -> &[MaterialDescriptor] {
        self.scene
            .as_ref()
            .map_or(&[][..], |s| s.material_descriptors.as_slice())
    }
}

/// `12.35 MB` style, binary megabytes with two decimals
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Local time as `3/14/2024, 9:05:00 AM`
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Decimal with comma thousands separators
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Max corner of the bounding volume, `x x y x z` with two decimals
pub fn format_dimensions(bounds: Option<&AABB>) -> String {
    match bounds {
        Some(b) => format!("{:.2} x {:.2} x {:.2}", b.max.x, b.max.y, b.max.z),
        None => NO_DIMENSIONS.to_string(),
    }
}

/// Two-decimal factor, as shown for roughness and metalness
pub fn format_factor(value: f32) -> String {
    format!("{:.2}", value)
}

pub fn format_yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
