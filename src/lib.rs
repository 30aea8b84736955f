pub mod cli;
pub mod core;
pub mod extract;
pub mod loaders;
pub mod math;
pub mod onboarding;
pub mod panel;
pub mod resource;
pub mod scene;
pub mod settings;
pub mod traits;
pub mod view_model;
pub mod viewer;

pub use extract::{extract, MaterialDescriptor, MetadataSnapshot};
pub use resource::{FileDescriptor, FileSelection, HandleId, ResourceManager, ResourceView};
pub use viewer::{ExpansionState, LoadOutcome, Viewer, ViewerState};
