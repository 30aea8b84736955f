pub mod glb;
pub mod task;

pub use glb::{accepts, import_glb, ACCEPTED_EXTENSIONS};
pub use task::{spawn_import, LoadCompletion, LoadTask};
