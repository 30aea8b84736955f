pub mod scene;
pub mod store;

pub use scene::*;
pub use store::*;
