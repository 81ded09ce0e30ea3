pub mod camera;
pub mod core;
pub mod frame;
pub mod meshes;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use frame::{FrameDriver, FrameMatrices};
pub use scene::build_scene;
