pub mod assets;
pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod fireflies;
pub mod params;
pub mod scene;
pub mod viewport;

pub static BAKED_WGSL: &str = include_str!("../shaders/baked.wgsl");
pub static FLAT_WGSL: &str = include_str!("../shaders/flat.wgsl");
pub static PORTAL_WGSL: &str = include_str!("../shaders/portal.wgsl");
pub static FIREFLIES_WGSL: &str = include_str!("../shaders/fireflies.wgsl");

pub use camera::{Camera, OrbitCamera};
pub use clock::{FrameClock, LoopState, RenderLoop};
pub use color::Color;
pub use constants::*;
pub use fireflies::{bob_offset, point_size, Firefly, FireflyField};
pub use params::ShadingParams;
pub use scene::{BakedTexture, MeshData, NodeName, SceneError, SceneModel};
pub use viewport::Viewport;
