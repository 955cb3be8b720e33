pub mod camera;
pub mod context;
pub mod driver;
pub mod gpu;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod viewport;

pub use context::SceneContext;
pub use driver::{FrameDriver, RenderTarget};
pub use viewport::Viewport;
