//! Camera module - passive camera data consumed by `Renderer::begin_scene`.
//!
//! The engine does NOT store or manage cameras. They are owned and driven
//! by the caller.

mod camera;

pub use camera::Camera;
