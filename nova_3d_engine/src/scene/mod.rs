//! Scene module
//!
//! A minimal entity store and the adapter that feeds it through the
//! Renderer protocol each frame, plus the Viewport that owns the
//! framebuffer a frame is rendered into.

mod entity;
mod scene;
mod submitter;
mod viewport;

pub use entity::{
    Entity, EntityKey, LightComponent, MeshRendererComponent, WorldLight,
};
pub use scene::{Scene, SceneGuard};
pub use submitter::{DefaultSubmitter, SceneSubmitter, SelectionHighlighter};
pub use viewport::Viewport;
