/// Renderer module - scene-construction protocol and the forward renderer

// Module declarations
pub mod renderer;
pub mod sanitizer;
pub mod settings;
pub mod scene_data;
pub mod render_objects;
pub mod shadow;
pub mod framebuffer;
pub mod bloom_renderer;
pub mod forward_renderer;
mod shader_library;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use sanitizer::{SceneOperation, SceneSanitizer, SceneState};
pub use settings::{BloomSettings, RendererSettings, ToneMapping};
pub use scene_data::{
    DirectionalLight, PointLight, SkyLight, SpotLight, SceneData, RendererParameters,
    ShadowHeader, BloomParameters, MAX_LIGHTS_PER_KIND,
};
pub use render_objects::SceneRenderObjects;
pub use shadow::ShadowState;
pub use framebuffer::{BloomFramebuffer, Framebuffer};
pub use bloom_renderer::{BloomRenderer, BLOOM_DOWNSAMPLE_MIP_LEVELS, BLOOM_UPSAMPLE_MIP_LEVELS};
pub use forward_renderer::ForwardRenderer;
