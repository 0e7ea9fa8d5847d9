/// Renderer trait - scene-construction protocol
///
/// Every frame follows the same cycle:
///
/// ```text
/// begin_scene(camera)
///     submit_mesh / submit_*_light  (any number, any order)
/// end_scene()                       (sort, clamp, shadow transforms, uploads)
/// draw(framebuffer, queue)          (zero or more times)
/// ```
///
/// Calls issued out of order return `Error::ProtocolViolation`.
///
/// `draw` is only legal between an `end_scene` and the next `begin_scene`:
/// `begin_scene` discards the last finalized scene, so a renderer that is
/// building a scene has nothing to draw. A build that fails (traversal
/// error or a failed `end_scene` upload) is dropped with `abort_scene`,
/// after which `draw` is rejected until the next completed build.
///
/// Concrete renderers are only ever reached through this trait.

use std::sync::{Arc, Mutex};
use glam::{Mat4, UVec2};
use crate::camera::Camera;
use crate::error::Result;
use crate::graphics_device::{CommandQueue, GraphicsDevice};
use crate::resource::{MaterialInstance, Mesh};
use super::framebuffer::Framebuffer;
use super::render_objects::SceneRenderObjects;
use super::sanitizer::SceneState;
use super::scene_data::{DirectionalLight, PointLight, SkyLight, SpotLight};
use super::settings::RendererSettings;

/// Scene renderer
pub trait Renderer: Send + Sync {
    /// Create the persistent device resources
    ///
    /// # Arguments
    ///
    /// * `device` - Device shared with the rest of the application
    fn init(&mut self, device: Arc<Mutex<dyn GraphicsDevice>>) -> Result<()>;

    /// Current position in the scene-construction cycle
    fn state(&self) -> SceneState;

    /// Start a new scene: snapshot `camera` and clear per-frame data
    fn begin_scene(&mut self, camera: &Camera) -> Result<()>;

    /// Add one object to the scene being built
    ///
    /// # Arguments
    ///
    /// * `mesh` - Geometry to draw
    /// * `material` - Render state and shader inputs
    /// * `transform` - World transform
    fn submit_mesh(&mut self, mesh: &Mesh, material: &MaterialInstance, transform: Mat4) -> Result<()>;

    fn submit_point_light(&mut self, light: &PointLight) -> Result<()>;

    fn submit_spot_light(&mut self, light: &SpotLight) -> Result<()>;

    fn submit_directional_light(&mut self, light: &DirectionalLight) -> Result<()>;

    fn submit_sky_light(&mut self, light: &SkyLight) -> Result<()>;

    /// Finalize the scene (sorting, light clamping, shadow cascades, uploads)
    fn end_scene(&mut self) -> Result<()>;

    /// Drop the scene being built
    ///
    /// Leaves the renderer ready for a new `begin_scene` with no drawable
    /// scene. `end_scene` does this itself when its upload fails.
    fn abort_scene(&mut self) -> Result<()>;

    /// Render the last finalized scene into `framebuffer`
    fn draw(&mut self, framebuffer: &Framebuffer, queue: &dyn CommandQueue) -> Result<()>;

    /// Allocate the render targets for an output of `size` pixels
    fn create_framebuffer(&mut self, size: UVec2) -> Result<Framebuffer>;

    fn settings(&self) -> &RendererSettings;

    /// Apply settings; takes effect from the next `end_scene`/`draw`
    fn set_settings(&mut self, settings: RendererSettings) -> Result<()>;

    /// Reload the shader library and rebuild every pipeline
    fn reload_shaders(&mut self) -> Result<()>;

    /// Finalized objects of the last scene, for renderers that keep them
    ///
    /// Lets decorators (selection overlays, debug views) inspect what was
    /// submitted without knowing the concrete renderer.
    fn scene_objects(&self) -> Option<&SceneRenderObjects> {
        None
    }
}
