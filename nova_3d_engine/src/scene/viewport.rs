/// Viewport - caller-side owner of a Framebuffer
///
/// The viewport keeps one framebuffer alive across frames and recreates it
/// only when the requested size changes. `render` drives one full frame
/// through the Renderer protocol, `present` hands the result to a
/// backbuffer.

use glam::UVec2;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::graphics_device::{CommandQueue, TextureView};
use crate::renderer::{Framebuffer, Renderer};
use crate::{engine_bail, engine_debug};
use super::scene::Scene;
use super::submitter::SceneSubmitter;

pub struct Viewport {
    size: UVec2,
    framebuffer: Option<Framebuffer>,
}

impl Viewport {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            framebuffer: None,
        }
    }

    /// Requested output size in pixels
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Request a new output size. The framebuffer is rebuilt on the next
    /// `render` only if the size actually changed.
    pub fn resize(&mut self, size: UVec2) {
        self.size = size;
    }

    /// Framebuffer of the last rendered frame
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    fn ensure_framebuffer(&mut self, renderer: &mut dyn Renderer) -> Result<&Framebuffer> {
        let framebuffer = match self.framebuffer.take() {
            Some(framebuffer) if framebuffer.size() == self.size => framebuffer,
            _ => {
                engine_debug!(
                    "nova3d::Viewport",
                    "Creating framebuffer {}x{}",
                    self.size.x,
                    self.size.y
                );
                renderer.create_framebuffer(self.size)?
            }
        };
        Ok(self.framebuffer.insert(framebuffer))
    }

    /// Render one frame of `scene` seen from `camera`
    ///
    /// The scene stays locked only for the traversal; `end_scene` and
    /// `draw` run after the lock is released. A failed traversal aborts the
    /// build, so the next call starts a fresh scene.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Initialized renderer
    /// * `scene` - Entities to draw
    /// * `submitter` - Traversal strategy (plain or decorated)
    /// * `camera` - Viewpoint
    /// * `queue` - Queue receiving the frame's passes
    pub fn render(
        &mut self,
        renderer: &mut dyn Renderer,
        scene: &Scene,
        submitter: &dyn SceneSubmitter,
        camera: &Camera,
        queue: &dyn CommandQueue,
    ) -> Result<()> {
        let framebuffer = self.ensure_framebuffer(renderer)?;

        renderer.begin_scene(camera)?;
        let traversal = match scene.lock() {
            Ok(guard) => submitter.submit_scene(&guard, renderer),
            Err(e) => Err(e),
        };
        if let Err(e) = traversal {
            renderer.abort_scene()?;
            return Err(e);
        }
        // A failed end_scene drops the build itself
        renderer.end_scene()?;
        renderer.draw(framebuffer, queue)
    }

    /// Copy the post-processed image into `backbuffer` and present it
    pub fn present(&self, backbuffer: TextureView, queue: &dyn CommandQueue) -> Result<()> {
        let framebuffer = self.framebuffer.as_ref().ok_or_else(|| {
            Error::InvalidResource("Viewport has no rendered frame to present".to_string())
        })?;

        if backbuffer.desc().size() != framebuffer.size() {
            engine_bail!(
                "nova3d::Viewport",
                "Backbuffer size {:?} does not match framebuffer size {:?}",
                backbuffer.desc().size(),
                framebuffer.size()
            );
        }

        let mut blit = queue.create_blit_context()?;
        blit.copy_texture(framebuffer.post_processed().view(), backbuffer)?;
        blit.commit()?;

        let mut context = queue.create_render_context()?;
        context.present(backbuffer)?;
        context.commit()
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
