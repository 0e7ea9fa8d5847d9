/// Scene submission - feeds a Scene through the Renderer protocol
///
/// `SceneSubmitter::submit_scene` walks the entities once per frame:
/// every entity with a transform and a complete mesh renderer becomes a
/// `submit_mesh`, every entity with a transform and a light becomes the
/// matching `submit_*_light`. Implementations add their own submissions
/// in `submit_extra`, which runs after the base traversal.
///
/// The submitter owns no GPU state. Callers bracket the traversal with
/// `begin_scene` / `end_scene` (see `Viewport::render`).

use rustc_hash::FxHashSet;
use crate::engine_trace;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::resource::MaterialInstance;
use super::entity::{EntityKey, WorldLight};
use super::scene::SceneGuard;

/// Strategy for turning a scene into renderer submissions
pub trait SceneSubmitter: Send + Sync {
    /// Submit every drawable entity and light, then `submit_extra`
    fn submit_scene(&self, scene: &SceneGuard<'_>, renderer: &mut dyn Renderer) -> Result<()> {
        let mut meshes = 0usize;
        let mut lights = 0usize;

        for (_, entity) in scene.iter() {
            let Some(transform) = entity.transform else {
                continue;
            };

            if let Some((mesh, material)) =
                entity.mesh_renderer.as_ref().and_then(|r| r.drawable())
            {
                renderer.submit_mesh(mesh, material, transform)?;
                meshes += 1;
            }

            if let Some(light) = &entity.light {
                match light.to_world(&transform) {
                    WorldLight::Point(l) => renderer.submit_point_light(&l)?,
                    WorldLight::Spot(l) => renderer.submit_spot_light(&l)?,
                    WorldLight::Directional(l) => renderer.submit_directional_light(&l)?,
                    WorldLight::Sky(l) => renderer.submit_sky_light(&l)?,
                }
                lights += 1;
            }
        }

        engine_trace!(
            "nova3d::SceneSubmitter",
            "Submitted {} meshes and {} lights from {} entities",
            meshes,
            lights,
            scene.len()
        );

        self.submit_extra(scene, renderer)
    }

    /// Additional submissions after the base traversal
    fn submit_extra(&self, _scene: &SceneGuard<'_>, _renderer: &mut dyn Renderer) -> Result<()> {
        Ok(())
    }
}

/// Plain traversal with no extra submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSubmitter;

impl DefaultSubmitter {
    pub fn new() -> Self {
        Self
    }
}

impl SceneSubmitter for DefaultSubmitter {}

/// Resubmits selected entities with a highlight material
///
/// The highlight pass draws the same mesh and transform a second time, so
/// the highlight material is expected to render on top (e.g. wireframe
/// fill mode or a depth test of LessEqual).
pub struct SelectionHighlighter {
    selection: FxHashSet<EntityKey>,
    highlight: MaterialInstance,
}

impl SelectionHighlighter {
    pub fn new(highlight: MaterialInstance) -> Self {
        Self {
            selection: FxHashSet::default(),
            highlight,
        }
    }

    /// Add `key` to the selection. Returns false if it was already selected.
    pub fn select(&mut self, key: EntityKey) -> bool {
        self.selection.insert(key)
    }

    /// Remove `key` from the selection. Returns false if it was not selected.
    pub fn deselect(&mut self, key: EntityKey) -> bool {
        self.selection.remove(&key)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, key: EntityKey) -> bool {
        self.selection.contains(&key)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn highlight(&self) -> &MaterialInstance {
        &self.highlight
    }

    pub fn set_highlight(&mut self, highlight: MaterialInstance) {
        self.highlight = highlight;
    }
}

impl SceneSubmitter for SelectionHighlighter {
    fn submit_extra(&self, scene: &SceneGuard<'_>, renderer: &mut dyn Renderer) -> Result<()> {
        if self.selection.is_empty() {
            return Ok(());
        }

        // Scene order keeps the submissions deterministic; stale keys are skipped
        for (key, entity) in scene.iter() {
            if !self.selection.contains(&key) {
                continue;
            }
            let (Some(transform), Some(renderer_component)) =
                (entity.transform, entity.mesh_renderer.as_ref())
            else {
                continue;
            };
            if let Some(mesh) = &renderer_component.mesh {
                renderer.submit_mesh(mesh, &self.highlight, transform)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "submitter_tests.rs"]
mod tests;
