/// Resource-level material types.
///
/// A Material fixes the render state of a surface: render pipeline,
/// depth-stencil state, cull mode and fill mode. Switching materials is
/// what forces the main pass to rebind pipeline state.
///
/// A MaterialInstance shares a Material and adds per-instance inputs
/// (parameter buffer, fragment textures).
///
/// Both compare by the resources they reference, not by address.

use std::sync::Arc;
use crate::error::Result;
use crate::engine_bail;
use crate::graphics_device::{
    Buffer, CullMode, DepthStencil, NativeHandle, Pipeline, PipelineKind, Texture,
    TriangleFillMode,
};

// ===== MATERIAL =====

/// Descriptor for creating a Material
pub struct MaterialDesc {
    pub name: String,
    pub pipeline: Pipeline,
    pub depth_stencil: DepthStencil,
    pub cull_mode: CullMode,
    pub fill_mode: TriangleFillMode,
}

/// Ordering key of a material's render state
pub type MaterialKey = (Option<NativeHandle>, Option<NativeHandle>, CullMode, TriangleFillMode);

/// Render state shared by many material instances
#[derive(Debug)]
pub struct Material {
    name: String,
    pipeline: Pipeline,
    depth_stencil: DepthStencil,
    cull_mode: CullMode,
    fill_mode: TriangleFillMode,
}

impl Material {
    /// Create a material; the pipeline must be a render pipeline
    pub fn from_desc(desc: MaterialDesc) -> Result<Self> {
        if !desc.pipeline.is_valid() {
            engine_bail!("nova3d::Material", "Material '{}': pipeline is null", desc.name);
        }
        if desc.pipeline.desc().kind != PipelineKind::Render {
            engine_bail!("nova3d::Material",
                "Material '{}': pipeline '{}' is not a render pipeline",
                desc.name, desc.pipeline.desc().label);
        }

        Ok(Self {
            name: desc.name,
            pipeline: desc.pipeline,
            depth_stencil: desc.depth_stencil,
            cull_mode: desc.cull_mode,
            fill_mode: desc.fill_mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn depth_stencil(&self) -> &DepthStencil {
        &self.depth_stencil
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    pub fn fill_mode(&self) -> TriangleFillMode {
        self.fill_mode
    }

    /// Sort key: pipeline, depth-stencil state, cull and fill mode
    pub fn key(&self) -> MaterialKey {
        (self.pipeline.native(), self.depth_stencil.native(), self.cull_mode, self.fill_mode)
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Material {}

// ===== MATERIAL INSTANCE =====

/// Material plus per-instance shader inputs
#[derive(Clone, Debug)]
pub struct MaterialInstance {
    material: Arc<Material>,
    parameters: Option<Buffer>,
    textures: Vec<Texture>,
}

impl MaterialInstance {
    pub fn new(material: Arc<Material>) -> Self {
        Self {
            material,
            parameters: None,
            textures: Vec::new(),
        }
    }

    /// Attach a parameter buffer (bound at fragment buffer slot 3)
    pub fn with_parameters(mut self, parameters: Buffer) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Append a fragment texture (bound from fragment texture slot 1 on)
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.textures.push(texture);
        self
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    pub fn parameters(&self) -> Option<&Buffer> {
        self.parameters.as_ref()
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }
}

impl PartialEq for MaterialInstance {
    fn eq(&self, other: &Self) -> bool {
        self.material == other.material
            && self.parameters == other.parameters
            && self.textures == other.textures
    }
}

impl Eq for MaterialInstance {}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
