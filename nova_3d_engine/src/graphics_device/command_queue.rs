/// Command queue and command contexts (render, compute, blit)
///
/// Contexts record commands for one pass and submit them with `commit()`.
/// Passes committed to the same queue execute in submission order.

use glam::UVec3;
use crate::error::Result;
use super::buffer::{BufferView, IndexType};
use super::pipeline::PipelineView;
use super::sampler::{DepthStencilView, SamplerView};
use super::texture::TextureView;

// ===== PASS DESCRIPTION =====

/// What happens to an attachment's contents when a pass begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    Load,
    Clear,
    DontCare,
}

/// Color attachment of a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAttachment {
    pub texture: TextureView,
    pub load: LoadAction,
    pub clear_color: [f32; 4],
}

/// Depth attachment of a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthAttachment {
    pub texture: TextureView,
    pub load: LoadAction,
    pub clear_depth: f32,
}

/// Attachments of a render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPassDesc {
    pub color_attachments: Vec<ColorAttachment>,
    pub depth_attachment: Option<DepthAttachment>,
    /// Number of layers rendered to (layered rendering into texture arrays)
    pub render_target_array_length: u32,
}

// ===== DRAW DESCRIPTION =====

/// Face culling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CullMode {
    None,
    Front,
    Back,
}

/// Rasterizer fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TriangleFillMode {
    Fill,
    Lines,
}

/// Parameters of a single draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawDesc {
    pub vertex_start: u32,
    pub vertex_count: u32,
    /// Indexed draw when set
    pub index_buffer: Option<BufferView>,
    pub index_count: u32,
    pub index_type: IndexType,
    pub instance_count: u32,
}

// ===== CONTEXTS =====

/// Records a render pass
pub trait RenderContext: Send {
    /// Begin encoding the pass
    fn begin(&mut self, pass: &RenderPassDesc) -> Result<()>;

    fn set_pipeline(&mut self, pipeline: PipelineView) -> Result<()>;
    fn set_depth_stencil(&mut self, state: DepthStencilView) -> Result<()>;

    fn set_vertex_buffer(&mut self, buffer: BufferView, offset: u64, index: u32) -> Result<()>;
    fn set_vertex_texture(&mut self, texture: TextureView, index: u32) -> Result<()>;
    fn set_vertex_sampler(&mut self, sampler: SamplerView, index: u32) -> Result<()>;

    fn set_fragment_buffer(&mut self, buffer: BufferView, offset: u64, index: u32) -> Result<()>;
    fn set_fragment_texture(&mut self, texture: TextureView, index: u32) -> Result<()>;
    fn set_fragment_sampler(&mut self, sampler: SamplerView, index: u32) -> Result<()>;

    fn set_triangle_fill_mode(&mut self, mode: TriangleFillMode) -> Result<()>;
    fn set_cull_mode(&mut self, mode: CullMode) -> Result<()>;

    /// Issue a draw call
    fn draw(&mut self, draw: &DrawDesc) -> Result<()>;

    /// Schedule presentation of `backbuffer` once this context's work completes
    fn present(&mut self, backbuffer: TextureView) -> Result<()>;

    /// End encoding and submit to the queue
    fn commit(&mut self) -> Result<()>;
}

/// Records compute dispatches
pub trait ComputeContext: Send {
    fn begin(&mut self) -> Result<()>;
    fn end(&mut self) -> Result<()>;

    fn set_pipeline(&mut self, pipeline: PipelineView) -> Result<()>;
    fn set_buffer(&mut self, buffer: BufferView, offset: u64, index: u32) -> Result<()>;
    fn set_texture(&mut self, texture: TextureView, index: u32) -> Result<()>;
    fn set_sampler(&mut self, sampler: SamplerView, index: u32) -> Result<()>;

    /// Dispatch `grid_size` threads in groups of `threadgroup_size`
    /// (partial edge groups allowed)
    fn dispatch_threads(&mut self, grid_size: UVec3, threadgroup_size: UVec3) -> Result<()>;

    /// Submit to the queue
    fn commit(&mut self) -> Result<()>;
}

/// Records copy operations
pub trait BlitContext: Send {
    /// Copy mip 0 / slice 0 of `source` into `destination` (same size and format)
    fn copy_texture(&mut self, source: TextureView, destination: TextureView) -> Result<()>;

    /// Submit to the queue
    fn commit(&mut self) -> Result<()>;
}

/// Queue producing command contexts
pub trait CommandQueue: Send + Sync {
    fn create_render_context(&self) -> Result<Box<dyn RenderContext>>;
    fn create_compute_context(&self) -> Result<Box<dyn ComputeContext>>;
    fn create_blit_context(&self) -> Result<Box<dyn BlitContext>>;
}
