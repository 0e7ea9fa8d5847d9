/// GraphicsDevice trait - factory for hardware resources
///
/// Implemented by the platform backend. The renderer only ever reaches the
/// hardware through this trait and the command queue traits.

use crate::error::Result;
use super::buffer::{Buffer, BufferDesc, BufferView};
use super::pipeline::{ComputePipelineDesc, Function, FunctionDesc, Pipeline, RenderPipelineDesc};
use super::sampler::{DepthStencil, DepthStencilDesc, Sampler, SamplerDesc};
use super::texture::{Texture, TextureDesc, TextureViewDesc};

/// Hardware device
///
/// Every created resource is returned as an owning handle whose deleter
/// frees the native object once the last handle is gone.
pub trait GraphicsDevice: Send + Sync {
    /// Create a buffer
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Buffer>;

    /// Create a texture
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Texture>;

    /// Create a sampler
    fn create_sampler(&mut self, desc: &SamplerDesc) -> Result<Sampler>;

    /// Create a depth-stencil state
    fn create_depth_stencil(&mut self, desc: &DepthStencilDesc) -> Result<DepthStencil>;

    /// Look up a shader function in the default library
    fn create_function(&mut self, desc: &FunctionDesc) -> Result<Function>;

    /// Create a render pipeline
    fn create_render_pipeline(&mut self, desc: &RenderPipelineDesc) -> Result<Pipeline>;

    /// Create a compute pipeline
    ///
    /// The returned pipeline reports its `thread_execution_width` and
    /// `max_total_threads_per_threadgroup`.
    fn create_compute_pipeline(&mut self, desc: &ComputePipelineDesc) -> Result<Pipeline>;

    /// Copy `data` into a managed buffer at `offset` and flag the range as modified
    ///
    /// # Arguments
    ///
    /// * `buffer` - Destination buffer
    /// * `data` - Bytes to copy (`data.len()` is the size)
    /// * `offset` - Byte offset into the buffer
    fn fill_managed_buffer(&mut self, buffer: BufferView, data: &[u8], offset: u64) -> Result<()>;

    /// Create a view sharing the storage of `texture`, restricted to a mip/slice range
    ///
    /// The returned texture's descriptor describes the view (size of its
    /// base mip, its mip and slice counts).
    fn create_shared_texture_view(&mut self, texture: &Texture, desc: &TextureViewDesc) -> Result<Texture>;

    /// Reload the default shader library (hot reload)
    fn reload_default_library(&mut self) -> Result<()>;
}
