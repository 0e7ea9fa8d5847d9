/// Mock GraphicsDevice and CommandQueue for unit tests (no GPU required)
///
/// Every created resource, deleted native handle, buffer fill and recorded
/// context command lands in a shared `MockLog`, so tests can assert on the
/// exact sequence of passes the renderer issues.

use std::sync::{Arc, Mutex};
use glam::{UVec2, UVec3};
use crate::error::{Error, Result};
use crate::engine_bail;
use crate::graphics_device::{
    GraphicsDevice, CommandQueue, RenderContext, ComputeContext, BlitContext,
    Buffer, BufferDesc, BufferView, Texture, TextureDesc, TextureView, TextureViewDesc,
    Sampler, SamplerDesc, SamplerView, DepthStencil, DepthStencilDesc, DepthStencilView,
    Function, FunctionDesc, Pipeline, PipelineInfo, PipelineKind, PipelineView,
    RenderPipelineDesc, ComputePipelineDesc, RenderPassDesc, DrawDesc,
    CullMode, TriangleFillMode, NativeHandle, ResourceHandle, TypedHandle, Deleter,
};

// ============================================================================
// Recorded data
// ============================================================================

/// Which kind of context issued a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockContextKind {
    Render,
    Compute,
    Blit,
}

/// One recorded context command
#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    BeginRenderPass {
        color: Vec<Option<NativeHandle>>,
        depth: Option<NativeHandle>,
        array_length: u32,
    },
    SetPipeline(&'static str),
    SetDepthStencil(Option<NativeHandle>),
    SetVertexBuffer { buffer: Option<NativeHandle>, offset: u64, index: u32 },
    SetFragmentBuffer { buffer: Option<NativeHandle>, offset: u64, index: u32 },
    SetVertexTexture { texture: Option<NativeHandle>, index: u32 },
    SetFragmentTexture { texture: Option<NativeHandle>, index: u32 },
    SetSampler { sampler: Option<NativeHandle>, index: u32 },
    SetFillMode(TriangleFillMode),
    SetCullMode(CullMode),
    Draw { vertex_count: u32, index_count: u32, indexed: bool, instance_count: u32 },
    Present(Option<NativeHandle>),
    BeginCompute,
    EndCompute,
    SetComputePipeline(&'static str),
    SetComputeBuffer { buffer: Option<NativeHandle>, index: u32 },
    SetComputeTexture { texture: Option<NativeHandle>, size: UVec2, index: u32 },
    Dispatch { grid: UVec3, threadgroup: UVec3 },
    CopyTexture { source: Option<NativeHandle>, destination: Option<NativeHandle> },
    Commit(MockContextKind),
}

/// Bytes written by `fill_managed_buffer`
#[derive(Debug, Clone)]
pub struct MockFill {
    pub buffer: Option<NativeHandle>,
    pub offset: u64,
    pub data: Vec<u8>,
}

/// Shared log of everything the mock device and queue saw
#[derive(Default)]
pub struct MockLog {
    next_native: u64,
    pub buffers: Vec<(NativeHandle, BufferDesc)>,
    pub textures: Vec<(NativeHandle, TextureDesc)>,
    pub texture_views: Vec<(NativeHandle, TextureDesc)>,
    pub samplers: u32,
    pub depth_stencils: u32,
    pub functions: Vec<&'static str>,
    pub render_pipelines: Vec<&'static str>,
    pub compute_pipelines: Vec<&'static str>,
    pub deleted: Vec<NativeHandle>,
    pub fills: Vec<MockFill>,
    pub commands: Vec<MockCommand>,
    pub library_reloads: u32,
    /// Function names whose lookup fails
    pub failing_functions: Vec<&'static str>,
    /// Make every `fill_managed_buffer` fail
    pub failing_fills: bool,
}

impl MockLog {
    fn allocate(&mut self) -> NativeHandle {
        self.next_native += 1;
        NativeHandle(self.next_native)
    }

    /// Number of recorded compute dispatches
    pub fn dispatch_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, MockCommand::Dispatch { .. })).count()
    }

    /// Number of recorded draw calls
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, MockCommand::Draw { .. })).count()
    }

    /// Latest fill of `buffer`
    pub fn last_fill(&self, buffer: Option<NativeHandle>) -> Option<&MockFill> {
        self.fills.iter().rev().find(|f| f.buffer == buffer)
    }

    /// Number of 2D-array textures created (shadow map arrays)
    pub fn texture_array_count(&self) -> usize {
        self.textures
            .iter()
            .filter(|(_, d)| d.texture_type == crate::graphics_device::TextureType::Tex2DArray)
            .count()
    }
}

fn deleter_for(log: &Arc<Mutex<MockLog>>) -> Deleter {
    let log = log.clone();
    Arc::new(move |native| log.lock().unwrap().deleted.push(native))
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// GraphicsDevice that allocates fake native handles
pub struct MockGraphicsDevice {
    log: Arc<Mutex<MockLog>>,
    pub thread_execution_width: u32,
    pub max_total_threads_per_threadgroup: u32,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(MockLog::default())),
            thread_execution_width: 32,
            max_total_threads_per_threadgroup: 1024,
        }
    }

    /// Shared log handle
    pub fn log(&self) -> Arc<Mutex<MockLog>> {
        self.log.clone()
    }

    /// Queue recording into the same log
    pub fn queue(&self) -> MockCommandQueue {
        MockCommandQueue { log: self.log.clone() }
    }

    fn handle<D: Copy>(&self, native: NativeHandle, desc: D) -> TypedHandle<D> {
        TypedHandle::new(ResourceHandle::with_deleter(native, deleter_for(&self.log)), desc)
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Buffer> {
        if desc.size == 0 {
            engine_bail!("nova3d::mock", "create_buffer: zero-sized buffer");
        }
        let native = {
            let mut log = self.log.lock().unwrap();
            let native = log.allocate();
            log.buffers.push((native, *desc));
            native
        };
        Ok(self.handle(native, *desc))
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Texture> {
        if desc.width == 0 || desc.height == 0 || desc.mip_levels == 0 || desc.array_length == 0 {
            engine_bail!("nova3d::mock", "create_texture: empty extent {:?}", desc);
        }
        let native = {
            let mut log = self.log.lock().unwrap();
            let native = log.allocate();
            log.textures.push((native, *desc));
            native
        };
        Ok(self.handle(native, *desc))
    }

    fn create_sampler(&mut self, desc: &SamplerDesc) -> Result<Sampler> {
        let native = {
            let mut log = self.log.lock().unwrap();
            log.samplers += 1;
            log.allocate()
        };
        Ok(self.handle(native, *desc))
    }

    fn create_depth_stencil(&mut self, desc: &DepthStencilDesc) -> Result<DepthStencil> {
        let native = {
            let mut log = self.log.lock().unwrap();
            log.depth_stencils += 1;
            log.allocate()
        };
        Ok(self.handle(native, *desc))
    }

    fn create_function(&mut self, desc: &FunctionDesc) -> Result<Function> {
        let native = {
            let mut log = self.log.lock().unwrap();
            if log.failing_functions.contains(&desc.name) {
                return Err(Error::InitializationFailed(format!("function '{}' not found", desc.name)));
            }
            log.functions.push(desc.name);
            log.allocate()
        };
        Ok(self.handle(native, *desc))
    }

    fn create_render_pipeline(&mut self, desc: &RenderPipelineDesc) -> Result<Pipeline> {
        let native = {
            let mut log = self.log.lock().unwrap();
            log.render_pipelines.push(desc.label);
            log.allocate()
        };
        Ok(self.handle(native, PipelineInfo {
            kind: PipelineKind::Render,
            label: desc.label,
            thread_execution_width: 0,
            max_total_threads_per_threadgroup: 0,
        }))
    }

    fn create_compute_pipeline(&mut self, desc: &ComputePipelineDesc) -> Result<Pipeline> {
        let native = {
            let mut log = self.log.lock().unwrap();
            log.compute_pipelines.push(desc.label);
            log.allocate()
        };
        Ok(self.handle(native, PipelineInfo {
            kind: PipelineKind::Compute,
            label: desc.label,
            thread_execution_width: self.thread_execution_width,
            max_total_threads_per_threadgroup: self.max_total_threads_per_threadgroup,
        }))
    }

    fn fill_managed_buffer(&mut self, buffer: BufferView, data: &[u8], offset: u64) -> Result<()> {
        if self.log.lock().unwrap().failing_fills {
            engine_bail!("nova3d::mock", "fill_managed_buffer: device lost");
        }
        if offset + data.len() as u64 > buffer.desc().size {
            engine_bail!("nova3d::mock",
                "fill_managed_buffer: {} bytes at offset {} overflow buffer of {} bytes",
                data.len(), offset, buffer.desc().size);
        }
        self.log.lock().unwrap().fills.push(MockFill {
            buffer: buffer.native(),
            offset,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn create_shared_texture_view(&mut self, texture: &Texture, desc: &TextureViewDesc) -> Result<Texture> {
        let base = *texture.desc();
        if desc.base_mip + desc.mip_count > base.mip_levels {
            engine_bail!("nova3d::mock",
                "create_shared_texture_view: mips {}..{} out of range (mip_levels = {})",
                desc.base_mip, desc.base_mip + desc.mip_count, base.mip_levels);
        }
        let size = base.mip_size(desc.base_mip);
        let view_desc = TextureDesc {
            texture_type: desc.texture_type,
            format: desc.format,
            width: size.x,
            height: size.y,
            array_length: desc.slice_count,
            mip_levels: desc.mip_count,
            usage: base.usage,
            storage_mode: base.storage_mode,
        };
        let native = {
            let mut log = self.log.lock().unwrap();
            let native = log.allocate();
            log.texture_views.push((native, view_desc));
            native
        };
        Ok(self.handle(native, view_desc))
    }

    fn reload_default_library(&mut self) -> Result<()> {
        self.log.lock().unwrap().library_reloads += 1;
        Ok(())
    }
}

// ============================================================================
// Mock CommandQueue and contexts
// ============================================================================

/// CommandQueue handing out recording contexts
pub struct MockCommandQueue {
    log: Arc<Mutex<MockLog>>,
}

impl CommandQueue for MockCommandQueue {
    fn create_render_context(&self) -> Result<Box<dyn RenderContext>> {
        Ok(Box::new(MockContext { log: self.log.clone() }))
    }

    fn create_compute_context(&self) -> Result<Box<dyn ComputeContext>> {
        Ok(Box::new(MockContext { log: self.log.clone() }))
    }

    fn create_blit_context(&self) -> Result<Box<dyn BlitContext>> {
        Ok(Box::new(MockContext { log: self.log.clone() }))
    }
}

/// Context appending every command to the shared log
pub struct MockContext {
    log: Arc<Mutex<MockLog>>,
}

impl MockContext {
    fn record(&mut self, command: MockCommand) -> Result<()> {
        self.log.lock().unwrap().commands.push(command);
        Ok(())
    }
}

impl RenderContext for MockContext {
    fn begin(&mut self, pass: &RenderPassDesc) -> Result<()> {
        self.record(MockCommand::BeginRenderPass {
            color: pass.color_attachments.iter().map(|a| a.texture.native()).collect(),
            depth: pass.depth_attachment.and_then(|a| a.texture.native()),
            array_length: pass.render_target_array_length,
        })
    }

    fn set_pipeline(&mut self, pipeline: PipelineView) -> Result<()> {
        self.record(MockCommand::SetPipeline(pipeline.desc().label))
    }

    fn set_depth_stencil(&mut self, state: DepthStencilView) -> Result<()> {
        self.record(MockCommand::SetDepthStencil(state.native()))
    }

    fn set_vertex_buffer(&mut self, buffer: BufferView, offset: u64, index: u32) -> Result<()> {
        self.record(MockCommand::SetVertexBuffer { buffer: buffer.native(), offset, index })
    }

    fn set_vertex_texture(&mut self, texture: TextureView, index: u32) -> Result<()> {
        self.record(MockCommand::SetVertexTexture { texture: texture.native(), index })
    }

    fn set_vertex_sampler(&mut self, sampler: SamplerView, index: u32) -> Result<()> {
        self.record(MockCommand::SetSampler { sampler: sampler.native(), index })
    }

    fn set_fragment_buffer(&mut self, buffer: BufferView, offset: u64, index: u32) -> Result<()> {
        self.record(MockCommand::SetFragmentBuffer { buffer: buffer.native(), offset, index })
    }

    fn set_fragment_texture(&mut self, texture: TextureView, index: u32) -> Result<()> {
        self.record(MockCommand::SetFragmentTexture { texture: texture.native(), index })
    }

    fn set_fragment_sampler(&mut self, sampler: SamplerView, index: u32) -> Result<()> {
        self.record(MockCommand::SetSampler { sampler: sampler.native(), index })
    }

    fn set_triangle_fill_mode(&mut self, mode: TriangleFillMode) -> Result<()> {
        self.record(MockCommand::SetFillMode(mode))
    }

    fn set_cull_mode(&mut self, mode: CullMode) -> Result<()> {
        self.record(MockCommand::SetCullMode(mode))
    }

    fn draw(&mut self, draw: &DrawDesc) -> Result<()> {
        self.record(MockCommand::Draw {
            vertex_count: draw.vertex_count,
            index_count: draw.index_count,
            indexed: draw.index_buffer.is_some(),
            instance_count: draw.instance_count,
        })
    }

    fn present(&mut self, backbuffer: TextureView) -> Result<()> {
        self.record(MockCommand::Present(backbuffer.native()))
    }

    fn commit(&mut self) -> Result<()> {
        self.record(MockCommand::Commit(MockContextKind::Render))
    }
}

impl ComputeContext for MockContext {
    fn begin(&mut self) -> Result<()> {
        self.record(MockCommand::BeginCompute)
    }

    fn end(&mut self) -> Result<()> {
        self.record(MockCommand::EndCompute)
    }

    fn set_pipeline(&mut self, pipeline: PipelineView) -> Result<()> {
        self.record(MockCommand::SetComputePipeline(pipeline.desc().label))
    }

    fn set_buffer(&mut self, buffer: BufferView, _offset: u64, index: u32) -> Result<()> {
        self.record(MockCommand::SetComputeBuffer { buffer: buffer.native(), index })
    }

    fn set_texture(&mut self, texture: TextureView, index: u32) -> Result<()> {
        self.record(MockCommand::SetComputeTexture {
            texture: texture.native(),
            size: texture.desc().size(),
            index,
        })
    }

    fn set_sampler(&mut self, sampler: SamplerView, index: u32) -> Result<()> {
        self.record(MockCommand::SetSampler { sampler: sampler.native(), index })
    }

    fn dispatch_threads(&mut self, grid_size: UVec3, threadgroup_size: UVec3) -> Result<()> {
        self.record(MockCommand::Dispatch { grid: grid_size, threadgroup: threadgroup_size })
    }

    fn commit(&mut self) -> Result<()> {
        self.record(MockCommand::Commit(MockContextKind::Compute))
    }
}

impl BlitContext for MockContext {
    fn copy_texture(&mut self, source: TextureView, destination: TextureView) -> Result<()> {
        self.record(MockCommand::CopyTexture {
            source: source.native(),
            destination: destination.native(),
        })
    }

    fn commit(&mut self) -> Result<()> {
        self.record(MockCommand::Commit(MockContextKind::Blit))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
