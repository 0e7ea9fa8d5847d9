/// Shader functions, render/compute pipeline descriptors and pipeline handles

use glam::UVec3;
use super::handle::{TypedHandle, TypedView};
use super::texture::TextureFormat;

// ===== FUNCTION =====

/// Descriptor for looking up a shader function in the default library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDesc {
    /// Entry point name (e.g. "bloom_prefilter")
    pub name: &'static str,
}

/// Owning shader function handle
pub type Function = TypedHandle<FunctionDesc>;

/// Non-owning shader function view
pub type FunctionView = TypedView<FunctionDesc>;

// ===== PIPELINE DESCRIPTORS =====

/// Descriptor for creating a render pipeline
#[derive(Debug, Clone, Copy)]
pub struct RenderPipelineDesc {
    pub label: &'static str,
    pub vertex_function: FunctionView,
    /// `None` for depth-only pipelines (shadow pass)
    pub fragment_function: Option<FunctionView>,
    pub color_format: Option<TextureFormat>,
    pub depth_format: Option<TextureFormat>,
}

/// Descriptor for creating a compute pipeline
#[derive(Debug, Clone, Copy)]
pub struct ComputePipelineDesc {
    pub label: &'static str,
    pub function: FunctionView,
}

// ===== PIPELINE =====

/// Kind of pipeline state object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    Render,
    Compute,
}

/// Immutable information reported by the device when a pipeline is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineInfo {
    pub kind: PipelineKind,
    pub label: &'static str,
    /// SIMD width of the compute pipeline (0 for render pipelines)
    pub thread_execution_width: u32,
    /// Upper bound of threads per threadgroup (0 for render pipelines)
    pub max_total_threads_per_threadgroup: u32,
}

impl PipelineInfo {
    /// 2D threadgroup size derived from the reported limits:
    /// `(width, max_total / width, 1)`
    pub fn threadgroup_size(&self) -> UVec3 {
        let width = self.thread_execution_width.max(1);
        let height = (self.max_total_threads_per_threadgroup / width).max(1);
        UVec3::new(width, height, 1)
    }
}

/// Owning pipeline handle
pub type Pipeline = TypedHandle<PipelineInfo>;

/// Non-owning pipeline view
pub type PipelineView = TypedView<PipelineInfo>;
