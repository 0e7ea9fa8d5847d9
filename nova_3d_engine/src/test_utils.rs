//! Shared helpers for unit tests

use std::sync::{Arc, Mutex};
use crate::log::{LogEntry, LogSeverity, Logger};

/// Logger that keeps every entry for later inspection
#[derive(Clone, Default)]
pub(crate) struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Entries of the given severity whose message contains `needle`
    pub(crate) fn count(&self, severity: LogSeverity, needle: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.severity == severity && e.message.contains(needle))
            .count()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// Resource fixtures (backed by MockGraphicsDevice)
// ============================================================================

use crate::graphics_device::{
    BufferDesc, BufferUsage, CompareFunction, CullMode, DepthStencilDesc, FunctionDesc,
    GraphicsDevice, IndexType, RenderPipelineDesc, StorageMode, TextureFormat,
    TriangleFillMode,
};
use crate::graphics_device::mock_graphics_device::MockGraphicsDevice;
use crate::resource::{Material, MaterialDesc, MaterialInstance, Mesh, MeshDesc};

fn geometry_buffer(device: &mut MockGraphicsDevice, size: u64, usage: BufferUsage) -> crate::graphics_device::Buffer {
    device
        .create_buffer(&BufferDesc { size, storage_mode: StorageMode::Managed, usage })
        .unwrap()
}

/// Non-indexed mesh with `vertex_count` vertices
pub(crate) fn test_mesh(device: &mut MockGraphicsDevice, name: &str, vertex_count: u32) -> Mesh {
    Mesh::from_desc(MeshDesc {
        name: name.to_string(),
        vertex_buffer: geometry_buffer(device, vertex_count as u64 * 32, BufferUsage::VERTEX),
        vertex_count,
        index_buffer: None,
        index_count: 0,
        index_type: IndexType::U32,
    })
    .unwrap()
}

/// Indexed mesh with `index_count` 32-bit indices
pub(crate) fn test_indexed_mesh(device: &mut MockGraphicsDevice, name: &str, vertex_count: u32, index_count: u32) -> Mesh {
    Mesh::from_desc(MeshDesc {
        name: name.to_string(),
        vertex_buffer: geometry_buffer(device, vertex_count as u64 * 32, BufferUsage::VERTEX),
        vertex_count,
        index_buffer: Some(geometry_buffer(device, index_count as u64 * 4, BufferUsage::INDEX)),
        index_count,
        index_type: IndexType::U32,
    })
    .unwrap()
}

/// Opaque material with its own pipeline and depth-stencil state
pub(crate) fn test_material(device: &mut MockGraphicsDevice, label: &'static str, cull_mode: CullMode) -> Arc<Material> {
    let vertex = device.create_function(&FunctionDesc { name: "lit_vertex" }).unwrap();
    let fragment = device.create_function(&FunctionDesc { name: "lit_fragment" }).unwrap();
    let pipeline = device
        .create_render_pipeline(&RenderPipelineDesc {
            label,
            vertex_function: vertex.view(),
            fragment_function: Some(fragment.view()),
            color_format: Some(TextureFormat::R16G16B16A16_SFLOAT),
            depth_format: Some(TextureFormat::D32_FLOAT),
        })
        .unwrap();
    let depth_stencil = device
        .create_depth_stencil(&DepthStencilDesc {
            depth_compare: CompareFunction::Less,
            depth_write_enabled: true,
        })
        .unwrap();
    Arc::new(
        Material::from_desc(MaterialDesc {
            name: label.to_string(),
            pipeline,
            depth_stencil,
            cull_mode,
            fill_mode: TriangleFillMode::Fill,
        })
        .unwrap(),
    )
}

/// Instance of `material` with a small parameter buffer
pub(crate) fn test_instance(device: &mut MockGraphicsDevice, material: &Arc<Material>) -> MaterialInstance {
    let parameters = device.create_buffer(&BufferDesc::uniform(64)).unwrap();
    MaterialInstance::new(material.clone()).with_parameters(parameters)
}
