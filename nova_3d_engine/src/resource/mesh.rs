/// Resource-level mesh type.
///
/// A Mesh groups the GPU buffers needed to draw one piece of geometry:
/// a vertex buffer, an optional index buffer and the element counts.
///
/// Meshes are compared by the buffers they reference, never by address,
/// so the main pass can detect "mesh changed" between consecutive draws
/// with a plain equality test.

use std::sync::Arc;
use crate::error::Result;
use crate::engine_bail;
use crate::graphics_device::{Buffer, BufferUsage, DrawDesc, IndexType, NativeHandle};

// ===== DESCRIPTOR =====

/// Descriptor for creating a Mesh
pub struct MeshDesc {
    pub name: String,
    pub vertex_buffer: Buffer,
    pub vertex_count: u32,
    /// Indexed drawing when set
    pub index_buffer: Option<Buffer>,
    pub index_count: u32,
    pub index_type: IndexType,
}

/// Ordering key grouping draws that share the same buffers
pub type MeshKey = (Option<NativeHandle>, Option<NativeHandle>);

// ===== MESH =====

/// Drawable geometry (cheap to clone: buffers are shared handles)
#[derive(Clone, Debug)]
pub struct Mesh {
    name: Arc<str>,
    vertex_buffer: Buffer,
    vertex_count: u32,
    index_buffer: Option<Buffer>,
    index_count: u32,
    index_type: IndexType,
}

impl Mesh {
    /// Create a mesh, validating buffer usage and element counts
    pub fn from_desc(desc: MeshDesc) -> Result<Self> {
        if !desc.vertex_buffer.is_valid() {
            engine_bail!("nova3d::Mesh", "Mesh '{}': vertex buffer is null", desc.name);
        }
        if !desc.vertex_buffer.desc().usage.contains(BufferUsage::VERTEX) {
            engine_bail!("nova3d::Mesh", "Mesh '{}': vertex buffer lacks VERTEX usage", desc.name);
        }
        if desc.vertex_count == 0 {
            engine_bail!("nova3d::Mesh", "Mesh '{}': vertex_count is 0", desc.name);
        }
        if let Some(index_buffer) = &desc.index_buffer {
            if !index_buffer.desc().usage.contains(BufferUsage::INDEX) {
                engine_bail!("nova3d::Mesh", "Mesh '{}': index buffer lacks INDEX usage", desc.name);
            }
            if desc.index_count == 0 {
                engine_bail!("nova3d::Mesh", "Mesh '{}': index buffer given with index_count 0", desc.name);
            }
        }

        Ok(Self {
            name: desc.name.into(),
            vertex_buffer: desc.vertex_buffer,
            vertex_count: desc.vertex_count,
            index_buffer: desc.index_buffer,
            index_count: desc.index_count,
            index_type: desc.index_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_buffer(&self) -> &Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> Option<&Buffer> {
        self.index_buffer.as_ref()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Sort key: underlying vertex and index buffers
    pub fn key(&self) -> MeshKey {
        (self.vertex_buffer.native(), self.index_buffer.as_ref().and_then(|b| b.native()))
    }

    /// Draw description for `instance_count` instances of the whole mesh
    pub fn draw_desc(&self, instance_count: u32) -> DrawDesc {
        DrawDesc {
            vertex_start: 0,
            vertex_count: self.vertex_count,
            index_buffer: self.index_buffer.as_ref().map(|b| b.view()),
            index_count: self.index_count,
            index_type: self.index_type,
            instance_count,
        }
    }
}

impl PartialEq for Mesh {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Mesh {}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
