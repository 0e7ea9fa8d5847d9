/// Buffer descriptor and typed buffer handles

use bitflags::bitflags;
use super::handle::{TypedHandle, TypedView};

/// Where the backing memory of a resource lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// GPU-only memory
    Private,
    /// CPU copy synchronized to the GPU on `fill_managed_buffer`
    Managed,
    /// Memory visible to both CPU and GPU
    Shared,
}

bitflags! {
    /// How a buffer is bound
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BufferUsage: u32 {
        const VERTEX  = 1 << 0;
        const INDEX   = 1 << 1;
        const UNIFORM = 1 << 2;
        const STORAGE = 1 << 3;
    }
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Memory placement
    pub storage_mode: StorageMode,
    /// Binding usage
    pub usage: BufferUsage,
}

impl BufferDesc {
    /// Managed uniform buffer of `size` bytes
    pub fn uniform(size: u64) -> Self {
        Self {
            size,
            storage_mode: StorageMode::Managed,
            usage: BufferUsage::UNIFORM,
        }
    }

    /// Managed storage buffer of `size` bytes
    pub fn storage(size: u64) -> Self {
        Self {
            size,
            storage_mode: StorageMode::Managed,
            usage: BufferUsage::STORAGE,
        }
    }
}

/// Index element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U16,
    U32,
}

/// Owning buffer handle
pub type Buffer = TypedHandle<BufferDesc>;

/// Non-owning buffer view
pub type BufferView = TypedView<BufferDesc>;
