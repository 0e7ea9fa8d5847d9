/// Sampler and depth-stencil state descriptors

use super::handle::{TypedHandle, TypedView};

/// Comparison function for depth tests and comparison samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareFunction {
    Never,
    Less,
    LessEqual,
    Greater,
    Always,
}

/// Texel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Behavior outside [0, 1] texture coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    ClampToEdge,
    Repeat,
    ClampToBorder,
}

/// Descriptor for creating a sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerDesc {
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub mip_filter: FilterMode,
    pub address_mode: AddressMode,
    /// Set for shadow-map comparison samplers
    pub compare: Option<CompareFunction>,
}

impl SamplerDesc {
    /// Bilinear clamp-to-edge sampler
    pub fn linear_clamp() -> Self {
        Self {
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            mip_filter: FilterMode::Nearest,
            address_mode: AddressMode::ClampToEdge,
            compare: None,
        }
    }
}

/// Owning sampler handle
pub type Sampler = TypedHandle<SamplerDesc>;

/// Non-owning sampler view
pub type SamplerView = TypedView<SamplerDesc>;

/// Descriptor for creating a depth-stencil state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStencilDesc {
    pub depth_compare: CompareFunction,
    pub depth_write_enabled: bool,
}

/// Owning depth-stencil state handle
pub type DepthStencil = TypedHandle<DepthStencilDesc>;

/// Non-owning depth-stencil state view
pub type DepthStencilView = TypedView<DepthStencilDesc>;
