/// Texture descriptor, texture view descriptor and typed texture handles

use bitflags::bitflags;
use glam::UVec2;
use super::buffer::StorageMode;
use super::handle::{TypedHandle, TypedView};

/// Pixel format of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
    B8G8R8A8_UNORM,
    R16G16B16A16_SFLOAT,
    R32G32B32A32_SFLOAT,
    D32_FLOAT,
}

impl TextureFormat {
    /// Whether the format is a depth format
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D32_FLOAT)
    }
}

/// Texture dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureType {
    Tex2D,
    Tex2DArray,
}

bitflags! {
    /// How a texture is accessed
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextureUsage: u32 {
        const SHADER_READ   = 1 << 0;
        const SHADER_WRITE  = 1 << 1;
        const RENDER_TARGET = 1 << 2;
        /// Allows per-mip / per-slice views with `create_shared_texture_view`
        const PIXEL_FORMAT_VIEW = 1 << 3;
    }
}

/// Descriptor for creating a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDesc {
    pub texture_type: TextureType,
    pub format: TextureFormat,
    pub width: u32,
    pub height: u32,
    /// Number of slices (1 for plain 2D textures)
    pub array_length: u32,
    pub mip_levels: u32,
    pub usage: TextureUsage,
    pub storage_mode: StorageMode,
}

impl TextureDesc {
    /// Private single-mip 2D texture
    pub fn new_2d(format: TextureFormat, size: UVec2, usage: TextureUsage) -> Self {
        Self {
            texture_type: TextureType::Tex2D,
            format,
            width: size.x,
            height: size.y,
            array_length: 1,
            mip_levels: 1,
            usage,
            storage_mode: StorageMode::Private,
        }
    }

    /// Size of mip 0
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Size of `level`, halved per level and rounded down (never below 1)
    pub fn mip_size(&self, level: u32) -> UVec2 {
        mip_size(self.size(), level)
    }
}

/// Halve `size` `level` times, rounding down and clamping to 1
pub fn mip_size(size: UVec2, level: u32) -> UVec2 {
    UVec2::new((size.x >> level).max(1), (size.y >> level).max(1))
}

/// Sub-range of a texture exposed by `create_shared_texture_view`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureViewDesc {
    pub texture_type: TextureType,
    pub format: TextureFormat,
    pub base_mip: u32,
    pub mip_count: u32,
    pub base_slice: u32,
    pub slice_count: u32,
}

impl TextureViewDesc {
    /// View of a single mip level of a 2D texture
    pub fn single_mip(format: TextureFormat, mip: u32) -> Self {
        Self {
            texture_type: TextureType::Tex2D,
            format,
            base_mip: mip,
            mip_count: 1,
            base_slice: 0,
            slice_count: 1,
        }
    }
}

/// Owning texture handle
pub type Texture = TypedHandle<TextureDesc>;

/// Non-owning texture view
pub type TextureView = TypedView<TextureDesc>;

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
