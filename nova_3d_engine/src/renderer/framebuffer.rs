/// Render targets written during one frame
///
/// A Framebuffer is created by `Renderer::create_framebuffer` and owned by
/// the caller (usually a `Viewport`), which recreates it when the output
/// size changes.

use glam::UVec2;
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_err};
use crate::graphics_device::{GraphicsDevice, Texture, TextureDesc, TextureFormat, TextureUsage};

/// Depth target format
pub const DEPTH_FORMAT: TextureFormat = TextureFormat::D32_FLOAT;

/// Raw lit color and bloom pyramid format
pub const HDR_FORMAT: TextureFormat = TextureFormat::R16G16B16A16_SFLOAT;

/// Tone-mapped output format (matches the presentation backbuffer)
pub const OUTPUT_FORMAT: TextureFormat = TextureFormat::B8G8R8A8_UNORM;

// ===== BLOOM FRAMEBUFFER =====

/// Mip pyramids of the bloom effect
///
/// Both textures start at half the framebuffer size. Every mip is also
/// exposed as its own single-mip texture view.
#[derive(Debug)]
pub struct BloomFramebuffer {
    pub(crate) size: UVec2,
    pub(crate) downsample: Texture,
    pub(crate) upsample: Texture,
    pub(crate) downsample_mips: Vec<Texture>,
    pub(crate) upsample_mips: Vec<Texture>,
}

impl BloomFramebuffer {
    /// Size of mip 0 (half the framebuffer size)
    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn downsample(&self) -> &Texture {
        &self.downsample
    }

    pub fn upsample(&self) -> &Texture {
        &self.upsample
    }

    /// View of one downsample mip
    pub fn downsample_mip(&self, mip: usize) -> Option<&Texture> {
        self.downsample_mips.get(mip)
    }

    /// View of one upsample mip
    pub fn upsample_mip(&self, mip: usize) -> Option<&Texture> {
        self.upsample_mips.get(mip)
    }

    pub fn num_downsample_mips(&self) -> usize {
        self.downsample_mips.len()
    }

    pub fn num_upsample_mips(&self) -> usize {
        self.upsample_mips.len()
    }
}

// ===== FRAMEBUFFER =====

/// Depth, raw HDR color, post-processed color and the bloom pyramids
#[derive(Debug)]
pub struct Framebuffer {
    size: UVec2,
    depth: Texture,
    raw_color: Texture,
    post_processed: Texture,
    bloom: BloomFramebuffer,
}

impl Framebuffer {
    /// Allocate the frame targets around an already populated bloom framebuffer
    ///
    /// # Arguments
    ///
    /// * `device` - Device creating the textures
    /// * `size` - Output size in pixels (both components non-zero)
    /// * `bloom` - Bloom pyramids sized for `size`
    pub fn new(device: &mut dyn GraphicsDevice, size: UVec2, bloom: BloomFramebuffer) -> Result<Self> {
        if size.x == 0 || size.y == 0 {
            engine_bail!("nova3d::Framebuffer", "Framebuffer size must be non-zero, got {}x{}", size.x, size.y);
        }

        let depth = device
            .create_texture(&TextureDesc::new_2d(DEPTH_FORMAT, size, TextureUsage::RENDER_TARGET))
            .map_err(|e| engine_err!("nova3d::Framebuffer", "Failed to create depth texture: {}", e))?;
        let raw_color = device
            .create_texture(&TextureDesc::new_2d(
                HDR_FORMAT,
                size,
                TextureUsage::RENDER_TARGET | TextureUsage::SHADER_READ,
            ))
            .map_err(|e| engine_err!("nova3d::Framebuffer", "Failed to create raw color texture: {}", e))?;
        let post_processed = device
            .create_texture(&TextureDesc::new_2d(
                OUTPUT_FORMAT,
                size,
                TextureUsage::SHADER_WRITE | TextureUsage::SHADER_READ,
            ))
            .map_err(|e| engine_err!("nova3d::Framebuffer", "Failed to create post-processed texture: {}", e))?;

        engine_debug!("nova3d::Framebuffer", "Created {}x{} framebuffer", size.x, size.y);

        Ok(Self {
            size,
            depth,
            raw_color,
            post_processed,
            bloom,
        })
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn depth(&self) -> &Texture {
        &self.depth
    }

    /// Lit scene before postprocessing
    pub fn raw_color(&self) -> &Texture {
        &self.raw_color
    }

    /// Tone-mapped output, ready to be presented
    pub fn post_processed(&self) -> &Texture {
        &self.post_processed
    }

    pub fn bloom(&self) -> &BloomFramebuffer {
        &self.bloom
    }
}
