/// Bloom sub-renderer
///
/// Builds a glow pyramid from the raw HDR color with three compute kernels:
///
/// - **prefilter**: raw color -> downsample mip 0, soft-knee threshold
/// - **downsample**: downsample mip i -> downsample mip i+1
/// - **upsample**: tent-filtered combination of the next smaller level and
///   the matching downsample mip, from the bottom of the pyramid back to
///   upsample mip 0
///
/// All dispatches of a frame are recorded in order on one compute context;
/// the device serializes dependent dispatches.

use glam::{UVec2, UVec3};
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_err, engine_trace};
use crate::graphics_device::{
    Buffer, BufferDesc, CommandQueue, ComputeContext, GraphicsDevice, Pipeline, Sampler,
    SamplerDesc, Texture, TextureDesc, TextureUsage,
    TextureViewDesc, mip_size,
};
use super::framebuffer::{BloomFramebuffer, HDR_FORMAT};
use super::scene_data::BloomParameters;
use super::settings::BloomSettings;
use super::shader_library::compute_pipeline;

/// Mip levels of the downsample pyramid
pub const BLOOM_DOWNSAMPLE_MIP_LEVELS: u32 = 8;

/// Mip levels of the upsample pyramid
pub const BLOOM_UPSAMPLE_MIP_LEVELS: u32 = 7;

const PREFILTER_KERNEL: &str = "bloom_prefilter";
const DOWNSAMPLE_KERNEL: &str = "bloom_downsample";
const UPSAMPLE_KERNEL: &str = "bloom_upsample";

struct BloomPipelines {
    prefilter: Pipeline,
    downsample: Pipeline,
    upsample: Pipeline,
}

impl BloomPipelines {
    fn create(device: &mut dyn GraphicsDevice) -> Result<Self> {
        Ok(Self {
            prefilter: compute_pipeline(device, PREFILTER_KERNEL)?,
            downsample: compute_pipeline(device, DOWNSAMPLE_KERNEL)?,
            upsample: compute_pipeline(device, UPSAMPLE_KERNEL)?,
        })
    }
}

/// Owns the bloom pipelines, sampler and parameter buffer
pub struct BloomRenderer {
    settings: BloomSettings,
    pipelines: BloomPipelines,
    parameters: Buffer,
    sampler: Sampler,
}

fn upload_parameters(device: &mut dyn GraphicsDevice, buffer: &Buffer, settings: &BloomSettings) -> Result<()> {
    device
        .fill_managed_buffer(buffer.view(), bytemuck::bytes_of(&BloomParameters::from(settings)), 0)
        .map_err(|e| engine_err!("nova3d::BloomRenderer", "Failed to upload bloom parameters: {}", e))
}

impl BloomRenderer {
    /// Create pipelines and upload the initial parameters
    pub fn new(device: &mut dyn GraphicsDevice, settings: BloomSettings) -> Result<Self> {
        let pipelines = BloomPipelines::create(device)?;
        let parameters = device
            .create_buffer(&BufferDesc::uniform(std::mem::size_of::<BloomParameters>() as u64))
            .map_err(|e| engine_err!("nova3d::BloomRenderer", "Failed to create parameter buffer: {}", e))?;
        let sampler = device
            .create_sampler(&SamplerDesc::linear_clamp())
            .map_err(|e| engine_err!("nova3d::BloomRenderer", "Failed to create sampler: {}", e))?;

        upload_parameters(device, &parameters, &settings)?;
        Ok(Self { settings, pipelines, parameters, sampler })
    }

    pub fn settings(&self) -> &BloomSettings {
        &self.settings
    }

    /// Upload the prefilter curve derived from `settings`, then apply them
    ///
    /// The current settings are kept when the upload fails.
    pub fn set_settings(&mut self, device: &mut dyn GraphicsDevice, settings: BloomSettings) -> Result<()> {
        upload_parameters(device, &self.parameters, &settings)?;
        self.settings = settings;
        Ok(())
    }

    /// Recreate the compute pipelines after a shader library reload
    pub fn reload_pipelines(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.pipelines = BloomPipelines::create(device)?;
        Ok(())
    }

    /// Current prefilter inputs
    pub fn parameters(&self) -> BloomParameters {
        BloomParameters::from(&self.settings)
    }

    /// Allocate the bloom pyramids for a framebuffer of `framebuffer_size`
    ///
    /// Mip 0 of both textures is half the framebuffer size; every mip is
    /// exposed through a shared single-mip view.
    pub fn populate_framebuffer(&self, device: &mut dyn GraphicsDevice, framebuffer_size: UVec2) -> Result<BloomFramebuffer> {
        if framebuffer_size.x == 0 || framebuffer_size.y == 0 {
            engine_bail!("nova3d::BloomRenderer",
                "Cannot populate bloom framebuffer for a {}x{} target",
                framebuffer_size.x, framebuffer_size.y);
        }
        let size = mip_size(framebuffer_size, 1);

        let (downsample, downsample_mips) = create_pyramid(device, size, BLOOM_DOWNSAMPLE_MIP_LEVELS, "downsample")?;
        let (upsample, upsample_mips) = create_pyramid(device, size, BLOOM_UPSAMPLE_MIP_LEVELS, "upsample")?;

        engine_debug!("nova3d::BloomRenderer", "Bloom pyramids allocated at {}x{}", size.x, size.y);

        Ok(BloomFramebuffer {
            size,
            downsample,
            upsample,
            downsample_mips,
            upsample_mips,
        })
    }

    /// Record and commit the bloom passes reading `source`
    ///
    /// No-op when bloom is disabled: the pyramids keep their previous content.
    pub fn render(&self, source: &Texture, framebuffer: &BloomFramebuffer, queue: &dyn CommandQueue) -> Result<()> {
        if !self.settings.enabled {
            return Ok(());
        }
        if framebuffer.num_downsample_mips() != BLOOM_DOWNSAMPLE_MIP_LEVELS as usize
            || framebuffer.num_upsample_mips() != BLOOM_UPSAMPLE_MIP_LEVELS as usize
        {
            engine_bail!("nova3d::BloomRenderer",
                "Bloom framebuffer has {}/{} mips, expected {}/{}",
                framebuffer.num_downsample_mips(), framebuffer.num_upsample_mips(),
                BLOOM_DOWNSAMPLE_MIP_LEVELS, BLOOM_UPSAMPLE_MIP_LEVELS);
        }

        let ds = &framebuffer.downsample_mips;
        let us = &framebuffer.upsample_mips;
        let base = framebuffer.size;

        let mut context = queue.create_compute_context()?;
        context.begin()?;
        context.set_sampler(self.sampler.view(), 0)?;
        context.set_buffer(self.parameters.view(), 0, 0)?;

        // Prefilter
        context.set_pipeline(self.pipelines.prefilter.view())?;
        dispatch(&mut *context, &self.pipelines.prefilter, source, None, &ds[0], mip_size(base, 0))?;

        // Downsample
        context.set_pipeline(self.pipelines.downsample.view())?;
        for i in 0..ds.len() - 1 {
            dispatch(&mut *context, &self.pipelines.downsample, &ds[i], None, &ds[i + 1], mip_size(base, i as u32 + 1))?;
        }

        // Upsample: the smallest downsample mip seeds the chain
        context.set_pipeline(self.pipelines.upsample.view())?;
        let last = us.len() - 1;
        dispatch(&mut *context, &self.pipelines.upsample, &ds[last + 1], Some(&ds[last]), &us[last], mip_size(base, last as u32))?;
        for i in (0..last).rev() {
            dispatch(&mut *context, &self.pipelines.upsample, &us[i + 1], Some(&ds[i]), &us[i], mip_size(base, i as u32))?;
        }

        context.end()?;
        context.commit()?;

        engine_trace!("nova3d::BloomRenderer", "Bloom recorded ({} dispatches)", ds.len() + us.len());
        Ok(())
    }
}

/// One bloom texture with `mip_levels` mips plus one view per mip
fn create_pyramid(
    device: &mut dyn GraphicsDevice,
    size: UVec2,
    mip_levels: u32,
    name: &str,
) -> Result<(Texture, Vec<Texture>)> {
    let mut desc = TextureDesc::new_2d(
        HDR_FORMAT,
        size,
        TextureUsage::SHADER_READ | TextureUsage::SHADER_WRITE | TextureUsage::PIXEL_FORMAT_VIEW,
    );
    desc.mip_levels = mip_levels;

    let texture = device
        .create_texture(&desc)
        .map_err(|e| engine_err!("nova3d::BloomRenderer", "Failed to create {} texture: {}", name, e))?;

    let mut mips = Vec::with_capacity(mip_levels as usize);
    for mip in 0..mip_levels {
        let view = device
            .create_shared_texture_view(&texture, &TextureViewDesc::single_mip(HDR_FORMAT, mip))
            .map_err(|e| engine_err!("nova3d::BloomRenderer", "Failed to create {} mip {} view: {}", name, mip, e))?;
        mips.push(view);
    }
    Ok((texture, mips))
}

/// Bind input(s) and output, then dispatch one thread per output texel
fn dispatch(
    context: &mut dyn ComputeContext,
    pipeline: &Pipeline,
    input: &Texture,
    copy_source: Option<&Texture>,
    output: &Texture,
    grid: UVec2,
) -> Result<()> {
    context.set_texture(input.view(), 0)?;
    if let Some(copy_source) = copy_source {
        context.set_texture(copy_source.view(), 1)?;
    }
    context.set_texture(output.view(), 2)?;
    context.dispatch_threads(UVec3::new(grid.x, grid.y, 1), pipeline.desc().threadgroup_size())
}

#[cfg(test)]
#[path = "bloom_renderer_tests.rs"]
mod tests;
