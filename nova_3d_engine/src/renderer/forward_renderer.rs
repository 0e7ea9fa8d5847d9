/// Forward scene renderer
///
/// Persistent device state (uniform buffers, transform buffer, shadow map
/// array, shadow and postprocess pipelines, bloom) is created at `init`.
/// Per-frame CPU state (objects, lights, shadow casters) is rebuilt by every
/// `begin_scene` .. `end_scene` cycle.
///
/// `draw` records four passes on the queue, in this order:
///
/// 1. shadow pass (skipped without shadow casters)
/// 2. main pass into the raw HDR color target
/// 3. bloom pyramid
/// 4. postprocess into the output texture

use std::sync::{Arc, Mutex, MutexGuard};
use glam::{Mat4, UVec2, UVec3};
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::{engine_debug, engine_err, engine_info, engine_trace, engine_warn};
use crate::graphics_device::{
    Buffer, BufferDesc, BufferUsage, BufferView, ColorAttachment, CommandQueue, CompareFunction,
    CullMode, DepthAttachment, DepthStencil, DepthStencilDesc, GraphicsDevice, LoadAction,
    Pipeline, RenderPassDesc, Sampler, SamplerDesc, AddressMode, FilterMode, StorageMode,
    Texture, TextureDesc, TextureFormat, TextureType, TextureUsage, TextureView,
};
use crate::resource::{Material, MaterialInstance, Mesh};
use super::bloom_renderer::BloomRenderer;
use super::framebuffer::{Framebuffer, DEPTH_FORMAT};
use super::render_objects::SceneRenderObjects;
use super::renderer::Renderer;
use super::sanitizer::{SceneOperation, SceneSanitizer, SceneState};
use super::scene_data::{
    to_gpu_matrix, DirectionalLight, GpuMatrix, PointLight, RendererParameters, SceneData,
    SkyLight, SpotLight, MAX_LIGHTS_PER_KIND,
};
use super::settings::RendererSettings;
use super::shader_library::{compute_pipeline, render_pipeline};
use super::shadow::ShadowState;

const SOURCE: &str = "nova3d::ForwardRenderer";

/// Bytes of one uploaded transform
const MATRIX_SIZE: u64 = std::mem::size_of::<GpuMatrix>() as u64;

// Vertex stage buffer slots
const MESH_VERTEX_SLOT: u32 = 0;
const TRANSFORM_SLOT: u32 = 1;
const SCENE_DATA_VERTEX_SLOT: u32 = 2;
const SHADOW_VERTEX_SLOT: u32 = 3;

// Fragment stage slots
const SCENE_DATA_FRAGMENT_SLOT: u32 = 0;
const SHADOW_FRAGMENT_SLOT: u32 = 1;
const MATERIAL_PARAMETERS_SLOT: u32 = 3;
const SHADOW_MAP_TEXTURE_SLOT: u32 = 0;
const FIRST_MATERIAL_TEXTURE_SLOT: u32 = 1;
const SHADOW_SAMPLER_SLOT: u32 = 0;

// Postprocess bindings
const POSTPROCESS_COLOR_SLOT: u32 = 0;
const POSTPROCESS_BLOOM_SLOT: u32 = 1;
const POSTPROCESS_OUTPUT_SLOT: u32 = 2;
const POSTPROCESS_PARAMETERS_SLOT: u32 = 0;

fn lock_device(device: &Mutex<dyn GraphicsDevice>) -> Result<MutexGuard<'_, dyn GraphicsDevice + 'static>> {
    device
        .lock()
        .map_err(|_| Error::BackendError("Graphics device lock poisoned".to_string()))
}

/// Drop lights beyond `MAX_LIGHTS_PER_KIND`, warning once
fn clamp_lights<T>(lights: &mut Vec<T>, kind: &str) {
    if lights.len() > MAX_LIGHTS_PER_KIND {
        engine_warn!(SOURCE, "{} {} lights submitted, only the first {} are used",
            lights.len(), kind, MAX_LIGHTS_PER_KIND);
        lights.truncate(MAX_LIGHTS_PER_KIND);
    }
}

/// Grow-only managed buffer: reallocated only when `size` exceeds its capacity
fn ensure_capacity(
    device: &mut dyn GraphicsDevice,
    slot: &mut Option<Buffer>,
    size: u64,
    usage: BufferUsage,
    name: &str,
) -> Result<BufferView> {
    let buffer = match slot.take() {
        Some(buffer) if buffer.desc().size >= size => buffer,
        _ => {
            let buffer = device
                .create_buffer(&BufferDesc { size, storage_mode: StorageMode::Managed, usage })
                .map_err(|e| engine_err!(SOURCE, "Failed to grow {} buffer to {} bytes: {}", name, size, e))?;
            engine_debug!(SOURCE, "{} buffer grown to {} bytes", name, size);
            buffer
        }
    };
    let view = buffer.view();
    *slot = Some(buffer);
    Ok(view)
}

fn null_buffer() -> BufferView {
    BufferView::null(BufferDesc::uniform(0))
}

fn null_texture() -> TextureView {
    TextureView::null(TextureDesc::new_2d(TextureFormat::R8G8B8A8_UNORM, UVec2::ZERO, TextureUsage::SHADER_READ))
}

// ===== PERSISTENT DEVICE STATE =====

struct ForwardPipelines {
    shadow: Pipeline,
    postprocess: Pipeline,
}

impl ForwardPipelines {
    fn create(device: &mut dyn GraphicsDevice) -> Result<Self> {
        Ok(Self {
            shadow: render_pipeline(device, "shadow", "shadow_vertex", None, None, Some(DEPTH_FORMAT))?,
            postprocess: compute_pipeline(device, "postprocess")?,
        })
    }
}

/// Everything created at `init`
struct ForwardGpuState {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    pipelines: ForwardPipelines,
    shadow_depth_stencil: DepthStencil,
    shadow_sampler: Sampler,
    scene_data: Buffer,
    parameters: Buffer,
    /// One transform per draw index (grow-only)
    transforms: Option<Buffer>,
    /// Shadow header followed by the light-space transforms (grow-only)
    shadow_buffer: Option<Buffer>,
    /// Depth texture array, one slice per shadow map (never shrinks)
    shadow_maps: Option<Texture>,
    bloom: BloomRenderer,
}

impl ForwardGpuState {
    fn new(
        device: &mut dyn GraphicsDevice,
        shared: Arc<Mutex<dyn GraphicsDevice>>,
        settings: &RendererSettings,
    ) -> Result<Self> {
        let pipelines = ForwardPipelines::create(device)?;
        let shadow_depth_stencil = device
            .create_depth_stencil(&DepthStencilDesc {
                depth_compare: CompareFunction::LessEqual,
                depth_write_enabled: true,
            })
            .map_err(|e| engine_err!(SOURCE, "Failed to create shadow depth-stencil state: {}", e))?;
        let shadow_sampler = device
            .create_sampler(&SamplerDesc {
                min_filter: FilterMode::Linear,
                mag_filter: FilterMode::Linear,
                mip_filter: FilterMode::Nearest,
                address_mode: AddressMode::ClampToBorder,
                compare: Some(CompareFunction::LessEqual),
            })
            .map_err(|e| engine_err!(SOURCE, "Failed to create shadow sampler: {}", e))?;
        let scene_data = device
            .create_buffer(&BufferDesc::uniform(std::mem::size_of::<SceneData>() as u64))
            .map_err(|e| engine_err!(SOURCE, "Failed to create scene data buffer: {}", e))?;
        let parameters = device
            .create_buffer(&BufferDesc::uniform(std::mem::size_of::<RendererParameters>() as u64))
            .map_err(|e| engine_err!(SOURCE, "Failed to create parameter buffer: {}", e))?;
        let bloom = BloomRenderer::new(device, settings.bloom)?;

        Ok(Self {
            device: shared,
            pipelines,
            shadow_depth_stencil,
            shadow_sampler,
            scene_data,
            parameters,
            transforms: None,
            shadow_buffer: None,
            shadow_maps: None,
            bloom,
        })
    }

    fn transform_view(&self) -> Result<BufferView> {
        self.transforms
            .as_ref()
            .map(|buffer| buffer.view())
            .ok_or_else(|| Error::InvalidResource("transform buffer was never uploaded".to_string()))
    }

    /// Upload scene data, parameters, transforms and the shadow buffer
    fn upload(
        &mut self,
        scene_data: &SceneData,
        parameters: &RendererParameters,
        objects: &SceneRenderObjects,
        shadow: &ShadowState,
    ) -> Result<()> {
        let mut device = lock_device(&self.device)?;

        device.fill_managed_buffer(self.scene_data.view(), bytemuck::bytes_of(scene_data), 0)?;
        device.fill_managed_buffer(self.parameters.view(), bytemuck::bytes_of(parameters), 0)?;

        if !objects.is_empty() {
            let matrices: Vec<GpuMatrix> = objects.transforms().iter().map(to_gpu_matrix).collect();
            let bytes: &[u8] = bytemuck::cast_slice(&matrices);
            let view = ensure_capacity(&mut *device, &mut self.transforms, bytes.len() as u64,
                BufferUsage::VERTEX | BufferUsage::STORAGE, "transform")?;
            device.fill_managed_buffer(view, bytes, 0)?;
        }

        let contents = shadow.buffer_contents();
        let view = ensure_capacity(&mut *device, &mut self.shadow_buffer, contents.len() as u64,
            BufferUsage::STORAGE, "shadow")?;
        device.fill_managed_buffer(view, &contents, 0)
    }

    /// Reallocate the shadow map array when the frame needs more slices
    /// or the resolution changed
    fn ensure_shadow_maps(&mut self, shadow: &mut ShadowState, num_shadow_maps: u32) -> Result<()> {
        if !shadow.needs_reallocation(num_shadow_maps) {
            return Ok(());
        }

        let array_length = num_shadow_maps.max(shadow.shadow_map_array_length());
        let resolution = shadow.shadow_map_resolution();
        let desc = TextureDesc {
            texture_type: TextureType::Tex2DArray,
            format: DEPTH_FORMAT,
            width: resolution,
            height: resolution,
            array_length,
            mip_levels: 1,
            usage: TextureUsage::RENDER_TARGET | TextureUsage::SHADER_READ,
            storage_mode: StorageMode::Private,
        };
        let texture = lock_device(&self.device)?
            .create_texture(&desc)
            .map_err(|e| engine_err!(SOURCE, "Failed to allocate {} shadow maps: {}", array_length, e))?;

        self.shadow_maps = Some(texture);
        shadow.mark_allocated(array_length);
        engine_debug!(SOURCE, "Shadow map array reallocated: {} x {}x{}", array_length, resolution, resolution);
        Ok(())
    }

    fn render_shadow_pass(
        &mut self,
        objects: &SceneRenderObjects,
        shadow: &mut ShadowState,
        queue: &dyn CommandQueue,
    ) -> Result<()> {
        let num_shadow_maps = shadow.num_shadow_maps();
        if shadow.num_shadow_casters() == 0 || num_shadow_maps == 0 {
            return Ok(());
        }
        self.ensure_shadow_maps(shadow, num_shadow_maps)?;

        let shadow_maps = self.shadow_maps.as_ref()
            .ok_or_else(|| Error::InvalidResource("shadow map array".to_string()))?;
        let shadow_buffer = self.shadow_buffer.as_ref()
            .ok_or_else(|| Error::InvalidResource("shadow buffer was never uploaded".to_string()))?;

        let mut context = queue.create_render_context()?;
        context.begin(&RenderPassDesc {
            color_attachments: Vec::new(),
            depth_attachment: Some(DepthAttachment {
                texture: shadow_maps.view(),
                load: LoadAction::Clear,
                clear_depth: 1.0,
            }),
            render_target_array_length: num_shadow_maps,
        })?;
        context.set_pipeline(self.pipelines.shadow.view())?;
        context.set_depth_stencil(self.shadow_depth_stencil.view())?;
        context.set_cull_mode(CullMode::Front)?;
        context.set_vertex_buffer(shadow_buffer.view(), 0, SHADOW_VERTEX_SLOT)?;

        if !objects.is_empty() {
            let transforms = self.transform_view()?;
            let mut bound_mesh: Option<&Mesh> = None;
            for (index, mesh) in objects.meshes().iter().enumerate() {
                if bound_mesh != Some(mesh) {
                    context.set_vertex_buffer(mesh.vertex_buffer().view(), 0, MESH_VERTEX_SLOT)?;
                    bound_mesh = Some(mesh);
                }
                context.set_vertex_buffer(transforms, index as u64 * MATRIX_SIZE, TRANSFORM_SLOT)?;
                // one instance per shadow map, the shader picks the slice
                context.draw(&mesh.draw_desc(num_shadow_maps))?;
            }
        }

        context.commit()
    }

    fn render_main_pass(
        &self,
        objects: &SceneRenderObjects,
        settings: &RendererSettings,
        framebuffer: &Framebuffer,
        queue: &dyn CommandQueue,
    ) -> Result<()> {
        let mut context = queue.create_render_context()?;
        context.begin(&RenderPassDesc {
            color_attachments: vec![ColorAttachment {
                texture: framebuffer.raw_color().view(),
                load: LoadAction::Clear,
                clear_color: settings.clear_color,
            }],
            depth_attachment: Some(DepthAttachment {
                texture: framebuffer.depth().view(),
                load: LoadAction::Clear,
                clear_depth: 1.0,
            }),
            render_target_array_length: 1,
        })?;

        if !objects.is_empty() {
            let transforms = self.transform_view()?;
            context.set_vertex_buffer(self.scene_data.view(), 0, SCENE_DATA_VERTEX_SLOT)?;
            context.set_fragment_buffer(self.scene_data.view(), 0, SCENE_DATA_FRAGMENT_SLOT)?;
            if let Some(shadow_buffer) = &self.shadow_buffer {
                context.set_fragment_buffer(shadow_buffer.view(), 0, SHADOW_FRAGMENT_SLOT)?;
            }
            if let Some(shadow_maps) = &self.shadow_maps {
                context.set_fragment_texture(shadow_maps.view(), SHADOW_MAP_TEXTURE_SLOT)?;
                context.set_fragment_sampler(self.shadow_sampler.view(), SHADOW_SAMPLER_SLOT)?;
            }

            let mut bound_material: Option<&Material> = None;
            let mut bound_instance: Option<&MaterialInstance> = None;
            let mut bound_mesh: Option<&Mesh> = None;
            let mut bound_parameters = false;
            let mut bound_textures = 0usize;

            for (index, (instance, mesh)) in objects.materials().iter().zip(objects.meshes()).enumerate() {
                let material = instance.material().as_ref();
                if bound_material != Some(material) {
                    context.set_pipeline(material.pipeline().view())?;
                    context.set_cull_mode(material.cull_mode())?;
                    context.set_depth_stencil(material.depth_stencil().view())?;
                    context.set_triangle_fill_mode(material.fill_mode())?;
                    bound_material = Some(material);
                }
                if bound_instance != Some(instance) {
                    match instance.parameters() {
                        Some(parameters) => {
                            context.set_fragment_buffer(parameters.view(), 0, MATERIAL_PARAMETERS_SLOT)?
                        }
                        None if bound_parameters => {
                            context.set_fragment_buffer(null_buffer(), 0, MATERIAL_PARAMETERS_SLOT)?
                        }
                        None => {}
                    }
                    bound_parameters = instance.parameters().is_some();

                    let textures = instance.textures();
                    for (slot, texture) in textures.iter().enumerate() {
                        context.set_fragment_texture(texture.view(), FIRST_MATERIAL_TEXTURE_SLOT + slot as u32)?;
                    }
                    // Clear slots the previous instance used and this one does not
                    for slot in textures.len()..bound_textures {
                        context.set_fragment_texture(null_texture(), FIRST_MATERIAL_TEXTURE_SLOT + slot as u32)?;
                    }
                    bound_textures = textures.len();
                    bound_instance = Some(instance);
                }
                if bound_mesh != Some(mesh) {
                    context.set_vertex_buffer(mesh.vertex_buffer().view(), 0, MESH_VERTEX_SLOT)?;
                    bound_mesh = Some(mesh);
                }
                context.set_vertex_buffer(transforms, index as u64 * MATRIX_SIZE, TRANSFORM_SLOT)?;
                context.draw(&mesh.draw_desc(1))?;
            }
        }

        context.commit()
    }

    fn render_postprocess(&self, framebuffer: &Framebuffer, queue: &dyn CommandQueue) -> Result<()> {
        let bloom = framebuffer
            .bloom()
            .upsample_mip(0)
            .ok_or_else(|| Error::InvalidResource("bloom upsample mip 0".to_string()))?;
        let size = framebuffer.size();

        let mut context = queue.create_compute_context()?;
        context.begin()?;
        context.set_pipeline(self.pipelines.postprocess.view())?;
        context.set_texture(framebuffer.raw_color().view(), POSTPROCESS_COLOR_SLOT)?;
        context.set_texture(bloom.view(), POSTPROCESS_BLOOM_SLOT)?;
        context.set_texture(framebuffer.post_processed().view(), POSTPROCESS_OUTPUT_SLOT)?;
        context.set_buffer(self.parameters.view(), 0, POSTPROCESS_PARAMETERS_SLOT)?;
        context.dispatch_threads(
            UVec3::new(size.x, size.y, 1),
            self.pipelines.postprocess.desc().threadgroup_size(),
        )?;
        context.end()?;
        context.commit()
    }
}

// ===== FORWARD RENDERER =====

/// Forward renderer with cascaded shadows, bloom and tone mapping
pub struct ForwardRenderer {
    sanitizer: SceneSanitizer,
    settings: RendererSettings,
    camera: Camera,
    objects: SceneRenderObjects,
    point_lights: Vec<PointLight>,
    spot_lights: Vec<SpotLight>,
    directional_lights: Vec<DirectionalLight>,
    sky_lights: Vec<SkyLight>,
    shadow: ShadowState,
    gpu: Option<ForwardGpuState>,
}

impl ForwardRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            sanitizer: SceneSanitizer::new(),
            settings,
            camera: Camera::default(),
            objects: SceneRenderObjects::new(),
            point_lights: Vec::new(),
            spot_lights: Vec::new(),
            directional_lights: Vec::new(),
            sky_lights: Vec::new(),
            shadow: ShadowState::new(settings.shadow_map_resolution),
            gpu: None,
        }
    }

    /// Camera snapshot of the current scene
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Shadow casters of the last finalized scene and array bookkeeping
    pub fn shadow_state(&self) -> &ShadowState {
        &self.shadow
    }

    /// Point lights kept for the current scene
    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    /// Forget every per-frame submission
    fn discard_scene(&mut self) {
        self.objects.clear();
        self.point_lights.clear();
        self.spot_lights.clear();
        self.directional_lights.clear();
        self.sky_lights.clear();
        self.shadow.clear_casters();
    }

    fn gpu_mut(&mut self) -> Result<&mut ForwardGpuState> {
        self.gpu
            .as_mut()
            .ok_or_else(|| Error::InitializationFailed("forward renderer is not initialized".to_string()))
    }
}

impl Default for ForwardRenderer {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}

impl Renderer for ForwardRenderer {
    fn init(&mut self, device: Arc<Mutex<dyn GraphicsDevice>>) -> Result<()> {
        self.sanitizer.check(SceneOperation::Init)?;

        let gpu = {
            let mut guard = lock_device(&device)?;
            ForwardGpuState::new(&mut *guard, device.clone(), &self.settings)?
        };
        self.gpu = Some(gpu);
        self.sanitizer.apply(SceneOperation::Init)?;

        engine_info!(SOURCE, "Forward renderer initialized");
        Ok(())
    }

    fn state(&self) -> SceneState {
        self.sanitizer.state()
    }

    fn begin_scene(&mut self, camera: &Camera) -> Result<()> {
        self.sanitizer.apply(SceneOperation::BeginScene)?;

        self.camera = *camera;
        self.discard_scene();
        Ok(())
    }

    fn submit_mesh(&mut self, mesh: &Mesh, material: &MaterialInstance, transform: Mat4) -> Result<()> {
        self.sanitizer.apply(SceneOperation::Submit("submit_mesh"))?;
        self.objects.push(mesh, material, transform);
        Ok(())
    }

    fn submit_point_light(&mut self, light: &PointLight) -> Result<()> {
        self.sanitizer.apply(SceneOperation::Submit("submit_point_light"))?;
        self.point_lights.push(*light);
        Ok(())
    }

    fn submit_spot_light(&mut self, light: &SpotLight) -> Result<()> {
        self.sanitizer.apply(SceneOperation::Submit("submit_spot_light"))?;
        self.spot_lights.push(*light);
        Ok(())
    }

    fn submit_directional_light(&mut self, light: &DirectionalLight) -> Result<()> {
        self.sanitizer.apply(SceneOperation::Submit("submit_directional_light"))?;
        self.directional_lights.push(*light);
        Ok(())
    }

    fn submit_sky_light(&mut self, light: &SkyLight) -> Result<()> {
        self.sanitizer.apply(SceneOperation::Submit("submit_sky_light"))?;
        self.sky_lights.push(*light);
        Ok(())
    }

    fn end_scene(&mut self) -> Result<()> {
        self.sanitizer.check(SceneOperation::EndScene)?;

        self.objects.sort();

        clamp_lights(&mut self.point_lights, "point");
        clamp_lights(&mut self.spot_lights, "spot");
        clamp_lights(&mut self.directional_lights, "directional");
        clamp_lights(&mut self.sky_lights, "sky");

        self.shadow.clear_casters();
        for light in &self.directional_lights {
            self.shadow.add_caster(light, self.camera.position());
        }

        let scene_data = SceneData::new(
            &self.camera,
            &self.point_lights,
            &self.spot_lights,
            &self.directional_lights,
            &self.sky_lights,
        );
        let parameters = RendererParameters::from(&self.settings);

        let gpu = self
            .gpu
            .as_mut()
            .ok_or_else(|| Error::InitializationFailed("forward renderer is not initialized".to_string()))?;
        if let Err(e) = gpu.upload(&scene_data, &parameters, &self.objects, &self.shadow) {
            engine_warn!(SOURCE, "Scene upload failed, dropping the scene: {}", e);
            self.sanitizer.apply(SceneOperation::AbortScene)?;
            self.discard_scene();
            return Err(e);
        }

        self.sanitizer.apply(SceneOperation::EndScene)?;
        engine_trace!(SOURCE, "Scene finalized: {} objects, {} shadow maps",
            self.objects.len(), self.shadow.num_shadow_maps());
        Ok(())
    }

    fn abort_scene(&mut self) -> Result<()> {
        self.sanitizer.apply(SceneOperation::AbortScene)?;
        self.discard_scene();
        engine_debug!(SOURCE, "Scene build aborted");
        Ok(())
    }

    fn draw(&mut self, framebuffer: &Framebuffer, queue: &dyn CommandQueue) -> Result<()> {
        self.sanitizer.check(SceneOperation::Draw)?;

        let gpu = self
            .gpu
            .as_mut()
            .ok_or_else(|| Error::InitializationFailed("forward renderer is not initialized".to_string()))?;
        gpu.render_shadow_pass(&self.objects, &mut self.shadow, queue)?;
        gpu.render_main_pass(&self.objects, &self.settings, framebuffer, queue)?;
        gpu.bloom.render(framebuffer.raw_color(), framebuffer.bloom(), queue)?;
        gpu.render_postprocess(framebuffer, queue)?;

        self.sanitizer.apply(SceneOperation::Draw)
    }

    fn create_framebuffer(&mut self, size: UVec2) -> Result<Framebuffer> {
        self.sanitizer.check(SceneOperation::Maintenance("create_framebuffer"))?;

        let gpu = self.gpu_mut()?;
        let mut device = lock_device(&gpu.device)?;
        let bloom = gpu.bloom.populate_framebuffer(&mut *device, size)?;
        Framebuffer::new(&mut *device, size, bloom)
    }

    fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    fn set_settings(&mut self, settings: RendererSettings) -> Result<()> {
        if let Some(gpu) = self.gpu.as_mut() {
            let mut device = lock_device(&gpu.device)?;
            gpu.bloom.set_settings(&mut *device, settings.bloom)?;
        }
        self.shadow.set_resolution(settings.shadow_map_resolution);
        self.settings = settings;
        Ok(())
    }

    fn reload_shaders(&mut self) -> Result<()> {
        self.sanitizer.check(SceneOperation::Maintenance("reload_shaders"))?;

        let gpu = self.gpu_mut()?;
        let mut device = lock_device(&gpu.device)?;
        device
            .reload_default_library()
            .map_err(|e| engine_err!(SOURCE, "Shader library reload failed: {}", e))?;
        gpu.pipelines = ForwardPipelines::create(&mut *device)?;
        gpu.bloom.reload_pipelines(&mut *device)?;

        engine_info!(SOURCE, "Shaders reloaded");
        Ok(())
    }

    fn scene_objects(&self) -> Option<&SceneRenderObjects> {
        match self.sanitizer.state() {
            SceneState::Idle => Some(&self.objects),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "forward_renderer_tests.rs"]
mod tests;
