/// Per-frame scene records and the GPU layouts they are uploaded with
///
/// Light records are what callers submit. The `#[repr(C)]` Pod structs
/// mirror the shader-side layouts; matrices are stored row-major
/// (transposed glam matrices).

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use crate::camera::Camera;
use super::settings::{BloomSettings, RendererSettings};

/// Live lights per kind and per frame; extra lights are dropped at `end_scene`
pub const MAX_LIGHTS_PER_KIND: usize = 32;

/// Matrix as uploaded to the GPU (row-major)
pub type GpuMatrix = [[f32; 4]; 4];

/// Convert a glam (column-major) matrix to the row-major wire layout
pub fn to_gpu_matrix(matrix: &Mat4) -> GpuMatrix {
    matrix.transpose().to_cols_array_2d()
}

// ===== LIGHT RECORDS =====

/// Omnidirectional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

/// Cone light; cutoffs are cosines of the cone half-angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub direction: Vec3,
    pub inner_cutoff: f32,
    pub outer_cutoff: f32,
}

/// Infinitely distant light, optionally casting cascaded shadows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Direction the light travels in
    pub direction: Vec3,
    pub casts_shadows: bool,
    pub num_cascades: u32,
    /// Half-extent of the first cascade
    pub shadow_distance: f32,
    /// Depth half-extent of every cascade
    pub shadow_distance_z: f32,
    /// Growth factor between consecutive cascades
    pub cascade_distribution_exponent: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
            direction: Vec3::NEG_Y,
            casts_shadows: false,
            num_cascades: 4,
            shadow_distance: 10.0,
            shadow_distance_z: 100.0,
            cascade_distribution_exponent: 2.0,
        }
    }
}

/// Uniform ambient light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyLight {
    pub color: Vec3,
    pub intensity: f32,
}

// ===== GPU LAYOUTS =====

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PointLightData {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
    pub _pad: f32,
}

impl From<&PointLight> for PointLightData {
    fn from(light: &PointLight) -> Self {
        Self {
            color: light.color.to_array(),
            intensity: light.intensity,
            position: light.position.to_array(),
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SpotLightData {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
    pub inner_cutoff: f32,
    pub direction: [f32; 3],
    pub outer_cutoff: f32,
}

impl From<&SpotLight> for SpotLightData {
    fn from(light: &SpotLight) -> Self {
        Self {
            color: light.color.to_array(),
            intensity: light.intensity,
            position: light.position.to_array(),
            inner_cutoff: light.inner_cutoff,
            direction: light.direction.to_array(),
            outer_cutoff: light.outer_cutoff,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DirectionalLightData {
    pub color: [f32; 3],
    pub intensity: f32,
    pub direction: [f32; 3],
    /// Index of the light among shadow casters, -1 when it casts none
    pub shadow_caster_index: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SkyLightData {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl From<&SkyLight> for SkyLightData {
    fn from(light: &SkyLight) -> Self {
        Self {
            color: light.color.to_array(),
            intensity: light.intensity,
        }
    }
}

/// Camera and light data shared by every draw of the main pass
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SceneData {
    pub view_projection: GpuMatrix,
    pub view: GpuMatrix,
    pub projection: GpuMatrix,
    pub camera_position: [f32; 4],
    pub num_point_lights: u32,
    pub num_spot_lights: u32,
    pub num_directional_lights: u32,
    pub num_sky_lights: u32,
    pub point_lights: [PointLightData; MAX_LIGHTS_PER_KIND],
    pub spot_lights: [SpotLightData; MAX_LIGHTS_PER_KIND],
    pub directional_lights: [DirectionalLightData; MAX_LIGHTS_PER_KIND],
    pub sky_lights: [SkyLightData; MAX_LIGHTS_PER_KIND],
}

impl SceneData {
    /// Pack the camera and the (already clamped) light lists
    pub fn new(
        camera: &Camera,
        point_lights: &[PointLight],
        spot_lights: &[SpotLight],
        directional_lights: &[DirectionalLight],
        sky_lights: &[SkyLight],
    ) -> Self {
        let mut data = Self::zeroed();
        data.view_projection = to_gpu_matrix(&camera.view_projection_matrix());
        data.view = to_gpu_matrix(camera.view_matrix());
        data.projection = to_gpu_matrix(camera.projection_matrix());
        data.camera_position = camera.position().extend(1.0).to_array();

        for (slot, light) in data.point_lights.iter_mut().zip(point_lights) {
            *slot = light.into();
        }
        for (slot, light) in data.spot_lights.iter_mut().zip(spot_lights) {
            *slot = light.into();
        }
        let mut caster_index = 0;
        for (slot, light) in data.directional_lights.iter_mut().zip(directional_lights) {
            let shadow_caster_index = if light.casts_shadows {
                caster_index += 1;
                caster_index - 1
            } else {
                -1
            };
            *slot = DirectionalLightData {
                color: light.color.to_array(),
                intensity: light.intensity,
                direction: light.direction.to_array(),
                shadow_caster_index,
            };
        }
        for (slot, light) in data.sky_lights.iter_mut().zip(sky_lights) {
            *slot = light.into();
        }

        data.num_point_lights = point_lights.len().min(MAX_LIGHTS_PER_KIND) as u32;
        data.num_spot_lights = spot_lights.len().min(MAX_LIGHTS_PER_KIND) as u32;
        data.num_directional_lights = directional_lights.len().min(MAX_LIGHTS_PER_KIND) as u32;
        data.num_sky_lights = sky_lights.len().min(MAX_LIGHTS_PER_KIND) as u32;
        data
    }
}

/// Postprocess inputs derived from `RendererSettings`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RendererParameters {
    pub tone_mapping: u32,
    pub exposure: f32,
    pub gamma: f32,
    pub bloom_intensity: f32,
    pub bloom_enabled: u32,
    pub _pad: [u32; 3],
}

impl From<&RendererSettings> for RendererParameters {
    fn from(settings: &RendererSettings) -> Self {
        Self {
            tone_mapping: settings.tone_mapping.shader_index(),
            exposure: settings.exposure,
            gamma: settings.gamma,
            bloom_intensity: settings.bloom.intensity,
            bloom_enabled: settings.bloom.enabled as u32,
            _pad: [0; 3],
        }
    }
}

/// Header of the shadow buffer, followed by one matrix per shadow map
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ShadowHeader {
    pub num_shadow_casters: u32,
    pub num_shadow_maps: u32,
    pub shadow_map_resolution: u32,
    pub _pad: u32,
    /// Cascade count of each caster, in caster order
    pub num_cascades: [u32; MAX_LIGHTS_PER_KIND],
}

/// Bloom prefilter inputs
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BloomParameters {
    pub threshold: f32,
    /// `(threshold - knee, 2 * knee, 0.25 / knee)`
    pub curve: [f32; 3],
}

impl From<&BloomSettings> for BloomParameters {
    fn from(settings: &BloomSettings) -> Self {
        Self {
            threshold: settings.threshold,
            curve: settings.prefilter_curve(),
        }
    }
}

#[cfg(test)]
#[path = "scene_data_tests.rs"]
mod tests;
