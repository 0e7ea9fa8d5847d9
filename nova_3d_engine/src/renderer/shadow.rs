/// Cascaded shadow bookkeeping
///
/// Shadow casters are accumulated at `end_scene`: every shadow-casting
/// directional light contributes `num_cascades` orthographic light-space
/// transforms, all centered on the camera. Cascade `i` covers
/// `shadow_distance * exponent^i` around the camera.
///
/// The GPU shadow-map array only ever grows. It is reallocated when the
/// frame needs more slices than it holds or when the resolution changed.

use glam::{Mat4, Vec3};
use super::scene_data::{DirectionalLight, GpuMatrix, ShadowHeader, MAX_LIGHTS_PER_KIND};

/// Light-space transform of one cascade, transposed for upload
///
/// # Arguments
///
/// * `camera_position` - Center of the cascade
/// * `light_direction` - Direction the light travels in
/// * `distance` - Horizontal and vertical half-extent
/// * `distance_z` - Depth half-extent
pub fn cascade_transform(camera_position: Vec3, light_direction: Vec3, distance: f32, distance_z: f32) -> Mat4 {
    let direction = light_direction.try_normalize().unwrap_or(Vec3::NEG_Y);
    let up = if direction.y.abs() > 0.99 { Vec3::Z } else { Vec3::Y };
    let view = Mat4::look_at_rh(camera_position, camera_position - direction, up);
    let projection = Mat4::orthographic_rh(-distance, distance, -distance, distance, -distance_z, distance_z);
    (projection * view).transpose()
}

/// Half-extent of cascade `index` of `light`
pub fn cascade_distance(light: &DirectionalLight, index: u32) -> f32 {
    light.shadow_distance * light.cascade_distribution_exponent.powi(index as i32)
}

/// Shadow casters of the current frame plus the shadow-map array bookkeeping
#[derive(Debug, Clone)]
pub struct ShadowState {
    num_shadow_casters: u32,
    num_cascades: Vec<u32>,
    light_space_transforms: Vec<Mat4>,
    shadow_map_array_length: u32,
    shadow_map_resolution: u32,
    needs_new_shadow_maps: bool,
}

impl ShadowState {
    pub fn new(shadow_map_resolution: u32) -> Self {
        Self {
            num_shadow_casters: 0,
            num_cascades: Vec::new(),
            light_space_transforms: Vec::new(),
            shadow_map_array_length: 0,
            shadow_map_resolution,
            needs_new_shadow_maps: true,
        }
    }

    /// Forget the casters of the previous frame (array bookkeeping is kept)
    pub fn clear_casters(&mut self) {
        self.num_shadow_casters = 0;
        self.num_cascades.clear();
        self.light_space_transforms.clear();
    }

    /// Register a directional light; lights without shadows are ignored
    pub fn add_caster(&mut self, light: &DirectionalLight, camera_position: Vec3) {
        if !light.casts_shadows {
            return;
        }
        self.num_shadow_casters += 1;
        self.num_cascades.push(light.num_cascades);
        for i in 0..light.num_cascades {
            self.light_space_transforms.push(cascade_transform(
                camera_position,
                light.direction,
                cascade_distance(light, i),
                light.shadow_distance_z,
            ));
        }
    }

    pub fn num_shadow_casters(&self) -> u32 {
        self.num_shadow_casters
    }

    pub fn num_cascades(&self) -> &[u32] {
        &self.num_cascades
    }

    /// Flattened, transposed transforms (one per cascade, in caster order)
    pub fn light_space_transforms(&self) -> &[Mat4] {
        &self.light_space_transforms
    }

    /// Total number of shadow maps needed this frame
    pub fn num_shadow_maps(&self) -> u32 {
        self.num_cascades.iter().sum()
    }

    pub fn shadow_map_array_length(&self) -> u32 {
        self.shadow_map_array_length
    }

    pub fn shadow_map_resolution(&self) -> u32 {
        self.shadow_map_resolution
    }

    pub fn needs_new_shadow_maps(&self) -> bool {
        self.needs_new_shadow_maps
    }

    /// Request a new resolution; takes effect at the next reallocation
    pub fn set_resolution(&mut self, resolution: u32) {
        if resolution != self.shadow_map_resolution {
            self.shadow_map_resolution = resolution;
            self.needs_new_shadow_maps = true;
        }
    }

    /// Whether `num_shadow_maps` slices require a new array
    pub fn needs_reallocation(&self, num_shadow_maps: u32) -> bool {
        self.needs_new_shadow_maps || num_shadow_maps > self.shadow_map_array_length
    }

    /// Record a successful reallocation to `array_length` slices
    pub fn mark_allocated(&mut self, array_length: u32) {
        self.shadow_map_array_length = array_length.max(self.shadow_map_array_length);
        self.needs_new_shadow_maps = false;
    }

    /// Header uploaded in front of the transforms
    pub fn header(&self) -> ShadowHeader {
        let mut num_cascades = [0u32; MAX_LIGHTS_PER_KIND];
        for (slot, count) in num_cascades.iter_mut().zip(&self.num_cascades) {
            *slot = *count;
        }
        ShadowHeader {
            num_shadow_casters: self.num_shadow_casters,
            num_shadow_maps: self.num_shadow_maps(),
            shadow_map_resolution: self.shadow_map_resolution,
            _pad: 0,
            num_cascades,
        }
    }

    /// Bytes of the shadow buffer: header followed by the transforms
    pub fn buffer_contents(&self) -> Vec<u8> {
        let header = self.header();
        let mut bytes = bytemuck::bytes_of(&header).to_vec();
        for transform in &self.light_space_transforms {
            // already transposed
            let rows: GpuMatrix = transform.to_cols_array_2d();
            bytes.extend_from_slice(bytemuck::bytes_of(&rows));
        }
        bytes
    }
}

#[cfg(test)]
#[path = "shadow_tests.rs"]
mod tests;
