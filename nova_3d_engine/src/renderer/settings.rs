/// Renderer configuration
///
/// Settings are plain values applied between frames through
/// `Renderer::set_settings`.

/// Tone mapping operator applied by the postprocess pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneMapping {
    /// Clamp only
    None,
    Reinhard,
    #[default]
    Aces,
}

impl ToneMapping {
    /// Value uploaded in `RendererParameters::tone_mapping`
    pub fn shader_index(&self) -> u32 {
        match self {
            ToneMapping::None => 0,
            ToneMapping::Reinhard => 1,
            ToneMapping::Aces => 2,
        }
    }
}

/// Bloom effect configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    /// Skip the whole bloom pyramid when false
    pub enabled: bool,
    /// Luminance above which pixels start to glow
    pub threshold: f32,
    /// Width of the soft transition around the threshold
    pub knee: f32,
    /// Weight of the bloom when composited
    pub intensity: f32,
}

/// Smallest knee used to build the prefilter curve
pub const MIN_BLOOM_KNEE: f32 = 1.0e-5;

impl BloomSettings {
    /// Soft-knee curve `(threshold - knee, 2 * knee, 0.25 / knee)`
    ///
    /// The knee is clamped to `MIN_BLOOM_KNEE` so the last term stays finite.
    pub fn prefilter_curve(&self) -> [f32; 3] {
        let knee = self.knee.max(MIN_BLOOM_KNEE);
        [self.threshold - knee, 2.0 * knee, 0.25 / knee]
    }
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 1.0,
            knee: 0.1,
            intensity: 0.04,
        }
    }
}

/// Renderer-wide settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererSettings {
    pub tone_mapping: ToneMapping,
    pub exposure: f32,
    pub gamma: f32,
    /// Clear color of the raw HDR target (linear RGBA)
    pub clear_color: [f32; 4],
    /// Width and height of every shadow map slice
    pub shadow_map_resolution: u32,
    pub bloom: BloomSettings,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            tone_mapping: ToneMapping::default(),
            exposure: 1.0,
            gamma: 2.2,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            shadow_map_resolution: 2048,
            bloom: BloomSettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
