/// Scene entities and their components

use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::renderer::{DirectionalLight, PointLight, SkyLight, SpotLight};
use crate::resource::{MaterialInstance, Mesh};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for an Entity within a Scene.
    ///
    /// Keys remain valid after other entities are removed.
    pub struct EntityKey;
}

// ===== COMPONENTS =====

/// Mesh + material pair drawn at the entity's transform
///
/// Both halves are optional so an entity can be assembled incrementally;
/// only complete components are submitted.
#[derive(Debug, Clone, Default)]
pub struct MeshRendererComponent {
    pub mesh: Option<Mesh>,
    pub material: Option<MaterialInstance>,
}

impl MeshRendererComponent {
    pub fn new(mesh: Mesh, material: MaterialInstance) -> Self {
        Self {
            mesh: Some(mesh),
            material: Some(material),
        }
    }

    /// Mesh and material when both are set
    pub fn drawable(&self) -> Option<(&Mesh, &MaterialInstance)> {
        Some((self.mesh.as_ref()?, self.material.as_ref()?))
    }
}

/// Light attached to an entity
///
/// Position and direction come from the entity's world transform at
/// submission time, so the component only carries photometric data
/// (and shadow parameters for directional lights).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightComponent {
    Point {
        color: Vec3,
        intensity: f32,
    },
    Spot {
        color: Vec3,
        intensity: f32,
        inner_cutoff: f32,
        outer_cutoff: f32,
    },
    /// `light.direction` is ignored and replaced by the transform's
    Directional(DirectionalLight),
    Sky {
        color: Vec3,
        intensity: f32,
    },
}

/// Light records produced from a LightComponent and a world transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldLight {
    Point(PointLight),
    Spot(SpotLight),
    Directional(DirectionalLight),
    Sky(SkyLight),
}

impl LightComponent {
    /// Place the light in world space
    ///
    /// Position is the transform's translation column, direction its
    /// normalized Z basis column (falls back to -Y for degenerate bases).
    pub fn to_world(&self, transform: &Mat4) -> WorldLight {
        let position = transform.w_axis.truncate();
        let direction = transform
            .z_axis
            .truncate()
            .try_normalize()
            .unwrap_or(Vec3::NEG_Y);

        match *self {
            LightComponent::Point { color, intensity } => {
                WorldLight::Point(PointLight { color, intensity, position })
            }
            LightComponent::Spot { color, intensity, inner_cutoff, outer_cutoff } => {
                WorldLight::Spot(SpotLight {
                    color,
                    intensity,
                    position,
                    direction,
                    inner_cutoff,
                    outer_cutoff,
                })
            }
            LightComponent::Directional(light) => {
                WorldLight::Directional(DirectionalLight { direction, ..light })
            }
            LightComponent::Sky { color, intensity } => {
                WorldLight::Sky(SkyLight { color, intensity })
            }
        }
    }
}

// ===== ENTITY =====

/// Named bag of optional components
#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub name: String,
    /// World transform
    pub transform: Option<Mat4>,
    pub mesh_renderer: Option<MeshRendererComponent>,
    pub light: Option<LightComponent>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_mesh_renderer(mut self, mesh_renderer: MeshRendererComponent) -> Self {
        self.mesh_renderer = Some(mesh_renderer);
        self
    }

    pub fn with_light(mut self, light: LightComponent) -> Self {
        self.light = Some(light);
        self
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
