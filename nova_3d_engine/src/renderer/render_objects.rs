/// Columnar storage of the objects submitted during one scene build
///
/// Transforms, material instances and meshes live in parallel vectors
/// indexed by draw index. After `sort()` the draw index is also the slot
/// of the object's transform in the GPU transform buffer.

use glam::Mat4;
use crate::resource::{MaterialInstance, Mesh};

/// Structure-of-arrays record of submitted objects
#[derive(Debug, Clone, Default)]
pub struct SceneRenderObjects {
    transforms: Vec<Mat4>,
    materials: Vec<MaterialInstance>,
    meshes: Vec<Mesh>,
}

impl SceneRenderObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one object; returns its draw index
    pub fn push(&mut self, mesh: &Mesh, material: &MaterialInstance, transform: Mat4) -> usize {
        self.transforms.push(transform);
        self.materials.push(material.clone());
        self.meshes.push(mesh.clone());
        self.transforms.len() - 1
    }

    pub fn clear(&mut self) {
        self.transforms.clear();
        self.materials.clear();
        self.meshes.clear();
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    pub fn materials(&self) -> &[MaterialInstance] {
        &self.materials
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Stable sort by (material, mesh) so equal states form contiguous runs
    ///
    /// Objects with equal keys keep their submission order.
    pub fn sort(&mut self) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&i| (self.materials[i].material().key(), self.meshes[i].key()));

        if order.iter().enumerate().all(|(slot, &i)| slot == i) {
            return;
        }

        self.transforms = order.iter().map(|&i| self.transforms[i]).collect();
        self.materials = order.iter().map(|&i| self.materials[i].clone()).collect();
        self.meshes = order.iter().map(|&i| self.meshes[i].clone()).collect();
    }
}

#[cfg(test)]
#[path = "render_objects_tests.rs"]
mod tests;
