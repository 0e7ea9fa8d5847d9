//! Resource module
//!
//! Meshes and materials consumed by the renderers. They only reference
//! device resources through shared handles.

pub mod mesh;
pub mod material;

pub use mesh::{Mesh, MeshDesc, MeshKey};
pub use material::{Material, MaterialDesc, MaterialInstance, MaterialKey};
