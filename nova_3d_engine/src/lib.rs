/*!
# Nova 3D Engine

Rendering core of the Nova3D engine: GPU resource ownership, the
scene-construction protocol, and a forward renderer with cascaded
shadows, bloom and tone mapping.

The graphics API itself stays behind the `GraphicsDevice` / `CommandQueue`
traits. Backends implement them and the renderer only ever records through
those interfaces.

## Architecture

- **ResourceHandle / ResourceView**: Reference-counted ownership of native GPU resources
- **Renderer**: `begin_scene` / `submit_*` / `end_scene` / `draw` protocol, guarded by a sanitizer
- **ForwardRenderer**: Shadow cascades, main pass, bloom and postprocess
- **BloomRenderer**: Compute downsample / upsample pyramid
- **SceneSubmitter**: Feeds a component-based Scene through the Renderer each frame
- **Viewport**: Owns the Framebuffer a frame is rendered into
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod camera;
pub mod renderer;
pub mod resource;
pub mod scene;

#[cfg(test)]
mod test_utils;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Renderer protocol trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics device sub-module (handles, descriptors, device and queue traits)
    pub mod graphics_device {
        pub use crate::graphics_device::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
