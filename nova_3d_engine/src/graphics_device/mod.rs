/// Graphics device module - hardware resource ownership and the abstract
/// device / command queue / context interfaces

// Module declarations
pub mod handle;
pub mod buffer;
pub mod texture;
pub mod pipeline;
pub mod sampler;
pub mod graphics_device;
pub mod command_queue;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use handle::*;
pub use buffer::*;
pub use texture::*;
pub use pipeline::*;
pub use sampler::*;
pub use command_queue::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
