/// Pipeline creation from the device's default shader library

use crate::error::Result;
use crate::engine_err;
use crate::graphics_device::{
    ComputePipelineDesc, FunctionDesc, GraphicsDevice, Pipeline, RenderPipelineDesc, TextureFormat,
};

/// Compute pipeline running the kernel `name`
pub(crate) fn compute_pipeline(device: &mut dyn GraphicsDevice, name: &'static str) -> Result<Pipeline> {
    let function = device
        .create_function(&FunctionDesc { name })
        .map_err(|e| engine_err!("nova3d::ShaderLibrary", "Missing compute function '{}': {}", name, e))?;
    device
        .create_compute_pipeline(&ComputePipelineDesc { label: name, function: function.view() })
        .map_err(|e| engine_err!("nova3d::ShaderLibrary", "Failed to create compute pipeline '{}': {}", name, e))
}

/// Render pipeline; a `None` fragment function makes a depth-only pipeline
pub(crate) fn render_pipeline(
    device: &mut dyn GraphicsDevice,
    label: &'static str,
    vertex: &'static str,
    fragment: Option<&'static str>,
    color_format: Option<TextureFormat>,
    depth_format: Option<TextureFormat>,
) -> Result<Pipeline> {
    let vertex_function = device
        .create_function(&FunctionDesc { name: vertex })
        .map_err(|e| engine_err!("nova3d::ShaderLibrary", "Missing vertex function '{}': {}", vertex, e))?;
    let fragment_function = match fragment {
        Some(name) => Some(
            device
                .create_function(&FunctionDesc { name })
                .map_err(|e| engine_err!("nova3d::ShaderLibrary", "Missing fragment function '{}': {}", name, e))?,
        ),
        None => None,
    };
    device
        .create_render_pipeline(&RenderPipelineDesc {
            label,
            vertex_function: vertex_function.view(),
            fragment_function: fragment_function.as_ref().map(|f| f.view()),
            color_format,
            depth_format,
        })
        .map_err(|e| engine_err!("nova3d::ShaderLibrary", "Failed to create render pipeline '{}': {}", label, e))
}
