// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The wgpu backend.

mod argument_table;
mod blend;
mod depth_stencil;
mod heap;
mod pipeline;
mod pixel_format;
mod render_pass;
mod sampler;
mod shader;
mod texture;
mod vertex;

pub use argument_table::{
    ArgumentAccess, ArgumentDescriptor, ArgumentType, SlotLayout, TableEncoder, TableLayout,
};
pub use blend::{
    blend_factor_from_wgpu, blend_factor_to_wgpu, blend_operation_from_wgpu,
    blend_operation_to_wgpu, translate_blend, translate_color_target, write_mask_to_wgpu,
};
pub use depth_stencil::{
    stencil_operation_from_wgpu, stencil_operation_to_wgpu, translate_depth_stencil,
};
pub use heap::{NativeHeapDescriptor, NativePlacement, translate_heap};
pub use pipeline::{
    NativeRenderPipelineDescriptor, derive_sample_count, primitive_topology_to_wgpu,
    translate_render_pipeline,
};
pub use render_pass::{
    NativeAttachmentTarget, NativeColorAttachment, NativeDepthStencilAttachment,
    NativeRenderPassDescriptor, clear_color_to_wgpu, operations, translate_render_pass,
};
pub use sampler::{
    SamplerCache, address_mode_from_wgpu, address_mode_to_wgpu, border_color_from_wgpu,
    border_color_to_wgpu, compare_function_from_wgpu, compare_function_to_wgpu,
    min_mag_filter_from_wgpu, min_mag_filter_to_wgpu, mip_filter_to_wgpu, translate_sampler,
};
pub use shader::{ShaderFunction, ShaderLibrary};
pub use texture::{
    NativeTextureDescriptor, buffer_usages, storage_mode_from_buffer_usages, texture_dimensions,
    texture_usage_from_wgpu, texture_usage_to_wgpu, texture_usages, translate_buffer,
    translate_texture,
};
pub use vertex::{
    NativeVertexBufferLayout, NativeVertexDescriptor, step_function_from_wgpu,
    step_function_to_wgpu, translate_vertex_descriptor, vertex_format_from_wgpu,
    vertex_format_to_wgpu,
};
