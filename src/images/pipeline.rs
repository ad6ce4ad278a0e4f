// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Render pipeline descriptions.

Formats and sample counts are given per attachment.  A sample count of zero means the
attachment does not specify one; every attachment that does specify one must agree.
*/

use crate::images::blend::{BlendDescriptor, ColorWriteMask};
use crate::images::depth_stencil::DepthStencilDescriptor;
use crate::images::shader::FunctionConstants;
use crate::images::vertex_layout::VertexDescriptor;
use crate::pixel_formats::PixelFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentFormat {
    pub pixel_format: PixelFormat,
    /// Zero when unspecified.
    pub sample_count: u32,
}

impl AttachmentFormat {
    pub const fn new(pixel_format: PixelFormat) -> Self {
        Self {
            pixel_format,
            sample_count: 0,
        }
    }

    pub const fn multisampled(pixel_format: PixelFormat, sample_count: u32) -> Self {
        Self {
            pixel_format,
            sample_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorAttachmentState {
    pub format: AttachmentFormat,
    /// `None` disables blending.
    pub blend: Option<BlendDescriptor>,
    pub write_mask: ColorWriteMask,
}

impl ColorAttachmentState {
    pub const fn new(format: AttachmentFormat) -> Self {
        Self {
            format,
            blend: None,
            write_mask: ColorWriteMask::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    #[default]
    TriangleList,
    TriangleStrip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPipelineDescriptor {
    pub label: Option<String>,
    pub vertex_function: String,
    /// Pipelines without a fragment function only write depth and stencil.
    pub fragment_function: Option<String>,
    pub constants: FunctionConstants,
    pub vertex_descriptor: Option<VertexDescriptor>,
    /// Indexed by color attachment slot.
    pub color_attachments: Vec<Option<ColorAttachmentState>>,
    pub depth_attachment: Option<AttachmentFormat>,
    pub stencil_attachment: Option<AttachmentFormat>,
    pub depth_stencil: Option<DepthStencilDescriptor>,
    pub primitive_topology: PrimitiveTopology,
    pub alpha_to_coverage: bool,
    /// Low buffer indices reserved for argument tables and push constants.
    pub reserved_buffer_indices: u32,
}

impl RenderPipelineDescriptor {
    pub fn new(vertex_function: impl Into<String>) -> Self {
        Self {
            label: None,
            vertex_function: vertex_function.into(),
            fragment_function: None,
            constants: FunctionConstants::new(),
            vertex_descriptor: None,
            color_attachments: Vec::new(),
            depth_attachment: None,
            stencil_attachment: None,
            depth_stencil: None,
            primitive_topology: PrimitiveTopology::default(),
            alpha_to_coverage: false,
            reserved_buffer_indices: 0,
        }
    }
}
