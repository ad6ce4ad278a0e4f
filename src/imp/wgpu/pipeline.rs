// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Render pipeline translation.

use crate::Error;
use crate::images::DeviceCapabilities;
use crate::images::pipeline::{PrimitiveTopology, RenderPipelineDescriptor};
use crate::images::render_pass::AttachmentPoint;
use crate::images::shader::FunctionCache;
use crate::imp::wgpu::blend::translate_color_target;
use crate::imp::wgpu::depth_stencil::translate_depth_stencil;
use crate::imp::wgpu::vertex::{NativeVertexDescriptor, translate_vertex_descriptor};

/// Everything needed to create a pipeline, with functions already looked up.
#[derive(Debug, Clone)]
pub struct NativeRenderPipelineDescriptor<F> {
    pub label: Option<String>,
    pub vertex_function: F,
    pub fragment_function: Option<F>,
    /// Pipeline-overridable constants, in name order.
    pub constants: Vec<(String, f64)>,
    pub vertex: Option<NativeVertexDescriptor>,
    pub color_targets: Vec<Option<wgpu::ColorTargetState>>,
    pub depth_stencil: Option<wgpu::DepthStencilState>,
    pub primitive: wgpu::PrimitiveState,
    pub multisample: wgpu::MultisampleState,
}

pub const fn primitive_topology_to_wgpu(topology: PrimitiveTopology) -> wgpu::PrimitiveTopology {
    match topology {
        PrimitiveTopology::PointList => wgpu::PrimitiveTopology::PointList,
        PrimitiveTopology::LineList => wgpu::PrimitiveTopology::LineList,
        PrimitiveTopology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        PrimitiveTopology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        PrimitiveTopology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
    }
}

/**
The one sample count every attachment of `descriptor` agrees on.

Depth is consulted first, then stencil, then each color attachment in slot order.  Zero
means unspecified.  The first non-zero count wins, and an attachment with a different
non-zero count is an error.  If nothing specifies a count the pipeline is single-sampled.
*/
pub fn derive_sample_count(descriptor: &RenderPipelineDescriptor) -> Result<u32, Error> {
    let depth = descriptor
        .depth_attachment
        .map(|f| (AttachmentPoint::Depth, f.sample_count));
    let stencil = descriptor
        .stencil_attachment
        .map(|f| (AttachmentPoint::Stencil, f.sample_count));
    let colors = descriptor
        .color_attachments
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.map(|c| (AttachmentPoint::Color(i), c.format.sample_count)));

    let mut sample_count = 0;
    for (attachment, found) in depth.into_iter().chain(stencil).chain(colors) {
        if found == 0 {
            continue;
        }
        if sample_count == 0 {
            sample_count = found;
        } else if sample_count != found {
            logwise::error_sync!(
                "{attachment} has sample count {found} but earlier attachments use {expected}",
                attachment = logwise::privacy::LogIt(&attachment),
                found = found,
                expected = sample_count
            );
            return Err(Error::InconsistentSampleCount {
                attachment,
                expected: sample_count,
                found,
            });
        }
    }
    Ok(sample_count.max(1))
}

fn lookup<C: FunctionCache>(
    functions: &C,
    name: &str,
    descriptor: &RenderPipelineDescriptor,
) -> Result<C::Function, Error> {
    functions
        .lookup(name, &descriptor.constants)
        .ok_or_else(|| {
            logwise::error_sync!(
                "Function {name} not found",
                name = name.to_string()
            );
            Error::FunctionNotFound {
                name: name.to_string(),
            }
        })
}

/**
Translates `descriptor`, looking its functions up in `functions`.

# Errors
- [`Error::FunctionNotFound`] when the vertex function, or a fragment function the
  descriptor names, is missing.
- [`Error::InconsistentSampleCount`], see [`derive_sample_count`].
- Anything the vertex and depth/stencil translators report.
- [`Error::NotYetSupported`] when depth and stencil attachments have different formats.
*/
pub fn translate_render_pipeline<C: FunctionCache>(
    descriptor: &RenderPipelineDescriptor,
    functions: &C,
    capabilities: &DeviceCapabilities,
) -> Result<NativeRenderPipelineDescriptor<C::Function>, Error> {
    let vertex_function = lookup(functions, &descriptor.vertex_function, descriptor)?;
    let fragment_function = match &descriptor.fragment_function {
        Some(name) => Some(lookup(functions, name, descriptor)?),
        None => None,
    };
    let sample_count = derive_sample_count(descriptor)?;

    let vertex = match &descriptor.vertex_descriptor {
        Some(vertex) => Some(translate_vertex_descriptor(
            vertex,
            capabilities,
            descriptor.reserved_buffer_indices,
        )?),
        None => None,
    };

    let depth_stencil_format = match (descriptor.depth_attachment, descriptor.stencil_attachment) {
        (Some(depth), Some(stencil)) if depth.pixel_format != stencil.pixel_format => {
            return Err(Error::NotYetSupported("separate depth and stencil formats"));
        }
        (Some(format), _) | (None, Some(format)) => Some(format.pixel_format),
        (None, None) => None,
    };
    let depth_stencil = match depth_stencil_format {
        Some(format) => Some(translate_depth_stencil(
            &descriptor.depth_stencil.unwrap_or_default(),
            format,
        )?),
        None => None,
    };

    let color_targets = descriptor
        .color_attachments
        .iter()
        .map(|c| c.as_ref().map(translate_color_target))
        .collect();

    logwise::trace_sync!(
        "Translated pipeline {label} with sample count {sample_count}",
        label = descriptor.label.clone().unwrap_or_default(),
        sample_count = sample_count
    );
    Ok(NativeRenderPipelineDescriptor {
        label: descriptor.label.clone(),
        vertex_function,
        fragment_function,
        constants: descriptor.constants.as_override_values(),
        vertex,
        color_targets,
        depth_stencil,
        primitive: wgpu::PrimitiveState {
            topology: primitive_topology_to_wgpu(descriptor.primitive_topology),
            ..wgpu::PrimitiveState::default()
        },
        multisample: wgpu::MultisampleState {
            count: sample_count,
            mask: !0,
            alpha_to_coverage_enabled: descriptor.alpha_to_coverage,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::pipeline::{AttachmentFormat, ColorAttachmentState};
    use crate::images::shader::{FunctionConstantValue, FunctionConstants};
    use crate::images::vertex_layout::{
        VertexAttributeDescriptor, VertexBufferLayoutDescriptor, VertexDescriptor, VertexFormat,
    };
    use crate::pixel_formats::PixelFormat;

    /// Knows every function named in `names`; a function is its own name.
    struct Names(&'static [&'static str]);

    impl FunctionCache for Names {
        type Function = String;
        fn lookup(&self, name: &str, _constants: &FunctionConstants) -> Option<String> {
            self.0.iter().any(|n| *n == name).then(|| name.to_string())
        }
    }

    fn with_samples(depth: u32, colors: &[u32]) -> RenderPipelineDescriptor {
        let mut descriptor = RenderPipelineDescriptor::new("vs");
        descriptor.depth_attachment = Some(AttachmentFormat::multisampled(PixelFormat::Depth32Float, depth));
        for count in colors {
            descriptor.color_attachments.push(Some(ColorAttachmentState::new(
                AttachmentFormat::multisampled(PixelFormat::Rgba8Unorm, *count),
            )));
        }
        descriptor
    }

    #[test]
    fn sample_counts() {
        assert_eq!(derive_sample_count(&with_samples(0, &[4, 4])), Ok(4));
        assert_eq!(derive_sample_count(&with_samples(0, &[0, 0])), Ok(1));
        assert_eq!(
            derive_sample_count(&with_samples(4, &[8])),
            Err(Error::InconsistentSampleCount {
                attachment: AttachmentPoint::Color(0),
                expected: 4,
                found: 8,
            })
        );
    }

    #[test]
    fn missing_functions() {
        let mut descriptor = RenderPipelineDescriptor::new("vs");
        descriptor.fragment_function = Some("fs".to_string());
        let caps = DeviceCapabilities::default();
        assert_eq!(
            translate_render_pipeline(&descriptor, &Names(&["vs"]), &caps).map(|_| ()),
            Err(Error::FunctionNotFound {
                name: "fs".to_string()
            })
        );
        assert!(matches!(
            translate_render_pipeline(&descriptor, &Names(&["fs"]), &caps),
            Err(Error::FunctionNotFound { name }) if name == "vs"
        ));
    }

    #[test]
    fn full_pipeline() {
        let mut descriptor = with_samples(0, &[4, 0]);
        descriptor.label = Some("gbuffer".to_string());
        descriptor.fragment_function = Some("fs".to_string());
        descriptor.depth_attachment = Some(AttachmentFormat::new(PixelFormat::Depth32FloatStencil8));
        descriptor.stencil_attachment = Some(AttachmentFormat::new(PixelFormat::Depth32FloatStencil8));
        descriptor.constants.set("shadows", FunctionConstantValue::Bool(true));
        descriptor.reserved_buffer_indices = 2;
        descriptor.primitive_topology = PrimitiveTopology::TriangleStrip;
        let mut vertex = VertexDescriptor::new();
        let buffer = vertex.add_layout(VertexBufferLayoutDescriptor::per_vertex(16));
        vertex.add_attribute(VertexAttributeDescriptor::new(VertexFormat::Float4, 0, buffer));
        descriptor.vertex_descriptor = Some(vertex);

        let caps = DeviceCapabilities::default();
        let native = translate_render_pipeline(&descriptor, &Names(&["vs", "fs"]), &caps).unwrap();
        assert_eq!(native.vertex_function, "vs");
        assert_eq!(native.fragment_function.as_deref(), Some("fs"));
        assert_eq!(native.multisample.count, 4);
        assert_eq!(native.constants, vec![("shadows".to_string(), 1.0)]);
        assert_eq!(native.color_targets.len(), 2);
        assert_eq!(
            native.depth_stencil.map(|d| d.format),
            Some(wgpu::TextureFormat::Depth32FloatStencil8)
        );
        assert_eq!(native.primitive.topology, wgpu::PrimitiveTopology::TriangleStrip);
        assert_eq!(native.vertex.and_then(|v| v.buffer_index(0)), Some(30));
    }

    #[test]
    fn mismatched_depth_stencil_formats() {
        let mut descriptor = RenderPipelineDescriptor::new("vs");
        descriptor.depth_attachment = Some(AttachmentFormat::new(PixelFormat::Depth32Float));
        descriptor.stencil_attachment = Some(AttachmentFormat::new(PixelFormat::Stencil8));
        assert!(matches!(
            translate_render_pipeline(&descriptor, &Names(&["vs"]), &DeviceCapabilities::default()),
            Err(Error::NotYetSupported(_))
        ));
    }
}
