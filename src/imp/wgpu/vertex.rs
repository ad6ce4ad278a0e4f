// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Vertex descriptor translation.

The device has one buffer index space shared by vertex buffers, argument tables and push
constants.  Tables and push constants are numbered up from zero, so vertex buffers are
numbered down from the top: logical layout `i` lands at `buffer_index_count - 1 - i`.
*/

use crate::Error;
use crate::images::DeviceCapabilities;
use crate::images::vertex_layout::{VertexDescriptor, VertexFormat, VertexStepFunction};

pub const fn vertex_format_to_wgpu(format: VertexFormat) -> wgpu::VertexFormat {
    match format {
        VertexFormat::Float => wgpu::VertexFormat::Float32,
        VertexFormat::Float2 => wgpu::VertexFormat::Float32x2,
        VertexFormat::Float3 => wgpu::VertexFormat::Float32x3,
        VertexFormat::Float4 => wgpu::VertexFormat::Float32x4,
        VertexFormat::Half2 => wgpu::VertexFormat::Float16x2,
        VertexFormat::Half4 => wgpu::VertexFormat::Float16x4,
        VertexFormat::UChar4 => wgpu::VertexFormat::Uint8x4,
        VertexFormat::UChar4Normalized => wgpu::VertexFormat::Unorm8x4,
        VertexFormat::Char4Normalized => wgpu::VertexFormat::Snorm8x4,
        VertexFormat::UShort2 => wgpu::VertexFormat::Uint16x2,
        VertexFormat::UShort2Normalized => wgpu::VertexFormat::Unorm16x2,
        VertexFormat::Int => wgpu::VertexFormat::Sint32,
        VertexFormat::Int2 => wgpu::VertexFormat::Sint32x2,
        VertexFormat::Int3 => wgpu::VertexFormat::Sint32x3,
        VertexFormat::Int4 => wgpu::VertexFormat::Sint32x4,
        VertexFormat::UInt => wgpu::VertexFormat::Uint32,
        VertexFormat::UInt2 => wgpu::VertexFormat::Uint32x2,
        VertexFormat::UInt3 => wgpu::VertexFormat::Uint32x3,
        VertexFormat::UInt4 => wgpu::VertexFormat::Uint32x4,
    }
}

pub fn vertex_format_from_wgpu(format: wgpu::VertexFormat) -> Result<VertexFormat, Error> {
    VertexFormat::ALL
        .into_iter()
        .find(|f| vertex_format_to_wgpu(*f) == format)
        .ok_or_else(|| Error::unmapped("wgpu::VertexFormat", format))
}

/// # Errors
/// wgpu cannot fetch one element for every vertex, so `Constant` has no counterpart.
pub fn step_function_to_wgpu(step: VertexStepFunction) -> Result<wgpu::VertexStepMode, Error> {
    match step {
        VertexStepFunction::PerVertex => Ok(wgpu::VertexStepMode::Vertex),
        VertexStepFunction::PerInstance => Ok(wgpu::VertexStepMode::Instance),
        VertexStepFunction::Constant => Err(Error::unmapped("VertexStepFunction", step)),
    }
}

pub const fn step_function_from_wgpu(step: wgpu::VertexStepMode) -> VertexStepFunction {
    match step {
        wgpu::VertexStepMode::Vertex => VertexStepFunction::PerVertex,
        wgpu::VertexStepMode::Instance => VertexStepFunction::PerInstance,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeVertexBufferLayout {
    /// Slot in the device's shared buffer index space.
    pub buffer_index: u32,
    pub array_stride: u64,
    pub step_mode: wgpu::VertexStepMode,
    pub attributes: Vec<wgpu::VertexAttribute>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NativeVertexDescriptor {
    /// In logical layout order.
    pub layouts: Vec<NativeVertexBufferLayout>,
}

impl NativeVertexDescriptor {
    /// The device buffer index logical layout `layout` was placed at.
    pub fn buffer_index(&self, layout: usize) -> Option<u32> {
        self.layouts.get(layout).map(|l| l.buffer_index)
    }

    /// Layouts for a `wgpu::VertexState`, which numbers vertex buffers by position.
    pub fn vertex_buffer_layouts(&self) -> Vec<wgpu::VertexBufferLayout<'_>> {
        self.layouts
            .iter()
            .map(|l| wgpu::VertexBufferLayout {
                array_stride: l.array_stride,
                step_mode: l.step_mode,
                attributes: &l.attributes,
            })
            .collect()
    }
}

/**
Translates `descriptor`, placing its buffer layouts at the top of the device's buffer
index space.  `reserved_low` indices at the bottom stay free for argument tables and
push constants.

Attributes take shader locations in declaration order.

# Errors
- [`Error::VertexBufferIndexExhausted`] when the layouts don't fit above `reserved_low`.
- [`Error::UnmappedEnumerationValue`] for a `Constant` step function.
- [`Error::NotYetSupported`] for step rates other than 1.

# Panics
If an attribute names a layout the descriptor does not have.
*/
pub fn translate_vertex_descriptor(
    descriptor: &VertexDescriptor,
    capabilities: &DeviceCapabilities,
    reserved_low: u32,
) -> Result<NativeVertexDescriptor, Error> {
    let requested = descriptor.layouts.len() as u32;
    let available = capabilities.buffer_index_count.saturating_sub(reserved_low);
    if requested > available {
        return Err(Error::VertexBufferIndexExhausted {
            requested,
            available,
        });
    }
    let mut layouts = Vec::with_capacity(descriptor.layouts.len());
    for (i, layout) in descriptor.layouts.iter().enumerate() {
        if layout.step_rate != 1 {
            return Err(Error::NotYetSupported("vertex step rates other than 1"));
        }
        layouts.push(NativeVertexBufferLayout {
            buffer_index: capabilities.buffer_index_count - 1 - i as u32,
            array_stride: layout.stride,
            step_mode: step_function_to_wgpu(layout.step_function)?,
            attributes: Vec::new(),
        });
    }
    for (location, attribute) in descriptor.attributes.iter().enumerate() {
        let layout = layouts
            .get_mut(attribute.buffer_index as usize)
            .unwrap_or_else(|| {
                panic!(
                    "attribute {location} reads layout {} but only {} exist",
                    attribute.buffer_index, requested
                )
            });
        layout.attributes.push(wgpu::VertexAttribute {
            format: vertex_format_to_wgpu(attribute.format),
            offset: attribute.offset,
            shader_location: location as u32,
        });
    }
    Ok(NativeVertexDescriptor { layouts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::vertex_layout::{VertexAttributeDescriptor, VertexBufferLayoutDescriptor};

    fn two_buffers() -> VertexDescriptor {
        let mut vertex = VertexDescriptor::new();
        let positions = vertex.add_layout(VertexBufferLayoutDescriptor::per_vertex(12));
        let instances = vertex.add_layout(VertexBufferLayoutDescriptor::per_instance(64));
        vertex.add_attribute(VertexAttributeDescriptor::new(VertexFormat::Float3, 0, positions));
        vertex.add_attribute(VertexAttributeDescriptor::new(VertexFormat::Float4, 0, instances));
        vertex.add_attribute(VertexAttributeDescriptor::new(VertexFormat::Float4, 16, instances));
        vertex
    }

    #[test]
    fn formats_round_trip() {
        for format in VertexFormat::ALL {
            assert_eq!(vertex_format_from_wgpu(vertex_format_to_wgpu(format)), Ok(format));
            assert_eq!(vertex_format_to_wgpu(format).size(), format.size(), "{:?}", format);
        }
        for step in [VertexStepFunction::PerVertex, VertexStepFunction::PerInstance] {
            assert_eq!(step_function_from_wgpu(step_function_to_wgpu(step).unwrap()), step);
        }
    }

    #[test]
    fn layouts_from_the_top() {
        let caps = DeviceCapabilities::default();
        let native = translate_vertex_descriptor(&two_buffers(), &caps, 4).unwrap();
        assert_eq!(native.buffer_index(0), Some(30));
        assert_eq!(native.buffer_index(1), Some(29));
        assert_eq!(native.layouts[1].step_mode, wgpu::VertexStepMode::Instance);
        let locations: Vec<u32> = native.layouts[1]
            .attributes
            .iter()
            .map(|a| a.shader_location)
            .collect();
        assert_eq!(locations, vec![1, 2]);
        assert_eq!(native.vertex_buffer_layouts()[0].array_stride, 12);
    }

    #[test]
    fn no_collision_with_reserved_range() {
        let caps = DeviceCapabilities {
            buffer_index_count: 8,
            sparse_textures: false,
        };
        let mut vertex = VertexDescriptor::new();
        for _ in 0..5 {
            vertex.add_layout(VertexBufferLayoutDescriptor::per_vertex(16));
        }
        let native = translate_vertex_descriptor(&vertex, &caps, 3).unwrap();
        for layout in &native.layouts {
            assert!(layout.buffer_index >= 3);
        }
        assert_eq!(
            translate_vertex_descriptor(&vertex, &caps, 4),
            Err(Error::VertexBufferIndexExhausted {
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn constant_step_and_rates() {
        let caps = DeviceCapabilities::default();
        let mut vertex = VertexDescriptor::new();
        vertex.add_layout(VertexBufferLayoutDescriptor {
            stride: 16,
            step_function: VertexStepFunction::Constant,
            step_rate: 1,
        });
        assert!(matches!(
            translate_vertex_descriptor(&vertex, &caps, 0),
            Err(Error::UnmappedEnumerationValue { kind: "VertexStepFunction", .. })
        ));

        let mut vertex = VertexDescriptor::new();
        vertex.add_layout(VertexBufferLayoutDescriptor {
            step_rate: 2,
            ..VertexBufferLayoutDescriptor::per_instance(16)
        });
        assert!(matches!(
            translate_vertex_descriptor(&vertex, &caps, 0),
            Err(Error::NotYetSupported(_))
        ));
    }
}
