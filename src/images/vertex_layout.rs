// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Vertex buffer layout descriptions.
//!
//! A vertex descriptor has two parts.  Buffer layouts say how each vertex buffer is
//! strided and stepped.  Attributes say where each shader input lives: which buffer,
//! at what offset, in what format.
//!
//! Buffer layouts are numbered from zero here.  Backends may place them anywhere in their
//! own buffer index space; attributes refer to layouts by their position in
//! [`VertexDescriptor::layouts`], never by backend index.
//!
//! # Example
//!
//! ```
//! use tables_and_targets::images::vertex_layout::{
//!     VertexAttributeDescriptor, VertexBufferLayoutDescriptor, VertexDescriptor, VertexFormat,
//! };
//!
//! // Interleaved position and texture coordinate.
//! let mut vertex = VertexDescriptor::new();
//! let buffer = vertex.add_layout(VertexBufferLayoutDescriptor::per_vertex(20));
//! vertex.add_attribute(VertexAttributeDescriptor::new(VertexFormat::Float3, 0, buffer));
//! vertex.add_attribute(VertexAttributeDescriptor::new(VertexFormat::Float2, 12, buffer));
//! assert_eq!(vertex.layouts.len(), 1);
//! ```

/// How often the fetch position advances through a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexStepFunction {
    /// Every vertex reads the same element.
    Constant,
    PerVertex,
    PerInstance,
}

/// The format of one vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VertexFormat {
    Float,
    Float2,
    Float3,
    Float4,
    Half2,
    Half4,
    UChar4,
    UChar4Normalized,
    Char4Normalized,
    UShort2,
    UShort2Normalized,
    Int,
    Int2,
    Int3,
    Int4,
    UInt,
    UInt2,
    UInt3,
    UInt4,
}

impl VertexFormat {
    pub const ALL: [VertexFormat; 19] = [
        VertexFormat::Float,
        VertexFormat::Float2,
        VertexFormat::Float3,
        VertexFormat::Float4,
        VertexFormat::Half2,
        VertexFormat::Half4,
        VertexFormat::UChar4,
        VertexFormat::UChar4Normalized,
        VertexFormat::Char4Normalized,
        VertexFormat::UShort2,
        VertexFormat::UShort2Normalized,
        VertexFormat::Int,
        VertexFormat::Int2,
        VertexFormat::Int3,
        VertexFormat::Int4,
        VertexFormat::UInt,
        VertexFormat::UInt2,
        VertexFormat::UInt3,
        VertexFormat::UInt4,
    ];

    /// Size of one attribute value in bytes.
    pub const fn size(&self) -> u64 {
        match self {
            VertexFormat::Float | VertexFormat::Int | VertexFormat::UInt => 4,
            VertexFormat::Half2
            | VertexFormat::UChar4
            | VertexFormat::UChar4Normalized
            | VertexFormat::Char4Normalized
            | VertexFormat::UShort2
            | VertexFormat::UShort2Normalized => 4,
            VertexFormat::Float2 | VertexFormat::Half4 | VertexFormat::Int2 | VertexFormat::UInt2 => 8,
            VertexFormat::Float3 | VertexFormat::Int3 | VertexFormat::UInt3 => 12,
            VertexFormat::Float4 | VertexFormat::Int4 | VertexFormat::UInt4 => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexBufferLayoutDescriptor {
    pub stride: u64,
    pub step_function: VertexStepFunction,
    /// Elements advance once every `step_rate` vertices or instances.
    pub step_rate: u32,
}

impl VertexBufferLayoutDescriptor {
    pub const fn per_vertex(stride: u64) -> Self {
        Self {
            stride,
            step_function: VertexStepFunction::PerVertex,
            step_rate: 1,
        }
    }

    pub const fn per_instance(stride: u64) -> Self {
        Self {
            stride,
            step_function: VertexStepFunction::PerInstance,
            step_rate: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttributeDescriptor {
    pub format: VertexFormat,
    pub offset: u64,
    /// Position of the source layout in [`VertexDescriptor::layouts`].
    pub buffer_index: u32,
}

impl VertexAttributeDescriptor {
    pub const fn new(format: VertexFormat, offset: u64, buffer_index: u32) -> Self {
        Self {
            format,
            offset,
            buffer_index,
        }
    }
}

/// Buffer layouts and attributes for a pipeline's vertex stage.
///
/// Attributes are assigned shader locations in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VertexDescriptor {
    pub layouts: Vec<VertexBufferLayoutDescriptor>,
    pub attributes: Vec<VertexAttributeDescriptor>,
}

impl VertexDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a buffer layout, returning the index attributes use to refer to it.
    pub fn add_layout(&mut self, layout: VertexBufferLayoutDescriptor) -> u32 {
        self.layouts.push(layout);
        (self.layouts.len() - 1) as u32
    }

    pub fn add_attribute(&mut self, attribute: VertexAttributeDescriptor) {
        self.attributes.push(attribute);
    }
}
