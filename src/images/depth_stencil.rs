// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Depth and stencil test state.

use crate::bindings::sampler::CompareFunction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilOperation {
    Keep,
    Zero,
    Replace,
    IncrementClamp,
    DecrementClamp,
    Invert,
    IncrementWrap,
    DecrementWrap,
}

impl StencilOperation {
    pub const ALL: [StencilOperation; 8] = [
        StencilOperation::Keep,
        StencilOperation::Zero,
        StencilOperation::Replace,
        StencilOperation::IncrementClamp,
        StencilOperation::DecrementClamp,
        StencilOperation::Invert,
        StencilOperation::IncrementWrap,
        StencilOperation::DecrementWrap,
    ];
}

/// Stencil state for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilDescriptor {
    pub stencil_compare_function: CompareFunction,
    pub stencil_failure_operation: StencilOperation,
    pub depth_failure_operation: StencilOperation,
    pub depth_stencil_pass_operation: StencilOperation,
    pub read_mask: u32,
    pub write_mask: u32,
}

impl Default for StencilDescriptor {
    /// Always passes and never modifies the buffer.
    fn default() -> Self {
        Self {
            stencil_compare_function: CompareFunction::Always,
            stencil_failure_operation: StencilOperation::Keep,
            depth_failure_operation: StencilOperation::Keep,
            depth_stencil_pass_operation: StencilOperation::Keep,
            read_mask: 0xffff_ffff,
            write_mask: 0xffff_ffff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilDescriptor {
    pub depth_compare_function: CompareFunction,
    pub is_depth_write_enabled: bool,
    pub front_face_stencil: StencilDescriptor,
    pub back_face_stencil: StencilDescriptor,
}

impl Default for DepthStencilDescriptor {
    fn default() -> Self {
        Self {
            depth_compare_function: CompareFunction::Always,
            is_depth_write_enabled: false,
            front_face_stencil: StencilDescriptor::default(),
            back_face_stencil: StencilDescriptor::default(),
        }
    }
}

impl DepthStencilDescriptor {
    /// A conventional less-than depth test with writes on and stencil off.
    pub fn depth_test() -> Self {
        Self {
            depth_compare_function: CompareFunction::Less,
            is_depth_write_enabled: true,
            ..Self::default()
        }
    }
}
