// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::Error;
use crate::images::depth_stencil::{DepthStencilDescriptor, StencilDescriptor, StencilOperation};
use crate::imp::wgpu::sampler::compare_function_to_wgpu;
use crate::pixel_formats::PixelFormat;

pub const fn stencil_operation_to_wgpu(operation: StencilOperation) -> wgpu::StencilOperation {
    match operation {
        StencilOperation::Keep => wgpu::StencilOperation::Keep,
        StencilOperation::Zero => wgpu::StencilOperation::Zero,
        StencilOperation::Replace => wgpu::StencilOperation::Replace,
        StencilOperation::IncrementClamp => wgpu::StencilOperation::IncrementClamp,
        StencilOperation::DecrementClamp => wgpu::StencilOperation::DecrementClamp,
        StencilOperation::Invert => wgpu::StencilOperation::Invert,
        StencilOperation::IncrementWrap => wgpu::StencilOperation::IncrementWrap,
        StencilOperation::DecrementWrap => wgpu::StencilOperation::DecrementWrap,
    }
}

pub const fn stencil_operation_from_wgpu(operation: wgpu::StencilOperation) -> StencilOperation {
    match operation {
        wgpu::StencilOperation::Keep => StencilOperation::Keep,
        wgpu::StencilOperation::Zero => StencilOperation::Zero,
        wgpu::StencilOperation::Replace => StencilOperation::Replace,
        wgpu::StencilOperation::IncrementClamp => StencilOperation::IncrementClamp,
        wgpu::StencilOperation::DecrementClamp => StencilOperation::DecrementClamp,
        wgpu::StencilOperation::Invert => StencilOperation::Invert,
        wgpu::StencilOperation::IncrementWrap => StencilOperation::IncrementWrap,
        wgpu::StencilOperation::DecrementWrap => StencilOperation::DecrementWrap,
    }
}

fn stencil_face(face: &StencilDescriptor) -> wgpu::StencilFaceState {
    wgpu::StencilFaceState {
        compare: compare_function_to_wgpu(face.stencil_compare_function),
        fail_op: stencil_operation_to_wgpu(face.stencil_failure_operation),
        depth_fail_op: stencil_operation_to_wgpu(face.depth_failure_operation),
        pass_op: stencil_operation_to_wgpu(face.depth_stencil_pass_operation),
    }
}

/**
Depth and stencil state for a pipeline whose depth/stencil attachment is `format`.

wgpu keeps one read mask and one write mask for both faces.

# Errors
`NotYetSupported` when the front and back faces have different masks.
*/
pub fn translate_depth_stencil(
    descriptor: &DepthStencilDescriptor,
    format: PixelFormat,
) -> Result<wgpu::DepthStencilState, Error> {
    let front = &descriptor.front_face_stencil;
    let back = &descriptor.back_face_stencil;
    if front.read_mask != back.read_mask || front.write_mask != back.write_mask {
        return Err(Error::NotYetSupported("per-face stencil masks"));
    }
    Ok(wgpu::DepthStencilState {
        format: format.to_wgpu(),
        depth_write_enabled: descriptor.is_depth_write_enabled,
        depth_compare: compare_function_to_wgpu(descriptor.depth_compare_function),
        stencil: wgpu::StencilState {
            front: stencil_face(front),
            back: stencil_face(back),
            read_mask: front.read_mask,
            write_mask: front.write_mask,
        },
        bias: wgpu::DepthBiasState::default(),
    })
}
