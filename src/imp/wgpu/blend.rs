// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::images::blend::{BlendDescriptor, BlendFactor, BlendOperation, ColorWriteMask};
use crate::images::pipeline::ColorAttachmentState;

pub const fn blend_factor_to_wgpu(factor: BlendFactor) -> wgpu::BlendFactor {
    match factor {
        BlendFactor::Zero => wgpu::BlendFactor::Zero,
        BlendFactor::One => wgpu::BlendFactor::One,
        BlendFactor::SourceColor => wgpu::BlendFactor::Src,
        BlendFactor::OneMinusSourceColor => wgpu::BlendFactor::OneMinusSrc,
        BlendFactor::SourceAlpha => wgpu::BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSourceAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DestinationColor => wgpu::BlendFactor::Dst,
        BlendFactor::OneMinusDestinationColor => wgpu::BlendFactor::OneMinusDst,
        BlendFactor::DestinationAlpha => wgpu::BlendFactor::DstAlpha,
        BlendFactor::OneMinusDestinationAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
        BlendFactor::SourceAlphaSaturated => wgpu::BlendFactor::SrcAlphaSaturated,
        BlendFactor::BlendColor => wgpu::BlendFactor::Constant,
        BlendFactor::OneMinusBlendColor => wgpu::BlendFactor::OneMinusConstant,
        BlendFactor::Source1Color => wgpu::BlendFactor::Src1,
        BlendFactor::OneMinusSource1Color => wgpu::BlendFactor::OneMinusSrc1,
        BlendFactor::Source1Alpha => wgpu::BlendFactor::Src1Alpha,
        BlendFactor::OneMinusSource1Alpha => wgpu::BlendFactor::OneMinusSrc1Alpha,
    }
}

pub const fn blend_factor_from_wgpu(factor: wgpu::BlendFactor) -> BlendFactor {
    match factor {
        wgpu::BlendFactor::Zero => BlendFactor::Zero,
        wgpu::BlendFactor::One => BlendFactor::One,
        wgpu::BlendFactor::Src => BlendFactor::SourceColor,
        wgpu::BlendFactor::OneMinusSrc => BlendFactor::OneMinusSourceColor,
        wgpu::BlendFactor::SrcAlpha => BlendFactor::SourceAlpha,
        wgpu::BlendFactor::OneMinusSrcAlpha => BlendFactor::OneMinusSourceAlpha,
        wgpu::BlendFactor::Dst => BlendFactor::DestinationColor,
        wgpu::BlendFactor::OneMinusDst => BlendFactor::OneMinusDestinationColor,
        wgpu::BlendFactor::DstAlpha => BlendFactor::DestinationAlpha,
        wgpu::BlendFactor::OneMinusDstAlpha => BlendFactor::OneMinusDestinationAlpha,
        wgpu::BlendFactor::SrcAlphaSaturated => BlendFactor::SourceAlphaSaturated,
        wgpu::BlendFactor::Constant => BlendFactor::BlendColor,
        wgpu::BlendFactor::OneMinusConstant => BlendFactor::OneMinusBlendColor,
        wgpu::BlendFactor::Src1 => BlendFactor::Source1Color,
        wgpu::BlendFactor::OneMinusSrc1 => BlendFactor::OneMinusSource1Color,
        wgpu::BlendFactor::Src1Alpha => BlendFactor::Source1Alpha,
        wgpu::BlendFactor::OneMinusSrc1Alpha => BlendFactor::OneMinusSource1Alpha,
    }
}

pub const fn blend_operation_to_wgpu(operation: BlendOperation) -> wgpu::BlendOperation {
    match operation {
        BlendOperation::Add => wgpu::BlendOperation::Add,
        BlendOperation::Subtract => wgpu::BlendOperation::Subtract,
        BlendOperation::ReverseSubtract => wgpu::BlendOperation::ReverseSubtract,
        BlendOperation::Min => wgpu::BlendOperation::Min,
        BlendOperation::Max => wgpu::BlendOperation::Max,
    }
}

pub const fn blend_operation_from_wgpu(operation: wgpu::BlendOperation) -> BlendOperation {
    match operation {
        wgpu::BlendOperation::Add => BlendOperation::Add,
        wgpu::BlendOperation::Subtract => BlendOperation::Subtract,
        wgpu::BlendOperation::ReverseSubtract => BlendOperation::ReverseSubtract,
        wgpu::BlendOperation::Min => BlendOperation::Min,
        wgpu::BlendOperation::Max => BlendOperation::Max,
    }
}

pub fn write_mask_to_wgpu(mask: ColorWriteMask) -> wgpu::ColorWrites {
    let mut native = wgpu::ColorWrites::empty();
    if mask.contains(ColorWriteMask::RED) {
        native |= wgpu::ColorWrites::RED;
    }
    if mask.contains(ColorWriteMask::GREEN) {
        native |= wgpu::ColorWrites::GREEN;
    }
    if mask.contains(ColorWriteMask::BLUE) {
        native |= wgpu::ColorWrites::BLUE;
    }
    if mask.contains(ColorWriteMask::ALPHA) {
        native |= wgpu::ColorWrites::ALPHA;
    }
    native
}

pub fn translate_blend(blend: &BlendDescriptor) -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: blend_factor_to_wgpu(blend.source_rgb_factor),
            dst_factor: blend_factor_to_wgpu(blend.destination_rgb_factor),
            operation: blend_operation_to_wgpu(blend.rgb_operation),
        },
        alpha: wgpu::BlendComponent {
            src_factor: blend_factor_to_wgpu(blend.source_alpha_factor),
            dst_factor: blend_factor_to_wgpu(blend.destination_alpha_factor),
            operation: blend_operation_to_wgpu(blend.alpha_operation),
        },
    }
}

pub fn translate_color_target(state: &ColorAttachmentState) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format: state.format.pixel_format.to_wgpu(),
        blend: state.blend.as_ref().map(translate_blend),
        write_mask: write_mask_to_wgpu(state.write_mask),
    }
}
