// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Color blending state for one color attachment.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SourceColor,
    OneMinusSourceColor,
    SourceAlpha,
    OneMinusSourceAlpha,
    DestinationColor,
    OneMinusDestinationColor,
    DestinationAlpha,
    OneMinusDestinationAlpha,
    SourceAlphaSaturated,
    BlendColor,
    OneMinusBlendColor,
    Source1Color,
    OneMinusSource1Color,
    Source1Alpha,
    OneMinusSource1Alpha,
}

impl BlendFactor {
    pub const ALL: [BlendFactor; 17] = [
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::SourceColor,
        BlendFactor::OneMinusSourceColor,
        BlendFactor::SourceAlpha,
        BlendFactor::OneMinusSourceAlpha,
        BlendFactor::DestinationColor,
        BlendFactor::OneMinusDestinationColor,
        BlendFactor::DestinationAlpha,
        BlendFactor::OneMinusDestinationAlpha,
        BlendFactor::SourceAlphaSaturated,
        BlendFactor::BlendColor,
        BlendFactor::OneMinusBlendColor,
        BlendFactor::Source1Color,
        BlendFactor::OneMinusSource1Color,
        BlendFactor::Source1Alpha,
        BlendFactor::OneMinusSource1Alpha,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOperation {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

impl BlendOperation {
    pub const ALL: [BlendOperation; 5] = [
        BlendOperation::Add,
        BlendOperation::Subtract,
        BlendOperation::ReverseSubtract,
        BlendOperation::Min,
        BlendOperation::Max,
    ];
}

bitflags::bitflags! {
    /// Which channels of a color attachment a pipeline writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorWriteMask: u8 {
        const RED = 1 << 0;
        const GREEN = 1 << 1;
        const BLUE = 1 << 2;
        const ALPHA = 1 << 3;
        const ALL = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits() | Self::ALPHA.bits();
    }
}

impl Default for ColorWriteMask {
    fn default() -> Self {
        ColorWriteMask::ALL
    }
}

/**
Blend equations for color and alpha.

`result = source * source_factor <operation> destination * destination_factor`,
separately for the RGB channels and for alpha.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendDescriptor {
    pub source_rgb_factor: BlendFactor,
    pub destination_rgb_factor: BlendFactor,
    pub rgb_operation: BlendOperation,
    pub source_alpha_factor: BlendFactor,
    pub destination_alpha_factor: BlendFactor,
    pub alpha_operation: BlendOperation,
}

impl BlendDescriptor {
    /// Standard "over" compositing with straight alpha.
    pub const ALPHA_BLENDING: BlendDescriptor = BlendDescriptor {
        source_rgb_factor: BlendFactor::SourceAlpha,
        destination_rgb_factor: BlendFactor::OneMinusSourceAlpha,
        rgb_operation: BlendOperation::Add,
        source_alpha_factor: BlendFactor::One,
        destination_alpha_factor: BlendFactor::OneMinusSourceAlpha,
        alpha_operation: BlendOperation::Add,
    };

    /// Premultiplied-alpha compositing.
    pub const PREMULTIPLIED: BlendDescriptor = BlendDescriptor {
        source_rgb_factor: BlendFactor::One,
        destination_rgb_factor: BlendFactor::OneMinusSourceAlpha,
        rgb_operation: BlendOperation::Add,
        source_alpha_factor: BlendFactor::One,
        destination_alpha_factor: BlendFactor::OneMinusSourceAlpha,
        alpha_operation: BlendOperation::Add,
    };
}
