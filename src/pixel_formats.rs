// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Hardware-agnostic pixel formats.
//!
//! Descriptors coming out of the frame graph carry their format as data, decided at
//! runtime per pass or per resource, so formats are a plain enumeration here.  Each
//! backend maps every variant to exactly one native format.
//!
//! # Available Formats
//!
//! ## Colour
//! - 8-bit: [`PixelFormat::R8Unorm`], [`PixelFormat::R8Snorm`], [`PixelFormat::R8Uint`],
//!   [`PixelFormat::R8Sint`], [`PixelFormat::Rg8Unorm`], [`PixelFormat::Rgba8Unorm`],
//!   [`PixelFormat::Rgba8UnormSrgb`], [`PixelFormat::Bgra8Unorm`], [`PixelFormat::Bgra8UnormSrgb`]
//! - 16-bit: [`PixelFormat::R16Float`], [`PixelFormat::R16Uint`], [`PixelFormat::Rg16Float`],
//!   [`PixelFormat::Rgba16Float`], [`PixelFormat::Rgba16Unorm`]
//! - 32-bit: [`PixelFormat::R32Float`], [`PixelFormat::R32Uint`], [`PixelFormat::R32Sint`],
//!   [`PixelFormat::Rg32Float`], [`PixelFormat::Rgba32Float`], [`PixelFormat::Rgba32Uint`]
//! - packed: [`PixelFormat::Rgb10a2Unorm`]
//!
//! ## Depth and stencil
//! [`PixelFormat::Depth16Unorm`], [`PixelFormat::Depth32Float`], [`PixelFormat::Stencil8`],
//! [`PixelFormat::Depth24UnormStencil8`], [`PixelFormat::Depth32FloatStencil8`]
//!
//! ## Block compressed
//! [`PixelFormat::Bc1RgbaUnorm`], [`PixelFormat::Bc3RgbaUnorm`], [`PixelFormat::Bc5RgUnorm`],
//! [`PixelFormat::Bc7RgbaUnorm`], [`PixelFormat::Bc7RgbaUnormSrgb`]
//!
//! ```
//! use tables_and_targets::pixel_formats::PixelFormat;
//!
//! assert!(PixelFormat::Depth32FloatStencil8.is_depth());
//! assert!(PixelFormat::Depth32FloatStencil8.has_stencil());
//! assert!(PixelFormat::Bgra8UnormSrgb.is_srgb());
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    R8Unorm,
    R8Snorm,
    R8Uint,
    R8Sint,
    R16Float,
    R16Uint,
    R32Float,
    R32Uint,
    R32Sint,
    Rg8Unorm,
    Rg16Float,
    Rg32Float,
    Rgba8Unorm,
    Rgba8UnormSrgb,
    Bgra8Unorm,
    Bgra8UnormSrgb,
    Rgb10a2Unorm,
    Rgba16Float,
    Rgba16Unorm,
    Rgba32Float,
    Rgba32Uint,
    Depth16Unorm,
    Depth32Float,
    Stencil8,
    /// 24-bit depth with 8-bit stencil.  Some backends store the depth part with more precision.
    Depth24UnormStencil8,
    Depth32FloatStencil8,
    Bc1RgbaUnorm,
    Bc3RgbaUnorm,
    Bc5RgUnorm,
    Bc7RgbaUnorm,
    Bc7RgbaUnormSrgb,
}

impl PixelFormat {
    /// Every format, in declaration order.
    pub const ALL: [PixelFormat; 31] = [
        PixelFormat::R8Unorm,
        PixelFormat::R8Snorm,
        PixelFormat::R8Uint,
        PixelFormat::R8Sint,
        PixelFormat::R16Float,
        PixelFormat::R16Uint,
        PixelFormat::R32Float,
        PixelFormat::R32Uint,
        PixelFormat::R32Sint,
        PixelFormat::Rg8Unorm,
        PixelFormat::Rg16Float,
        PixelFormat::Rg32Float,
        PixelFormat::Rgba8Unorm,
        PixelFormat::Rgba8UnormSrgb,
        PixelFormat::Bgra8Unorm,
        PixelFormat::Bgra8UnormSrgb,
        PixelFormat::Rgb10a2Unorm,
        PixelFormat::Rgba16Float,
        PixelFormat::Rgba16Unorm,
        PixelFormat::Rgba32Float,
        PixelFormat::Rgba32Uint,
        PixelFormat::Depth16Unorm,
        PixelFormat::Depth32Float,
        PixelFormat::Stencil8,
        PixelFormat::Depth24UnormStencil8,
        PixelFormat::Depth32FloatStencil8,
        PixelFormat::Bc1RgbaUnorm,
        PixelFormat::Bc3RgbaUnorm,
        PixelFormat::Bc5RgUnorm,
        PixelFormat::Bc7RgbaUnorm,
        PixelFormat::Bc7RgbaUnormSrgb,
    ];

    /// Whether the format has a depth aspect.
    pub const fn is_depth(&self) -> bool {
        matches!(
            self,
            PixelFormat::Depth16Unorm
                | PixelFormat::Depth32Float
                | PixelFormat::Depth24UnormStencil8
                | PixelFormat::Depth32FloatStencil8
        )
    }

    /// Whether the format has a stencil aspect.
    pub const fn has_stencil(&self) -> bool {
        matches!(
            self,
            PixelFormat::Stencil8
                | PixelFormat::Depth24UnormStencil8
                | PixelFormat::Depth32FloatStencil8
        )
    }

    pub const fn is_srgb(&self) -> bool {
        matches!(
            self,
            PixelFormat::Rgba8UnormSrgb | PixelFormat::Bgra8UnormSrgb | PixelFormat::Bc7RgbaUnormSrgb
        )
    }

    /// Whether the format may be bound as a colour attachment.
    pub const fn is_color_renderable(&self) -> bool {
        !self.is_depth() && !self.has_stencil() && !self.is_compressed()
    }

    pub const fn is_compressed(&self) -> bool {
        matches!(
            self,
            PixelFormat::Bc1RgbaUnorm
                | PixelFormat::Bc3RgbaUnorm
                | PixelFormat::Bc5RgUnorm
                | PixelFormat::Bc7RgbaUnorm
                | PixelFormat::Bc7RgbaUnormSrgb
        )
    }
}
