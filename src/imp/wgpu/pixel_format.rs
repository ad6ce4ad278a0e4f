// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::Error;
use crate::pixel_formats::PixelFormat;

impl PixelFormat {
    pub const fn to_wgpu(&self) -> wgpu::TextureFormat {
        match self {
            PixelFormat::R8Unorm => wgpu::TextureFormat::R8Unorm,
            PixelFormat::R8Snorm => wgpu::TextureFormat::R8Snorm,
            PixelFormat::R8Uint => wgpu::TextureFormat::R8Uint,
            PixelFormat::R8Sint => wgpu::TextureFormat::R8Sint,
            PixelFormat::R16Float => wgpu::TextureFormat::R16Float,
            PixelFormat::R16Uint => wgpu::TextureFormat::R16Uint,
            PixelFormat::R32Float => wgpu::TextureFormat::R32Float,
            PixelFormat::R32Uint => wgpu::TextureFormat::R32Uint,
            PixelFormat::R32Sint => wgpu::TextureFormat::R32Sint,
            PixelFormat::Rg8Unorm => wgpu::TextureFormat::Rg8Unorm,
            PixelFormat::Rg16Float => wgpu::TextureFormat::Rg16Float,
            PixelFormat::Rg32Float => wgpu::TextureFormat::Rg32Float,
            PixelFormat::Rgba8Unorm => wgpu::TextureFormat::Rgba8Unorm,
            PixelFormat::Rgba8UnormSrgb => wgpu::TextureFormat::Rgba8UnormSrgb,
            PixelFormat::Bgra8Unorm => wgpu::TextureFormat::Bgra8Unorm,
            PixelFormat::Bgra8UnormSrgb => wgpu::TextureFormat::Bgra8UnormSrgb,
            PixelFormat::Rgb10a2Unorm => wgpu::TextureFormat::Rgb10a2Unorm,
            PixelFormat::Rgba16Float => wgpu::TextureFormat::Rgba16Float,
            PixelFormat::Rgba16Unorm => wgpu::TextureFormat::Rgba16Unorm,
            PixelFormat::Rgba32Float => wgpu::TextureFormat::Rgba32Float,
            PixelFormat::Rgba32Uint => wgpu::TextureFormat::Rgba32Uint,
            PixelFormat::Depth16Unorm => wgpu::TextureFormat::Depth16Unorm,
            PixelFormat::Depth32Float => wgpu::TextureFormat::Depth32Float,
            PixelFormat::Stencil8 => wgpu::TextureFormat::Stencil8,
            //wgpu may store the depth part as 32-bit float
            PixelFormat::Depth24UnormStencil8 => wgpu::TextureFormat::Depth24PlusStencil8,
            PixelFormat::Depth32FloatStencil8 => wgpu::TextureFormat::Depth32FloatStencil8,
            PixelFormat::Bc1RgbaUnorm => wgpu::TextureFormat::Bc1RgbaUnorm,
            PixelFormat::Bc3RgbaUnorm => wgpu::TextureFormat::Bc3RgbaUnorm,
            PixelFormat::Bc5RgUnorm => wgpu::TextureFormat::Bc5RgUnorm,
            PixelFormat::Bc7RgbaUnorm => wgpu::TextureFormat::Bc7RgbaUnorm,
            PixelFormat::Bc7RgbaUnormSrgb => wgpu::TextureFormat::Bc7RgbaUnormSrgb,
        }
    }

    /// The abstract format for `format`, for formats that have one.
    pub fn from_wgpu(format: wgpu::TextureFormat) -> Result<Self, Error> {
        PixelFormat::ALL
            .into_iter()
            .find(|f| f.to_wgpu() == format)
            .ok_or_else(|| Error::unmapped("wgpu::TextureFormat", format))
    }
}
