// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Render target descriptions.

A [`RenderTargetDescriptor`] says which virtual textures a pass renders into.  It does not
say what happens to their contents at the start and end of the pass; the frame graph
decides that separately, after it knows which passes read each attachment, and supplies
it as [`PassActions`].  The two are merged when the pass is translated for a backend.
*/

use std::fmt::Display;

use crate::bindings::coordinates::Size;
use crate::bindings::handles::{BufferHandle, TextureHandle};

/// Names one attachment of a pass or pipeline, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    Color(usize),
    Depth,
    Stencil,
}

impl Display for AttachmentPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentPoint::Color(index) => write!(f, "color attachment {index}"),
            AttachmentPoint::Depth => write!(f, "depth attachment"),
            AttachmentPoint::Stencil => write!(f, "stencil attachment"),
        }
    }
}

/// What happens to an attachment's contents when the pass begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadAction {
    /// Contents are undefined.
    #[default]
    DontCare,
    Load,
    /// Cleared to the attachment's clear value.
    Clear,
}

/// What happens to an attachment's contents when the pass ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoreAction {
    #[default]
    DontCare,
    Store,
    /// Resolve into the resolve target, discarding the multisampled contents.
    MultisampleResolve,
    StoreAndMultisampleResolve,
}

impl StoreAction {
    pub fn resolves(&self) -> bool {
        matches!(
            self,
            StoreAction::MultisampleResolve | StoreAction::StoreAndMultisampleResolve
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttachmentActions {
    pub load: LoadAction,
    pub store: StoreAction,
}

impl AttachmentActions {
    pub const fn new(load: LoadAction, store: StoreAction) -> Self {
        Self { load, store }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClearColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ClearColor {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// One subresource of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentTarget {
    pub texture: TextureHandle,
    pub level: u32,
    pub slice: u32,
    pub depth_plane: u32,
}

impl AttachmentTarget {
    /// Level 0, slice 0, plane 0 of `texture`.
    pub const fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            level: 0,
            slice: 0,
            depth_plane: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetAttachmentDescriptor {
    pub target: AttachmentTarget,
    pub resolve: Option<AttachmentTarget>,
}

impl RenderTargetAttachmentDescriptor {
    pub const fn new(texture: TextureHandle) -> Self {
        Self {
            target: AttachmentTarget::new(texture),
            resolve: None,
        }
    }

    pub const fn with_resolve(mut self, resolve: AttachmentTarget) -> Self {
        self.resolve = Some(resolve);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAttachmentDescriptor {
    pub attachment: RenderTargetAttachmentDescriptor,
    pub clear_color: Option<ClearColor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthAttachmentDescriptor {
    pub attachment: RenderTargetAttachmentDescriptor,
    pub clear_depth: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilAttachmentDescriptor {
    pub attachment: RenderTargetAttachmentDescriptor,
    pub clear_stencil: Option<u32>,
}

/// Where occlusion query results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityResultBuffer {
    pub buffer: BufferHandle,
    pub offset: u64,
}

/**
The attachments of one render pass.

`color_attachments` is indexed by color attachment slot; `None` leaves a slot unbound.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTargetDescriptor {
    pub size: Size,
    pub color_attachments: Vec<Option<ColorAttachmentDescriptor>>,
    pub depth_attachment: Option<DepthAttachmentDescriptor>,
    pub stencil_attachment: Option<StencilAttachmentDescriptor>,
    pub visibility_result_buffer: Option<VisibilityResultBuffer>,
    pub render_target_array_length: u32,
}

impl RenderTargetDescriptor {
    /// A descriptor with no attachments.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            color_attachments: Vec::new(),
            depth_attachment: None,
            stencil_attachment: None,
            visibility_result_buffer: None,
            render_target_array_length: 0,
        }
    }

    /// Binds `attachment` at color slot `index`, growing the slot list as needed.
    pub fn set_color(&mut self, index: usize, attachment: ColorAttachmentDescriptor) {
        if self.color_attachments.len() <= index {
            self.color_attachments.resize(index + 1, None);
        }
        self.color_attachments[index] = Some(attachment);
    }
}

/// Load and store actions for every attachment of a pass, chosen by the frame graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassActions {
    pub colors: Vec<AttachmentActions>,
    pub depth: AttachmentActions,
    pub stencil: AttachmentActions,
}

impl PassActions {
    /// Actions for color slot `index`.  Slots without an entry don't care.
    pub fn color(&self, index: usize) -> AttachmentActions {
        self.colors.get(index).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_color_grows() {
        let mut desc = RenderTargetDescriptor::new(Size::new(8, 8));
        desc.set_color(
            2,
            ColorAttachmentDescriptor {
                attachment: RenderTargetAttachmentDescriptor::new(TextureHandle::new(3)),
                clear_color: None,
            },
        );
        assert_eq!(desc.color_attachments.len(), 3);
        assert!(desc.color_attachments[0].is_none());
        assert!(desc.color_attachments[2].is_some());
    }

    #[test]
    fn missing_actions_dont_care() {
        let actions = PassActions::default();
        assert_eq!(actions.color(4), AttachmentActions::default());
        assert_eq!(actions.color(4).load, LoadAction::DontCare);
    }

    #[test]
    fn attachment_point_display() {
        assert_eq!(AttachmentPoint::Color(1).to_string(), "color attachment 1");
        assert_eq!(AttachmentPoint::Stencil.to_string(), "stencil attachment");
    }
}
