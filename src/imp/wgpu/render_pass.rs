// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Render pass translation.

Attachments are resolved against the frame's resources and merged with the load and
store actions the frame graph chose for the pass.  The result names physical textures
rather than wgpu views; the command-encoding layer makes views from it.
*/

use crate::Error;
use crate::bindings::coordinates::Size;
use crate::bindings::resolver::ResourceResolver;
use crate::bindings::resource_map::{PhysicalBuffer, PhysicalTexture};
use crate::images::render_pass::{
    AttachmentActions, AttachmentTarget, ClearColor, LoadAction, PassActions,
    RenderTargetAttachmentDescriptor, RenderTargetDescriptor, StoreAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeAttachmentTarget {
    pub texture: PhysicalTexture,
    pub level: u32,
    pub slice: u32,
    pub depth_plane: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeColorAttachment {
    pub target: NativeAttachmentTarget,
    pub resolve: Option<NativeAttachmentTarget>,
    pub ops: wgpu::Operations<wgpu::Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeDepthStencilAttachment {
    pub target: NativeAttachmentTarget,
    pub resolve: Option<NativeAttachmentTarget>,
    /// `None` when the pass has no depth attachment.
    pub depth_ops: Option<wgpu::Operations<f32>>,
    /// `None` when the pass has no stencil attachment.
    pub stencil_ops: Option<wgpu::Operations<u32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeRenderPassDescriptor {
    pub size: Size,
    /// Indexed by color attachment slot.
    pub color_attachments: Vec<Option<NativeColorAttachment>>,
    pub depth_stencil_attachment: Option<NativeDepthStencilAttachment>,
    pub occlusion_query_buffer: Option<PhysicalBuffer>,
    pub render_target_array_length: u32,
}

pub const fn clear_color_to_wgpu(color: ClearColor) -> wgpu::Color {
    wgpu::Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

/**
Native operations for `actions`.

wgpu always defines an attachment's initial contents, so "don't care" loads become a
clear, which is the cheapest definition on tiled hardware.  Resolving is expressed by
the presence of a resolve target, not by the store op.
*/
pub fn operations<V: Copy>(actions: AttachmentActions, clear_value: V) -> wgpu::Operations<V> {
    let load = match actions.load {
        LoadAction::DontCare | LoadAction::Clear => wgpu::LoadOp::Clear(clear_value),
        LoadAction::Load => wgpu::LoadOp::Load,
    };
    let store = match actions.store {
        StoreAction::DontCare | StoreAction::MultisampleResolve => wgpu::StoreOp::Discard,
        StoreAction::Store | StoreAction::StoreAndMultisampleResolve => wgpu::StoreOp::Store,
    };
    wgpu::Operations { load, store }
}

fn resolve_target(
    target: &AttachmentTarget,
    size: Size,
    resolver: &ResourceResolver<'_>,
) -> Result<NativeAttachmentTarget, Error> {
    Ok(NativeAttachmentTarget {
        texture: resolver.render_target(target.texture, size)?,
        level: target.level,
        slice: target.slice,
        depth_plane: target.depth_plane,
    })
}

fn resolve_attachment(
    attachment: &RenderTargetAttachmentDescriptor,
    actions: AttachmentActions,
    size: Size,
    resolver: &ResourceResolver<'_>,
) -> Result<(NativeAttachmentTarget, Option<NativeAttachmentTarget>), Error> {
    let target = resolve_target(&attachment.target, size, resolver)?;
    let resolve = match (&attachment.resolve, actions.store.resolves()) {
        (Some(resolve), true) => Some(resolve_target(resolve, size, resolver)?),
        _ => None,
    };
    Ok((target, resolve))
}

/**
Translates the attachments of one pass.

Absent attachments are omitted.  Clear values default to zero when an attachment is
cleared without one.

# Errors
- Whatever [`ResourceResolver::render_target`] reports for a drawable attachment.
- [`Error::NotYetSupported`] when depth and stencil are different textures, or the
  visibility result buffer has a non-zero offset.
*/
pub fn translate_render_pass(
    descriptor: &RenderTargetDescriptor,
    actions: &PassActions,
    resolver: &ResourceResolver<'_>,
) -> Result<NativeRenderPassDescriptor, Error> {
    let size = descriptor.size;
    let mut color_attachments = Vec::with_capacity(descriptor.color_attachments.len());
    for (index, color) in descriptor.color_attachments.iter().enumerate() {
        let Some(color) = color else {
            color_attachments.push(None);
            continue;
        };
        let color_actions = actions.color(index);
        let (target, resolve) = resolve_attachment(&color.attachment, color_actions, size, resolver)?;
        let clear = clear_color_to_wgpu(color.clear_color.unwrap_or_default());
        color_attachments.push(Some(NativeColorAttachment {
            target,
            resolve,
            ops: operations(color_actions, clear),
        }));
    }

    let depth = descriptor.depth_attachment.as_ref();
    let stencil = descriptor.stencil_attachment.as_ref();
    if let (Some(depth), Some(stencil)) = (depth, stencil) {
        if depth.attachment.target.texture != stencil.attachment.target.texture {
            return Err(Error::NotYetSupported("separate depth and stencil attachments"));
        }
    }
    //either one describes the shared texture
    let shared = depth
        .map(|d| (&d.attachment, actions.depth))
        .or_else(|| stencil.map(|s| (&s.attachment, actions.stencil)));
    let depth_stencil_attachment = match shared {
        None => None,
        Some((attachment, shared_actions)) => {
            let (target, resolve) = resolve_attachment(attachment, shared_actions, size, resolver)?;
            Some(NativeDepthStencilAttachment {
                target,
                resolve,
                depth_ops: depth.map(|d| operations(actions.depth, d.clear_depth.unwrap_or(1.0))),
                stencil_ops: stencil
                    .map(|s| operations(actions.stencil, s.clear_stencil.unwrap_or(0))),
            })
        }
    };

    let occlusion_query_buffer = match &descriptor.visibility_result_buffer {
        None => None,
        Some(visibility) if visibility.offset != 0 => {
            return Err(Error::NotYetSupported("visibility result buffer offsets"));
        }
        Some(visibility) => Some(resolver.buffer(visibility.buffer)),
    };

    logwise::trace_sync!(
        "Translated render pass with {colors} color slots",
        colors = color_attachments.len()
    );
    Ok(NativeRenderPassDescriptor {
        size,
        color_attachments,
        depth_stencil_attachment,
        occlusion_query_buffer,
        render_target_array_length: descriptor.render_target_array_length,
    })
}
