// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Errors produced while translating abstract descriptions into backend bindings.
//!
//! Ordinary argument encoding and plain field copies cannot fail; only the cases below
//! surface to the caller.  None of them are retried here.  Whether a frame is resubmitted
//! after [`Error::DrawableUnavailable`] is the frame graph's decision.

use std::fmt::Display;

use crate::bindings::coordinates::Size;
use crate::bindings::handles::TextureHandle;
use crate::images::render_pass::AttachmentPoint;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A drawable-backed render target was requested at a size other than the drawable's.
    ///
    /// Recoverable: the caller may skip or resize the pass.
    InvalidDrawableSize {
        texture: TextureHandle,
        requested: Size,
        actual: Size,
    },
    /// No drawable could be acquired this frame.  The caller must skip the frame.
    DrawableUnavailable { texture: TextureHandle },
    /// A required shader function was missing from the function cache.
    FunctionNotFound { name: String },
    /// Two attachments specified different, non-zero sample counts.
    InconsistentSampleCount {
        attachment: AttachmentPoint,
        expected: u32,
        found: u32,
    },
    /// An enumeration value has no counterpart on the other side of the translation.
    UnmappedEnumerationValue { kind: &'static str, value: String },
    /// The configuration is valid but this backend cannot express it yet.
    NotYetSupported(&'static str),
    /// The vertex descriptor needs more buffer indices than the device leaves free.
    VertexBufferIndexExhausted { requested: u32, available: u32 },
}

impl Error {
    pub(crate) fn unmapped(kind: &'static str, value: impl std::fmt::Debug) -> Self {
        let value = format!("{:?}", value);
        logwise::error_sync!(
            "{kind} value {value} has no mapping",
            kind = logwise::privacy::LogIt(kind),
            value = logwise::privacy::LogIt(&value)
        );
        Error::UnmappedEnumerationValue { kind, value }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDrawableSize {
                texture,
                requested,
                actual,
            } => write!(
                f,
                "render target {:?} requested size {} but the drawable is {}",
                texture, requested, actual
            ),
            Error::DrawableUnavailable { texture } => {
                write!(f, "no drawable could be acquired for {:?}", texture)
            }
            Error::FunctionNotFound { name } => write!(f, "function {} not found", name),
            Error::InconsistentSampleCount {
                attachment,
                expected,
                found,
            } => write!(
                f,
                "{} has sample count {} but other attachments use {}",
                attachment, found, expected
            ),
            Error::UnmappedEnumerationValue { kind, value } => {
                write!(f, "{} value {} has no mapping", kind, value)
            }
            Error::NotYetSupported(what) => write!(f, "{} is not yet supported", what),
            Error::VertexBufferIndexExhausted {
                requested,
                available,
            } => write!(
                f,
                "vertex descriptor needs {} buffer indices but only {} are free",
                requested, available
            ),
        }
    }
}
