// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Argument groups: the resources and constant bytes one binding table holds.
//!
//! An [`ArgumentGroup`] maps [`BindSlot`]s to [`BindingEntry`]s and knows which backend
//! layout it is encoded with.  Groups normally belong to a material or a scene object and
//! live for many frames, while the physical resources behind their handles change from
//! frame to frame.  Each group therefore carries a small piece of frame state recording
//! whether it has been encoded yet this frame.
//!
//! Entries are not written anywhere when they are set.  The group only describes the
//! binding table; [`ArgumentGroup::bind_if_needed`] writes it.
//!
//! # Example
//!
//! ```
//! # use std::sync::Arc;
//! # use tables_and_targets::bindings::encoder::{ArgumentEncoder, ArgumentLayout};
//! # use tables_and_targets::bindings::resource_map::{DescriptorIndex, PhysicalTexture};
//! # #[derive(Debug)] struct Layout;
//! # #[derive(Debug)] struct Encoder;
//! # impl ArgumentLayout for Layout {
//! #     fn encoded_length(&self) -> usize { 16 }
//! #     fn make_encoder(&self) -> Box<dyn ArgumentEncoder> { Box::new(Encoder) }
//! # }
//! # impl ArgumentEncoder for Encoder {
//! #     fn set_argument_buffer(&mut self, _: usize, _: usize) {}
//! #     fn set_texture(&mut self, _: &mut [u8], _: u32, _: &PhysicalTexture) {}
//! #     fn set_buffer(&mut self, _: &mut [u8], _: u32, _: DescriptorIndex, _: u64) {}
//! #     fn set_sampler(&mut self, _: &mut [u8], _: u32, _: DescriptorIndex) {}
//! #     fn set_bytes(&mut self, _: &mut [u8], _: u32, _: &[u8]) {}
//! # }
//! # let layout: Arc<dyn ArgumentLayout> = Arc::new(Layout);
//! use tables_and_targets::bindings::argument_group::{ArgumentGroup, BindSlot, Stage};
//! use tables_and_targets::bindings::handles::TextureHandle;
//! use tables_and_targets::bindings::sampler::SamplerDescriptor;
//!
//! let mut material = ArgumentGroup::new("material", layout);
//! material.set_texture(BindSlot::new(0, Stage::Fragment), TextureHandle::new(42));
//! material.set_sampler(BindSlot::new(1, Stage::Fragment), SamplerDescriptor::default());
//! material.set_bytes(BindSlot::new(2, Stage::Fragment), &1.5f32.to_le_bytes());
//! assert_eq!(material.entries().count(), 3);
//! assert!(!material.is_initialized());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::bindings::encoder::{ArgumentEncoder, ArgumentLayout};
use crate::bindings::handles::{BufferHandle, TextureHandle};
use crate::bindings::sampler::SamplerDescriptor;

/// The shader stage a binding is visible to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Stage {
    Vertex,
    Fragment,
    Compute,
}

/**
Where a value lands in a binding table.

`space` and `stage` qualify the slot the way shader reflection reports it.  Encoding
only needs the integer index, see [`BindSlot::encoder_index`].  Slots order by space,
then index, then stage, and that is the order entries are encoded in.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindSlot {
    pub(crate) space: u32,
    pub(crate) index: u32,
    pub(crate) stage: Stage,
}

impl BindSlot {
    pub const fn new(index: u32, stage: Stage) -> Self {
        Self {
            space: 0,
            index,
            stage,
        }
    }

    pub const fn in_space(space: u32, index: u32, stage: Stage) -> Self {
        Self { space, index, stage }
    }

    /// The index the encoder writes at.  A group is always encoded into a single space.
    pub const fn encoder_index(&self) -> u32 {
        self.index
    }

    pub const fn space(&self) -> u32 {
        self.space
    }

    pub const fn stage(&self) -> Stage {
        self.stage
    }
}

/// A value bound at one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingEntry {
    Texture(TextureHandle),
    /// A buffer, starting `offset` bytes past wherever the buffer lives this frame.
    Buffer { buffer: BufferHandle, offset: u64 },
    Sampler(SamplerDescriptor),
    /// `length` bytes of the group's private storage, starting at `offset`.
    Bytes { offset: usize, length: usize },
}

/**
Per-frame state of a group.

Set when the group is encoded and cleared only by the explicit frame-begin step.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FrameState {
    initialized: bool,
}

impl FrameState {
    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }
    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
    pub(crate) fn reset(&mut self) {
        self.initialized = false;
    }
}

#[derive(Debug)]
pub struct ArgumentGroup {
    pub(crate) label: String,
    pub(crate) entries: BTreeMap<BindSlot, BindingEntry>,
    pub(crate) bytes: Vec<u8>,
    pub(crate) layout: Arc<dyn ArgumentLayout>,
    pub(crate) encoder: Option<Box<dyn ArgumentEncoder>>,
    pub(crate) frame: FrameState,
}

impl ArgumentGroup {
    /// Creates an empty group that will be encoded with `layout`.
    pub fn new(label: impl Into<String>, layout: Arc<dyn ArgumentLayout>) -> Self {
        Self {
            label: label.into(),
            entries: BTreeMap::new(),
            bytes: Vec::new(),
            layout,
            encoder: None,
            frame: FrameState::default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_texture(&mut self, slot: BindSlot, texture: TextureHandle) {
        self.entries.insert(slot, BindingEntry::Texture(texture));
    }

    pub fn set_buffer(&mut self, slot: BindSlot, buffer: BufferHandle, offset: u64) {
        self.entries
            .insert(slot, BindingEntry::Buffer { buffer, offset });
    }

    pub fn set_sampler(&mut self, slot: BindSlot, sampler: SamplerDescriptor) {
        self.entries.insert(slot, BindingEntry::Sampler(sampler));
    }

    /**
    Binds a copy of `bytes` at `slot`.

    The bytes are kept in the group's own storage.  Rebinding the same number of bytes at
    a slot overwrites them in place; a different length releases the old range first, so
    the storage never holds more than the bytes currently bound.
    */
    pub fn set_bytes(&mut self, slot: BindSlot, bytes: &[u8]) {
        match self.entries.get(&slot) {
            Some(BindingEntry::Bytes { offset, length }) if *length == bytes.len() => {
                let offset = *offset;
                self.bytes[offset..offset + bytes.len()].copy_from_slice(bytes);
                return;
            }
            Some(BindingEntry::Bytes { offset, length }) => {
                let (offset, length) = (*offset, *length);
                self.release_bytes(offset, length);
            }
            _ => {}
        }
        let offset = self.bytes.len();
        self.bytes.extend_from_slice(bytes);
        self.entries.insert(
            slot,
            BindingEntry::Bytes {
                offset,
                length: bytes.len(),
            },
        );
    }

    pub fn remove(&mut self, slot: &BindSlot) -> Option<BindingEntry> {
        let removed = self.entries.remove(slot)?;
        if let BindingEntry::Bytes { offset, length } = removed {
            self.release_bytes(offset, length);
        }
        Some(removed)
    }

    /// Drops `length` bytes at `offset` from storage and slides later ranges down.
    fn release_bytes(&mut self, offset: usize, length: usize) {
        self.bytes.drain(offset..offset + length);
        for entry in self.entries.values_mut() {
            if let BindingEntry::Bytes { offset: other, .. } = entry {
                if *other > offset {
                    *other -= length;
                }
            }
        }
    }

    /// Entries in encoding order.
    pub fn entries(&self) -> impl Iterator<Item = (&BindSlot, &BindingEntry)> {
        self.entries.iter()
    }

    /// The group's private byte storage, which [`BindingEntry::Bytes`] entries point into.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The number of table bytes one encoding of this group occupies.
    pub fn encoded_length(&self) -> usize {
        self.layout.encoded_length()
    }

    /// Whether the group has been encoded since the last [`Self::reset_for_frame`].
    pub fn is_initialized(&self) -> bool {
        self.frame.is_initialized()
    }

    /**
    The frame-begin step.

    Must be called exactly once per frame, by whoever owns the frame lifecycle, before any
    thread binds the group.  Nothing else clears the flag.
    */
    pub fn reset_for_frame(&mut self) {
        self.frame.reset();
    }
}

/**
A fixed-size array of optional groups sharing one layout and one encoder.

Elements are encoded back to back, each [`ArgumentLayout::encoded_length`] bytes apart.
*/
#[derive(Debug)]
pub struct ArgumentGroupArray {
    pub(crate) label: String,
    pub(crate) layout: Arc<dyn ArgumentLayout>,
    pub(crate) groups: Vec<Option<ArgumentGroup>>,
    pub(crate) encoder: Option<Box<dyn ArgumentEncoder>>,
}

impl ArgumentGroupArray {
    pub fn new(label: impl Into<String>, layout: Arc<dyn ArgumentLayout>, len: usize) -> Self {
        let mut groups = Vec::with_capacity(len);
        groups.resize_with(len, || None);
        Self {
            label: label.into(),
            layout,
            groups,
            encoder: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /**
    Returns the element at `index`, creating an empty one if the slot is vacant.

    # Panics
    If `index` is out of bounds.
    */
    pub fn element_mut(&mut self, index: usize) -> &mut ArgumentGroup {
        let label = &self.label;
        let layout = &self.layout;
        self.groups[index]
            .get_or_insert_with(|| ArgumentGroup::new(format!("{label}[{index}]"), layout.clone()))
    }

    /**
    Places `group` at `index`, returning the previous element.

    The array's shared encoder writes the element, so `group` must have been built for a
    layout of the same encoded length as the array's.

    # Panics
    If `index` is out of bounds.  In debug builds, also if the lengths differ.
    */
    pub fn set(&mut self, index: usize, group: ArgumentGroup) -> Option<ArgumentGroup> {
        debug_assert_eq!(
            group.encoded_length(),
            self.layout.encoded_length(),
            "group {} does not match the layout of {}",
            group.label,
            self.label
        );
        self.groups[index].replace(group)
    }

    pub fn get(&self, index: usize) -> Option<&ArgumentGroup> {
        self.groups.get(index).and_then(|g| g.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ArgumentGroup> {
        self.groups.get_mut(index).and_then(|g| g.as_mut())
    }

    /// Empties the slot at `index`, returning what was there.
    pub fn take(&mut self, index: usize) -> Option<ArgumentGroup> {
        self.groups.get_mut(index).and_then(|g| g.take())
    }

    /// Table bytes the whole array occupies.
    pub fn encoded_length(&self) -> usize {
        self.layout.encoded_length() * self.groups.len()
    }

    /// Whether the shared encoder has been created yet.
    pub fn encoder_created(&self) -> bool {
        self.encoder.is_some()
    }

    /// The frame-begin step for every present element.
    pub fn reset_for_frame(&mut self) {
        for group in self.groups.iter_mut().flatten() {
            group.reset_for_frame();
        }
    }
}
