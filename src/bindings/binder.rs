// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Encoding argument groups into binding tables, at most once per frame.
//!
//! The first bind of a group in a frame creates its encoder if needed, resolves every
//! entry against the frame's resources and writes the table.  Later binds in the same
//! frame do nothing.  The owner of the frame lifecycle clears the flag with
//! [`ArgumentGroup::reset_for_frame`] before the next frame's first bind.

use crate::bindings::argument_group::{ArgumentGroup, ArgumentGroupArray};
use crate::bindings::encoder::{TableRegion, encode};
use crate::bindings::resolver::ResourceResolver;

impl ArgumentGroup {
    /**
    Encodes the group into `region` unless that already happened this frame.

    Returns whether anything was written.

    # Panics
    If an entry's resource is missing from the frame or is the drawable, or if the group
    does not fit in `region`.
    */
    pub fn bind_if_needed(
        &mut self,
        region: &mut TableRegion<'_>,
        resolver: &ResourceResolver<'_>,
    ) -> bool {
        if self.frame.is_initialized() {
            logwise::trace_sync!(
                "{label} already encoded for frame {frame}",
                label = self.label.clone(),
                frame = resolver.frame()
            );
            return false;
        }
        let layout = &self.layout;
        debug_assert_eq!(region.offset() % layout.alignment(), 0, "misaligned table region");
        let encoder = self.encoder.get_or_insert_with(|| layout.make_encoder());
        encode(
            encoder.as_mut(),
            layout.encoded_length(),
            &self.entries,
            &self.bytes,
            region,
            0,
            resolver,
        );
        self.frame.mark_initialized();
        logwise::trace_sync!(
            "Encoded {label} at {offset} for frame {frame}",
            label = self.label.clone(),
            offset = region.offset(),
            frame = resolver.frame()
        );
        true
    }
}

impl ArgumentGroupArray {
    /**
    Encodes every present element not yet encoded this frame.

    One encoder, created on first use, writes all elements.  Returns how many elements
    were written.

    # Panics
    As [`ArgumentGroup::bind_if_needed`].
    */
    pub fn bind_if_needed(
        &mut self,
        region: &mut TableRegion<'_>,
        resolver: &ResourceResolver<'_>,
    ) -> usize {
        let stride = self.layout.encoded_length();
        debug_assert_eq!(region.offset() % self.layout.alignment(), 0, "misaligned table region");
        let mut encoded = 0;
        for (element, group) in self.groups.iter_mut().enumerate() {
            let Some(group) = group else { continue };
            if group.frame.is_initialized() {
                continue;
            }
            let layout = &self.layout;
            let encoder = self.encoder.get_or_insert_with(|| layout.make_encoder());
            encode(
                encoder.as_mut(),
                stride,
                &group.entries,
                &group.bytes,
                region,
                element,
                resolver,
            );
            group.frame.mark_initialized();
            encoded += 1;
        }
        if encoded > 0 {
            logwise::trace_sync!(
                "Encoded {count} elements of {label} for frame {frame}",
                count = encoded,
                label = self.label.clone(),
                frame = resolver.frame()
            );
        }
        encoded
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::bindings::argument_group::{BindSlot, BindingEntry, Stage};
    use crate::bindings::coordinates::Size;
    use crate::bindings::encoder::{ArgumentEncoder, ArgumentLayout};
    use crate::bindings::handles::{BufferHandle, TextureHandle};
    use crate::bindings::resolver::tests::CountingSamplers;
    use crate::bindings::resource_map::{
        DescriptorIndex, FrameResourceMap, PhysicalBuffer, PhysicalTexture,
    };
    use crate::bindings::sampler::SamplerDescriptor;
    use crate::pixel_formats::PixelFormat;

    #[derive(Debug, Default)]
    pub(crate) struct Counters {
        pub(crate) encoders: AtomicUsize,
        pub(crate) encodings: AtomicUsize,
    }

    /// Four bytes per slot index, eight slots per element.
    #[derive(Debug)]
    pub(crate) struct WordLayout(pub(crate) Arc<Counters>);

    #[derive(Debug)]
    struct WordEncoder {
        counters: Arc<Counters>,
        base: usize,
    }

    impl ArgumentLayout for WordLayout {
        fn encoded_length(&self) -> usize {
            32
        }
        fn make_encoder(&self) -> Box<dyn ArgumentEncoder> {
            self.0.encoders.fetch_add(1, Ordering::Relaxed);
            Box::new(WordEncoder {
                counters: self.0.clone(),
                base: 0,
            })
        }
    }

    impl WordEncoder {
        fn put(&self, table: &mut [u8], index: u32, value: u32) {
            let at = self.base + index as usize * 4;
            table[at..at + 4].copy_from_slice(&value.to_le_bytes());
        }
    }

    impl ArgumentEncoder for WordEncoder {
        fn set_argument_buffer(&mut self, offset: usize, element: usize) {
            self.counters.encodings.fetch_add(1, Ordering::Relaxed);
            self.base = offset + element * 32;
        }
        fn set_texture(&mut self, table: &mut [u8], index: u32, texture: &PhysicalTexture) {
            self.put(table, index, texture.index.0);
        }
        fn set_buffer(&mut self, table: &mut [u8], index: u32, buffer: DescriptorIndex, offset: u64) {
            self.put(table, index, buffer.0 + offset as u32);
        }
        fn set_sampler(&mut self, table: &mut [u8], index: u32, sampler: DescriptorIndex) {
            self.put(table, index, sampler.0);
        }
        fn set_bytes(&mut self, table: &mut [u8], index: u32, bytes: &[u8]) {
            let at = self.base + index as usize * 4;
            table[at..at + bytes.len()].copy_from_slice(bytes);
        }
    }

    fn frame() -> FrameResourceMap {
        let mut map = FrameResourceMap::new(1);
        map.insert_texture(
            TextureHandle::new(1),
            PhysicalTexture {
                index: DescriptorIndex(11),
                size: Size::new(4, 4),
                format: PixelFormat::Rgba8Unorm,
            },
        );
        map.insert_buffer(
            BufferHandle::new(2),
            PhysicalBuffer {
                index: DescriptorIndex(20),
                offset: 3,
            },
        );
        map
    }

    fn word(table: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([table[at], table[at + 1], table[at + 2], table[at + 3]])
    }

    #[test]
    fn encodes_once_per_frame() {
        let counters = Arc::new(Counters::default());
        let mut group = ArgumentGroup::new("g", Arc::new(WordLayout(counters.clone())));
        group.set_texture(BindSlot::new(0, Stage::Fragment), TextureHandle::new(1));
        group.set_buffer(BindSlot::new(1, Stage::Vertex), BufferHandle::new(2), 4);
        group.set_sampler(BindSlot::new(2, Stage::Fragment), SamplerDescriptor::default());

        let map = frame();
        let samplers = CountingSamplers::default();
        let resolver = ResourceResolver::new(&map, &samplers);
        let mut table = vec![0u8; 64];
        let mut region = TableRegion::new(&mut table, 32);

        assert!(group.bind_if_needed(&mut region, &resolver));
        assert!(!group.bind_if_needed(&mut region, &resolver));
        assert!(!group.bind_if_needed(&mut region, &resolver));
        assert_eq!(counters.encodings.load(Ordering::Relaxed), 1);
        assert!(group.is_initialized());

        assert_eq!(word(&table, 32), 11);
        assert_eq!(word(&table, 36), 27);
        assert_eq!(word(&table, 40), 100);

        group.reset_for_frame();
        let mut region = TableRegion::new(&mut table, 32);
        assert!(group.bind_if_needed(&mut region, &resolver));
        assert_eq!(counters.encodings.load(Ordering::Relaxed), 2);
        //the encoder survives across frames
        assert_eq!(counters.encoders.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn adjacent_byte_entries() {
        let counters = Arc::new(Counters::default());
        let mut group = ArgumentGroup::new("bytes", Arc::new(WordLayout(counters)));
        group.set_bytes(BindSlot::new(0, Stage::Vertex), &7u32.to_le_bytes());
        group.set_bytes(BindSlot::new(1, Stage::Vertex), &9u32.to_le_bytes());
        //same length rewrites in place
        group.set_bytes(BindSlot::new(0, Stage::Vertex), &8u32.to_le_bytes());
        assert_eq!(group.bytes().len(), 8);

        let map = frame();
        let samplers = CountingSamplers::default();
        let resolver = ResourceResolver::new(&map, &samplers);
        let mut table = vec![0u8; 32];
        group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver);
        assert_eq!(word(&table, 0), 8);
        assert_eq!(word(&table, 4), 9);
    }

    #[test]
    fn rebinding_bytes_reclaims_storage() {
        let counters = Arc::new(Counters::default());
        let mut group = ArgumentGroup::new("constants", Arc::new(WordLayout(counters)));
        let first = BindSlot::new(0, Stage::Vertex);
        let second = BindSlot::new(2, Stage::Vertex);
        group.set_bytes(first, &1u32.to_le_bytes());
        group.set_bytes(second, &42u32.to_le_bytes());

        for i in 0..1000u32 {
            if i % 2 == 0 {
                group.set_bytes(first, &i.to_le_bytes());
            } else {
                let pair: Vec<u8> = [i, i + 1].iter().flat_map(|v| v.to_le_bytes()).collect();
                group.set_bytes(first, &pair);
            }
            assert!(group.bytes().len() <= 12);
        }
        assert_eq!(group.bytes().len(), 12);

        let map = frame();
        let samplers = CountingSamplers::default();
        let resolver = ResourceResolver::new(&map, &samplers);
        let mut table = vec![0u8; 32];
        group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver);
        assert_eq!(word(&table, 0), 999);
        assert_eq!(word(&table, 4), 1000);
        assert_eq!(word(&table, 8), 42);

        assert!(matches!(group.remove(&second), Some(BindingEntry::Bytes { length: 4, .. })));
        assert_eq!(group.bytes().len(), 8);
        assert!(group.remove(&first).is_some());
        assert!(group.bytes().is_empty());
    }

    #[test]
    fn array_shares_one_encoder() {
        let counters = Arc::new(Counters::default());
        let mut array = ArgumentGroupArray::new("lights", Arc::new(WordLayout(counters.clone())), 3);
        array
            .element_mut(0)
            .set_texture(BindSlot::new(0, Stage::Fragment), TextureHandle::new(1));
        array
            .element_mut(2)
            .set_bytes(BindSlot::new(1, Stage::Fragment), &5u32.to_le_bytes());
        assert!(!array.encoder_created());

        let map = frame();
        let samplers = CountingSamplers::default();
        let resolver = ResourceResolver::new(&map, &samplers);
        let mut table = vec![0u8; array.encoded_length()];

        assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 2);
        assert_eq!(word(&table, 0), 11);
        assert_eq!(word(&table, 64 + 4), 5);

        //initialized elements are not written again
        table[..32].fill(0xAB);
        table[64..].fill(0xCD);
        assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 0);
        assert!(table[..32].iter().all(|b| *b == 0xAB));
        assert!(table[64..].iter().all(|b| *b == 0xCD));
        assert!(array.encoder_created());
        assert_eq!(counters.encoders.load(Ordering::Relaxed), 1);
        assert_eq!(array.get(2).map(|g| g.label()), Some("lights[2]"));

        array.reset_for_frame();
        assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 2);
        assert_eq!(counters.encoders.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn replaced_element_encodes_fresh() {
        let counters = Arc::new(Counters::default());
        let layout: Arc<dyn ArgumentLayout> = Arc::new(WordLayout(counters.clone()));
        let mut array = ArgumentGroupArray::new("materials", layout.clone(), 2);
        let mut first = ArgumentGroup::new("first", layout.clone());
        first.set_bytes(BindSlot::new(0, Stage::Fragment), &1u32.to_le_bytes());
        assert!(array.set(1, first).is_none());

        let map = frame();
        let samplers = CountingSamplers::default();
        let resolver = ResourceResolver::new(&map, &samplers);
        let mut table = vec![0u8; array.encoded_length()];
        assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 1);
        assert_eq!(word(&table, 32), 1);

        let mut second = ArgumentGroup::new("second", layout);
        second.set_bytes(BindSlot::new(0, Stage::Fragment), &2u32.to_le_bytes());
        let previous = array.set(1, second);
        assert_eq!(previous.map(|g| g.is_initialized()), Some(true));
        assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 1);
        assert_eq!(word(&table, 32), 2);

        assert_eq!(array.take(1).map(|g| g.label().to_string()), Some("second".to_string()));
        assert!(array.get(1).is_none());
        assert_eq!(counters.encoders.load(Ordering::Relaxed), 1);
    }

    #[derive(Debug)]
    struct HalfLayout;

    impl ArgumentLayout for HalfLayout {
        fn encoded_length(&self) -> usize {
            16
        }
        fn make_encoder(&self) -> Box<dyn ArgumentEncoder> {
            unreachable!("never encoded")
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not match the layout")]
    fn element_of_other_layout_rejected() {
        let counters = Arc::new(Counters::default());
        let mut array = ArgumentGroupArray::new("lights", Arc::new(WordLayout(counters)), 2);
        array.set(0, ArgumentGroup::new("short", Arc::new(HalfLayout)));
    }

    #[test]
    #[should_panic(expected = "has no backing")]
    fn missing_resource_panics() {
        let counters = Arc::new(Counters::default());
        let mut group = ArgumentGroup::new("g", Arc::new(WordLayout(counters)));
        group.set_texture(BindSlot::new(0, Stage::Fragment), TextureHandle::new(99));
        let map = frame();
        let samplers = CountingSamplers::default();
        let resolver = ResourceResolver::new(&map, &samplers);
        let mut table = vec![0u8; 32];
        group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver);
    }
}
