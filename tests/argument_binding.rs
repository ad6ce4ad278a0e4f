// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
#![cfg(feature = "backend_wgpu")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tables_and_targets::backend::{ArgumentDescriptor, ArgumentType, TableLayout};
use tables_and_targets::bindings::argument_group::{
    ArgumentGroup, ArgumentGroupArray, BindSlot, Stage,
};
use tables_and_targets::bindings::coordinates::Size;
use tables_and_targets::bindings::encoder::{ArgumentLayout, TableRegion};
use tables_and_targets::bindings::handles::{BufferHandle, TextureHandle};
use tables_and_targets::bindings::resolver::{ResourceResolver, SamplerStateCache};
use tables_and_targets::bindings::resource_map::{
    DescriptorIndex, FrameResourceMap, PhysicalBuffer, PhysicalTexture,
};
use tables_and_targets::bindings::sampler::{SamplerAddressMode, SamplerDescriptor};
use tables_and_targets::pixel_formats::PixelFormat;

/// Hands out sampler indices in order of first use.
#[derive(Default)]
struct Samplers(Mutex<HashMap<SamplerDescriptor, u32>>);

impl SamplerStateCache for Samplers {
    fn sampler_state(&self, descriptor: &SamplerDescriptor) -> DescriptorIndex {
        let mut states = self.0.lock().unwrap();
        let next = states.len() as u32;
        DescriptorIndex(*states.entry(descriptor.clone()).or_insert(next))
    }
}

const ALBEDO: TextureHandle = TextureHandle::new(1);
const LIGHTS: BufferHandle = BufferHandle::new(2);

fn material_layout() -> Arc<dyn ArgumentLayout> {
    Arc::new(TableLayout::new(&[
        ArgumentDescriptor::new(0, ArgumentType::SampledImage),
        ArgumentDescriptor::new(1, ArgumentType::Sampler),
        ArgumentDescriptor::new(2, ArgumentType::UniformBuffer),
        ArgumentDescriptor::inline_bytes(3, 16),
    ]))
}

fn frame(number: u64, albedo: u32) -> FrameResourceMap {
    let mut map = FrameResourceMap::new(number);
    map.insert_texture(
        ALBEDO,
        PhysicalTexture {
            index: DescriptorIndex(albedo),
            size: Size::new(256, 256),
            format: PixelFormat::Rgba8UnormSrgb,
        },
    );
    map.insert_buffer(
        LIGHTS,
        PhysicalBuffer {
            index: DescriptorIndex(7),
            offset: 256,
        },
    );
    map
}

fn word(table: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([table[at], table[at + 1], table[at + 2], table[at + 3]])
}

fn tint() -> Vec<u8> {
    [1.0f32, 0.5, 0.25, 1.0]
        .iter()
        .flat_map(|f| f.to_le_bytes())
        .collect()
}

fn material(layout: Arc<dyn ArgumentLayout>) -> ArgumentGroup {
    let mut group = ArgumentGroup::new("material", layout);
    group.set_texture(BindSlot::new(0, Stage::Fragment), ALBEDO);
    group.set_sampler(BindSlot::new(1, Stage::Fragment), SamplerDescriptor::default());
    group.set_buffer(BindSlot::new(2, Stage::Fragment), LIGHTS, 64);
    group.set_bytes(BindSlot::new(3, Stage::Fragment), &tint());
    group
}

#[test]
fn group_encodes_into_table() {
    let layout = material_layout();
    //36 bytes of arguments padded to 48
    assert_eq!(layout.encoded_length(), 48);
    let mut group = material(layout);

    let map = frame(1, 5);
    let samplers = Samplers::default();
    let resolver = ResourceResolver::new(&map, &samplers);
    let mut table = vec![0u8; 96];

    assert!(group.bind_if_needed(&mut TableRegion::new(&mut table, 48), &resolver));
    assert!(!group.bind_if_needed(&mut TableRegion::new(&mut table, 48), &resolver));

    assert!(table[..48].iter().all(|b| *b == 0));
    assert_eq!(word(&table, 48), 5);
    assert_eq!(word(&table, 52), 0);
    assert_eq!(word(&table, 56), 7);
    assert_eq!(word(&table, 60), 256 + 64);
    assert_eq!(word(&table, 64), 0);
    assert_eq!(&table[68..84], tint().as_slice());
    assert!(table[84..].iter().all(|b| *b == 0));
}

#[test]
fn buffer_placed_past_four_gibibytes() {
    let mut group = material(material_layout());
    let mut map = frame(1, 5);
    map.insert_buffer(
        LIGHTS,
        PhysicalBuffer {
            index: DescriptorIndex(7),
            offset: 1 << 32,
        },
    );
    let samplers = Samplers::default();
    let resolver = ResourceResolver::new(&map, &samplers);
    let mut table = vec![0u8; 48];

    assert!(group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver));
    assert_eq!(word(&table, 8), 7);
    assert_eq!(word(&table, 12), 64);
    assert_eq!(word(&table, 16), 1);
}

#[test]
fn next_frame_sees_new_backing() {
    let mut group = material(material_layout());
    let samplers = Samplers::default();
    let mut table = vec![0u8; 48];

    let first = frame(1, 5);
    let resolver = ResourceResolver::new(&first, &samplers);
    group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver);
    assert_eq!(word(&table, 0), 5);

    let second = frame(2, 6);
    let resolver = ResourceResolver::new(&second, &samplers);
    //still initialized from the previous frame until the frame graph resets it
    assert!(!group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver));
    assert_eq!(word(&table, 0), 5);

    group.reset_for_frame();
    assert!(!group.is_initialized());
    assert!(group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver));
    assert_eq!(word(&table, 0), 6);
}

#[test]
fn array_elements_share_samplers() {
    let layout = material_layout();
    let mut array = ArgumentGroupArray::new("materials", layout.clone(), 3);
    array.set(0, material(layout.clone()));
    let mut clamped = material(layout);
    let mut repeat = SamplerDescriptor::default();
    repeat.s_address_mode = SamplerAddressMode::Repeat;
    clamped.set_sampler(BindSlot::new(1, Stage::Fragment), repeat);
    array.set(2, clamped);

    let map = frame(1, 5);
    let samplers = Samplers::default();
    let resolver = ResourceResolver::new(&map, &samplers);
    let mut table = vec![0u8; array.encoded_length()];
    assert_eq!(table.len(), 144);

    assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 2);
    assert_eq!(word(&table, 4), 0);
    assert!(table[48..96].iter().all(|b| *b == 0));
    assert_eq!(word(&table, 96), 5);
    assert_eq!(word(&table, 96 + 4), 1);

    //encoded elements keep their bytes through later binds this frame
    table[..48].fill(0xAB);
    table[96..].fill(0xCD);
    assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 0);
    assert!(table[..48].iter().all(|b| *b == 0xAB));
    assert!(table[96..].iter().all(|b| *b == 0xCD));

    //a fresh element picks up the existing sampler state
    array.element_mut(1).set_sampler(BindSlot::new(1, Stage::Fragment), SamplerDescriptor::default());
    assert_eq!(array.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver), 1);
    assert_eq!(word(&table, 48 + 4), 0);
    assert_eq!(samplers.0.lock().unwrap().len(), 2);
    assert!(table[..48].iter().all(|b| *b == 0xAB));
    assert!(table[96..].iter().all(|b| *b == 0xCD));
}

#[test]
#[should_panic(expected = "not a texture")]
fn slot_of_wrong_kind_panics() {
    let mut group = ArgumentGroup::new("mismatched", material_layout());
    group.set_texture(BindSlot::new(1, Stage::Fragment), ALBEDO);
    let map = frame(1, 5);
    let samplers = Samplers::default();
    let resolver = ResourceResolver::new(&map, &samplers);
    let mut table = vec![0u8; 48];
    group.bind_if_needed(&mut TableRegion::new(&mut table, 0), &resolver);
}
