/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel accessor behavior across every addressable pixel format
use texbuf::buffer::PixelBuffer;
use texbuf::mipmap::Mipmap;
use texbuf_core::pixel_format::{
    PixelChannel, PixelFormat, ALL_ADDRESSABLE_FORMATS, ALL_CHANNELS
};
use texbuf_core::unorm::to_unorm;

const WIDTH: u32 = 3;
const HEIGHT: u32 = 2;

fn blank_buffer(format: PixelFormat) -> PixelBuffer {
    let size = format.byte_stride() * (WIDTH * HEIGHT) as usize;

    PixelBuffer::new(WIDTH, HEIGHT, format, vec![0; size]).unwrap()
}

/// Channels the format defines a write rule for
fn writable_channels(format: PixelFormat) -> Vec<PixelChannel> {
    if format == PixelFormat::R10G10B10A2 {
        // all writes are a documented no-op for the packed 10-10-10-2 layout
        return vec![];
    }
    // alpha never has a write rule unless the format stores it
    ALL_CHANNELS
        .into_iter()
        .take(format.num_components())
        .collect()
}

#[test]
fn out_of_bounds_policy_holds_for_every_format() {
    for format in ALL_ADDRESSABLE_FORMATS {
        let image = blank_buffer(format);

        for (x, y) in [(WIDTH, 0), (0, HEIGHT), (u32::MAX, u32::MAX)] {
            for channel in [PixelChannel::Red, PixelChannel::Green, PixelChannel::Blue] {
                assert_eq!(image.get_channel(x, y, channel), 0.0, "{format:?}");
            }
            // the opaque sentinel is format independent
            assert_eq!(image.get_channel8(x, y, PixelChannel::Alpha), 255, "{format:?}");
        }
    }
}

#[test]
fn unorm_writes_quantize_back_exactly() {
    for format in [
        PixelFormat::R8,
        PixelFormat::RG8,
        PixelFormat::RGB8,
        PixelFormat::RGBA8
    ] {
        for channel in writable_channels(format) {
            for value in [0_u32, 1, 127, 200, 255] {
                let mut image = blank_buffer(format);

                for y in 0..HEIGHT {
                    for x in 0..WIDTH {
                        image.set_channel(x, y, channel, value);
                        assert_eq!(
                            u32::from(image.get_channel8(x, y, channel)),
                            value,
                            "{format:?} {channel:?} at ({x},{y})"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn float_writes_quantize_back() {
    // (stored value, bit pattern per family width)
    let samples: [(f32, u32, u32); 3] = [
        (0.0, 0x0000, 0.0_f32.to_bits()),
        (0.5, 0x3800, 0.5_f32.to_bits()),
        (1.0, 0x3C00, 1.0_f32.to_bits())
    ];

    for format in ALL_ADDRESSABLE_FORMATS {
        if !format.is_float() {
            continue;
        }
        let half = format.bit_depth() == 16;

        for channel in writable_channels(format) {
            for (expected, half_bits, float_bits) in samples {
                let mut image = blank_buffer(format);
                let raw = if half { half_bits } else { float_bits };

                image.set_channel(1, 1, channel, raw);

                assert_eq!(
                    image.get_channel(1, 1, channel),
                    expected,
                    "{format:?} {channel:?}"
                );
                assert_eq!(
                    image.get_channel8(1, 1, channel),
                    to_unorm(expected),
                    "{format:?} {channel:?}"
                );
            }
        }
    }
}

#[test]
fn absent_channels_decode_to_defaults() {
    for format in ALL_ADDRESSABLE_FORMATS {
        let image = blank_buffer(format);

        if format.num_components() < 3 {
            assert_eq!(image.get_channel(0, 0, PixelChannel::Blue), 0.0, "{format:?}");
        }
        if !format.has_alpha() {
            assert_eq!(image.get_channel(0, 0, PixelChannel::Alpha), 1.0, "{format:?}");
        }
    }
}

#[test]
fn r5g6b5_maxima_roundtrip_through_buffer() {
    let mut image = blank_buffer(PixelFormat::R5G6B5);

    image.set_channel(2, 1, PixelChannel::Red, 31);
    image.set_channel(2, 1, PixelChannel::Green, 63);
    image.set_channel(2, 1, PixelChannel::Blue, 31);

    assert_eq!(image.get_channel(2, 1, PixelChannel::Red) * 32.0, 31.0);
    assert_eq!(image.get_channel(2, 1, PixelChannel::Green) * 64.0, 63.0);
    // blue reads back raw and unnormalized
    assert_eq!(image.get_channel(2, 1, PixelChannel::Blue), 31.0);
    assert_eq!(image.get_channel(2, 1, PixelChannel::Alpha), 1.0);

    // neighbors were never touched
    assert_eq!(image.get_channel(1, 1, PixelChannel::Red), 0.0);
    assert_eq!(image.get_channel(2, 0, PixelChannel::Blue), 0.0);
}

#[test]
fn r10g10b10a2_reads_boundaries_and_refuses_writes() {
    let size = PixelFormat::R10G10B10A2.byte_stride() * (WIDTH * HEIGHT) as usize;
    let mut data = vec![0_u8; size];
    // pixel (1, 0): R = 1023, G = 0, B = 1023, A = 3
    let word: u32 = (1023 << 22) | (1023 << 2) | 3;
    data[4..8].copy_from_slice(&word.to_le_bytes());

    let mut image =
        PixelBuffer::new(WIDTH, HEIGHT, PixelFormat::R10G10B10A2, data).unwrap();

    assert_eq!(image.get_channel(1, 0, PixelChannel::Red), 1.0);
    assert_eq!(image.get_channel(1, 0, PixelChannel::Green), 0.0);
    assert_eq!(image.get_channel(1, 0, PixelChannel::Blue), 1.0);
    assert_eq!(image.get_channel(1, 0, PixelChannel::Alpha), 0.75);
    assert_eq!(image.get_channel(0, 0, PixelChannel::Red), 0.0);

    for channel in ALL_CHANNELS {
        image.set_channel(1, 0, channel, u32::MAX);
    }
    assert_eq!(image.get_channel(1, 0, PixelChannel::Red), 1.0);
    assert_eq!(&image.data()[4..8], &word.to_le_bytes());
}

#[test]
fn mip_descriptors_reference_the_arena() {
    // a 4x4 R8 base level plus a 2x2 and a 1x1 level in one arena
    let mut image = PixelBuffer::new(4, 4, PixelFormat::R8, vec![5; 21]).unwrap();

    image.push_mipmap(Mipmap::new(4, 4, 4, 0, 16));
    image.push_mipmap(Mipmap::new(2, 2, 2, 16, 4));
    image.push_mipmap(Mipmap::new(1, 1, 1, 20, 1));

    let levels = image.mipmaps();
    assert_eq!(levels.len(), 3);
    assert_eq!((levels[1].width, levels[1].height), (2, 2));

    assert_eq!(image.mip_data(1).unwrap(), &[5, 5, 5, 5]);
    assert_eq!(image.mip_data(2).unwrap(), &[5]);
}
