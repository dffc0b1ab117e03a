/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The per-pixel channel codec
//!
//! Each addressable [`PixelFormat`] maps to a [`FormatCodec`], a descriptor
//! carrying the pixel stride and the decode/encode rule pair for that layout.
//! The codec operates on a single pixel's bytes; computing the pixel's
//! position inside a larger buffer is the buffer's job.
//!
//! Decoded values are normalized floats for every channel except the
//! blue channel of `R5G6B5`, which decodes to its raw 5-bit integer.
//! Encoded values are raw bit patterns: the low byte for the unorm
//! family, half-float bits for the 16-bit family and `f32` bits for the
//! 32-bit family.
//!
//! Missing colour channels decode to `0.0` and a missing alpha channel
//! decodes to `1.0`, so a caller can treat every format as RGBA.
use half::f16;

use crate::pixel_format::{PixelChannel, PixelFormat};

/// Decode and encode rules for one pixel format.
///
/// The rules operate on a slice holding exactly one pixel,
/// `bytes_per_pixel` long.
#[derive(Copy, Clone)]
pub struct FormatCodec {
    /// Exact number of bytes one pixel occupies
    pub bytes_per_pixel: usize,
    read_fn:             fn(&[u8], PixelChannel) -> f32,
    write_fn:            fn(&mut [u8], PixelChannel, u32)
}

impl FormatCodec {
    /// Decode one channel from a single pixel's bytes
    ///
    /// # Panics
    /// If `px` is shorter than `bytes_per_pixel`
    pub fn read(&self, px: &[u8], channel: PixelChannel) -> f32 {
        (self.read_fn)(px, channel)
    }

    /// Encode one channel into a single pixel's bytes, leaving the
    /// bits of sibling channels untouched.
    ///
    /// Channels the format has no write rule for are left as they are.
    ///
    /// # Panics
    /// If `px` is shorter than `bytes_per_pixel`
    pub fn write(&self, px: &mut [u8], channel: PixelChannel, value: u32) {
        (self.write_fn)(px, channel, value)
    }
}

impl PixelFormat {
    /// Return the channel codec for this format.
    ///
    /// # Panics
    /// Depth formats carry no channel layout; asking for their codec is
    /// a programming error and panics. A format is expected to have been
    /// validated when the buffer holding it was constructed.
    #[rustfmt::skip]
    pub const fn codec(self) -> FormatCodec {
        match self {
            Self::Unknown => NONE,
            Self::R8      => UNORM8_X1,
            Self::RG8     => UNORM8_X2,
            Self::RGB8    => UNORM8_X3,
            Self::RGBA8   => UNORM8_X4,
            Self::R16     => HALF16_X1,
            Self::RG16    => HALF16_X2,
            Self::RGB16   => HALF16_X3,
            Self::RGBA16  => HALF16_X4,
            Self::R32     => FLOAT32_X1,
            Self::RG32    => FLOAT32_X2,
            Self::RGB32   => FLOAT32_X3,
            Self::RGBA32  => FLOAT32_X4,
            Self::R5G6B5      => PACKED_565,
            Self::R10G10B10A2 => PACKED_1010102,
            Self::D24R8 | Self::D32 => {
                panic!("depth pixel formats have no channel codec")
            }
        }
    }
}

/// Decode one channel from a single pixel of the given format.
///
/// Convenience wrapper over [`PixelFormat::codec`], see [`FormatCodec::read`].
pub fn read_channel(format: PixelFormat, px: &[u8], channel: PixelChannel) -> f32 {
    format.codec().read(px, channel)
}

/// Encode one channel into a single pixel of the given format.
///
/// Convenience wrapper over [`PixelFormat::codec`], see [`FormatCodec::write`].
pub fn write_channel(format: PixelFormat, px: &mut [u8], channel: PixelChannel, value: u32) {
    format.codec().write(px, channel, value)
}

const NONE: FormatCodec = FormatCodec {
    bytes_per_pixel: 0,
    read_fn:         read_none,
    write_fn:        write_none
};

const UNORM8_X1: FormatCodec = FormatCodec {
    bytes_per_pixel: 1,
    read_fn:         read_unorm8::<1>,
    write_fn:        write_unorm8::<1>
};

const UNORM8_X2: FormatCodec = FormatCodec {
    bytes_per_pixel: 2,
    read_fn:         read_unorm8::<2>,
    write_fn:        write_unorm8::<2>
};

const UNORM8_X3: FormatCodec = FormatCodec {
    bytes_per_pixel: 3,
    read_fn:         read_unorm8::<3>,
    write_fn:        write_unorm8::<3>
};

const UNORM8_X4: FormatCodec = FormatCodec {
    bytes_per_pixel: 4,
    read_fn:         read_unorm8::<4>,
    write_fn:        write_unorm8::<4>
};

const HALF16_X1: FormatCodec = FormatCodec {
    bytes_per_pixel: 2,
    read_fn:         read_half16::<1>,
    write_fn:        write_half16::<1>
};

const HALF16_X2: FormatCodec = FormatCodec {
    bytes_per_pixel: 4,
    read_fn:         read_half16::<2>,
    write_fn:        write_half16::<2>
};

const HALF16_X3: FormatCodec = FormatCodec {
    bytes_per_pixel: 6,
    read_fn:         read_half16::<3>,
    write_fn:        write_half16::<3>
};

const HALF16_X4: FormatCodec = FormatCodec {
    bytes_per_pixel: 8,
    read_fn:         read_half16::<4>,
    write_fn:        write_half16::<4>
};

const FLOAT32_X1: FormatCodec = FormatCodec {
    bytes_per_pixel: 4,
    read_fn:         read_float32::<1>,
    write_fn:        write_float32::<1>
};

const FLOAT32_X2: FormatCodec = FormatCodec {
    bytes_per_pixel: 8,
    read_fn:         read_float32::<2>,
    write_fn:        write_float32::<2>
};

const FLOAT32_X3: FormatCodec = FormatCodec {
    bytes_per_pixel: 12,
    read_fn:         read_float32::<3>,
    write_fn:        write_float32::<3>
};

const FLOAT32_X4: FormatCodec = FormatCodec {
    bytes_per_pixel: 16,
    read_fn:         read_float32::<4>,
    write_fn:        write_float32::<4>
};

const PACKED_565: FormatCodec = FormatCodec {
    bytes_per_pixel: 2,
    read_fn:         read_r5g6b5,
    write_fn:        write_r5g6b5
};

const PACKED_1010102: FormatCodec = FormatCodec {
    bytes_per_pixel: 4,
    // channel writes are not supported for the packed 10-10-10-2 layout
    write_fn:        write_none,
    read_fn:         read_r10g10b10a2
};

/// Default for a channel the format does not store
fn missing_channel(channel: PixelChannel) -> f32 {
    if channel.is_alpha() {
        1.0
    } else {
        0.0
    }
}

fn read_none(_: &[u8], channel: PixelChannel) -> f32 {
    missing_channel(channel)
}

fn write_none(_: &mut [u8], _: PixelChannel, _: u32) {}

fn read_unorm8<const N: usize>(px: &[u8], channel: PixelChannel) -> f32 {
    let idx = channel.index();

    if idx < N {
        f32::from(px[idx]) / 255.0
    } else {
        missing_channel(channel)
    }
}

fn write_unorm8<const N: usize>(px: &mut [u8], channel: PixelChannel, value: u32) {
    let idx = channel.index();

    if idx < N {
        px[idx] = (value & 0xFF) as u8;
    }
}

fn read_half16<const N: usize>(px: &[u8], channel: PixelChannel) -> f32 {
    let idx = channel.index();

    if idx < N {
        let off = idx * 2;
        let bits = u16::from_le_bytes([px[off], px[off + 1]]);

        f16::from_bits(bits).to_f32()
    } else {
        missing_channel(channel)
    }
}

fn write_half16<const N: usize>(px: &mut [u8], channel: PixelChannel, value: u32) {
    let idx = channel.index();

    if idx < N {
        let off = idx * 2;
        px[off..off + 2].copy_from_slice(&(value as u16).to_le_bytes());
    }
}

fn read_float32<const N: usize>(px: &[u8], channel: PixelChannel) -> f32 {
    let idx = channel.index();

    if idx < N {
        let off = idx * 4;

        f32::from_le_bytes([px[off], px[off + 1], px[off + 2], px[off + 3]])
    } else {
        missing_channel(channel)
    }
}

fn write_float32<const N: usize>(px: &mut [u8], channel: PixelChannel, value: u32) {
    let idx = channel.index();

    if idx < N {
        let off = idx * 4;
        px[off..off + 4].copy_from_slice(&value.to_le_bytes());
    }
}

fn read_r5g6b5(px: &[u8], channel: PixelChannel) -> f32 {
    match channel {
        PixelChannel::Red => f32::from((px[0] & 0xF8) >> 3) / 32.0,
        PixelChannel::Green => {
            f32::from(((px[0] & 0x07) << 3) | ((px[1] & 0xE0) >> 5)) / 64.0
        }
        // the blue channel decodes to its raw 5-bit integer
        PixelChannel::Blue => f32::from(px[1] & 0x1F),
        PixelChannel::Alpha => 1.0
    }
}

// Writes OR the channel's own bits over whatever is present, they never
// clear bits. Callers writing over non-zero pixels must zero them first.
fn write_r5g6b5(px: &mut [u8], channel: PixelChannel, value: u32) {
    match channel {
        PixelChannel::Red => px[0] |= ((value << 3) & 0xF8) as u8,
        PixelChannel::Green => {
            px[0] |= ((value & 0x38) >> 3) as u8;
            px[1] |= ((value & 0x07) << 5) as u8;
        }
        PixelChannel::Blue => px[1] |= (value & 0x1F) as u8,
        PixelChannel::Alpha => {}
    }
}

fn read_r10g10b10a2(px: &[u8], channel: PixelChannel) -> f32 {
    let word = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);

    match channel {
        PixelChannel::Red => (word >> 22) as f32 / 1023.0,
        PixelChannel::Green => ((word >> 12) & 0x3FF) as f32 / 1023.0,
        PixelChannel::Blue => ((word >> 2) & 0x3FF) as f32 / 1023.0,
        PixelChannel::Alpha => (word & 0x03) as f32 / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::{ALL_ADDRESSABLE_FORMATS, ALL_CHANNELS};

    #[test]
    fn codec_stride_matches_format_stride() {
        for format in ALL_ADDRESSABLE_FORMATS {
            assert_eq!(
                format.codec().bytes_per_pixel,
                format.byte_stride(),
                "{format:?}"
            );
        }
    }

    #[test]
    fn unorm8_roundtrip() {
        let mut px = [0_u8; 4];

        for (i, channel) in ALL_CHANNELS.iter().enumerate() {
            write_channel(PixelFormat::RGBA8, &mut px, *channel, 50 + i as u32);
        }
        assert_eq!(px, [50, 51, 52, 53]);

        let red = read_channel(PixelFormat::RGBA8, &px, PixelChannel::Red);
        assert_eq!(red, 50.0 / 255.0);
    }

    #[test]
    fn unorm8_missing_channels() {
        let px = [128_u8, 37];

        assert_eq!(read_channel(PixelFormat::RG8, &px, PixelChannel::Blue), 0.0);
        assert_eq!(read_channel(PixelFormat::RG8, &px, PixelChannel::Alpha), 1.0);

        // writes to channels the format lacks change nothing
        let mut copy = px;
        write_channel(PixelFormat::RG8, &mut copy, PixelChannel::Blue, 255);
        write_channel(PixelFormat::RG8, &mut copy, PixelChannel::Alpha, 255);
        assert_eq!(copy, px);
    }

    #[test]
    fn half16_decodes_ieee_bits() {
        // 1.0 and 0.5 in binary16
        let px = [0x00, 0x3C, 0x00, 0x38];

        assert_eq!(read_channel(PixelFormat::RG16, &px, PixelChannel::Red), 1.0);
        assert_eq!(
            read_channel(PixelFormat::RG16, &px, PixelChannel::Green),
            0.5
        );
    }

    #[test]
    fn half16_write_stores_low_word() {
        let mut px = [0_u8; 8];
        let bits = u32::from(half::f16::from_f32(0.25).to_bits());

        write_channel(PixelFormat::RGBA16, &mut px, PixelChannel::Alpha, bits);

        assert_eq!(
            read_channel(PixelFormat::RGBA16, &px, PixelChannel::Alpha),
            0.25
        );
        // sibling channels still read as zero
        assert_eq!(read_channel(PixelFormat::RGBA16, &px, PixelChannel::Red), 0.0);
    }

    #[test]
    fn float32_roundtrip_via_bits() {
        let mut px = [0_u8; 12];

        write_channel(
            PixelFormat::RGB32,
            &mut px,
            PixelChannel::Blue,
            0.75_f32.to_bits()
        );

        assert_eq!(
            read_channel(PixelFormat::RGB32, &px, PixelChannel::Blue),
            0.75
        );
    }

    #[test]
    fn r5g6b5_maxima_roundtrip() {
        let mut px = [0_u8; 2];

        write_channel(PixelFormat::R5G6B5, &mut px, PixelChannel::Red, 31);
        write_channel(PixelFormat::R5G6B5, &mut px, PixelChannel::Green, 63);
        write_channel(PixelFormat::R5G6B5, &mut px, PixelChannel::Blue, 31);

        let r = read_channel(PixelFormat::R5G6B5, &px, PixelChannel::Red) * 32.0;
        let g = read_channel(PixelFormat::R5G6B5, &px, PixelChannel::Green) * 64.0;
        let b = read_channel(PixelFormat::R5G6B5, &px, PixelChannel::Blue);

        assert_eq!(r, 31.0);
        assert_eq!(g, 63.0);
        // blue reads back as its raw 5-bit integer
        assert_eq!(b, 31.0);
    }

    #[test]
    fn r5g6b5_writes_do_not_disturb_siblings() {
        let mut px = [0_u8; 2];

        write_channel(PixelFormat::R5G6B5, &mut px, PixelChannel::Green, 0b101_101);
        let green = read_channel(PixelFormat::R5G6B5, &px, PixelChannel::Green);

        write_channel(PixelFormat::R5G6B5, &mut px, PixelChannel::Red, 0b10101);
        write_channel(PixelFormat::R5G6B5, &mut px, PixelChannel::Blue, 0b01010);

        assert_eq!(
            read_channel(PixelFormat::R5G6B5, &px, PixelChannel::Green),
            green
        );
        assert_eq!(
            read_channel(PixelFormat::R5G6B5, &px, PixelChannel::Red) * 32.0,
            f32::from(0b10101_u8)
        );
    }

    #[test]
    fn r10g10b10a2_boundary_reads() {
        let zero = 0_u32.to_le_bytes();

        for channel in ALL_CHANNELS {
            assert_eq!(
                read_channel(PixelFormat::R10G10B10A2, &zero, channel),
                0.0,
                "{channel:?}"
            );
        }

        let full = u32::MAX.to_le_bytes();

        assert_eq!(
            read_channel(PixelFormat::R10G10B10A2, &full, PixelChannel::Red),
            1.0
        );
        assert_eq!(
            read_channel(PixelFormat::R10G10B10A2, &full, PixelChannel::Green),
            1.0
        );
        assert_eq!(
            read_channel(PixelFormat::R10G10B10A2, &full, PixelChannel::Blue),
            1.0
        );
        // two alpha bits scale by 1/4, so full alpha reads as 3/4
        assert_eq!(
            read_channel(PixelFormat::R10G10B10A2, &full, PixelChannel::Alpha),
            0.75
        );
    }

    #[test]
    fn r10g10b10a2_writes_are_ignored() {
        let mut px = [0xAB, 0xCD, 0xEF, 0x01];
        let before = px;

        for channel in ALL_CHANNELS {
            write_channel(PixelFormat::R10G10B10A2, &mut px, channel, u32::MAX);
        }

        assert_eq!(px, before);
    }

    #[test]
    #[should_panic]
    fn depth_formats_have_no_codec() {
        let _ = PixelFormat::D32.codec();
    }

    #[test]
    fn unknown_decodes_to_defaults() {
        assert_eq!(read_channel(PixelFormat::Unknown, &[], PixelChannel::Red), 0.0);
        assert_eq!(
            read_channel(PixelFormat::Unknown, &[], PixelChannel::Alpha),
            1.0
        );
    }
}
