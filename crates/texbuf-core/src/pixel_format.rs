/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel format information and layout queries

/// All uncompressed pixel layouts understood by the channel codec.
///
/// Multi-byte channel words are stored little-endian, matching the
/// layout GPU texture formats are defined in.
///
/// The 16-bit-per-channel family stores IEEE-754 half floats, the
/// 32-bit family stores `f32`s. The packed formats (`R5G6B5` and
/// `R10G10B10A2`) pack all channels into one little-endian word.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PixelFormat {
    /// The layout is not known.
    ///
    /// Compressed buffers carry this tag since their bytes cannot be
    /// addressed per pixel. Channel reads on it produce the
    /// absent-channel defaults, writes are ignored.
    Unknown,
    /// One 8-bit unorm channel
    R8,
    /// Two 8-bit unorm channels
    RG8,
    /// Three 8-bit unorm channels
    RGB8,
    /// Four 8-bit unorm channels
    RGBA8,
    /// One 16-bit half float channel
    R16,
    /// Two 16-bit half float channels
    RG16,
    /// Three 16-bit half float channels
    RGB16,
    /// Four 16-bit half float channels
    RGBA16,
    /// One 32-bit float channel
    R32,
    /// Two 32-bit float channels
    RG32,
    /// Three 32-bit float channels
    RGB32,
    /// Four 32-bit float channels
    RGBA32,
    /// 10 bits each of red, green and blue plus 2 alpha bits,
    /// packed into one 32-bit word with red in the topmost bits
    R10G10B10A2,
    /// 5 bits red, 6 bits green, 5 bits blue packed into one
    /// 16-bit word with red in the topmost bits
    R5G6B5,
    /// 24 depth bits and an 8-bit stencil-like region.
    ///
    /// Carried for completeness of loader metadata, the channel codec
    /// does not interpret depth formats.
    D24R8,
    /// One 32-bit depth channel, not interpreted by the channel codec
    D32
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self::Unknown
    }
}

impl PixelFormat {
    /// Number of bits one pixel of this format occupies.
    ///
    /// `Unknown` occupies zero bits since it has no layout.
    #[rustfmt::skip]
    pub const fn bit_count(self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::R8      => 8,
            Self::RG8     => 16,
            Self::RGB8    => 24,
            Self::RGBA8   => 32,
            Self::R16     => 16,
            Self::RG16    => 32,
            Self::RGB16   => 48,
            Self::RGBA16  => 64,
            Self::R32     => 32,
            Self::RG32    => 64,
            Self::RGB32   => 96,
            Self::RGBA32  => 128,
            Self::R10G10B10A2 => 32,
            Self::R5G6B5  => 16,
            Self::D24R8   => 32,
            Self::D32     => 32
        }
    }

    /// Number of bytes between the start of two horizontally adjacent
    /// pixels.
    ///
    /// Every supported format occupies a whole number of bytes, so this
    /// is exactly [`bit_count`](Self::bit_count) over eight; there are no
    /// sub-byte formats.
    pub const fn byte_stride(self) -> usize {
        self.bit_count() / 8
    }

    /// Width in bits of the red channel.
    ///
    /// This is the convention used to fill a buffer's bit depth field
    /// when a loader does not provide one.
    #[rustfmt::skip]
    pub const fn bit_depth(self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::R8 | Self::RG8 | Self::RGB8 | Self::RGBA8 => 8,
            Self::R16 | Self::RG16 | Self::RGB16 | Self::RGBA16 => 16,
            Self::R32 | Self::RG32 | Self::RGB32 | Self::RGBA32 => 32,
            Self::R10G10B10A2 => 10,
            Self::R5G6B5 => 5,
            Self::D24R8  => 24,
            Self::D32    => 32
        }
    }

    /// Number of channels present for this format
    ///
    /// E.g. `RGB8` returns 3 since it contains R, G and B samples
    /// for every pixel
    pub const fn num_components(self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::R8 | Self::R16 | Self::R32 | Self::D32 => 1,
            Self::RG8 | Self::RG16 | Self::RG32 | Self::D24R8 => 2,
            Self::RGB8 | Self::RGB16 | Self::RGB32 | Self::R5G6B5 => 3,
            Self::RGBA8 | Self::RGBA16 | Self::RGBA32 | Self::R10G10B10A2 => 4
        }
    }

    /// Return true if the format stores an alpha channel
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::RGBA8 | Self::RGBA16 | Self::RGBA32 | Self::R10G10B10A2
        )
    }

    /// Return true if the format's channels are floating point
    /// (half floats for the 16-bit family, `f32` for the 32-bit family)
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::R16
                | Self::RG16
                | Self::RGB16
                | Self::RGBA16
                | Self::R32
                | Self::RG32
                | Self::RGB32
                | Self::RGBA32
        )
    }

    /// Return true if all channels share one machine word
    pub const fn is_packed(self) -> bool {
        matches!(self, Self::R5G6B5 | Self::R10G10B10A2)
    }

    /// Return true if this is a depth layout the channel codec
    /// refuses to interpret
    pub const fn is_depth(self) -> bool {
        matches!(self, Self::D24R8 | Self::D32)
    }
}

/// Selects one component of a pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelChannel {
    Red,
    Green,
    Blue,
    Alpha
}

impl PixelChannel {
    /// Position of this channel inside an interleaved pixel,
    /// red first
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3
        }
    }

    pub const fn is_alpha(self) -> bool {
        matches!(self, Self::Alpha)
    }
}

/// Every channel selector, in pixel order
pub static ALL_CHANNELS: [PixelChannel; 4] = [
    PixelChannel::Red,
    PixelChannel::Green,
    PixelChannel::Blue,
    PixelChannel::Alpha
];

/// Every pixel format the channel codec can address per pixel.
///
/// This explicitly leaves out `Unknown` and the depth formats.
pub static ALL_ADDRESSABLE_FORMATS: [PixelFormat; 14] = [
    PixelFormat::R8,
    PixelFormat::RG8,
    PixelFormat::RGB8,
    PixelFormat::RGBA8,
    PixelFormat::R16,
    PixelFormat::RG16,
    PixelFormat::RGB16,
    PixelFormat::RGBA16,
    PixelFormat::R32,
    PixelFormat::RG32,
    PixelFormat::RGB32,
    PixelFormat::RGBA32,
    PixelFormat::R10G10B10A2,
    PixelFormat::R5G6B5
];
