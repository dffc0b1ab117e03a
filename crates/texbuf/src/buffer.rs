/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single pixel buffer
//!
//! A buffer is represented as
//!
//! - one exclusively owned byte arena
//!     - described by a pixel format or a compressed-format tag
//!         - with the base level at the start of the arena
//!             - and any mip levels as descriptors into the same arena
//!
//! A loader populates the buffer once, renderers and tools read it
//! through the channel accessors or hand the raw arena to hardware.
//! Mutation is possible but buffers are immutable in practice.
//!
//! Buffers move, they do not clone: the arena can be large and copying
//! it is never done behind the caller's back.
use std::fmt::{Debug, Formatter};

use texbuf_core::compressed::CompressedFormat;
use texbuf_core::pixel_format::{PixelChannel, PixelFormat};
use texbuf_core::unorm::to_unorm;

use crate::errors::BufferErrors;
use crate::mipmap::Mipmap;

// Out-of-bounds alpha reads are fully opaque, already past the unorm
// scale. Callers sampling past the edge rely on opaque padding, while
// out-of-bounds colour channels read as black.
const OUT_OF_BOUNDS_ALPHA: f32 = 255.0;

/// A single in-memory pixel buffer and its mip chain
pub struct PixelBuffer {
    width:           u32,
    height:          u32,
    bit_count:       u16,
    bit_depth:       u16,
    pitch:           usize,
    data_size:       usize,
    compressed:      bool,
    is_float:        bool,
    is_signed:       bool,
    pixel_format:    PixelFormat,
    compress_format: CompressedFormat,
    data:            Vec<u8>,
    mipmaps:         Vec<Mipmap>
}

impl PixelBuffer {
    /// Create a new buffer over `data` with rows packed tightly.
    ///
    /// Derives pitch, bit counts and flags from the format and checks
    /// that the arena can hold the base level.
    ///
    /// # Example
    /// ```
    /// use texbuf::buffer::PixelBuffer;
    /// use texbuf_core::pixel_format::PixelFormat;
    ///
    /// let image = PixelBuffer::new(4, 4, PixelFormat::RGBA8, vec![0; 64]).unwrap();
    /// assert_eq!(image.pitch(), 16);
    /// ```
    pub fn new(
        width: u32, height: u32, format: PixelFormat, data: Vec<u8>
    ) -> Result<PixelBuffer, BufferErrors> {
        let pitch = (width as usize)
            .checked_mul(format.byte_stride())
            .ok_or(BufferErrors::TooLargeDimensions(width as usize))?;

        Self::with_pitch(width, height, format, pitch, data)
    }

    /// Create a new buffer over `data` whose rows are `pitch` bytes
    /// apart, for loaders that pad rows.
    ///
    /// The base level must fit the arena, `pitch * height` bytes.
    pub fn with_pitch(
        width: u32, height: u32, format: PixelFormat, pitch: usize, data: Vec<u8>
    ) -> Result<PixelBuffer, BufferErrors> {
        let base_size = pitch
            .checked_mul(height as usize)
            .ok_or(BufferErrors::TooLargeDimensions(height as usize))?;

        if base_size > data.len() {
            return Err(BufferErrors::TooSmallArena(base_size, data.len()));
        }

        Ok(PixelBuffer {
            width,
            height,
            bit_count: format.bit_count() as u16,
            bit_depth: format.bit_depth(),
            pitch,
            data_size: data.len(),
            compressed: false,
            is_float: format.is_float(),
            is_signed: false,
            pixel_format: format,
            compress_format: CompressedFormat::None,
            data,
            mipmaps: Vec::new()
        })
    }

    /// Create a buffer holding block-compressed data.
    ///
    /// The bytes are kept as an opaque blob: the buffer remembers the
    /// classification tag but per-pixel accessors are unavailable and
    /// export paths refuse it.
    pub fn new_compressed(
        width: u32, height: u32, format: CompressedFormat, data: Vec<u8>
    ) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            bit_count: 0,
            bit_depth: 0,
            pitch: 0,
            data_size: data.len(),
            compressed: true,
            is_float: false,
            is_signed: false,
            pixel_format: PixelFormat::Unknown,
            compress_format: format,
            data,
            mipmaps: Vec::new()
        }
    }

    /// Get buffer dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bits one pixel occupies
    pub const fn bit_count(&self) -> u16 {
        self.bit_count
    }

    /// Bits of the red channel
    pub const fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    /// Byte stride between the starts of consecutive rows
    pub const fn pitch(&self) -> usize {
        self.pitch
    }

    /// Length of the owned arena in bytes
    pub const fn data_size(&self) -> usize {
        self.data_size
    }

    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub const fn is_float(&self) -> bool {
        self.is_float
    }

    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// Mark the buffer's samples as signed, a loader-provided hint
    /// not interpreted by the channel codec
    pub fn set_signed(&mut self, signed: bool) {
        self.is_signed = signed;
    }

    pub const fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// The classification tag of a compressed buffer,
    /// `CompressedFormat::None` otherwise
    pub const fn compress_format(&self) -> CompressedFormat {
        self.compress_format
    }

    /// Return a reference to the raw arena
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Return a mutable reference to the raw arena
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning its arena
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Decode one channel of the pixel at `(x, y)` to a normalized
    /// float.
    ///
    /// Out-of-bounds coordinates are not an error: colour channels
    /// read `0.0` and alpha reads fully opaque, so edge-padding
    /// samplers need no bounds handling of their own.
    ///
    /// # Panics
    /// If the buffer is compressed, or carries a depth format the
    /// channel codec cannot interpret. Both violate the construction
    /// contract of a per-pixel-addressable buffer.
    pub fn get_channel(&self, x: u32, y: u32, channel: PixelChannel) -> f32 {
        if x >= self.width || y >= self.height {
            if channel.is_alpha() {
                return OUT_OF_BOUNDS_ALPHA;
            }
            return 0.0;
        }

        assert!(
            !self.compressed,
            "per-pixel access on a compressed buffer ({})",
            self.compress_format
        );

        let codec = self.pixel_format.codec();
        let start = y as usize * self.pitch + x as usize * codec.bytes_per_pixel;

        codec.read(&self.data[start..start + codec.bytes_per_pixel], channel)
    }

    /// Decode one channel of the pixel at `(x, y)` to an 8-bit unorm
    /// sample, see [`get_channel`](Self::get_channel)
    pub fn get_channel8(&self, x: u32, y: u32, channel: PixelChannel) -> u8 {
        to_unorm(self.get_channel(x, y, channel))
    }

    /// Encode one channel of the pixel at `(x, y)` from a raw bit
    /// pattern: the low byte for unorm formats, half-float bits for
    /// the 16-bit family, `f32` bits for the 32-bit family.
    ///
    /// Out-of-bounds coordinates and channels the format has no write
    /// rule for are silently ignored, callers must not assume a write
    /// took effect.
    ///
    /// # Panics
    /// As [`get_channel`](Self::get_channel).
    pub fn set_channel(&mut self, x: u32, y: u32, channel: PixelChannel, value: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        assert!(
            !self.compressed,
            "per-pixel access on a compressed buffer ({})",
            self.compress_format
        );

        let codec = self.pixel_format.codec();
        let start = y as usize * self.pitch + x as usize * codec.bytes_per_pixel;

        codec.write(
            &mut self.data[start..start + codec.bytes_per_pixel],
            channel,
            value
        );
    }

    /// Append a mip level descriptor to the chain.
    ///
    /// The chain keeps the order of appends, no level ordering is
    /// enforced. The described range is validated when dereferenced,
    /// not here, since loaders may describe levels before filling the
    /// arena.
    pub fn push_mipmap(&mut self, mipmap: Mipmap) {
        self.mipmaps.push(mipmap);
    }

    /// Return the mip chain in the order the loader appended it
    pub fn mipmaps(&self) -> &[Mipmap] {
        &self.mipmaps
    }

    pub fn mipmap_count(&self) -> usize {
        self.mipmaps.len()
    }

    /// Return the bytes of one mip level.
    ///
    /// The descriptor's range is checked against the arena on every
    /// call, a descriptor reaching outside it is reported as an error
    /// and never a wild read.
    pub fn mip_data(&self, level: usize) -> Result<&[u8], BufferErrors> {
        let mip = self
            .mipmaps
            .get(level)
            .ok_or(BufferErrors::NoSuchMipLevel(level))?;

        let end = mip
            .offset
            .checked_add(mip.size)
            .ok_or(BufferErrors::MipOutOfRange(level, usize::MAX, self.data.len()))?;

        self.data
            .get(mip.offset..end)
            .ok_or(BufferErrors::MipOutOfRange(level, end, self.data.len()))
    }

    /// View the arena as native-endian `u16` words, the storage of the
    /// half-float formats
    pub fn reinterpret_as_u16(&self) -> Result<&[u16], BufferErrors> {
        bytemuck::try_cast_slice(&self.data).map_err(|_| BufferErrors::MisalignedCast("u16"))
    }

    /// View the arena as native-endian `f32` samples, the storage of
    /// the 32-bit float formats
    pub fn reinterpret_as_f32(&self) -> Result<&[f32], BufferErrors> {
        bytemuck::try_cast_slice(&self.data).map_err(|_| BufferErrors::MisalignedCast("f32"))
    }
}

impl Debug for PixelBuffer {
    /// Prints the buffer's metadata, not its bytes
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bit_count", &self.bit_count)
            .field("bit_depth", &self.bit_depth)
            .field("pitch", &self.pitch)
            .field("data_size", &self.data_size)
            .field("compressed", &self.compressed)
            .field("is_float", &self.is_float)
            .field("is_signed", &self.is_signed)
            .field("pixel_format", &self.pixel_format)
            .field("compress_format", &self.compress_format)
            .field("mipmaps", &self.mipmaps.len())
            .finish_non_exhaustive()
    }
}
