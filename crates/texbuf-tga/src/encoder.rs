/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the uncompressed true-colour TGA format
use std::fmt::{Debug, Formatter};
use std::io;
use std::io::Write;

use texbuf_core::options::EncoderOptions;
use texbuf_core::pixel_format::{PixelChannel, PixelFormat};
use texbuf_core::unorm::to_unorm;

/// Size of the TGA file header in bytes
pub const TGA_HEADER_SIZE: usize = 18;

/// Errors possible during encoding
pub enum TgaEncodeErrors {
    /// Too large dimensions, above 2^16. TGA uses 2 bytes for width and
    /// height, an image that cannot fit in them cannot be written
    TooLargeDimensions(usize),
    /// A pixel format the channel codec cannot interpret, either
    /// unknown or a depth layout
    UnsupportedPixelFormat(PixelFormat),
    /// Too short of an input buffer, the arena cannot hold the rows the
    /// options promise
    TooShortInput(usize, usize),
    IoErrors(io::Error)
}

impl Debug for TgaEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TgaEncodeErrors::TooLargeDimensions(dims) => {
                writeln!(f, "Too large dimensions {dims}")
            }
            TgaEncodeErrors::UnsupportedPixelFormat(format) => {
                writeln!(f, "Unsupported pixel format {format:?}")
            }
            TgaEncodeErrors::TooShortInput(expected, found) => {
                writeln!(f, "Too short of input, expected {expected}, found {found}")
            }
            TgaEncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl From<io::Error> for TgaEncodeErrors {
    fn from(err: io::Error) -> Self {
        TgaEncodeErrors::IoErrors(err)
    }
}

/// A TGA encoder
///
/// The encoder reads pixels of any addressable format through the
/// channel codec and writes them out as 32-bit BGRA unorm samples, so
/// the arena itself is never copied or converted up front.
///
/// # Example
/// - Encode a 2 by 2 RGBA8 arena
/// ```
/// use texbuf_core::options::EncoderOptions;
/// use texbuf_core::pixel_format::PixelFormat;
/// use texbuf_tga::TgaEncoder;
///
/// let pixels: [u8; 16] = std::array::from_fn(|i| i as u8 * 16);
/// let options = EncoderOptions::new(2, 2, PixelFormat::RGBA8);
///
/// let mut sink = vec![];
/// let written = TgaEncoder::new(&pixels, options).encode(&mut sink).unwrap();
/// assert_eq!(written, 18 + 16);
/// ```
pub struct TgaEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> TgaEncoder<'a> {
    /// Create a new encoder which will encode the specified arena
    /// whose layout is described by options
    ///
    /// # Arguments
    /// - data: The raw pixel arena to encode
    /// - options: Width, height, pitch and pixel format of the arena
    pub fn new(data: &'a [u8], options: EncoderOptions) -> TgaEncoder<'a> {
        TgaEncoder { data, options }
    }

    fn encode_headers<W: Write>(&self, sink: &mut W) -> Result<(), TgaEncodeErrors> {
        let width = self.options.width();
        let height = self.options.height();

        if width > usize::from(u16::MAX) {
            return Err(TgaEncodeErrors::TooLargeDimensions(width));
        }
        if height > usize::from(u16::MAX) {
            return Err(TgaEncodeErrors::TooLargeDimensions(height));
        }

        let mut header = [0_u8; TGA_HEADER_SIZE];

        // uncompressed true-colour
        header[2] = 2;
        header[12..14].copy_from_slice(&(width as u16).to_le_bytes());
        header[14..16].copy_from_slice(&(height as u16).to_le_bytes());
        // bits per pixel
        header[16] = 32;
        // 8 alpha bits, origin bits left clear
        header[17] = 0x08;

        sink.write_all(&header)?;

        Ok(())
    }

    /// Encode the arena, returning the number of bytes written
    /// or an error if anything occurs
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, TgaEncodeErrors> {
        let format = self.options.format();

        if format == PixelFormat::Unknown || format.is_depth() {
            return Err(TgaEncodeErrors::UnsupportedPixelFormat(format));
        }

        let width = self.options.width();
        let height = self.options.height();
        let pitch = self.options.pitch();
        let codec = format.codec();

        // the final row only needs its pixels, not the full pitch
        let row_bytes = width
            .checked_mul(codec.bytes_per_pixel)
            .ok_or(TgaEncodeErrors::TooLargeDimensions(width))?;
        let expected = match height {
            0 => 0,
            h => pitch
                .checked_mul(h - 1)
                .and_then(|v| v.checked_add(row_bytes))
                .ok_or(TgaEncodeErrors::TooLargeDimensions(height))?
        };
        let found = self.data.len();

        if expected > found {
            return Err(TgaEncodeErrors::TooShortInput(expected, found));
        }

        self.encode_headers(&mut sink)?;

        let mut row = vec![0_u8; width * 4];

        for y in 0..height {
            for (x, out) in row.chunks_exact_mut(4).enumerate() {
                let start = y * pitch + x * codec.bytes_per_pixel;
                let px = &self.data[start..start + codec.bytes_per_pixel];

                // note reversed order: b, g, r
                out[0] = to_unorm(codec.read(px, PixelChannel::Blue));
                out[1] = to_unorm(codec.read(px, PixelChannel::Green));
                out[2] = to_unorm(codec.read(px, PixelChannel::Red));
                out[3] = to_unorm(codec.read(px, PixelChannel::Alpha));
            }
            sink.write_all(&row)?;
        }

        Ok(TGA_HEADER_SIZE + width * height * 4)
    }
}

#[cfg(test)]
mod tests {
    use texbuf_core::options::EncoderOptions;
    use texbuf_core::pixel_format::PixelFormat;

    use crate::{TgaEncoder, TgaEncodeErrors, TGA_HEADER_SIZE};

    #[test]
    fn header_for_two_by_one_rgba() {
        let pixels = [1_u8, 2, 3, 4, 5, 6, 7, 8];
        let options = EncoderOptions::new(2, 1, PixelFormat::RGBA8);

        let mut sink = vec![];
        TgaEncoder::new(&pixels, options).encode(&mut sink).unwrap();

        assert_eq!(sink.len(), TGA_HEADER_SIZE + 8);
        assert_eq!(&sink[..12], &[0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&sink[12..18], &[2, 0, 1, 0, 32, 8]);
        // pixel stream is b,g,r,a per pixel
        assert_eq!(&sink[18..], &[3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn respects_row_pitch() {
        // one pixel per row, rows padded to four bytes
        let pixels = [10_u8, 0, 0, 0, 20, 0, 0, 0];
        let options = EncoderOptions::new(1, 2, PixelFormat::R8).set_pitch(4);

        let mut sink = vec![];
        TgaEncoder::new(&pixels, options).encode(&mut sink).unwrap();

        assert_eq!(&sink[18..], &[0, 0, 10, 255, 0, 0, 20, 255]);
    }

    #[test]
    fn rejects_unknown_format() {
        let options = EncoderOptions::new(1, 1, PixelFormat::Unknown);
        let result = TgaEncoder::new(&[], options).encode(vec![]);

        assert!(matches!(
            result,
            Err(TgaEncodeErrors::UnsupportedPixelFormat(_))
        ));
    }

    #[test]
    fn rejects_depth_formats() {
        let options = EncoderOptions::new(1, 1, PixelFormat::D32);
        let result = TgaEncoder::new(&[0; 4], options).encode(vec![]);

        assert!(matches!(
            result,
            Err(TgaEncodeErrors::UnsupportedPixelFormat(_))
        ));
    }

    #[test]
    fn rejects_oversize_dimensions() {
        let options = EncoderOptions::new(1, 1, PixelFormat::R8).set_width(70_000);
        let result = TgaEncoder::new(&[0; 70_000], options).encode(vec![]);

        assert!(matches!(
            result,
            Err(TgaEncodeErrors::TooLargeDimensions(_))
        ));
    }

    #[test]
    fn rejects_short_arena() {
        let options = EncoderOptions::new(4, 4, PixelFormat::RGBA8);
        let result = TgaEncoder::new(&[0; 16], options).encode(vec![]);

        assert!(matches!(result, Err(TgaEncodeErrors::TooShortInput(64, 16))));
    }
}
