/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Error types for buffer construction, addressing and export
use std::fmt::{Debug, Formatter};

use texbuf_core::compressed::CompressedFormat;

/// Errors from constructing or addressing a pixel buffer
pub enum BufferErrors {
    /// The arena cannot hold the base level, (expected, found)
    TooSmallArena(usize, usize),
    /// Width, height and pitch overflow a byte count
    TooLargeDimensions(usize),
    /// A mip level index past the end of the chain
    NoSuchMipLevel(usize),
    /// A mip descriptor pointing outside the arena,
    /// (level, required end, arena length)
    MipOutOfRange(usize, usize, usize),
    /// The arena cannot be viewed as the requested sample type
    /// because of its length or alignment
    MisalignedCast(&'static str)
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferErrors::TooSmallArena(expected, found) => {
                writeln!(
                    f,
                    "Arena too small for the base level, expected {expected}, found {found}"
                )
            }
            BufferErrors::TooLargeDimensions(dims) => {
                writeln!(f, "Too large dimensions {dims}")
            }
            BufferErrors::NoSuchMipLevel(level) => {
                writeln!(f, "No mip level {level} in the chain")
            }
            BufferErrors::MipOutOfRange(level, end, arena) => {
                writeln!(
                    f,
                    "Mip level {level} ends at byte {end}, past the arena length {arena}"
                )
            }
            BufferErrors::MisalignedCast(kind) => {
                writeln!(f, "Arena cannot be viewed as {kind} samples")
            }
        }
    }
}

/// Umbrella error for buffer and export operations
pub enum ImageErrors {
    BufferErrors(BufferErrors),
    /// The buffer holds block-compressed data which cannot be exported
    /// per pixel
    EncodeCompressed(CompressedFormat),
    #[cfg(feature = "tga")]
    TgaEncodeErrors(texbuf_tga::TgaEncodeErrors),
    IoErrors(std::io::Error)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageErrors::BufferErrors(err) => {
                writeln!(f, "{err:?}")
            }
            ImageErrors::EncodeCompressed(format) => {
                writeln!(f, "Cannot export a compressed buffer ({format})")
            }
            #[cfg(feature = "tga")]
            ImageErrors::TgaEncodeErrors(err) => {
                writeln!(f, "TGA encoding failed: {err:?}")
            }
            ImageErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl From<BufferErrors> for ImageErrors {
    fn from(err: BufferErrors) -> Self {
        ImageErrors::BufferErrors(err)
    }
}

#[cfg(feature = "tga")]
impl From<texbuf_tga::TgaEncodeErrors> for ImageErrors {
    fn from(err: texbuf_tga::TgaEncodeErrors) -> Self {
        ImageErrors::TgaEncodeErrors(err)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(err: std::io::Error) -> Self {
        ImageErrors::IoErrors(err)
    }
}
