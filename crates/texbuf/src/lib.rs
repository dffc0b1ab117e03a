/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory, mip-mapped pixel buffer with per-channel access
//!
//! A [`PixelBuffer`](crate::buffer::PixelBuffer) is populated once by a
//! loader with its dimensions, format tags and raw bytes, and read by
//! renderers and tools through normalized-float or 8-bit-unorm channel
//! accessors. Buffers carrying block-compressed data are opaque: they
//! keep their classification tag but refuse per-pixel access.
//!
//! Mip levels are descriptors into the buffer's own arena, they own no
//! storage of their own.
//!
//! # Features
//! - `tga`: export of uncompressed buffers to TGA files, on by default
//! - `log`: routes diagnostics through the `log` crate, on by default
//! - `serde-support`: serialization of the format enums
pub mod buffer;
#[cfg(feature = "tga")]
pub mod codecs;
pub mod errors;
pub mod mipmap;
