/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder options
//!
//! This module exposes a struct carrying the geometry and pixel layout
//! an encoder needs to interpret a raw byte arena, so that every
//! encoder for texbuf buffers takes the same configuration.

use crate::pixel_format::PixelFormat;

/// Options shared by encoders for texbuf buffers
///
/// The options describe the arena handed to the encoder: its pixel
/// format, dimensions and row pitch. `new` derives a tight pitch from
/// the width; loaders with padded rows can override it with
/// [`set_pitch`](Self::set_pitch).
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:  usize,
    height: usize,
    pitch:  usize,
    format: PixelFormat
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:  0,
            height: 0,
            pitch:  0,
            format: PixelFormat::RGBA8
        }
    }
}

impl EncoderOptions {
    /// Create options for an arena of `width` by `height` pixels of
    /// `format`, with rows packed tightly
    pub const fn new(width: usize, height: usize, format: PixelFormat) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            pitch: width * format.byte_stride(),
            format
        }
    }

    /// Get the width of the arena in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the arena in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the byte stride between the starts of consecutive rows
    pub const fn pitch(&self) -> usize {
        self.pitch
    }

    /// Get the pixel format of the arena
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Set the width of the arena in pixels
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the height of the arena in pixels
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the byte stride between rows, for arenas with padded rows
    pub fn set_pitch(mut self, pitch: usize) -> Self {
        self.pitch = pitch;
        self
    }

    /// Set the pixel format of the arena
    pub fn set_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
}
