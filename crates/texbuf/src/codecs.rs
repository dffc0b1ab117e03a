/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for the encoders the library understands
//!
//! Encoders live in their own crates and read raw arenas plus
//! [`EncoderOptions`], this module wires a [`PixelBuffer`] to them.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use texbuf_core::log::{error, trace};
use texbuf_core::options::EncoderOptions;
use texbuf_tga::TgaEncoder;

use crate::buffer::PixelBuffer;
use crate::errors::ImageErrors;

/// Build encoder options describing a buffer's arena
pub(crate) fn create_options_for_encoder(image: &PixelBuffer) -> EncoderOptions {
    EncoderOptions::new(
        image.width() as usize,
        image.height() as usize,
        image.pixel_format()
    )
    .set_pitch(image.pitch())
}

impl PixelBuffer {
    /// Serialize the buffer to an uncompressed true-colour TGA file at
    /// `path`.
    ///
    /// Compressed buffers cannot be exported per pixel: the failure is
    /// logged and reported, nothing is written and the caller keeps
    /// running.
    ///
    /// # Returns
    /// - `Ok(())`: The file was written
    /// - `Err(e)`: The buffer is compressed, its format is not
    ///   addressable, or an I/O error occurred
    pub fn save_tga<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        if self.is_compressed() {
            error!(
                "save_tga called but the buffer is compressed ({})",
                self.compress_format()
            );
            return Err(ImageErrors::EncodeCompressed(self.compress_format()));
        }

        let options = create_options_for_encoder(self);

        trace!(
            "encoding {}x{} {:?} buffer to {:?}",
            self.width(),
            self.height(),
            self.pixel_format(),
            path.as_ref()
        );

        let file = File::create(path)?;
        let mut sink = BufWriter::new(file);

        TgaEncoder::new(self.data(), options).encode(&mut sink)?;
        sink.flush()?;

        Ok(())
    }
}
