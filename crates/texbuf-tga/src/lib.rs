/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Truevision TGA (TARGA) encoding support for texbuf pixel arenas.
//!
//! Only the uncompressed true-colour flavour is written, always at 32
//! bits per pixel. The file is an 18-byte header followed by the raw
//! pixel stream:
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════╗
//! ║ Byte   │ Description                                          ║
//! ╠════════╪══════════════════════════════════════════════════════╣
//! ║ 2      │ image type, always 2 (uncompressed true-colour)      ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 12-13  │ 16-bit LE unsigned integer (width)                   ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 14-15  │ 16-bit LE unsigned integer (height)                  ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 16     │ bits per pixel, always 32                            ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 17     │ image descriptor, always 0x08 (8 alpha bits)         ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ [4444] │ 4x8-bit unorm [BGRA] / pixel, rows as stored         ║
//! ╚════════╧══════════════════════════════════════════════════════╝
//! ```
//! All header bytes not listed are zero.
//!
//! Rows are emitted top to bottom exactly as stored in the arena while
//! the descriptor byte leaves the origin bits clear, so a conforming
//! reader shows the image vertically mirrored. Long-standing consumers
//! of these files compensate for it, hence the order is kept verbatim.
//!
pub use encoder::*;

mod encoder;
